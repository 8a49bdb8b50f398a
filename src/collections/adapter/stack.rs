use std::{
    collections::{LinkedList, VecDeque},
    marker::PhantomData,
};

use crate::collections::adapter::{ContainerCommon, ContainerError};

pub trait StackLike<T>: ContainerCommon {
    fn push(&mut self, value: T);

    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);

    /// Clones every element, top first.
    fn to_vec_from_top(&self) -> Vec<T>
    where
        T: Clone;
}

/// LIFO adapter over a [`StackLike`] backend.
///
/// Insertions take `impl Into<Option<T>>`: a plain `T` is stored, while `None`
/// is the absent value and is rejected with [`ContainerError::InvalidArgument`].
pub struct Stack<T, Container: StackLike<T> = Vec<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T> Stack<T> {
    #[inline]
    pub fn new() -> Self {
        Self::from_container(Vec::new())
    }
}

impl<T, Container: StackLike<T>> Stack<T, Container> {
    #[inline]
    pub fn from_container(container: Container) -> Self {
        Self {
            container,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.container.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Puts `value` on top. Always `Ok(true)` unless `value` is absent.
    pub fn push(&mut self, value: impl Into<Option<T>>) -> Result<bool, ContainerError> {
        let Some(value) = value.into() else {
            log::trace!("Stack::push rejected an absent value");
            return Err(ContainerError::InvalidArgument);
        };
        self.container.push(value);
        Ok(true)
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.container.pop().ok_or_else(|| empty("pop"))
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.container.top().ok_or_else(|| empty("peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.container.top_mut().ok_or_else(|| empty("peek_mut"))
    }

    /// Removes every element and returns the new size, which is always 0.
    #[inline]
    pub fn clear(&mut self) -> usize {
        self.container.clear();
        0
    }

    /// Returns a copy of the contents ordered top to bottom.
    ///
    /// Unlike [`Queue::get_all`](super::Queue::get_all), an empty stack is an error.
    pub fn get_all(&self) -> Result<Vec<T>, ContainerError>
    where
        T: Clone,
    {
        if self.container.is_empty() {
            return Err(empty("get_all"));
        }
        Ok(self.container.to_vec_from_top())
    }
}

#[inline]
fn empty(op: &str) -> ContainerError {
    log::trace!("Stack::{op} called on an empty stack");
    ContainerError::EmptyContainer
}

impl<T, Container: StackLike<T>> From<Container> for Stack<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::from_container(value)
    }
}

impl<T, Container: StackLike<T> + Default> Default for Stack<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::from_container(Default::default())
    }
}

impl<T, Container: StackLike<T> + Clone> Clone for Stack<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, Container: StackLike<T> + std::fmt::Debug> std::fmt::Debug for Stack<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}

impl<T, Container: StackLike<T>> ContainerCommon for Stack<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T> StackLike<T> for Vec<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    fn to_vec_from_top(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }
}

impl<T> StackLike<T> for VecDeque<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    fn to_vec_from_top(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }
}

impl<T> StackLike<T> for LinkedList<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    fn to_vec_from_top(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().rev().cloned().collect()
    }
}
