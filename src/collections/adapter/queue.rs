use std::{
    collections::{LinkedList, VecDeque},
    marker::PhantomData,
};

use crate::collections::adapter::{ContainerCommon, ContainerError};

pub trait QueueLike<T>: ContainerCommon {
    fn push_back(&mut self, value: T);

    fn pop_front(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);

    fn to_vec_from_front(&self) -> Vec<T>
    where
        T: Clone;
}

/// FIFO adapter over a [`QueueLike`] backend.
pub struct Queue<T, Container: QueueLike<T> = VecDeque<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T> Queue<T> {
    #[inline]
    pub fn new() -> Self {
        Self::from_container(VecDeque::new())
    }
}

impl<T, Container: QueueLike<T>> Queue<T, Container> {
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

    /// Appends `value` at the back; `None` is rejected as absent.
    pub fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<bool, ContainerError> {
        let Some(value) = value.into() else {
            log::trace!("Queue::enqueue rejected an absent value");
            return Err(ContainerError::InvalidArgument);
        };
        self.container.push_back(value);
        Ok(true)
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.container.pop_front().ok_or_else(|| empty("dequeue"))
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.container.front().ok_or_else(|| empty("peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.container.front_mut().ok_or_else(|| empty("peek_mut"))
    }

    #[inline]
    pub fn clear(&mut self) -> usize {
        self.container.clear();
        0
    }

    /// Returns a copy of the contents in insertion order. Empty queues yield an empty `Vec`.
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.container.to_vec_from_front()
    }
}

#[inline]
fn empty(op: &str) -> ContainerError {
    log::trace!("Queue::{op} called on an empty queue");
    ContainerError::EmptyContainer
}

impl<T, Container: QueueLike<T>> From<Container> for Queue<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::from_container(value)
    }
}

impl<T, Container: QueueLike<T> + Default> Default for Queue<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::from_container(Default::default())
    }
}

impl<T, Container: QueueLike<T> + Clone> Clone for Queue<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, Container: QueueLike<T> + std::fmt::Debug> std::fmt::Debug for Queue<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}

impl<T, Container: QueueLike<T>> ContainerCommon for Queue<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T> QueueLike<T> for Vec<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        (!self.is_empty()).then(|| self.remove(0))
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.first()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    fn to_vec_from_front(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

impl<T> QueueLike<T> for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    fn to_vec_from_front(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> QueueLike<T> for LinkedList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    fn to_vec_from_front(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo() {
        let mut queue: Queue<&str> = Queue::new();
        assert_eq!(queue.enqueue("a"), Ok(true));
        assert_eq!(queue.enqueue("b"), Ok(true));
        assert_eq!(queue.enqueue("c"), Ok(true));
        assert_eq!(queue.peek(), Ok(&"a"));
        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));
        assert_eq!(queue.size(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.dequeue(), Err(ContainerError::EmptyContainer));
        assert_eq!(queue.peek(), Err(ContainerError::EmptyContainer));
        assert_eq!(queue.peek_mut(), Err(ContainerError::EmptyContainer));
        assert_eq!(queue.get_all(), Vec::<i32>::new());
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_absent() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(
            queue.enqueue(None::<i32>),
            Err(ContainerError::InvalidArgument)
        );
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.enqueue(0), Ok(true));
        assert_eq!(queue.peek(), Ok(&0));
    }

    #[test]
    fn test_inner_none_is_a_value() {
        let mut queue: Queue<Option<u8>> = Queue::new();
        assert_eq!(queue.enqueue(Some(None::<u8>)), Ok(true));
        assert_eq!(queue.enqueue(Some(Some(4u8))), Ok(true));
        assert_eq!(
            queue.enqueue(None::<Option<u8>>),
            Err(ContainerError::InvalidArgument)
        );
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.get_all(), vec![None, Some(4)]);
        assert_eq!(queue.dequeue(), Ok(None));
        assert_eq!(queue.dequeue(), Ok(Some(4)));
    }

    #[test]
    fn test_interleaved() {
        let mut queue: Queue<i32> = Queue::new();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3).unwrap();
        assert_eq!(queue.get_all(), vec![2, 3]);
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.inner().back(), Some(&3));
    }

    #[test]
    fn test_get_all_is_a_copy() {
        let mut queue: Queue<String> = Queue::new();
        queue.enqueue("x".to_string()).unwrap();
        let mut all = queue.get_all();
        all.push("y".to_string());
        assert_eq!(queue.size(), 1);
        assert_eq!(queue.get_all(), ["x"]);
    }

    #[test]
    fn test_clear() {
        let mut queue: Queue<i32> = Queue::new();
        (0..5).for_each(|x| {
            queue.enqueue(x).unwrap();
        });
        assert_eq!(queue.clear(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(ContainerError::EmptyContainer));
    }

    #[test]
    fn test_peek_mut() {
        let mut queue: Queue<i32> = Queue::new();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        *queue.peek_mut().unwrap() = 10;
        assert_eq!(queue.get_all(), vec![10, 2]);
    }

    fn run_backend<C: QueueLike<i32> + Default + std::fmt::Debug>() {
        let mut queue: Queue<i32, C> = Queue::default();
        for x in 1..=4 {
            queue.enqueue(x).unwrap();
        }
        assert_eq!(ContainerCommon::len(&queue), 4);
        assert_eq!(queue.get_all(), vec![1, 2, 3, 4]);
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.peek(), Ok(&2));
        assert_eq!(queue.clear(), 0);
        assert_eq!(queue.get_all(), Vec::<i32>::new());
        println!("{:?}", queue);
    }

    #[test]
    fn test_backends() {
        run_backend::<Vec<i32>>();
        run_backend::<VecDeque<i32>>();
        run_backend::<LinkedList<i32>>();
    }

    #[test]
    fn test_from_container() {
        let queue: Queue<i32> = Queue::from(VecDeque::from([1, 2, 3]));
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.clone().into_inner(), VecDeque::from([1, 2, 3]));
    }
}
