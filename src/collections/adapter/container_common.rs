use std::collections::{LinkedList, VecDeque};

pub trait ContainerCommon {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ContainerCommon for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ContainerCommon for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ContainerCommon for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len_of(c: &impl ContainerCommon) -> (usize, bool) {
        (c.len(), c.is_empty())
    }

    #[test]
    fn test_backends() {
        assert_eq!(len_of(&Vec::<u8>::new()), (0, true));
        assert_eq!(len_of(&vec![1, 2, 3]), (3, false));
        assert_eq!(len_of(&VecDeque::from([1, 2])), (2, false));
        assert_eq!(len_of(&LinkedList::from([1])), (1, false));
        assert_eq!(len_of(&LinkedList::<u8>::new()), (0, true));
    }
}
