/// Failure returned by [`Stack`](super::Stack) and [`Queue`](super::Queue) operations.
///
/// A failed operation never mutates the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContainerError {
    /// The absent value (`None`) was passed to an insertion.
    #[error("Value cannot be absent")]
    InvalidArgument,
    /// Removal, peek or (for stacks) a snapshot read on an empty container.
    #[error("Container is empty")]
    EmptyContainer,
}
