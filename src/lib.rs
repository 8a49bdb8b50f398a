#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections_adapter")]
pub use collections::{ContainerError, Queue, Stack};
