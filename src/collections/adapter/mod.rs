pub mod container_common;
pub mod error;
pub mod queue;
pub mod stack;

pub use container_common::ContainerCommon;
pub use error::ContainerError;
pub use queue::{Queue, QueueLike};
pub use stack::{Stack, StackLike};
