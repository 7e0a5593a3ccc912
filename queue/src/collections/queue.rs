use thiserror::Error;

mod config;
mod config_option;
pub mod ops;
mod string_queue;

pub use self::{config::*, config_option::*, string_queue::*};

/// An error that occurs when a queue operation fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
  #[error("Invalid argument: {0} is absent")]
  InvalidArgument(&'static str),
  #[error("Failed to allocate storage for {requested} bytes")]
  AllocationError { requested: usize },
  #[error("Failed to remove an element: queue is empty")]
  EmptyQueue,
  #[error("Broken chain: {0}")]
  BrokenChain(String),
}

static_assertions::assert_impl_all!(QueueError: Send, Sync);
