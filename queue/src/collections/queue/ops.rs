//! Operations over a queue handle that may be absent.
//!
//! Each function checks its handle and string arguments before touching the
//! queue, so a call with a missing argument reports an error and changes nothing.

use crate::collections::queue::{QueueError, StringQueue};

#[cfg(test)]
mod tests;

pub fn new() -> Result<StringQueue, QueueError> {
  StringQueue::try_new()
}

/// Tears down every remaining element and the queue itself. Does nothing for an absent queue.
pub fn destroy(queue: Option<StringQueue>) {
  if let Some(queue) = queue {
    tracing::trace!("ops::destroy: releasing {} elements", queue.len());
    drop(queue);
  }
}

pub fn insert_head(queue: Option<&mut StringQueue>, value: Option<&str>) -> Result<(), QueueError> {
  let (queue, value) = require(queue, value)?;
  queue.insert_head(value)
}

pub fn insert_tail(queue: Option<&mut StringQueue>, value: Option<&str>) -> Result<(), QueueError> {
  let (queue, value) = require(queue, value)?;
  queue.insert_tail(value)
}

/// Removes the head element, copying a truncated, NUL-terminated payload into `buffer` if given.
pub fn remove_head(queue: Option<&mut StringQueue>, buffer: Option<&mut [u8]>) -> Result<usize, QueueError> {
  match queue {
    Some(queue) => queue.remove_head_into(buffer),
    None => {
      tracing::debug!("ops::remove_head: queue is absent");
      Err(QueueError::EmptyQueue)
    }
  }
}

pub fn size(queue: Option<&StringQueue>) -> usize {
  queue.map_or(0, StringQueue::len)
}

pub fn reverse(queue: Option<&mut StringQueue>) {
  if let Some(queue) = queue {
    queue.reverse();
  }
}

pub fn sort(queue: Option<&mut StringQueue>) {
  if let Some(queue) = queue {
    queue.sort();
  }
}

fn require<'a, 'b>(
  queue: Option<&'a mut StringQueue>,
  value: Option<&'b str>,
) -> Result<(&'a mut StringQueue, &'b str), QueueError> {
  let Some(queue) = queue else {
    tracing::debug!("ops: queue is absent");
    return Err(QueueError::InvalidArgument("queue"));
  };
  let Some(value) = value else {
    tracing::debug!("ops: value is absent");
    return Err(QueueError::InvalidArgument("value"));
  };
  Ok((queue, value))
}
