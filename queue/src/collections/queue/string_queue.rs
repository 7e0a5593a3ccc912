use std::fmt;
use std::fmt::Debug;
use std::iter::FusedIterator;

use crate::collections::element::Element;
use crate::collections::queue::{Config, QueueError};


/// A FIFO queue of owned strings backed by a singly linked chain.
/// Elements live in an arena and link to their successor by slot index.
/// Removed slots go onto a free list and are reused by later insertions.
#[derive(Clone)]
pub struct StringQueue {
  slots: Vec<Element>,
  free: Option<usize>,
  head: Option<usize>,
  tail: Option<usize>,
  len: usize,
  config: Config,
}

static_assertions::assert_impl_all!(StringQueue: Send, Sync);

impl StringQueue {
  pub fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: None,
      head: None,
      tail: None,
      len: 0,
      config: Config::default(),
    }
  }

  /// Creates an empty queue, reporting allocation failure instead of aborting.
  pub fn try_new() -> Result<Self, QueueError> {
    Self::from_config(Config::default())
  }

  /// Creates an empty queue with `config`, reserving `initial_capacity` slots.
  pub fn from_config(config: Config) -> Result<Self, QueueError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(config.initial_capacity).map_err(|_| {
      tracing::debug!("StringQueue::from_config: cannot reserve {} slots", config.initial_capacity);
      QueueError::AllocationError {
        requested: config.initial_capacity.saturating_mul(std::mem::size_of::<Element>()),
      }
    })?;
    Ok(Self {
      slots,
      free: None,
      head: None,
      tail: None,
      len: 0,
      config,
    })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Replaces the live element limit. Elements already linked are kept even when they exceed it.
  pub fn set_allocation_limit(&mut self, limit: Option<usize>) {
    tracing::trace!("StringQueue::set_allocation_limit: {:?} -> {:?}", self.config.allocation_limit, limit);
    self.config.allocation_limit = limit;
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Inserts a copy of `value` in front of the current head.
  pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
    let index = self.allocate(value, self.head)?;
    if self.tail.is_none() {
      self.tail = Some(index);
    }
    self.head = Some(index);
    self.len += 1;
    Ok(())
  }

  /// Inserts a copy of `value` after the current tail.
  pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
    let index = self.allocate(value, None)?;
    match self.tail {
      Some(tail) => self.slots[tail].next = Some(index),
      None => self.head = Some(index),
    }
    self.tail = Some(index);
    self.len += 1;
    Ok(())
  }

  /// Detaches the head element and hands its payload to the caller.
  pub fn remove_head(&mut self) -> Result<String, QueueError> {
    let head = self.head.ok_or(QueueError::EmptyQueue)?;
    let next = self.slots[head].next;
    self.head = next;
    if next.is_none() {
      self.tail = None;
    }
    self.len -= 1;
    Ok(self.release(head))
  }

  /// Detaches the head element and copies its payload into `buffer`.
  /// At most `buffer.len() - 1` bytes are copied, followed by a NUL byte; longer payloads
  /// are truncated. Nothing is copied when no buffer is given or it holds fewer than two bytes.
  ///
  /// Returns the number of payload bytes written, not counting the terminator.
  pub fn remove_head_into(&mut self, buffer: Option<&mut [u8]>) -> Result<usize, QueueError> {
    let value = self.remove_head()?;
    let copied = match buffer {
      Some(buffer) if buffer.len() > 1 => {
        let n = value.len().min(buffer.len() - 1);
        buffer[..n].copy_from_slice(&value.as_bytes()[..n]);
        buffer[n] = 0;
        n
      }
      _ => 0,
    };
    Ok(copied)
  }

  /// Reverses the chain in place.
  /// The original head stays put while its successor is detached and pushed to the front,
  /// one element at a time, until it becomes the last element.
  pub fn reverse(&mut self) {
    let Some(first) = self.head else {
      return;
    };
    if self.len < 2 {
      return;
    }
    tracing::trace!("StringQueue::reverse: len = {}", self.len);
    let mut new_head = first;
    while let Some(moved) = self.slots[first].next {
      self.slots[first].next = self.slots[moved].next;
      self.slots[moved].next = Some(new_head);
      new_head = moved;
    }
    self.head = Some(new_head);
    self.tail = Some(first);
  }

  /// Sorts the payloads into ascending byte order.
  /// Elements keep their positions in the chain; only payload ownership moves between
  /// them, so `head` and `tail` stay valid.
  pub fn sort(&mut self) {
    let (Some(head), Some(tail)) = (self.head, self.tail) else {
      return;
    };
    if self.len < 2 {
      return;
    }
    tracing::trace!("StringQueue::sort: len = {}", self.len);
    let mut ranges = vec![(head, tail)];
    while let Some((start, end)) = ranges.pop() {
      let (pivot, before_pivot) = self.partition(start, end);
      if let Some(before_pivot) = before_pivot {
        if before_pivot != start {
          ranges.push((start, before_pivot));
        }
      }
      if pivot != end {
        if let Some(after_pivot) = self.slots[pivot].next {
          if after_pivot != end {
            ranges.push((after_pivot, end));
          }
        }
      }
    }
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      slots: &self.slots,
      cursor: self.head,
      remaining: self.len,
    }
  }

  /// Walks the chain and the free list and verifies that head, tail and the element
  /// count agree with what is actually linked.
  pub fn check_integrity(&self) -> Result<(), QueueError> {
    let broken = |reason: String| {
      tracing::debug!("StringQueue::check_integrity: {}", reason);
      Err(QueueError::BrokenChain(reason))
    };
    let empty = self.len == 0;
    if self.head.is_none() != empty || self.tail.is_none() != empty {
      return broken(format!(
        "head = {:?}, tail = {:?} disagree with len = {}",
        self.head, self.tail, self.len
      ));
    }

    let mut seen = vec![false; self.slots.len()];
    let mut count = 0;
    let mut last = None;
    let mut cursor = self.head;
    while let Some(index) = cursor {
      if index >= self.slots.len() {
        return broken(format!("link to slot {} beyond {} slots", index, self.slots.len()));
      }
      if seen[index] {
        return broken(format!("cycle through slot {}", index));
      }
      seen[index] = true;
      count += 1;
      last = Some(index);
      cursor = self.slots[index].next;
    }
    if count != self.len {
      return broken(format!("{} elements linked, len = {}", count, self.len));
    }
    if last != self.tail {
      return broken(format!("last element is {:?}, tail = {:?}", last, self.tail));
    }

    let mut vacant = 0;
    let mut cursor = self.free;
    while let Some(index) = cursor {
      if index >= self.slots.len() || seen[index] {
        return broken(format!("free list reaches slot {} twice or out of range", index));
      }
      seen[index] = true;
      vacant += 1;
      cursor = self.slots[index].next;
    }
    if count + vacant != self.slots.len() {
      return broken(format!(
        "{} linked + {} free slots, {} allocated",
        count,
        vacant,
        self.slots.len()
      ));
    }
    Ok(())
  }

  /// Copies `value` into a fresh element linked to `next`.
  /// Every fallible step runs before the arena is touched, so a failure leaves the queue as it was.
  fn allocate(&mut self, value: &str, next: Option<usize>) -> Result<usize, QueueError> {
    let requested = value.len();
    if let Some(limit) = self.config.allocation_limit {
      if self.len >= limit {
        tracing::debug!("StringQueue::allocate: allocation limit {} reached", limit);
        return Err(QueueError::AllocationError { requested });
      }
    }
    if let Some(max) = self.config.max_value_len {
      if requested > max {
        tracing::debug!("StringQueue::allocate: value of {} bytes exceeds {}", requested, max);
        return Err(QueueError::AllocationError { requested });
      }
    }

    let mut copy = String::new();
    copy.try_reserve_exact(requested).map_err(|_| {
      tracing::debug!("StringQueue::allocate: cannot copy {} bytes", requested);
      QueueError::AllocationError { requested }
    })?;
    copy.push_str(value);

    match self.free {
      Some(index) => {
        self.free = self.slots[index].next;
        self.slots[index] = Element::new(copy, next);
        Ok(index)
      }
      None => {
        self.slots.try_reserve(1).map_err(|_| {
          tracing::debug!("StringQueue::allocate: cannot grow arena past {} slots", self.slots.len());
          QueueError::AllocationError {
            requested: std::mem::size_of::<Element>(),
          }
        })?;
        self.slots.push(Element::new(copy, next));
        Ok(self.slots.len() - 1)
      }
    }
  }

  fn release(&mut self, index: usize) -> String {
    let value = self.slots[index].vacate(self.free);
    self.free = Some(index);
    value
  }

  /// Partitions the inclusive range `[start, end]` around the payload found at `start`.
  /// Smaller payloads are gathered in front of the pivot by swapping ownership with the
  /// element just behind the growing boundary.
  ///
  /// Returns the element holding the pivot payload and its predecessor inside the range.
  fn partition(&mut self, start: usize, end: usize) -> (usize, Option<usize>) {
    let mut pivot = start;
    let mut before_pivot = None;
    let mut cursor = start;
    while cursor != end {
      let Some(next) = self.slots[cursor].next else {
        break;
      };
      cursor = next;
      if self.slots[cursor].value < self.slots[pivot].value {
        self.swap_values(pivot, cursor);
        before_pivot = Some(pivot);
        let Some(boundary) = self.slots[pivot].next else {
          break;
        };
        pivot = boundary;
        self.swap_values(pivot, cursor);
      }
    }
    (pivot, before_pivot)
  }

  fn swap_values(&mut self, a: usize, b: usize) {
    if a == b {
      return;
    }
    let taken = std::mem::take(&mut self.slots[a].value);
    self.slots[a].value = std::mem::replace(&mut self.slots[b].value, taken);
  }
}

impl Default for StringQueue {
  fn default() -> Self {
    StringQueue::new()
  }
}

impl Debug for StringQueue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a> IntoIterator for &'a StringQueue {
  type Item = &'a str;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Read-only traversal from head to tail.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
  slots: &'a [Element],
  cursor: Option<usize>,
  remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let element = self.slots.get(self.cursor?)?;
    self.cursor = element.next;
    self.remaining -= 1;
    Some(element.value.as_str())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
