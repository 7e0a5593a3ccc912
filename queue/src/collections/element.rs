/// One cell of the queue arena.
/// An occupied cell holds a payload and the index of its successor in the chain.
/// A vacant cell keeps an empty payload and threads the free list through `next`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
  pub(crate) value: String,
  pub(crate) next: Option<usize>,
}

impl Element {
  pub(crate) fn new(value: String, next: Option<usize>) -> Self {
    Self { value, next }
  }

  /// Empties the cell and links it in front of `next_free`, handing the payload back.
  pub(crate) fn vacate(&mut self, next_free: Option<usize>) -> String {
    self.next = next_free;
    std::mem::take(&mut self.value)
  }
}
