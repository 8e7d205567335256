/*!

A last-in, first-out stack over a `List`, optionally bounded. Pushing onto a full bounded stack is fatal; use
`try_push` to observe the condition instead.

*/

use std::fmt::{Debug, Display, Formatter};

use crate::{
  api::list::List,
  core::{
    error::{fatal, CollectionError},
    value::{Composite, Value},
    Sequence
  },
  log::KERNEL_THRESHOLD,
  trace
};

#[derive(Clone, Default)]
pub struct Stack<T> {
  items: List<T>,
  limit: Option<usize>,
}

impl<T> Stack<T> {
  pub fn new() -> Self {
    Stack {
      items: List::new(),
      limit: None,
    }
  }

  /// A stack that holds at most `limit` items. Storage grows on demand.
  pub fn with_limit(limit: usize) -> Self {
    Stack {
      items: List::new(),
      limit: Some(limit),
    }
  }

  pub fn limit(&self) -> Option<usize> {
    self.limit
  }

  pub fn is_full(&self) -> bool {
    self.limit.is_some_and(|limit| self.items.len() >= limit)
  }

  #[track_caller]
  pub fn push(&mut self, item: T) {
    if let Err(error) = self.try_push(item) {
      fatal(error);
    }
  }

  pub fn try_push(&mut self, item: T) -> Result<(), CollectionError> {
    if let (true, Some(capacity)) = (self.is_full(), self.limit) {
      trace!(KERNEL_THRESHOLD + 1, "push rejected by a full stack of {} items", capacity);
      return Err(CollectionError::CapacityExceeded { capacity });
    }
    self.items.push(item);
    Ok(())
  }

  pub fn pop(&mut self) -> Option<T> {
    self.items.pop()
  }

  /// The top of the stack.
  pub fn peek(&self) -> Option<&T> {
    self.items.last()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Items from bottom to top.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.items.iter()
  }
}

impl<T: Clone> Sequence<T> for Stack<T> {
  fn len(&self) -> usize {
    self.items.len()
  }

  /// Bottom to top.
  fn to_vec(&self) -> Vec<T> {
    self.items.to_vec()
  }
}

impl Composite for Stack<Value> {
  fn as_array(&self) -> Option<Vec<Value>> {
    Some(self.items.to_vec())
  }
}

impl<T: Display> Display for Stack<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.items, f)
  }
}

impl<T: Debug> Debug for Stack<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    Debug::fmt(&self.items, f)
  }
}
