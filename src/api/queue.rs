/*!

A first-in, first-out queue over a `VecDeque`, optionally bounded. Ordinal positions count from the front: `1` is the
next item to be dequeued and `-1` the most recently enqueued.

*/

use std::{
  collections::VecDeque,
  fmt::{Debug, Display, Formatter}
};

use crate::{
  abstractions::join_string,
  core::{
    error::{fatal, CollectionError},
    ordinal::{offset_of, resolve, Ordinal},
    value::{Composite, Value},
    Sequence
  },
  log::KERNEL_THRESHOLD,
  trace
};

#[derive(Clone, Default)]
pub struct Queue<T> {
  items: VecDeque<T>,
  limit: Option<usize>,
}

impl<T> Queue<T> {
  pub fn new() -> Self {
    Queue {
      items: VecDeque::new(),
      limit: None,
    }
  }

  /// A queue that holds at most `limit` items. Storage grows on demand.
  pub fn with_limit(limit: usize) -> Self {
    Queue {
      items: VecDeque::new(),
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
  pub fn enqueue(&mut self, item: T) {
    if let Err(error) = self.try_enqueue(item) {
      fatal(error);
    }
  }

  pub fn try_enqueue(&mut self, item: T) -> Result<(), CollectionError> {
    match self.limit {
      Some(capacity) if self.items.len() >= capacity => {
        trace!(KERNEL_THRESHOLD + 1, "enqueue rejected by a full queue of {} items", capacity);
        Err(CollectionError::CapacityExceeded { capacity })
      }
      _ => {
        self.items.push_back(item);
        Ok(())
      }
    }
  }

  pub fn dequeue(&mut self) -> Option<T> {
    self.items.pop_front()
  }

  /// The next item to be dequeued.
  pub fn peek(&self) -> Option<&T> {
    self.items.front()
  }

  #[track_caller]
  pub fn get(&self, index: Ordinal) -> &T {
    &self.items[offset_of(index, self.items.len())]
  }

  pub fn try_get(&self, index: Ordinal) -> Result<&T, CollectionError> {
    Ok(&self.items[resolve(index, self.items.len())?])
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

  /// Front to back.
  pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
    self.items.iter()
  }
}

impl<T: Clone> Sequence<T> for Queue<T> {
  fn len(&self) -> usize {
    self.items.len()
  }

  fn to_vec(&self) -> Vec<T> {
    self.items.iter().cloned().collect()
  }
}

impl Composite for Queue<Value> {
  fn as_array(&self) -> Option<Vec<Value>> {
    Some(self.to_vec())
  }
}

impl<T> FromIterator<T> for Queue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Queue {
      items: iter.into_iter().collect(),
      limit: None,
    }
  }
}

impl<T: Display> Display for Queue<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}]", join_string(self.items.iter(), ", "))
  }
}

impl<T: Debug> Debug for Queue<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_list().entries(self.items.iter()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_in_first_out() {
    let mut queue = Queue::new();
    queue.enqueue("a");
    queue.enqueue("b");
    queue.enqueue("c");
    assert_eq!(queue.peek(), Some(&"a"));
    assert_eq!(*queue.get(1), "a");
    assert_eq!(*queue.get(-1), "c");
    assert_eq!(queue.dequeue(), Some("a"));
    assert_eq!(queue.to_vec(), vec!["b", "c"]);
    assert!(queue.try_get(3).is_err());
  }

  #[test]
  fn bounded_queue_rejects_overflow() {
    let mut queue = Queue::with_limit(1);
    assert!(queue.try_enqueue(1).is_ok());
    assert!(queue.is_full());
    assert_eq!(queue.try_enqueue(2), Err(CollectionError::CapacityExceeded { capacity: 1 }));
    assert_eq!(queue.dequeue(), Some(1));
    assert!(queue.try_enqueue(2).is_ok());
  }

  #[test]
  fn limit_is_a_bound_not_a_reservation() {
    let mut queue = Queue::with_limit(usize::MAX);
    queue.enqueue('x');
    assert_eq!(queue.limit(), Some(usize::MAX));
    assert!(!queue.is_full());
    assert_eq!(queue.dequeue(), Some('x'));
  }

  #[test]
  #[should_panic(expected = "capacity of 2")]
  fn overflowing_enqueue_is_fatal() {
    let mut queue = Queue::with_limit(2);
    for i in 0..3 {
      queue.enqueue(i);
    }
  }

  #[test]
  fn collects_and_displays() {
    let queue: Queue<Value> = [1, 2, 3].into_iter().map(Value::from).collect();
    assert_eq!(queue.to_string(), "[1, 2, 3]");
    assert_eq!(queue.as_array().map(|items| items.len()), Some(3));
  }
}
