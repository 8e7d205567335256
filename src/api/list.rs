/*!

A `List` is a growable, insertion-ordered sequence addressed by ordinal. Positions are 1-based from the front or
negative from the back; zero is never valid.

Insertion resolves its position against `len + 1`, so `insert(len + 1, x)` appends and `insert(-1, x)` also appends.
Every other operation resolves against `len`.

*/

use std::fmt::{Debug, Display, Formatter};

use crate::{
  abstractions::join_string,
  core::{
    error::CollectionError,
    ordinal::{offset_of, ordinal_of, resolve, Ordinal},
    rank::Rank,
    sorter,
    value::{Composite, Value},
    Sequence
  }
};

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct List<T> {
  items: Vec<T>,
}

impl<T> List<T> {
  pub fn new() -> Self {
    List { items: Vec::new() }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    List { items: Vec::with_capacity(capacity) }
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn push(&mut self, item: T) {
    self.items.push(item);
  }

  pub fn pop(&mut self) -> Option<T> {
    self.items.pop()
  }

  #[track_caller]
  pub fn get(&self, index: Ordinal) -> &T {
    &self.items[offset_of(index, self.items.len())]
  }

  pub fn try_get(&self, index: Ordinal) -> Result<&T, CollectionError> {
    Ok(&self.items[resolve(index, self.items.len())?])
  }

  #[track_caller]
  pub fn get_mut(&mut self, index: Ordinal) -> &mut T {
    let offset = offset_of(index, self.items.len());
    &mut self.items[offset]
  }

  pub fn try_get_mut(&mut self, index: Ordinal) -> Result<&mut T, CollectionError> {
    let offset = resolve(index, self.items.len())?;
    Ok(&mut self.items[offset])
  }

  /// Replaces the item at `index`, returning the old one.
  #[track_caller]
  pub fn set(&mut self, index: Ordinal, item: T) -> T {
    std::mem::replace(self.get_mut(index), item)
  }

  pub fn try_set(&mut self, index: Ordinal, item: T) -> Result<T, CollectionError> {
    Ok(std::mem::replace(self.try_get_mut(index)?, item))
  }

  /// Inserts `item` so that it ends up at `index`.
  #[track_caller]
  pub fn insert(&mut self, index: Ordinal, item: T) {
    let offset = offset_of(index, self.items.len() + 1);
    self.items.insert(offset, item);
  }

  pub fn try_insert(&mut self, index: Ordinal, item: T) -> Result<(), CollectionError> {
    let offset = resolve(index, self.items.len() + 1)?;
    self.items.insert(offset, item);
    Ok(())
  }

  #[track_caller]
  pub fn remove(&mut self, index: Ordinal) -> T {
    let offset = offset_of(index, self.items.len());
    self.items.remove(offset)
  }

  pub fn try_remove(&mut self, index: Ordinal) -> Result<T, CollectionError> {
    let offset = resolve(index, self.items.len())?;
    Ok(self.items.remove(offset))
  }

  pub fn first(&self) -> Option<&T> {
    self.items.first()
  }

  pub fn last(&self) -> Option<&T> {
    self.items.last()
  }

  /// Sorts the items in place by `rank`. Stable.
  pub fn sort_by<F>(&mut self, rank: F)
  where
      F: FnMut(&T, &T) -> Rank,
  {
    sorter::sort(&mut self.items, rank);
  }

  pub fn reverse(&mut self) {
    sorter::reverse(&mut self.items);
  }

  pub fn shuffle(&mut self) {
    sorter::shuffle(&mut self.items);
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.items.iter()
  }

  pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
    self.items.iter_mut()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.items
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }
}

impl<T: Ord> List<T> {
  /// Sorts the items in place by their natural order. Stable.
  pub fn sort(&mut self) {
    sorter::sort_natural(&mut self.items);
  }
}

impl<T: PartialEq> List<T> {
  /// The ordinal of the first item equal to `item`, or 0.
  pub fn index_of(&self, item: &T) -> usize {
    self.items
        .iter()
        .position(|candidate| candidate == item)
        .map_or(0, ordinal_of)
  }

  pub fn contains(&self, item: &T) -> bool {
    self.index_of(item) != 0
  }
}

impl<T: Clone> Sequence<T> for List<T> {
  fn len(&self) -> usize {
    self.items.len()
  }

  fn to_vec(&self) -> Vec<T> {
    self.items.clone()
  }
}

impl<T> From<Vec<T>> for List<T> {
  fn from(items: Vec<T>) -> Self {
    List { items }
  }
}

impl<T> FromIterator<T> for List<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    List { items: iter.into_iter().collect() }
  }
}

impl<T> Extend<T> for List<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.items.extend(iter);
  }
}

impl<T> IntoIterator for List<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a List<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}

impl Composite for List<Value> {
  fn as_array(&self) -> Option<Vec<Value>> {
    Some(self.items.clone())
  }
}

impl<T: Display> Display for List<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}]", join_string(self.items.iter(), ", "))
  }
}

impl<T: Debug> Debug for List<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_list().entries(self.items.iter()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::collator::Collator;

  #[test]
  fn ordinal_access_from_both_ends() {
    let mut list: List<char> = "abcde".chars().collect();
    assert_eq!(*list.get(1), 'a');
    assert_eq!(*list.get(-1), 'e');
    assert_eq!(list.set(-2, 'D'), 'd');
    assert_eq!(list.remove(2), 'b');
    assert_eq!(list.as_slice(), &['a', 'c', 'D', 'e']);
    assert_eq!(list.try_get(0), Err(CollectionError::InvalidIndex { index: 0, length: 4 }));
    assert!(list.try_remove(5).is_err());
  }

  #[test]
  fn insert_resolves_against_one_past_the_end() {
    let mut list = List::from(vec![2, 3]);
    list.insert(1, 1);
    list.insert(4, 5);
    list.insert(-1, 6);
    list.insert(-3, 4);
    assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert!(list.try_insert(8, 0).is_err());
    assert!(list.try_insert(0, 0).is_err());
  }

  #[test]
  #[should_panic(expected = "ordinal index -3")]
  fn invalid_ordinal_is_fatal() {
    List::from(vec![1, 2]).get(-3);
  }

  #[test]
  fn search_and_reorder() {
    let mut list = List::from(vec![3, 1, 2, 1]);
    assert_eq!(list.index_of(&1), 2);
    assert_eq!(list.index_of(&9), 0);
    assert!(list.contains(&2));

    list.sort();
    assert_eq!(list.as_slice(), &[1, 1, 2, 3]);
    list.reverse();
    assert_eq!(list.as_slice(), &[3, 2, 1, 1]);
    list.sort_by(|a, b| Rank::of(a, b));
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&3));

    list.shuffle();
    list.sort();
    assert_eq!(list.as_slice(), &[1, 1, 2, 3]);
  }

  #[test]
  fn snapshot_is_defensive() {
    let list = List::from(vec![1, 2]);
    let mut snapshot = list.to_vec();
    snapshot.clear();
    assert_eq!(list.len(), 2);
    assert_eq!(list.to_string(), "[1, 2]");
  }

  #[test]
  fn collates_as_an_array() {
    let collator = Collator::default();
    let list = Value::object(List::from(vec![Value::from(1), Value::from(2)]));
    let same = Value::object(List::from(vec![Value::from(1), Value::from(2)]));
    let other = Value::object(List::from(vec![Value::from(1), Value::from(3)]));
    assert!(collator.equal(&list, &same));
    assert_eq!(collator.rank(&list, &other), Rank::Less);
    assert_eq!(list.to_string(), "[1, 2]");
  }
}
