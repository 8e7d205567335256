/*!

A `SortedMap` keeps its associations in strictly ascending key order under a ranking function on keys. Lookups are a
binary search over the entries, the same search the sorted set uses.

Replacing the ranking function re-sorts the entries immediately. When the new function ranks two keys `Equal`, the
entry that came first in the old order is kept and the later one is dropped.

*/

use std::fmt::{Debug, Display, Formatter};

use crate::{
  abstractions::join_string,
  api::association::Association,
  core::{
    error::CollectionError,
    ordinal::{offset_of, resolve, Ordinal},
    rank::{natural_ranking, Rank, RankingFunction},
    sorted_set::{binary_search, Search},
    sorter,
    value::{Composite, Value},
    Keyed,
    Sequence
  },
  debug,
  log::KERNEL_THRESHOLD
};

pub struct SortedMap<K, V> {
  entries: Vec<Association<K, V>>,
  ranking: RankingFunction<K>,
}

impl<K: Ord + 'static, V> SortedMap<K, V> {
  /// An empty map ranking keys by their natural order.
  pub fn new() -> Self {
    Self::with_ranking_function(natural_ranking())
  }
}

impl<K: Ord + 'static, V> Default for SortedMap<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Ord + 'static, V> FromIterator<(K, V)> for SortedMap<K, V> {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut map = SortedMap::new();
    map.extend(iter);
    map
  }
}

impl<K, V> SortedMap<K, V> {
  pub fn with_ranking_function(ranking: RankingFunction<K>) -> Self {
    SortedMap {
      entries: Vec::new(),
      ranking,
    }
  }

  pub fn set_ranking_function(&mut self, ranking: RankingFunction<K>) {
    self.ranking = ranking;
    let before   = self.entries.len();

    let rank = &self.ranking;
    sorter::sort(&mut self.entries, |a, b| rank(a.key(), b.key()));
    self.entries.dedup_by(|later, earlier| rank(earlier.key(), later.key()) == Rank::Equal);

    debug!(
      KERNEL_THRESHOLD,
      "key ranking function replaced; re-sorted {} entries, dropped {} duplicates",
      before,
      before - self.entries.len()
    );
  }

  fn search(&self, key: &K) -> Search {
    binary_search(&self.entries, |entry| (self.ranking)(key, entry.key()))
  }

  /// Associates `value` with `key`, returning the value previously associated with it.
  pub fn insert(&mut self, key: K, value: V) -> Option<V> {
    match self.search(&key) {
      Search::Found(ordinal) => Some(self.entries[ordinal - 1].set_value(value)),
      Search::Vacant(ordinal) => {
        self.entries.insert(ordinal - 1, Association::new(key, value));
        None
      }
    }
  }

  pub fn get(&self, key: &K) -> Option<&V> {
    match self.search(key) {
      Search::Found(ordinal) => Some(self.entries[ordinal - 1].value()),
      Search::Vacant(_)      => None,
    }
  }

  pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    match self.search(key) {
      Search::Found(ordinal) => Some(self.entries[ordinal - 1].value_mut()),
      Search::Vacant(_)      => None,
    }
  }

  /// Removes the entry for `key`, returning its value.
  pub fn remove(&mut self, key: &K) -> Option<V> {
    match self.search(key) {
      Search::Found(ordinal) => Some(self.entries.remove(ordinal - 1).into_pair().1),
      Search::Vacant(_)      => None,
    }
  }

  pub fn contains_key(&self, key: &K) -> bool {
    self.search(key).is_found()
  }

  /// The ordinal of `key`'s entry, or 0 if absent.
  pub fn index_of_key(&self, key: &K) -> usize {
    self.search(key).found_or_zero()
  }

  /// The entry at `index`. An invalid ordinal is fatal.
  #[track_caller]
  pub fn entry_at(&self, index: Ordinal) -> &Association<K, V> {
    &self.entries[offset_of(index, self.entries.len())]
  }

  pub fn try_entry_at(&self, index: Ordinal) -> Result<&Association<K, V>, CollectionError> {
    Ok(&self.entries[resolve(index, self.entries.len())?])
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
    self.entries.iter().map(Association::key)
  }

  pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
    self.entries.iter().map(Association::value)
  }

  /// Entries in ascending key order.
  pub fn iter(&self) -> std::slice::Iter<'_, Association<K, V>> {
    self.entries.iter()
  }
}

impl<K, V> Extend<(K, V)> for SortedMap<K, V> {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    for (key, value) in iter {
      self.insert(key, value);
    }
  }
}

impl<K: Clone, V: Clone> Clone for SortedMap<K, V> {
  fn clone(&self) -> Self {
    SortedMap {
      entries: self.entries.clone(),
      ranking: self.ranking.clone(),
    }
  }
}

impl<K: Clone, V: Clone> Keyed<K, V> for SortedMap<K, V> {
  fn to_pairs(&self) -> Vec<Association<K, V>> {
    self.entries.clone()
  }
}

impl<K: Clone, V: Clone> Sequence<Association<K, V>> for SortedMap<K, V> {
  fn len(&self) -> usize {
    self.entries.len()
  }

  fn to_vec(&self) -> Vec<Association<K, V>> {
    self.entries.clone()
  }
}

impl Composite for SortedMap<Value, Value> {
  /// Entries as an array of associations, in key order.
  fn as_array(&self) -> Option<Vec<Value>> {
    Some(self.entries.iter().cloned().map(Value::object).collect())
  }
}

impl<K: Display, V: Display> Display for SortedMap<K, V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let entries = self.entries.iter().map(|entry| format!("{}: {}", entry.key(), entry.value()));
    write!(f, "{{{}}}", join_string(entries, ", "))
  }
}

impl<K: Debug, V: Debug> Debug for SortedMap<K, V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_map()
     .entries(self.entries.iter().map(|entry| (entry.key(), entry.value())))
     .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::collator::Collator;
  use std::rc::Rc;

  #[test]
  fn insert_get_remove() {
    let mut map = SortedMap::new();
    assert_eq!(map.insert("b", 2), None);
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("b", 20), Some(2));
    assert_eq!(map.get(&"b"), Some(&20));
    *map.get_mut(&"a").unwrap() += 10;
    assert_eq!(map.get(&"a"), Some(&11));
    assert_eq!(map.remove(&"a"), Some(11));
    assert_eq!(map.remove(&"a"), None);
    assert!(!map.contains_key(&"a"));
    assert_eq!(map.len(), 1);
  }

  #[test]
  fn keys_stay_sorted() {
    let map: SortedMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(map.values().collect::<String>(), "abc");
    assert_eq!(map.index_of_key(&2), 2);
    assert_eq!(map.index_of_key(&7), 0);
    assert_eq!(map.entry_at(-1).value(), &'c');
    assert!(map.try_entry_at(0).is_err());
    assert_eq!(map.to_string(), "{1: a, 2: b, 3: c}");
  }

  #[test]
  fn to_pairs_is_a_snapshot() {
    let mut map: SortedMap<i32, i32> = [(1, 1)].into_iter().collect();
    let mut pairs = map.to_pairs();
    pairs[0].set_value(99);
    assert_eq!(map.get(&1), Some(&1));
    map.clear();
    assert_eq!(pairs.len(), 1);
  }

  #[test]
  fn replacing_the_ranking_function() {
    let mut map: SortedMap<i32, &str> = [(-2, "neg two"), (1, "one"), (2, "two")].into_iter().collect();
    map.set_ranking_function(Rc::new(|a: &i32, b: &i32| Rank::of(&a.abs(), &b.abs())));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, -2]);
    assert_eq!(map.get(&2), Some(&"neg two"));
  }

  #[test]
  fn collates_as_an_array_of_associations() {
    let collator = Collator::default();
    let mut first = SortedMap::new();
    first.insert(Value::from("x"), Value::from(1));
    first.insert(Value::from("y"), Value::from(2));

    let mut second = SortedMap::new();
    second.insert(Value::from("y"), Value::from(2));
    second.insert(Value::from("x"), Value::from(1));

    let a = Value::object(first);
    let b = Value::object(second);
    assert!(collator.equal(&a, &b));
    assert_eq!(a.to_string(), r#"["x" => 1, "y" => 2]"#);
  }
}
