/*!

An `Association` is a key/value pair whose key is fixed at construction and whose value may be replaced. Associations
rank by key first and value second, which is the order a keyed container presents its entries in.

*/

use std::{
  cmp::Ordering,
  fmt::{Debug, Display, Formatter}
};

use crate::core::value::{Composite, Value};

#[derive(Clone, Default, Hash)]
pub struct Association<K, V> {
  key  : K,
  value: V,
}

impl<K, V> Association<K, V> {
  pub fn new(key: K, value: V) -> Self {
    Association { key, value }
  }

  #[inline(always)]
  pub fn key(&self) -> &K {
    &self.key
  }

  #[inline(always)]
  pub fn value(&self) -> &V {
    &self.value
  }

  #[inline(always)]
  pub fn value_mut(&mut self) -> &mut V {
    &mut self.value
  }

  /// Replaces the value, returning the old one.
  pub fn set_value(&mut self, value: V) -> V {
    std::mem::replace(&mut self.value, value)
  }

  pub fn into_pair(self) -> (K, V) {
    (self.key, self.value)
  }
}

impl<K, V> From<(K, V)> for Association<K, V> {
  fn from((key, value): (K, V)) -> Self {
    Association::new(key, value)
  }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Association<K, V> {
  fn eq(&self, other: &Self) -> bool {
    self.key == other.key && self.value == other.value
  }
}

impl<K: Eq, V: Eq> Eq for Association<K, V> {}

impl<K: Ord, V: Ord> PartialOrd for Association<K, V> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<K: Ord, V: Ord> Ord for Association<K, V> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.key.cmp(&other.key).then_with(|| self.value.cmp(&other.value))
  }
}

impl<K: Display, V: Display> Display for Association<K, V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} => {}", self.key, self.value)
  }
}

impl<K: Debug, V: Debug> Debug for Association<K, V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?} => {:?}", self.key, self.value)
  }
}

impl Composite for Association<Value, Value> {
  fn type_name(&self) -> &str {
    "Association"
  }

  fn as_association(&self) -> Option<(Value, Value)> {
    Some((self.key.clone(), self.value.clone()))
  }
}
