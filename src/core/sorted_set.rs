/*!

A `SortedSet` is a sequence that keeps its members in strictly ascending order under its ranking function: for any two
adjacent members `a` and `b`, `rank(a, b)` is `Less`. There are no duplicates, where "duplicate" means ranked `Equal`.

The set is array-backed. Membership and the insertion point are found by binary search in O(log n); inserting or
removing shifts the backing storage, which is O(n). For the read-mostly workloads sets usually see, the contiguous
storage wins over a tree.

## Changing the Ranking Function

`set_ranking_function` re-sorts the existing members under the new function immediately, and drops every member that
the new function ranks `Equal` to an earlier one (earlier in the old order). The invariant therefore holds at all times,
not only for members added after the change.

## Invariant Checks

With the `invariant_checks` feature, which is on by default, mutations verify the ordering invariant and panic if it
has been broken. An insertion checks only the new member against its two neighbours, so `add` stays at O(log n)
rankings; replacing the ranking function checks every adjacent pair once. A ranking function that is not a strict
weak ordering is the usual cause of a failure.

*/

use std::fmt::{Debug, Display, Formatter};

use crate::{
  abstractions::join_string,
  core::{
    error::CollectionError,
    ordinal::{offset_of, ordinal_of, resolve, Ordinal},
    rank::{natural_ranking, Rank, RankingFunction},
    sorter,
    Sequence
  },
  debug,
  log::KERNEL_THRESHOLD
};

/// The outcome of a binary search. Both variants carry an ordinal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Search {
  /// The probe matched the member at this ordinal.
  Found(usize),
  /// No member matched; inserting before this ordinal keeps the sequence ordered. `len + 1` means "at the end".
  Vacant(usize),
}

impl Search {
  /// The ordinal if found, otherwise 0.
  #[inline(always)]
  pub fn found_or_zero(self) -> usize {
    match self {
      Search::Found(ordinal)  => ordinal,
      Search::Vacant(_)       => 0,
    }
  }

  #[inline(always)]
  pub fn is_found(self) -> bool {
    matches!(self, Search::Found(_))
  }
}

/// Binary search over an ascending sequence. `probe(item)` ranks the sought value against `item`.
///
/// The search keeps the ordinal bounds `first..=last` of the remaining candidates and their count `size`. Each step
/// ranks the midpoint and keeps the half the rank points to. When no candidates remain, `first` is the slot before
/// which the sought value belongs.
pub fn binary_search<T, F>(items: &[T], mut probe: F) -> Search
where
    F: FnMut(&T) -> Rank,
{
  let mut first = 1usize;
  let mut last  = items.len();
  let mut size  = items.len();

  while size > 0 {
    let middle = first + size / 2;
    match probe(&items[middle - 1]) {
      Rank::Equal => return Search::Found(middle),
      Rank::Less  => {
        last = middle - 1;
        size = middle - first;
      }
      Rank::Greater => {
        first = middle + 1;
        size  = last - middle;
      }
    }
  }

  Search::Vacant(first)
}

pub struct SortedSet<T> {
  members: Vec<T>,
  ranking: RankingFunction<T>,
}

impl<T: Ord + 'static> SortedSet<T> {
  /// An empty set ranked by `T`'s natural order.
  pub fn new() -> Self {
    Self::with_ranking_function(natural_ranking())
  }
}

impl<T: Ord + 'static> Default for SortedSet<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Ord + 'static> FromIterator<T> for SortedSet<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut set = SortedSet::new();
    set.extend(iter);
    set
  }
}

impl<T> SortedSet<T> {
  pub fn with_ranking_function(ranking: RankingFunction<T>) -> Self {
    SortedSet {
      members: Vec::new(),
      ranking,
    }
  }

  /// The active ranking function.
  pub fn ranking_function(&self) -> RankingFunction<T> {
    self.ranking.clone()
  }

  /// Installs a new ranking function, re-sorting the members under it and dropping the members it considers
  /// duplicates.
  pub fn set_ranking_function(&mut self, ranking: RankingFunction<T>) {
    self.ranking = ranking;
    let before   = self.members.len();

    let rank = &self.ranking;
    sorter::sort(&mut self.members, |a, b| rank(a, b));
    self.members.dedup_by(|later, earlier| rank(earlier, later) == Rank::Equal);

    debug!(
      KERNEL_THRESHOLD,
      "ranking function replaced; re-sorted {} members, dropped {} duplicates",
      before,
      before - self.members.len()
    );
    self.check_invariant();
  }

  /// Finds `value`'s ordinal, or the ordinal before which it would be inserted.
  pub fn search(&self, value: &T) -> Search {
    binary_search(&self.members, |member| (self.ranking)(value, member))
  }

  /// Inserts `value` unless an equal member is present. Returns whether it was inserted.
  pub fn add(&mut self, value: T) -> bool {
    match self.search(&value) {
      Search::Found(_) => false,
      Search::Vacant(ordinal) => {
        self.members.insert(ordinal - 1, value);
        self.check_neighbours(ordinal - 1);
        true
      }
    }
  }

  /// Removes the member equal to `value`, if any. Returns whether a member was removed.
  pub fn remove(&mut self, value: &T) -> bool {
    self.take(value).is_some()
  }

  /// Removes and returns the member equal to `value`, if any.
  pub fn take(&mut self, value: &T) -> Option<T> {
    match self.search(value) {
      Search::Found(ordinal) => Some(self.members.remove(ordinal - 1)),
      Search::Vacant(_)      => None,
    }
  }

  pub fn contains(&self, value: &T) -> bool {
    self.search(value).is_found()
  }

  /// The ordinal of `value`, or 0 if it is not a member.
  pub fn index_of(&self, value: &T) -> usize {
    self.search(value).found_or_zero()
  }

  /// The member at `index`. An invalid ordinal is fatal.
  #[track_caller]
  pub fn get(&self, index: Ordinal) -> &T {
    &self.members[offset_of(index, self.members.len())]
  }

  pub fn try_get(&self, index: Ordinal) -> Result<&T, CollectionError> {
    Ok(&self.members[resolve(index, self.members.len())?])
  }

  /// Removes and returns the member at `index`. An invalid ordinal is fatal.
  #[track_caller]
  pub fn remove_at(&mut self, index: Ordinal) -> T {
    let offset = offset_of(index, self.members.len());
    self.members.remove(offset)
  }

  pub fn try_remove_at(&mut self, index: Ordinal) -> Result<T, CollectionError> {
    let offset = resolve(index, self.members.len())?;
    Ok(self.members.remove(offset))
  }

  /// The least member.
  pub fn first(&self) -> Option<&T> {
    self.members.first()
  }

  /// The greatest member.
  pub fn last(&self) -> Option<&T> {
    self.members.last()
  }

  pub fn len(&self) -> usize {
    self.members.len()
  }

  pub fn is_empty(&self) -> bool {
    self.members.is_empty()
  }

  pub fn clear(&mut self) {
    self.members.clear();
  }

  /// Members in ascending order.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.members.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.members
  }

  /// Keeps only the members for which `keep` returns true. Order is preserved, so the invariant is too.
  pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
    self.members.retain(keep);
  }

  /// Whether every member of `self` is a member of `other` (by `other`'s ranking).
  pub fn is_subset(&self, other: &SortedSet<T>) -> bool {
    self.members.iter().all(|member| other.contains(member))
  }

  pub fn into_vec(self) -> Vec<T> {
    self.members
  }

  /// Panics if the members are not strictly ascending.
  fn check_invariant(&self) {
    #[cfg(feature = "invariant_checks")]
    for offset in 1..self.members.len() {
      self.check_pair(offset - 1);
    }
  }

  /// Panics if the member at `offset` is out of order with either neighbour.
  fn check_neighbours(&self, offset: usize) {
    #[cfg(feature = "invariant_checks")]
    {
      if offset > 0 {
        self.check_pair(offset - 1);
      }
      if offset + 1 < self.members.len() {
        self.check_pair(offset);
      }
    }
    #[cfg(not(feature = "invariant_checks"))]
    let _ = offset;
  }

  /// Panics unless the members at `offset` and `offset + 1` rank `Less`.
  #[cfg(feature = "invariant_checks")]
  fn check_pair(&self, offset: usize) {
    if (self.ranking)(&self.members[offset], &self.members[offset + 1]) != Rank::Less {
      panic!(
        "sorted set invariant broken between ordinals {} and {}; is the ranking function a strict weak ordering?",
        ordinal_of(offset),
        ordinal_of(offset + 1)
      );
    }
  }
}

impl<T: Clone> SortedSet<T> {
  /// A set with the same ranking function and no members.
  fn empty_like(&self) -> Self {
    SortedSet::with_ranking_function(self.ranking.clone())
  }

  /// Members of either set, ranked by `self`'s ranking function.
  pub fn union(&self, other: &SortedSet<T>) -> SortedSet<T> {
    let mut result = SortedSet {
      members: self.members.clone(),
      ranking: self.ranking.clone(),
    };
    result.extend(other.iter().cloned());
    result
  }

  /// Members of `self` that are also in `other`.
  pub fn intersection(&self, other: &SortedSet<T>) -> SortedSet<T> {
    let mut result = self.empty_like();
    result.members = self.members.iter().filter(|member| other.contains(member)).cloned().collect();
    result
  }

  /// Members of `self` that are not in `other`.
  pub fn difference(&self, other: &SortedSet<T>) -> SortedSet<T> {
    let mut result = self.empty_like();
    result.members = self.members.iter().filter(|member| !other.contains(member)).cloned().collect();
    result
  }
}

impl<T> Extend<T> for SortedSet<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.add(value);
    }
  }
}

impl<T: Clone> Clone for SortedSet<T> {
  fn clone(&self) -> Self {
    SortedSet {
      members: self.members.clone(),
      ranking: self.ranking.clone(),
    }
  }
}

impl<T: Clone> Sequence<T> for SortedSet<T> {
  fn len(&self) -> usize {
    self.members.len()
  }

  fn to_vec(&self) -> Vec<T> {
    self.members.clone()
  }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.members.iter()
  }
}

impl<T> IntoIterator for SortedSet<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.members.into_iter()
  }
}

impl<T: Display> Display for SortedSet<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{{{}}}", join_string(self.members.iter(), ", "))
  }
}

impl<T: Debug> Debug for SortedSet<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_set().entries(self.members.iter()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{cell::Cell, rc::Rc};

  fn set_of(values: &[i32]) -> SortedSet<i32> {
    values.iter().copied().collect()
  }

  #[test]
  fn binary_search_finds_members_and_slots() {
    let set = set_of(&[1, 2, 4, 5, 9]);
    assert_eq!(set.index_of(&4), 3);
    assert_eq!(set.index_of(&3), 0);
    assert!(set.contains(&9));
    assert!(!set.contains(&6));

    assert_eq!(set.search(&0), Search::Vacant(1));
    assert_eq!(set.search(&3), Search::Vacant(3));
    assert_eq!(set.search(&6), Search::Vacant(5));
    assert_eq!(set.search(&10), Search::Vacant(6));
    for (ordinal, value) in [1, 2, 4, 5, 9].iter().enumerate() {
      assert_eq!(set.search(value), Search::Found(ordinal + 1));
    }
  }

  #[test]
  fn binary_search_on_empty_and_single() {
    let empty: SortedSet<i32> = SortedSet::new();
    assert_eq!(empty.search(&1), Search::Vacant(1));

    let single = set_of(&[5]);
    assert_eq!(single.search(&5), Search::Found(1));
    assert_eq!(single.search(&4), Search::Vacant(1));
    assert_eq!(single.search(&6), Search::Vacant(2));
  }

  #[test]
  fn add_keeps_order_and_uniqueness() {
    let mut set = SortedSet::new();
    for value in [5, 1, 9, 1, 4, 2, 9, 5] {
      set.add(value);
    }
    assert_eq!(set.as_slice(), &[1, 2, 4, 5, 9]);
    assert!(!set.add(4));
    assert!(set.add(3));
    assert_eq!(set.index_of(&3), 3);
  }

  #[test]
  fn remove_is_a_no_op_when_absent() {
    let mut set = set_of(&[1, 2, 3]);
    assert!(set.remove(&2));
    assert!(!set.remove(&2));
    assert!(!set.remove(&7));
    assert_eq!(set.as_slice(), &[1, 3]);
    assert_eq!(set.take(&3), Some(3));
  }

  #[test]
  fn ordinal_access() {
    let mut set = set_of(&[10, 20, 30]);
    assert_eq!(*set.get(1), 10);
    assert_eq!(*set.get(-1), 30);
    assert!(set.try_get(0).is_err());
    assert_eq!(set.remove_at(-2), 20);
    assert_eq!(set.try_remove_at(3), Err(CollectionError::InvalidIndex { index: 3, length: 2 }));
    assert_eq!(set.first(), Some(&10));
    assert_eq!(set.last(), Some(&30));
  }

  #[test]
  #[should_panic(expected = "ordinal index 4")]
  fn invalid_ordinal_is_fatal() {
    set_of(&[1, 2, 3]).get(4);
  }

  #[test]
  fn custom_ranking_function() {
    let mut set = SortedSet::with_ranking_function(Rc::new(|a: &i32, b: &i32| Rank::of(b, a)));
    set.extend([3, 1, 2]);
    assert_eq!(set.as_slice(), &[3, 2, 1]);
    assert_eq!(set.index_of(&1), 3);
  }

  #[test]
  fn changing_the_ranking_function_resorts_eagerly() {
    let mut set = set_of(&[-3, -1, 1, 2, 3]);
    set.set_ranking_function(Rc::new(|a: &i32, b: &i32| Rank::of(&a.abs(), &b.abs())));

    // -3 and 3 tie, as do -1 and 1; the member that came first in the old order stays.
    assert_eq!(set.as_slice(), &[-1, 2, -3]);
    assert!(set.contains(&1));
    assert!(!set.add(3));
    assert!(set.add(0));
    assert_eq!(set.first(), Some(&0));
  }

  #[test]
  fn set_algebra() {
    let a = set_of(&[1, 2, 3, 4]);
    let b = set_of(&[3, 4, 5]);
    assert_eq!(a.union(&b).as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(a.intersection(&b).as_slice(), &[3, 4]);
    assert_eq!(a.difference(&b).as_slice(), &[1, 2]);
    assert!(a.intersection(&b).is_subset(&b));
    assert!(!a.is_subset(&b));
  }

  #[test]
  fn snapshot_is_a_copy() {
    let set = set_of(&[1, 2]);
    let mut snapshot = set.to_vec();
    snapshot.push(99);
    assert_eq!(set.len(), 2);
    assert_eq!(format!("{}", set), "{1, 2}");
    assert_eq!(format!("{:?}", set), "{1, 2}");
  }

  #[test]
  fn add_ranks_logarithmically() {
    let calls = Rc::new(Cell::new(0usize));
    let counter = calls.clone();
    let mut set = SortedSet::with_ranking_function(Rc::new(move |a: &i32, b: &i32| {
      counter.set(counter.get() + 1);
      Rank::of(a, b)
    }));
    set.extend((0..1000).map(|i| i * 2));

    calls.set(0);
    assert!(set.add(1001));
    // A binary search over 1000 members takes at most 10 rankings, plus two neighbour checks.
    assert!(calls.get() <= 12, "{} rankings for one add", calls.get());
    assert_eq!(set.index_of(&1001), 502);
  }

  #[test]
  #[cfg(feature = "invariant_checks")]
  #[should_panic(expected = "invariant broken")]
  fn inconsistent_ranking_is_caught() {
    // Ranks everything `Greater`, so every value lands at the end and order is never established.
    let mut set = SortedSet::with_ranking_function(Rc::new(|_: &i32, _: &i32| Rank::Greater));
    set.add(1);
    set.add(2);
  }
}
