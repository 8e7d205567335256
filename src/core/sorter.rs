/*!

In-place stable sorting, reversal, and shuffling of slices.

# Merge Sort

The sort is a bottom-up, iterative merge sort. It starts with runs of width 1 and doubles the width on every pass. Each
pass merges adjacent runs from one buffer into a second buffer of the same size, then the buffers swap roles. There is
no recursion, so stack use is constant, and the auxiliary space is exactly two buffers of `n` positions.

The buffers hold positions into the slice rather than the elements themselves. Sorting positions means the element
type needs neither `Clone` nor `Default`, and it means a ranking function that fails partway leaves the slice exactly
as it was. When the passes are done, the final permutation is applied to the slice in place by following its cycles,
which costs at most `n - 1` swaps.

Merging takes from the left run unless the right element ranks strictly `Less`, which makes the sort stable: elements
that rank `Equal` keep their relative input order. Callers build multi-key orderings on this guarantee by sorting on
the secondary key first and the primary key second.

# Shuffle

`shuffle` is a Fisher–Yates shuffle whose index draws come from the operating system's cryptographically secure
generator, so it is suitable where an unbiased, unpredictable ordering matters. `shuffle_with` accepts any other
`CryptoRng`, which is how tests make shuffles reproducible.

*/

use std::{cmp::min, convert::Infallible};

use rand::{rngs::OsRng, CryptoRng, Rng, TryRngCore};

use crate::{
  core::rank::Rank,
  log::KERNEL_THRESHOLD,
  trace
};

/// Sorts `items` in place by `rank`. Stable.
pub fn sort<T, F>(items: &mut [T], mut rank: F)
where
    F: FnMut(&T, &T) -> Rank,
{
  let result: Result<(), Infallible> = try_sort(items, |a, b| Ok(rank(a, b)));
  match result {
    Ok(()) => {}
    Err(never) => match never {},
  }
}

/// Sorts `items` in place by their `Ord` implementation. Stable.
pub fn sort_natural<T: Ord>(items: &mut [T]) {
  sort(items, |a, b| Rank::of(a, b));
}

/// Sorts `items` in place by a ranking function that can fail. On failure `items` is left unchanged and the error is
/// returned.
pub fn try_sort<T, E, F>(items: &mut [T], mut rank: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Rank, E>,
{
  let length = items.len();
  if length < 2 {
    return Ok(());
  }

  let mut source: Vec<usize> = (0..length).collect();
  let mut target: Vec<usize> = vec![0; length];
  let mut passes = 0usize;
  let mut width  = 1usize;

  while width < length {
    let mut start = 0;
    while start < length {
      let middle = min(start + width, length);
      let end    = min(start + 2 * width, length);
      merge(items, &source[start..middle], &source[middle..end], &mut target[start..end], &mut rank)?;
      start = end;
    }
    std::mem::swap(&mut source, &mut target);
    passes += 1;
    width  *= 2;
  }

  trace!(KERNEL_THRESHOLD + 1, "merge sort of {} elements took {} passes", length, passes);

  // After the final swap `source` holds the sorted permutation, whichever buffer that is.
  apply_permutation(items, &mut source);
  Ok(())
}

/// Merges two sorted runs of positions into `target`.
#[inline]
fn merge<T, E, F>(items: &[T], left: &[usize], right: &[usize], target: &mut [usize], rank: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Rank, E>,
{
  let (mut i, mut j) = (0, 0);

  for slot in target.iter_mut() {
    let take_left = if i == left.len() {
      false
    } else if j == right.len() {
      true
    } else {
      rank(&items[right[j]], &items[left[i]])? != Rank::Less
    };

    if take_left {
      *slot = left[i];
      i += 1;
    } else {
      *slot = right[j];
      j += 1;
    }
  }

  Ok(())
}

/// Rearranges `items` so that position `k` receives the element that was at `permutation[k]`. Consumes the
/// permutation, which is left as the identity.
fn apply_permutation<T>(items: &mut [T], permutation: &mut [usize]) {
  for start in 0..permutation.len() {
    let mut current = start;
    while permutation[current] != start {
      let next = permutation[current];
      items.swap(current, next);
      permutation[current] = current;
      current = next;
    }
    permutation[current] = current;
  }
}

/// Reverses `items` in place by swapping from both ends toward the middle.
pub fn reverse<T>(items: &mut [T]) {
  if items.is_empty() {
    return;
  }

  let (mut front, mut back) = (0, items.len() - 1);
  while front < back {
    items.swap(front, back);
    front += 1;
    back  -= 1;
  }
}

/// Shuffles `items` in place with randomness from the operating system.
///
/// The operating system generator failing is not something the kernel can recover from, so it is fatal.
pub fn shuffle<T>(items: &mut [T]) {
  let mut rng = OsRng.unwrap_err();
  shuffle_with(items, &mut rng);
}

/// Shuffles `items` in place with the given cryptographically secure generator.
pub fn shuffle_with<T, R: CryptoRng + ?Sized>(items: &mut [T], rng: &mut R) {
  for i in (1..items.len()).rev() {
    let j = rng.random_range(0..=i);
    items.swap(i, j);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::{rngs::StdRng, SeedableRng};

  #[test]
  fn sorts_small_and_odd_lengths() {
    for length in 0..40usize {
      let mut items: Vec<usize> = (0..length).map(|i| (i * 7919) % 31).collect();
      let mut expected = items.clone();
      expected.sort();

      sort_natural(&mut items);
      assert_eq!(items, expected, "length {}", length);
    }
  }

  #[test]
  fn sort_is_stable() {
    let mut pairs = vec![(1, "a"), (0, "x"), (1, "b"), (0, "y"), (1, "c")];
    sort(&mut pairs, |a, b| Rank::of(&a.0, &b.0));
    assert_eq!(pairs, vec![(0, "x"), (0, "y"), (1, "a"), (1, "b"), (1, "c")]);

    let mut equal_keys = vec![(1, "a"), (1, "b")];
    sort(&mut equal_keys, |a, b| Rank::of(&a.0, &b.0));
    assert_eq!(equal_keys, vec![(1, "a"), (1, "b")]);
  }

  #[test]
  fn sort_is_idempotent() {
    let mut items = vec![5, 3, 9, 1, 1, 4];
    sort_natural(&mut items);
    let once = items.clone();
    sort_natural(&mut items);
    assert_eq!(items, once);
  }

  #[test]
  fn descending_ranking_function() {
    let mut items = vec![2, 8, 5];
    sort(&mut items, |a, b| Rank::of(a, b).reverse());
    assert_eq!(items, vec![8, 5, 2]);
  }

  #[test]
  fn sorts_elements_without_clone() {
    struct Token(u8);
    let mut items = vec![Token(3), Token(1), Token(2)];
    sort(&mut items, |a, b| Rank::of(&a.0, &b.0));
    assert_eq!(items.iter().map(|t| t.0).collect::<Vec<_>>(), vec![1, 2, 3]);
  }

  #[test]
  fn failed_sort_leaves_input_unchanged() {
    let mut items = vec![4, 3, 2, 1];
    let mut calls = 0;
    let result: Result<(), &str> = try_sort(&mut items, |a, b| {
      calls += 1;
      if calls == 3 { Err("stop") } else { Ok(Rank::of(a, b)) }
    });
    assert_eq!(result, Err("stop"));
    assert_eq!(items, vec![4, 3, 2, 1]);
  }

  #[test]
  fn permutation_is_applied_along_cycles() {
    let mut items = vec!['a', 'b', 'c', 'd', 'e'];
    let mut permutation = vec![2, 0, 1, 4, 3];
    apply_permutation(&mut items, &mut permutation);
    assert_eq!(items, vec!['c', 'a', 'b', 'e', 'd']);
    assert_eq!(permutation, vec![0, 1, 2, 3, 4]);
  }

  #[test]
  fn reverse_even_odd_and_empty() {
    let mut even = vec![1, 2, 3, 4];
    reverse(&mut even);
    assert_eq!(even, vec![4, 3, 2, 1]);

    let mut odd = vec![1, 2, 3];
    reverse(&mut odd);
    assert_eq!(odd, vec![3, 2, 1]);

    let mut empty: Vec<i32> = vec![];
    reverse(&mut empty);
    assert!(empty.is_empty());
  }

  #[test]
  fn shuffle_is_a_permutation() {
    let mut items: Vec<u32> = (0..100).collect();
    shuffle(&mut items);
    assert_eq!(items.len(), 100);
    let mut restored = items.clone();
    restored.sort();
    assert_eq!(restored, (0..100).collect::<Vec<_>>());
  }

  #[test]
  fn seeded_shuffles_are_reproducible() {
    let mut first: Vec<u32> = (0..20).collect();
    let mut second = first.clone();
    shuffle_with(&mut first, &mut StdRng::seed_from_u64(7));
    shuffle_with(&mut second, &mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);
  }
}
