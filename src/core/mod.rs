/*!

The ordering kernel. Everything in the crate that compares, ranks, sorts, or searches goes through here.

| module        | role                                                                    |
|:--------------|:------------------------------------------------------------------------|
| `classifier`  | Reports a value's intrinsic `Kind` and canonical `TypeName`             |
| `collator`    | Structural equality and total ranking of `Value`s, depth bounded        |
| `sorter`      | Stable bottom-up merge sort, reversal, secure shuffle                   |
| `sorted_set`  | Strictly ascending unique sequence with binary search                   |
| `ordinal`     | 1-based, sign-symmetric positions                                       |
| `rank`        | The trichotomous comparison result and first-class ranking functions    |
| `error`       | `CollectionError` and the fatal-error policy                            |

Dependencies run leaves first: `value` and `classifier` know nothing of the collator, the collator calls the sorter
for its map rule, and the sorted set uses both.

*/

pub mod classifier;
pub mod collator;
pub mod error;
pub mod ordinal;
pub mod rank;
pub mod sorted_set;
pub mod sorter;
pub mod value;


use crate::api::Association;

/// A finite sequence of elements. Implemented by every container in the crate.
pub trait Sequence<T> {
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// A snapshot of the elements in sequence order. Mutating the snapshot never affects the container.
  fn to_vec(&self) -> Vec<T>;
}

/// A container of key/value pairs.
pub trait Keyed<K, V> {
  /// A snapshot of the entries as associations, in the container's order.
  fn to_pairs(&self) -> Vec<Association<K, V>>;
}
