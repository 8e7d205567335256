use std::iter::once;
use std::fmt::Display;

/**
Interleave a separator between the items of an iterator. The separator is computed from the item that follows it.

```ignore
let iter = [1, 3, 5].iter().cloned();
assert_eq!(join_iter(iter, |v| v - 1).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
```
 */
pub fn join_iter<T>(mut iter: impl Iterator<Item = T>, sep: impl Fn(&T) -> T)
                    -> impl Iterator<Item = T>
{
  iter
      .next()
      .into_iter()
      .chain(iter.flat_map(move |s| once(sep(&s)).chain(once(s))))
}

/// Join a list of things that can be displayed as string with a given separator. Used by the `Display` impls of
/// values and containers.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_iter(iter.map(|t| t.to_string()), |_| sep.to_string()).collect::<String>()
}

#[cfg(test)]
mod tests {
  use super::{join_iter, join_string};

  #[test]
  fn join_iter_interleaves() {
    let joined = join_iter([1, 3, 5, 7, 9].iter().cloned(), |v| v - 1).collect::<Vec<_>>();
    assert_eq!(joined, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let empty = join_iter(std::iter::empty::<i32>(), |v| *v).collect::<Vec<_>>();
    assert!(empty.is_empty());
  }

  #[test]
  fn join_string_separates() {
    assert_eq!(join_string([1, 3, 5, 7, 9].iter(), ", "), "1, 3, 5, 7, 9");
    assert_eq!(join_string(["only"].iter(), ", "), "only");
    assert_eq!(join_string(std::iter::empty::<&str>(), ", "), "");
  }
}
