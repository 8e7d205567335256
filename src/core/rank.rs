/*!

A `Rank` is the trichotomous result of comparing two values. It is deliberately its own type rather than
`std::cmp::Ordering` so that ranking functions read as what they are, but the two convert freely.

*/

use std::{
  cmp::Ordering,
  fmt::{Display, Formatter},
  rc::Rc
};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Rank {
  Less,
  Equal,
  Greater,
}

/// A first-class ranking function. Shared (`Rc`) so that sets derived from one another can rank the same way.
pub type RankingFunction<T> = Rc<dyn Fn(&T, &T) -> Rank>;

impl Rank {
  /// The rank of `(b, a)` given that this is the rank of `(a, b)`.
  #[inline(always)]
  pub fn reverse(self) -> Rank {
    match self {
      Rank::Less    => Rank::Greater,
      Rank::Equal   => Rank::Equal,
      Rank::Greater => Rank::Less,
    }
  }

  /// Lexicographic chaining: `self` unless it is `Equal`, in which case `other` is computed.
  #[inline(always)]
  pub fn then_with(self, other: impl FnOnce() -> Rank) -> Rank {
    match self {
      Rank::Equal => other(),
      decided     => decided,
    }
  }

  #[inline(always)]
  pub fn is_equal(self) -> bool {
    self == Rank::Equal
  }

  /// The rank of two values ordered by `Ord`.
  #[inline(always)]
  pub fn of<T: Ord + ?Sized>(a: &T, b: &T) -> Rank {
    a.cmp(b).into()
  }
}

/// The ranking function induced by `Ord`, used by containers constructed without an explicit one.
pub fn natural_ranking<T: Ord + 'static>() -> RankingFunction<T> {
  Rc::new(|a: &T, b: &T| Rank::of(a, b))
}

impl From<Ordering> for Rank {
  fn from(ordering: Ordering) -> Self {
    match ordering {
      Ordering::Less    => Rank::Less,
      Ordering::Equal   => Rank::Equal,
      Ordering::Greater => Rank::Greater,
    }
  }
}

impl From<Rank> for Ordering {
  fn from(rank: Rank) -> Self {
    match rank {
      Rank::Less    => Ordering::Less,
      Rank::Equal   => Ordering::Equal,
      Rank::Greater => Ordering::Greater,
    }
  }
}

impl Display for Rank {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Rank::Less    => write!(f, "less"),
      Rank::Equal   => write!(f, "equal"),
      Rank::Greater => write!(f, "greater"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reverse_is_an_involution() {
    for rank in [Rank::Less, Rank::Equal, Rank::Greater] {
      assert_eq!(rank.reverse().reverse(), rank);
    }
    assert_eq!(Rank::Less.reverse(), Rank::Greater);
  }

  #[test]
  fn then_with_only_consults_on_ties() {
    assert_eq!(Rank::Less.then_with(|| unreachable!()), Rank::Less);
    assert_eq!(Rank::Equal.then_with(|| Rank::Greater), Rank::Greater);
  }

  #[test]
  fn converts_to_and_from_ordering() {
    assert_eq!(Rank::from(3.cmp(&4)), Rank::Less);
    assert_eq!(Ordering::from(Rank::Greater), Ordering::Greater);
    assert_eq!(Rank::of("b", "a"), Rank::Greater);
    assert_eq!(natural_ranking::<i32>()(&7, &7), Rank::Equal);
  }
}
