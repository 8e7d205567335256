/*!

Every failure the crate can report. None of them is recoverable inside the kernel: the infallible operations treat them
as fatal, and the `try_` twins hand them to the caller to translate at a boundary.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::{abstractions::IString, critical};

#[derive(Clone, PartialEq, Eq)]
pub enum CollectionError {
  /// An ordinal index of zero, or one outside `[-length, -1] ∪ [1, length]`.
  InvalidIndex {
    index : isize,
    length: usize
  },
  /// The collator descended past its maximum depth, which signals a cyclic or absurdly deep structure.
  RecursionLimitExceeded {
    max_depth: usize
  },
  /// A composite value exposes none of the capabilities the collator understands.
  Unclassifiable {
    type_name: IString
  },
  /// A bounded container was asked to hold more than its limit.
  CapacityExceeded {
    capacity: usize
  },
}

impl Display for CollectionError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      CollectionError::InvalidIndex { index, length } => {
        if *length == 0 {
          write!(f, "ordinal index {} is invalid for an empty sequence", index)
        } else {
          write!(
            f,
            "ordinal index {} is invalid for a sequence of length {}; valid indices are -{}..=-1 and 1..={}",
            index, length, length, length
          )
        }
      }

      CollectionError::RecursionLimitExceeded { max_depth } => {
        write!(
          f,
          "collation exceeded the maximum depth of {}; the value is cyclic or nested too deeply",
          max_depth
        )
      }

      CollectionError::Unclassifiable { type_name } => {
        write!(
          f,
          "a value of type {} exposes no array, association, or reference capability and cannot be collated",
          type_name
        )
      }

      CollectionError::CapacityExceeded { capacity } => {
        write!(f, "the container is at its capacity of {}", capacity)
      }

    } // end match on `CollectionError`
  }
}

impl Debug for CollectionError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for CollectionError {}

/// Stops the current operation on an error the kernel does not recover from. The error is logged as critical first so
/// that it is recorded even when the panic is caught further up.
#[cold]
#[track_caller]
pub(crate) fn fatal(error: CollectionError) -> ! {
  critical!(0, "{}", error);
  panic!("{}", error)
}

/// Unwraps a kernel result, treating an error as fatal.
pub(crate) trait OrFatal<T> {
  fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T, CollectionError> {
  #[inline(always)]
  #[track_caller]
  fn or_fatal(self) -> T {
    match self {
      Ok(value)  => value,
      Err(error) => fatal(error),
    }
  }
}
