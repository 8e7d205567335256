/*!

Ordinal indexing. Positions are 1-based from the front (`1` is the first element) or negative from the back (`-1` is
the last element). Zero is never a valid position. Every position parameter in the crate goes through `resolve`, so an
invalid index is reported at the call that supplied it and is never clamped.

*/

use crate::core::error::{fatal, CollectionError};

/// A 1-based, sign-symmetric position.
pub type Ordinal = isize;

/// Converts an ordinal into a zero-based offset into a sequence of `length` elements.
#[inline]
pub fn resolve(index: Ordinal, length: usize) -> Result<usize, CollectionError> {
  let offset = if index > 0 {
    index.unsigned_abs() - 1
  } else if index < 0 {
    match length.checked_sub(index.unsigned_abs()) {
      Some(offset) => offset,
      None         => return Err(CollectionError::InvalidIndex { index, length }),
    }
  } else {
    return Err(CollectionError::InvalidIndex { index, length });
  };

  if offset < length {
    Ok(offset)
  } else {
    Err(CollectionError::InvalidIndex { index, length })
  }
}

/// Like `resolve`, but an invalid index is fatal.
#[inline]
#[track_caller]
pub fn offset_of(index: Ordinal, length: usize) -> usize {
  match resolve(index, length) {
    Ok(offset) => offset,
    Err(error) => fatal(error),
  }
}

/// The ordinal of a zero-based offset.
#[inline(always)]
pub fn ordinal_of(offset: usize) -> usize {
  offset + 1
}
