/*!

The `Collator` decides structural equality between two values and, independently, ranks them in a total order. Both
questions are answered by one recursive descent (`collate`); they differ only in what the descent may skip.

# The Order

 1. `Nil` ranks below everything else; two nils are equal.
 2. Values whose canonical type names differ (and neither name is the wildcard `any`) are unequal and rank by type
    name.
 3. Otherwise, by kind:
    - booleans: `false < true`; integers and strings: native order; floats: the IEEE total order.
    - complex numbers: magnitude, then phase. Equality requires bit-identical components; magnitude and phase ties
      between different bit patterns fall back to the bit patterns, so rank stays consistent with equality.
    - arrays: element by element up to the shorter length, then the shorter array ranks `Less`.
    - maps: both entry lists are sorted by key with this same collator. The sorted key sequences are compared by the
      array rule, size included; only maps with equal key sequences go on to compare their values in key order. The
      result does not depend on the order entries were inserted in.
    - references: the same allocation is equal to itself; otherwise the pointees are collated.
    - composites: through the first capability they expose: `as_array` (array rule), `as_association` (key, then
      value), `pointee` (collate the pointee). A composite with none of them is unclassifiable.
    - kinds that still differ, which only the wildcard allows, rank by kind. This fallback is not transitive: an `any`
      composite whose array form is `[1]` ranks above `5` by kind, while the plain array `[1]` ranks below `5` by type
      name (`"array" < "int"`). Containers that need a strict weak order should not mix wildcard composites with
      values of other kinds.

# Depth

Every step of the descent passes `depth + 1` to its children. Past `max_depth` the collation fails with
`RecursionLimitExceeded`, which bounds the work on cyclic graphs and keeps pathological nesting from overflowing the
stack. The depth is a parameter, not a field, so a single `Collator` can be shared between threads.

*/

use std::rc::Rc;

use total_float_wrap::TotalF64;

use crate::{
  core::{
    classifier::{classify, Classification, Kind},
    error::{CollectionError, OrFatal},
    rank::{Rank, RankingFunction},
    sorter::try_sort,
    value::{Complex, Value}
  }
};

/// The default bound on nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// What the descent is computing. In `Equality` mode a non-`Equal` result only means "not equal" and may be reached by
/// shortcuts that the ordering does not allow.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Mode {
  Equality,
  Ordering,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Collator {
  max_depth: usize,
}

impl Default for Collator {
  fn default() -> Self {
    Collator::new()
  }
}

/// How a structured value presents itself once references and composites are looked through.
enum View<'v> {
  Scalar(&'v Value),
  Array(Vec<Value>),
  Slice(&'v [Value]),
  Map(&'v [(Value, Value)]),
  Association(Value, Value),
  /// A reference or composite that stands for another value.
  Indirect(Value),
  /// Two handles to the same shared allocation.
  Identical,
}

impl Collator {
  pub const fn new() -> Self {
    Collator { max_depth: DEFAULT_MAX_DEPTH }
  }

  pub const fn with_max_depth(max_depth: usize) -> Self {
    Collator { max_depth }
  }

  #[inline(always)]
  pub fn max_depth(&self) -> usize {
    self.max_depth
  }

  /// Structural equality. Fatal on values that cannot be collated.
  #[track_caller]
  pub fn equal(&self, a: &Value, b: &Value) -> bool {
    self.try_equal(a, b).or_fatal()
  }

  /// The rank of `a` relative to `b`. Fatal on values that cannot be collated.
  #[track_caller]
  pub fn rank(&self, a: &Value, b: &Value) -> Rank {
    self.try_rank(a, b).or_fatal()
  }

  pub fn try_equal(&self, a: &Value, b: &Value) -> Result<bool, CollectionError> {
    Ok(self.collate(a, b, Mode::Equality, 0)? == Rank::Equal)
  }

  pub fn try_rank(&self, a: &Value, b: &Value) -> Result<Rank, CollectionError> {
    self.collate(a, b, Mode::Ordering, 0)
  }

  /// This collator's ranking as a first-class function, for containers and the sorter.
  pub fn ranking_function(self) -> RankingFunction<Value> {
    Rc::new(move |a: &Value, b: &Value| self.rank(a, b))
  }

  fn collate(&self, a: &Value, b: &Value, mode: Mode, depth: usize) -> Result<Rank, CollectionError> {
    if depth > self.max_depth {
      return Err(CollectionError::RecursionLimitExceeded { max_depth: self.max_depth });
    }

    match (a.is_nil(), b.is_nil()) {
      (true, true)   => return Ok(Rank::Equal),
      (true, false)  => return Ok(Rank::Less),
      (false, true)  => return Ok(Rank::Greater),
      (false, false) => {}
    }

    let a_class = classify(a);
    let b_class = classify(b);

    if !a_class.type_name.compatible(&b_class.type_name) {
      return Ok(a_class.type_name.cmp(&b_class.type_name).into());
    }

    if a_class.kind.is_scalar() && b_class.kind.is_scalar() {
      return Ok(self.collate_scalars(a, &a_class, b, &b_class));
    }

    let a_view = self.view(a, b)?;
    let b_view = self.view(b, a)?;

    match (a_view, b_view) {
      (View::Identical, _) | (_, View::Identical) => Ok(Rank::Equal),

      (View::Indirect(a), View::Indirect(b))      => self.collate(&a, &b, mode, depth + 1),
      (View::Indirect(a), _)                      => self.collate(&a, b, mode, depth + 1),
      (_, View::Indirect(b))                      => self.collate(a, &b, mode, depth + 1),

      (View::Array(a), View::Array(b))            => self.collate_sequences(&a, &b, mode, depth),
      (View::Array(a), View::Slice(b))            => self.collate_sequences(&a, b, mode, depth),
      (View::Slice(a), View::Array(b))            => self.collate_sequences(a, &b, mode, depth),
      (View::Slice(a), View::Slice(b))            => self.collate_sequences(a, b, mode, depth),

      (View::Map(a), View::Map(b))                => self.collate_maps(a, b, mode, depth),

      (View::Association(a_key, a_value), View::Association(b_key, b_value)) => {
        match self.collate(&a_key, &b_key, mode, depth + 1)? {
          Rank::Equal => self.collate(&a_value, &b_value, mode, depth + 1),
          decided     => Ok(decided),
        }
      }

      // Only reachable through the wildcard type name.
      (a_view, b_view) => Ok(Rank::of(&a_view.kind(), &b_view.kind())),
    }
  }

  /// Looks through references and composites. `other` is only consulted to recognize two handles to one allocation.
  fn view<'v>(&self, value: &'v Value, other: &Value) -> Result<View<'v>, CollectionError> {
    let view = match value {
      Value::Array(items)   => View::Slice(items),
      Value::Map(entries)   => View::Map(entries),

      Value::Ref(cell) => {
        if let Value::Ref(other_cell) = other {
          if Rc::ptr_eq(cell, other_cell) {
            return Ok(View::Identical);
          }
        }
        View::Indirect(cell.borrow().clone())
      }

      Value::Object(composite) => {
        if let Value::Object(other_composite) = other {
          if Rc::ptr_eq(composite, other_composite) {
            return Ok(View::Identical);
          }
        }

        if let Some(items) = composite.as_array() {
          View::Array(items)
        } else if let Some((key, value)) = composite.as_association() {
          View::Association(key, value)
        } else if let Some(pointee) = composite.pointee() {
          View::Indirect(pointee)
        } else {
          return Err(CollectionError::Unclassifiable {
            type_name: classify(value).type_name.into_istring()
          });
        }
      }

      scalar => View::Scalar(scalar),
    };

    Ok(view)
  }

  /// Compares two scalars of compatible type. Scalars of different kinds only meet through the wildcard, and then
  /// rank by kind.
  fn collate_scalars(&self, a: &Value, a_class: &Classification, b: &Value, b_class: &Classification) -> Rank {
    match (a, b) {
      (Value::Bool(a), Value::Bool(b))       => Rank::of(a, b),
      (Value::UInt(a), Value::UInt(b))       => Rank::of(a, b),
      (Value::Int(a), Value::Int(b))         => Rank::of(a, b),
      (Value::Float(a), Value::Float(b))     => rank_floats(*a, *b),
      (Value::Complex(a), Value::Complex(b)) => rank_complex(a, b),
      (Value::Char(a), Value::Char(b))       => Rank::of(a, b),
      (Value::Str(a), Value::Str(b))         => {
        if a == b { Rank::Equal } else { Rank::of(a.as_ref(), b.as_ref()) }
      }
      // `Char` and `Str` share a kind but not a type name.
      _ => Rank::of(&a_class.kind, &b_class.kind).then_with(|| Rank::of(&a_class.type_name, &b_class.type_name)),
    }
  }

  fn collate_sequences(&self, a: &[Value], b: &[Value], mode: Mode, depth: usize) -> Result<Rank, CollectionError> {
    if mode == Mode::Equality && a.len() != b.len() {
      return Ok(Rank::of(&a.len(), &b.len()));
    }

    for (a_item, b_item) in a.iter().zip(b.iter()) {
      match self.collate(a_item, b_item, mode, depth + 1)? {
        Rank::Equal => continue,
        decided     => return Ok(decided),
      }
    }

    Ok(Rank::of(&a.len(), &b.len()))
  }

  fn collate_maps(
    &self,
    a    : &[(Value, Value)],
    b    : &[(Value, Value)],
    mode : Mode,
    depth: usize
  ) -> Result<Rank, CollectionError> {
    if mode == Mode::Equality && a.len() != b.len() {
      return Ok(Rank::of(&a.len(), &b.len()));
    }

    let a_entries = self.sorted_entries(a, depth)?;
    let b_entries = self.sorted_entries(b, depth)?;

    for (a_entry, b_entry) in a_entries.iter().zip(b_entries.iter()) {
      match self.collate(&a_entry.0, &b_entry.0, mode, depth + 1)? {
        Rank::Equal => continue,
        decided     => return Ok(decided),
      }
    }
    if a_entries.len() != b_entries.len() {
      return Ok(Rank::of(&a_entries.len(), &b_entries.len()));
    }

    // The key sequences are equal, so the values line up one to one.
    for (a_entry, b_entry) in a_entries.iter().zip(b_entries.iter()) {
      match self.collate(&a_entry.1, &b_entry.1, mode, depth + 1)? {
        Rank::Equal => continue,
        decided     => return Ok(decided),
      }
    }

    Ok(Rank::Equal)
  }

  /// The entries of a map ordered by key, ranked by this collator. Entries with equal keys are ordered by value, so
  /// the result does not depend on the order the entries were stored in.
  fn sorted_entries<'m>(&self, entries: &'m [(Value, Value)], depth: usize) -> Result<Vec<&'m (Value, Value)>, CollectionError> {
    let mut sorted: Vec<&(Value, Value)> = entries.iter().collect();
    try_sort(&mut sorted, |x, y| {
      match self.collate(&x.0, &y.0, Mode::Ordering, depth + 1)? {
        Rank::Equal => self.collate(&x.1, &y.1, Mode::Ordering, depth + 1),
        decided     => Ok(decided),
      }
    })?;
    Ok(sorted)
  }
}

impl View<'_> {
  fn kind(&self) -> Kind {
    match self {
      View::Scalar(value)                 => classify(value).kind,
      View::Array(_) | View::Slice(_)     => Kind::Array,
      View::Map(_)                        => Kind::Map,
      View::Association(..)
      | View::Indirect(_)
      | View::Identical                   => Kind::Composite,
    }
  }
}

#[inline(always)]
fn rank_floats(a: f64, b: f64) -> Rank {
  Rank::of(&TotalF64::from(a), &TotalF64::from(b))
}

fn rank_complex(a: &Complex, b: &Complex) -> Rank {
  if a.re.to_bits() == b.re.to_bits() && a.im.to_bits() == b.im.to_bits() {
    return Rank::Equal;
  }

  rank_floats(a.norm(), b.norm())
      .then_with(|| rank_floats(a.arg(), b.arg()))
      .then_with(|| Rank::of(&a.re.to_bits(), &b.re.to_bits()))
      .then_with(|| Rank::of(&a.im.to_bits(), &b.im.to_bits()))
}
