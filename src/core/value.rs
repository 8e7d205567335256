/*!

A `Value` is any datum the kernel can be asked to compare, rank, or store. The intrinsic kinds form a closed enum;
everything else enters through the `Composite` capability trait, which lets any type take part in collation by exposing
an array snapshot, a key/value association, or a referenced value.

Equality and ordering on `Value` are those of the default [`Collator`](crate::core::collator::Collator), so generic
containers of `Value`s rank them naturally. Because that collator has a recursion bound, comparing a cyclic or
pathologically deep value through `==` or `cmp` is fatal. Use `Collator::try_rank` to observe the failure instead.

*/

use std::{
  cell::RefCell,
  cmp::Ordering,
  fmt::{Debug, Display, Formatter},
  rc::Rc
};

use crate::{
  abstractions::{join_string, IString},
  core::collator::Collator
};

#[derive(Clone, Default)]
pub enum Value {
  #[default]
  Nil,
  Bool(bool),
  UInt(u64),
  Int(i64),
  Float(f64),
  Complex(Complex),
  Char(char),
  Str(IString),
  Array(Vec<Value>),
  /// Unordered entries. Keys are expected to be unique; the collator does not rely on it.
  Map(Vec<(Value, Value)>),
  /// A shared, mutable reference. References can form cycles.
  Ref(Rc<RefCell<Value>>),
  Object(Rc<dyn Composite>),
}

/// The capabilities through which a composite type takes part in collation. A type implements whichever of the
/// conversions describe it; the collator consults them in the order `as_array`, `as_association`, `pointee`.
pub trait Composite {
  /// The type's name. Module paths and generic parameters are stripped before use, so the default is fine for most
  /// types. Returning `"any"` makes the type compatible with every other type.
  fn type_name(&self) -> &str {
    std::any::type_name::<Self>()
  }

  /// A snapshot of the contents as an array. Mutating the snapshot must not affect `self`.
  fn as_array(&self) -> Option<Vec<Value>> {
    None
  }

  /// The (key, value) pair this composite represents.
  fn as_association(&self) -> Option<(Value, Value)> {
    None
  }

  /// The value this composite stands in for.
  fn pointee(&self) -> Option<Value> {
    None
  }

  /// The text used by `Value`'s `Display` impl.
  fn repr(&self) -> String {
    match (self.as_array(), self.as_association()) {
      (Some(items), _)            => format!("[{}]", join_string(items.iter(), ", ")),
      (None, Some((key, value)))  => format!("{} => {}", key, value),
      (None, None)                => format!("<{}>", self.type_name()),
    }
  }
}

/// A complex number with `f64` components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
  pub re: f64,
  pub im: f64,
}

impl Complex {
  pub const fn new(re: f64, im: f64) -> Self {
    Complex { re, im }
  }

  /// The magnitude (absolute value).
  pub fn norm(&self) -> f64 {
    self.re.hypot(self.im)
  }

  /// The phase angle in `(-π, π]`.
  pub fn arg(&self) -> f64 {
    self.im.atan2(self.re)
  }
}

impl Display for Complex {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.im.is_sign_negative() {
      write!(f, "{}-{}i", self.re, -self.im)
    } else {
      write!(f, "{}+{}i", self.re, self.im)
    }
  }
}

impl Value {
  /// Wraps a composite.
  pub fn object<C: Composite + 'static>(composite: C) -> Value {
    Value::Object(Rc::new(composite))
  }

  /// Wraps `value` in a fresh shared reference.
  pub fn reference(value: Value) -> Value {
    Value::Ref(Rc::new(RefCell::new(value)))
  }

  pub fn string(s: &str) -> Value {
    Value::Str(IString::from(s))
  }

  pub fn is_nil(&self) -> bool {
    matches!(self, Value::Nil)
  }
}

macro_rules! impl_from_for_value {
  ($variant:ident, $target:ty; $($source:ty),+) => {
    $(
      impl From<$source> for Value {
        fn from(value: $source) -> Self {
          Value::$variant(value as $target)
        }
      }
    )+
  };
}

impl_from_for_value!(Int, i64; i8, i16, i32, i64, isize);
impl_from_for_value!(UInt, u64; u8, u16, u32, u64, usize);
impl_from_for_value!(Float, f64; f32, f64);

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Value::Bool(value)
  }
}

impl From<char> for Value {
  fn from(value: char) -> Self {
    Value::Char(value)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::string(value)
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::Str(IString::from(value))
  }
}

impl From<Complex> for Value {
  fn from(value: Complex) -> Self {
    Value::Complex(value)
  }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
  fn from(items: Vec<T>) -> Self {
    Value::Array(items.into_iter().map(Into::into).collect())
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Self {
    value.map_or(Value::Nil, Into::into)
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Value::Nil           => write!(f, "nil"),
      Value::Bool(b)       => write!(f, "{}", b),
      Value::UInt(n)       => write!(f, "{}", n),
      Value::Int(n)        => write!(f, "{}", n),
      Value::Float(x)      => write!(f, "{:?}", x),
      Value::Complex(z)    => write!(f, "{}", z),
      Value::Char(c)       => write!(f, "{:?}", c),
      Value::Str(s)        => write!(f, "{:?}", &**s),
      Value::Array(items)  => write!(f, "[{}]", join_string(items.iter(), ", ")),
      Value::Map(entries)  => {
        let entries = entries.iter().map(|(key, value)| format!("{}: {}", key, value));
        write!(f, "{{{}}}", join_string(entries, ", "))
      }
      Value::Ref(cell) => {
        // A cycle would recurse forever, so a reference that is already being displayed prints as `&…`.
        match cell.try_borrow_mut() {
          Ok(guard) => write!(f, "&{}", &*guard),
          Err(_)    => write!(f, "&…"),
        }
      }
      Value::Object(composite) => write!(f, "{}", composite.repr()),
    }
  }
}

impl Debug for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    Collator::default().equal(self, other)
  }
}

impl Eq for Value {}

impl PartialOrd for Value {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Value {
  fn cmp(&self, other: &Self) -> Ordering {
    Ordering::from(Collator::default().rank(self, other))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Opaque;
  impl Composite for Opaque {}

  #[test]
  fn conversions_pick_the_intrinsic_kind() {
    assert!(matches!(Value::from(3i32), Value::Int(3)));
    assert!(matches!(Value::from(3usize), Value::UInt(3)));
    assert!(matches!(Value::from(1.5f32), Value::Float(x) if x == 1.5));
    assert!(matches!(Value::from('x'), Value::Char('x')));
    assert!(matches!(Value::from(None::<i32>), Value::Nil));
    assert!(matches!(Value::from(vec![1, 2]), Value::Array(ref items) if items.len() == 2));
  }

  #[test]
  fn display_renders_nested_values() {
    let value = Value::Array(vec![
      Value::Nil,
      Value::from("a"),
      Value::from(-2),
      Value::Map(vec![(Value::from('k'), Value::from(1.0))]),
      Value::from(Complex::new(1.0, -2.0)),
    ]);
    assert_eq!(value.to_string(), r#"[nil, "a", -2, {'k': 1.0}, 1-2i]"#);
  }

  #[test]
  fn display_survives_cycles() {
    let cell = Rc::new(RefCell::new(Value::Nil));
    *cell.borrow_mut() = Value::Array(vec![Value::Ref(cell.clone())]);
    let value = Value::Ref(cell.clone());
    assert_eq!(value.to_string(), "&[&…]");
    // Break the cycle so the test does not leak.
    *cell.borrow_mut() = Value::Nil;
  }

  #[test]
  fn composite_defaults() {
    let opaque = Opaque;
    assert!(opaque.type_name().ends_with("Opaque"));
    assert!(opaque.as_array().is_none());
    assert!(opaque.repr().ends_with("Opaque>"));
  }

  #[test]
  fn complex_polar_parts() {
    let z = Complex::new(3.0, 4.0);
    assert_eq!(z.norm(), 5.0);
    assert_eq!(Complex::new(0.0, 1.0).arg(), std::f64::consts::FRAC_PI_2);
  }
}
