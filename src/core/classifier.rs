/*!

The type classifier reports what a `Value` is: its intrinsic `Kind` and its canonical `TypeName`.

The canonical type name is what the collator compares first. Two values whose names differ are never equal, and they
rank by the names themselves, so values of unrelated shape are still totally ordered. Names of composite types are
normalized so that incidental detail does not split one type into many:

| raw name                                   | canonical |
|:-------------------------------------------|:----------|
| `collkit::api::list::List<collkit::Value>` | `List`    |
| `&mut demo::Point`                         | `Point`   |
| `dyn core::any::Any`                       | `any`     |

The name `any` is a wildcard: it never causes a type mismatch.

*/

use std::{
  cmp::Ordering,
  fmt::{Display, Formatter}
};

use enumflags2::{bitflags, make_bitflags, BitFlags};
use once_cell::sync::Lazy;

use crate::{
  abstractions::IString,
  core::value::Value
};

/// The intrinsic kinds, in rank order. When the wildcard lets values of different kinds meet, they rank by kind.
#[bitflags]
#[repr(u16)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Kind {
  Nil,
  Bool,
  UInt,
  Int,
  Float,
  Complex,
  /// Strings and characters
  Str,
  Array,
  Map,
  /// References and capability-bearing composites
  Composite,
}

pub type Kinds = BitFlags<Kind, u16>;

impl Kind {
  /// Kinds compared by their native ordering, without recursion.
  pub const SCALARS: Kinds = make_bitflags!(
    Kind::{
      Bool | UInt | Int | Float | Complex | Str
    }
  );

  #[inline(always)]
  pub fn is_scalar(self) -> bool {
    Kind::SCALARS.contains(self)
  }
}

/// A canonical type name. Interned, so equality is a pointer comparison; ordering is lexicographic.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TypeName(IString);

macro_rules! intrinsic_type_names {
  ($($name:ident => $text:literal),+ $(,)?) => {
    $(
      pub static $name: Lazy<TypeName> = Lazy::new(|| TypeName(IString::from($text)));
    )+
  };
}

intrinsic_type_names!(
  ANY     => "any",
  NIL     => "nil",
  BOOL    => "bool",
  UINT    => "uint",
  INT     => "int",
  FLOAT   => "float",
  COMPLEX => "complex",
  CHAR    => "char",
  STRING  => "string",
  ARRAY   => "array",
  MAP     => "map",
  REF     => "ref",
);

impl TypeName {
  /// Normalizes a raw type name: strips reference and `dyn` prefixes, generic parameters, and module paths, and
  /// collapses every spelling of the universal type to `any`.
  pub fn canonical(raw: &str) -> TypeName {
    let mut name = raw.trim();
    loop {
      let stripped = name
          .trim_start_matches('&')
          .trim_start_matches("mut ")
          .trim_start_matches("dyn ")
          .trim_start();
      if stripped.len() == name.len() {
        break;
      }
      name = stripped;
    }

    if let Some(open) = name.find('<') {
      name = &name[..open];
    }
    if let Some(separator) = name.rfind("::") {
      name = &name[separator + 2..];
    }

    if name.is_empty() || name.eq_ignore_ascii_case("any") {
      ANY.clone()
    } else {
      TypeName(IString::from(name))
    }
  }

  #[inline(always)]
  pub fn is_any(&self) -> bool {
    self.0 == ANY.0
  }

  #[inline(always)]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Whether values with these two names may be compared structurally.
  #[inline(always)]
  pub fn compatible(&self, other: &TypeName) -> bool {
    self == other || self.is_any() || other.is_any()
  }

  pub fn into_istring(self) -> IString {
    self.0
  }
}

impl Ord for TypeName {
  fn cmp(&self, other: &Self) -> Ordering {
    if self.0 == other.0 {
      Ordering::Equal
    } else {
      self.as_str().cmp(other.as_str())
    }
  }
}

impl PartialOrd for TypeName {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Display for TypeName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::fmt::Debug for TypeName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "TypeName({})", self.as_str())
  }
}

/// The result of classifying a value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification {
  pub kind     : Kind,
  pub type_name: TypeName,
}

/// Classifies a value. Classification never looks through references or composites, so it is cheap and cannot
/// recurse.
pub fn classify(value: &Value) -> Classification {
  let (kind, type_name): (Kind, &Lazy<TypeName>) = match value {
    Value::Nil        => (Kind::Nil, &NIL),
    Value::Bool(_)    => (Kind::Bool, &BOOL),
    Value::UInt(_)    => (Kind::UInt, &UINT),
    Value::Int(_)     => (Kind::Int, &INT),
    Value::Float(_)   => (Kind::Float, &FLOAT),
    Value::Complex(_) => (Kind::Complex, &COMPLEX),
    Value::Char(_)    => (Kind::Str, &CHAR),
    Value::Str(_)     => (Kind::Str, &STRING),
    Value::Array(_)   => (Kind::Array, &ARRAY),
    Value::Map(_)     => (Kind::Map, &MAP),
    Value::Ref(_)     => (Kind::Composite, &REF),

    Value::Object(composite) => {
      return Classification {
        kind     : Kind::Composite,
        type_name: TypeName::canonical(composite.type_name()),
      };
    }
  };

  Classification {
    kind,
    type_name: TypeName::clone(type_name),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::value::Composite;

  struct Wrapper<T>(T);
  impl<T> Composite for Wrapper<T> {}

  struct Wildcard;
  impl Composite for Wildcard {
    fn type_name(&self) -> &str {
      "dyn core::any::Any"
    }
  }

  #[test]
  fn canonical_names_drop_paths_and_parameters() {
    assert_eq!(TypeName::canonical("collkit::api::list::List<collkit::Value>").as_str(), "List");
    assert_eq!(TypeName::canonical("&mut demo::Point").as_str(), "Point");
    assert_eq!(TypeName::canonical("&&str").as_str(), "str");
    assert_eq!(TypeName::canonical("[i32; 3]").as_str(), "[i32; 3]");
    assert!(TypeName::canonical("dyn core::any::Any").is_any());
    assert!(TypeName::canonical("ANY").is_any());
  }

  #[test]
  fn generic_instances_share_a_name() {
    let a = classify(&Value::object(Wrapper(1u8)));
    let b = classify(&Value::object(Wrapper("text")));
    assert_eq!(a.type_name, b.type_name);
    assert_eq!(a.type_name.as_str(), "Wrapper");
    assert_eq!(a.kind, Kind::Composite);
  }

  #[test]
  fn intrinsic_kinds() {
    assert_eq!(classify(&Value::Nil).kind, Kind::Nil);
    assert_eq!(classify(&Value::from(1u32)).type_name, *UINT);
    assert_eq!(classify(&Value::from('c')).kind, Kind::Str);
    assert_ne!(classify(&Value::from('c')).type_name, classify(&Value::from("c")).type_name);
    assert_eq!(classify(&Value::reference(Value::Nil)).type_name, *REF);
  }

  #[test]
  fn wildcard_is_compatible_with_everything() {
    let wildcard = classify(&Value::object(Wildcard)).type_name;
    assert!(wildcard.compatible(&INT));
    assert!(INT.compatible(&wildcard));
    assert!(!INT.compatible(&UINT));
  }

  #[test]
  fn kind_groups() {
    assert!(Kind::Float.is_scalar());
    assert!(!Kind::Nil.is_scalar());
    assert!(!Kind::Map.is_scalar() && !Kind::Composite.is_scalar());
    assert!(Kind::Nil < Kind::Bool && Kind::Map < Kind::Composite);
    assert!(TypeName::canonical("bool") < TypeName::canonical("int"));
  }
}
