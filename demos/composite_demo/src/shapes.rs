/*!

Two user-defined types that take part in collation. A `Rect` presents itself as the array `[width, height]`; a
`Labeled` value stands in for whatever it labels, so it collates exactly like its pointee.

*/

use collkit::{Composite, Value};

pub struct Rect {
  pub width : u64,
  pub height: u64,
}

impl Composite for Rect {
  fn as_array(&self) -> Option<Vec<Value>> {
    Some(vec![self.width.into(), self.height.into()])
  }

  fn repr(&self) -> String {
    format!("{}x{}", self.width, self.height)
  }
}

pub struct Labeled {
  pub label: &'static str,
  pub value: Value,
}

impl Composite for Labeled {
  /// Compatible with every other type, so a labeled integer sorts among plain integers.
  fn type_name(&self) -> &str {
    "any"
  }

  fn pointee(&self) -> Option<Value> {
    Some(self.value.clone())
  }

  fn repr(&self) -> String {
    format!("{}({})", self.label, self.value)
  }
}
