/*!

Types/type aliases that abstract over the implementing backing type, and small helpers with no better home.

The interned string type is the motivating example: several external crates provide interning, and the rest of the
crate only names `IString`.

*/

mod string_join;

// Logging
pub mod log;

// Interned string.
pub use string_cache::DefaultAtom as IString;

// Join sequences with a separator
pub use string_join::{join_iter, join_string};
