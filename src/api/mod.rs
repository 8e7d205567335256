/*!

The containers built on the ordering kernel. Each is generic over its element type, addresses its elements by ordinal,
and implements `Sequence`. Instantiated with `Value`, each is also a `Composite`, so containers nest inside values and
collate like any other value: sequences as arrays, the sorted map as an array of associations.

*/

pub mod association;
pub mod list;
pub mod queue;
pub mod sorted_map;
pub mod stack;

pub use association::Association;
pub use list::List;
pub use queue::Queue;
pub use sorted_map::SortedMap;
pub use stack::Stack;
