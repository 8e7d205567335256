/*!

Generic collections unified by ordinal indexing and a single ordering kernel.

The kernel (`core`) decides structural equality and a total order over dynamically typed `Value`s, including nested
containers, key/value pairs, shared references, and opaque composites, with a bounded recursion depth. The sorter, the
sorted set, and every container in `api` rank through it.

```
use collkit::{Collator, List, Rank, SortedSet, Value};

let mut set: SortedSet<Value> = SortedSet::new();
set.add(Value::from(3));
set.add(Value::from(1));
assert_eq!(set.index_of(&Value::from(3)), 2);

let list = List::from(vec![Value::from("b"), Value::from("a")]);
assert_eq!(Collator::default().rank(list.get(1), list.get(-1)), Rank::Greater);
```

*/

pub mod abstractions;
pub mod api;
pub mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};

pub use api::{
  Association,
  List,
  Queue,
  SortedMap,
  Stack
};

pub use crate::core::{
  classifier::{classify, Kind, TypeName},
  collator::{Collator, DEFAULT_MAX_DEPTH},
  error::CollectionError,
  ordinal::Ordinal,
  rank::{Rank, RankingFunction},
  sorted_set::SortedSet,
  value::{Complex, Composite, Value},
  Keyed,
  Sequence
};
