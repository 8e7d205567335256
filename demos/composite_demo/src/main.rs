mod shapes;

use collkit::{
  log::set_global_logging_threshold,
  Collator,
  List,
  SortedMap,
  SortedSet,
  Value
};
use crate::shapes::{Labeled, Rect};

fn main() {
  // Show the kernel's own bookkeeping.
  set_global_logging_threshold(5);

  let mut rects = List::from(vec![
    Value::object(Rect { width: 3, height: 1 }),
    Value::object(Rect { width: 1, height: 9 }),
    Value::object(Rect { width: 3, height: 0 }),
  ]);
  rects.sort();
  println!("Rectangles by width, then height: {}", rects);

  let mut numbers = List::from(vec![
    Value::from(7),
    Value::object(Labeled { label: "answer", value: Value::from(42) }),
    Value::from(-1),
  ]);
  numbers.sort_by(|a, b| Collator::default().rank(a, b));
  println!("Labeled values sort with their pointees: {}", numbers);

  let set: SortedSet<Value> = numbers.iter().cloned().chain([Value::from(7)]).collect();
  println!("The set {} has {} members; 42 is member {}.", set, set.len(), set.index_of(&Value::from(42)));

  let mut inventory = SortedMap::new();
  inventory.insert(Value::from("pears"), Value::from(3));
  inventory.insert(Value::from("apples"), Value::from(5));
  println!("Inventory in key order: {}", inventory);

  let mut shuffled = List::from((1..=10).map(Value::from).collect::<Vec<_>>());
  shuffled.shuffle();
  println!("Shuffled: {}", shuffled);
}
