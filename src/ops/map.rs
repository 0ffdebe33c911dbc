use std::marker::PhantomData;

use crate::{observable::Observable, observer::Observer};

/// Calls a closure on each value and emits its return instead.
pub struct MapOp<S, F, Item> {
  source: S,
  func: F,
  _p: PhantomData<fn(Item)>,
}

impl<S, F, Item> MapOp<S, F, Item> {
  pub(crate) fn new(source: S, func: F) -> Self { MapOp { source, func, _p: PhantomData } }
}

impl<S: Clone, F: Clone, Item> Clone for MapOp<S, F, Item> {
  fn clone(&self) -> Self { MapOp::new(self.source.clone(), self.func.clone()) }
}

impl<S, F, Item, B, Err> Observable<B, Err> for MapOp<S, F, Item>
where
  S: Observable<Item, Err>,
  F: FnMut(Item) -> B,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<B, Err>,
  {
    self.source.actual_subscribe(MapObserver { observer, map: self.func })
  }
}

pub struct MapObserver<O, F> {
  observer: O,
  map: F,
}

impl<Item, Err, B, O, F> Observer<Item, Err> for MapObserver<O, F>
where
  O: Observer<B, Err>,
  F: FnMut(Item) -> B,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next((self.map)(value)) }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[reactive_macro::test]
  fn primitive_type() {
    let mut i = 0;
    observable::from_iter(100..101).map(|v| v * 2).subscribe(|v| i += v);
    assert_eq!(i, 200);
  }

  #[reactive_macro::test]
  fn map_types_mixed() {
    let mut i = 0;
    observable::from_iter(vec!['a', 'b', 'c']).map(|_v| 1).subscribe(|v| i += v);
    assert_eq!(i, 3);
  }

  #[reactive_macro::test]
  fn error_passes_through() {
    let mut err = None;
    observable::throw::<i32, _>("boom").map(|v| v + 1).subscribe_err(|_| {}, |e| err = Some(e));
    assert_eq!(err, Some("boom"));
  }
}
