//! Collect operator implementation
//!
//! Accumulates all emitted items into a collection and emits the collection
//! on completion.

use std::marker::PhantomData;

use crate::{observable::Observable, observer::Observer};

/// Collect operator: accumulates items into a collection.
///
/// # Examples
///
/// ```
/// use reactive_people::prelude::*;
///
/// let mut result = None;
/// observable::from_iter([1, 2, 3]).collect::<Vec<_>>().subscribe(|v| result = Some(v));
/// assert_eq!(result, Some(vec![1, 2, 3]));
/// ```
pub struct CollectOp<S, C, Item> {
  source: S,
  collection: C,
  _p: PhantomData<fn(Item)>,
}

impl<S, C, Item> CollectOp<S, C, Item> {
  pub(crate) fn new(source: S, collection: C) -> Self {
    CollectOp { source, collection, _p: PhantomData }
  }
}

impl<S: Clone, C: Clone, Item> Clone for CollectOp<S, C, Item> {
  fn clone(&self) -> Self { CollectOp::new(self.source.clone(), self.collection.clone()) }
}

impl<S, C, Item, Err> Observable<C, Err> for CollectOp<S, C, Item>
where
  S: Observable<Item, Err>,
  C: Extend<Item>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<C, Err>,
  {
    self.source.actual_subscribe(CollectObserver { observer, collection: self.collection })
  }
}

/// Wraps another observer and accumulates all received values into a
/// collection, emitted when the source completes.
pub struct CollectObserver<O, C> {
  observer: O,
  collection: C,
}

impl<O, C, Item, Err> Observer<Item, Err> for CollectObserver<O, C>
where
  O: Observer<C, Err>,
  C: Extend<Item>,
{
  fn next(&mut self, value: Item) { self.collection.extend(Some(value)); }

  fn error(self, err: Err) { self.observer.error(err); }

  fn complete(mut self) {
    self.observer.next(self.collection);
    self.observer.complete();
  }

  fn is_finished(&self) -> bool { self.observer.is_finished() }
}
