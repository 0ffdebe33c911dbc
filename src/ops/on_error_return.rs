use std::{convert::Infallible, marker::PhantomData};

use crate::{observable::Observable, observer::Observer};

/// Substitutes a fallback value for an error: the downstream sees the value
/// produced by `func` followed by completion, and never an error.
pub struct OnErrorReturnOp<S, F, Err> {
  source: S,
  func: F,
  _marker: PhantomData<fn(Err)>,
}

impl<S, F, Err> OnErrorReturnOp<S, F, Err> {
  pub(crate) fn new(source: S, func: F) -> Self {
    OnErrorReturnOp { source, func, _marker: PhantomData }
  }
}

impl<S: Clone, F: Clone, Err> Clone for OnErrorReturnOp<S, F, Err> {
  fn clone(&self) -> Self { OnErrorReturnOp::new(self.source.clone(), self.func.clone()) }
}

impl<S, F, Item, Err> Observable<Item, Infallible> for OnErrorReturnOp<S, F, Err>
where
  S: Observable<Item, Err>,
  F: FnOnce(Err) -> Item,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Infallible>,
  {
    self.source.actual_subscribe(OnErrorReturnObserver { observer, func: self.func })
  }
}

pub struct OnErrorReturnObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for OnErrorReturnObserver<O, F>
where
  O: Observer<Item, Infallible>,
  F: FnOnce(Err) -> Item,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value) }

  fn error(mut self, err: Err) {
    self.observer.next((self.func)(err));
    self.observer.complete();
  }

  #[inline]
  fn complete(self) { self.observer.complete() }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}
