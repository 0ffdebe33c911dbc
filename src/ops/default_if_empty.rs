use crate::{observable::Observable, observer::Observer};

/// Emits `default` if the source completes without emitting anything.
#[derive(Clone)]
pub struct DefaultIfEmptyOp<S, Item> {
  pub(crate) source: S,
  pub(crate) default: Item,
}

impl<S, Item, Err> Observable<Item, Err> for DefaultIfEmptyOp<S, Item>
where
  S: Observable<Item, Err>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    self
      .source
      .actual_subscribe(DefaultIfEmptyObserver { observer, default: Some(self.default) })
  }
}

pub struct DefaultIfEmptyObserver<O, Item> {
  observer: O,
  default: Option<Item>,
}

impl<Item, Err, O> Observer<Item, Err> for DefaultIfEmptyObserver<O, Item>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    self.default = None;
    self.observer.next(value);
  }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(mut self) {
    if let Some(default) = self.default.take() {
      self.observer.next(default);
    }
    self.observer.complete()
  }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}
