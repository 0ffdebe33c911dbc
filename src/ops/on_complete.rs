use crate::{observable::Observable, observer::Observer};

#[derive(Clone)]
pub struct OnCompleteOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<S, F, Item, Err> Observable<Item, Err> for OnCompleteOp<S, F>
where
  S: Observable<Item, Err>,
  F: FnOnce(),
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    self.source.actual_subscribe(OnCompleteObserver { observer, func: self.func })
  }
}

pub struct OnCompleteObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for OnCompleteObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnOnce(),
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value) }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(self) {
    (self.func)();
    self.observer.complete();
  }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[reactive_macro::test]
  fn skipped_on_error() {
    let mut completed = false;
    observable::throw::<i32, _>(()).on_complete(|| completed = true).subscribe_err(|_| {}, |_| {});
    assert!(!completed);
  }
}
