use crate::{observable::Observable, observer::Observer};

#[derive(Clone)]
pub struct TapOp<S, F> {
  pub(crate) source: S,
  pub(crate) func: F,
}

impl<S, F, Item, Err> Observable<Item, Err> for TapOp<S, F>
where
  S: Observable<Item, Err>,
  F: FnMut(&Item),
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    self.source.actual_subscribe(TapObserver { observer, func: self.func })
  }
}

pub struct TapObserver<O, F> {
  observer: O,
  func: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for TapObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item),
{
  fn next(&mut self, value: Item) {
    (self.func)(&value);
    self.observer.next(value)
  }

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
    let mut v = 0;
    observable::from_iter(100..101).tap(|i| v = *i).subscribe(|v| i += v);
    assert_eq!(i, 100);
    assert_eq!(v, 100);
  }
}
