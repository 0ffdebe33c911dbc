use crate::{observable::Observable, observer::Observer};

/// Emits only the last value, when the source completes.
#[derive(Clone)]
pub struct LastOp<S> {
  pub(crate) source: S,
}

impl<S, Item, Err> Observable<Item, Err> for LastOp<S>
where
  S: Observable<Item, Err>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    self.source.actual_subscribe(LastObserver { observer, last: None })
  }
}

pub struct LastObserver<O, Item> {
  observer: O,
  last: Option<Item>,
}

impl<O, Item, Err> Observer<Item, Err> for LastObserver<O, Item>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.last = Some(value); }

  #[inline]
  fn error(self, err: Err) { self.observer.error(err) }

  fn complete(mut self) {
    if let Some(v) = self.last.take() {
      self.observer.next(v)
    }
    self.observer.complete();
  }

  #[inline]
  fn is_finished(&self) -> bool { self.observer.is_finished() }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[reactive_macro::test]
  fn last_one_item() {
    let mut completed = 0;
    let mut last_item = None;

    observable::from_iter(0..2)
      .last()
      .on_complete(|| completed += 1)
      .subscribe(|v| last_item = Some(v));

    assert_eq!(completed, 1);
    assert_eq!(Some(1), last_item);
  }

  #[reactive_macro::test]
  fn last_no_items() {
    let mut completed = 0;
    let mut last_item = None;

    observable::empty()
      .last()
      .on_complete(|| completed += 1)
      .subscribe(|v: i32| last_item = Some(v));

    assert_eq!(completed, 1);
    assert_eq!(None, last_item);
  }

  #[reactive_macro::test]
  fn error_drops_pending_value() {
    let mut last_item = None;
    let mut err = None;

    observable::of_result::<i32, _>(Err("bad"))
      .last()
      .subscribe_err(|v| last_item = Some(v), |e| err = Some(e));

    assert_eq!(last_item, None);
    assert_eq!(err, Some("bad"));
  }
}
