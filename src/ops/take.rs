use crate::{observable::Observable, observer::Observer};

/// Emits only the first `count` values emitted by the source Observable.
///
/// If the source emits fewer than `count` values then all of its values are
/// emitted. After the `count`-th value the downstream completes straight
/// away and the source is told to stop through
/// [`Observer::is_finished`].
///
/// # Example
///
/// ```
/// use reactive_people::prelude::*;
///
/// let mut taken = vec![];
/// observable::from_iter(0..10).take(5).subscribe(|v| taken.push(v));
/// assert_eq!(taken, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Clone)]
pub struct TakeOp<S> {
  pub(crate) source: S,
  pub(crate) count: usize,
}

impl<S, Item, Err> Observable<Item, Err> for TakeOp<S>
where
  S: Observable<Item, Err>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    let observer = if self.count == 0 {
      observer.complete();
      None
    } else {
      Some(observer)
    };
    self.source.actual_subscribe(TakeObserver { observer, remaining: self.count })
  }
}

pub struct TakeObserver<O> {
  observer: Option<O>,
  remaining: usize,
}

impl<Item, Err, O> Observer<Item, Err> for TakeObserver<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.observer.as_mut() {
      observer.next(value);
      self.remaining -= 1;
      if self.remaining == 0 {
        if let Some(observer) = self.observer.take() {
          observer.complete();
        }
      }
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(err)
    }
  }

  fn complete(self) {
    if let Some(observer) = self.observer {
      observer.complete()
    }
  }

  fn is_finished(&self) -> bool { self.observer.as_ref().is_none_or(Observer::is_finished) }
}

#[cfg(test)]
mod test {
  use crate::prelude::*;

  #[reactive_macro::test]
  fn base_function() {
    let mut completed = 0;
    let mut next_count = 0;

    observable::from_iter(0..100)
      .take(5)
      .on_complete(|| completed += 1)
      .subscribe(|_| next_count += 1);

    assert_eq!(next_count, 5);
    assert_eq!(completed, 1);
  }

  #[reactive_macro::test]
  fn take_zero_completes_without_values() {
    let mut next_count = 0;
    let mut completed = 0;

    observable::from_iter(0..100)
      .take(0)
      .on_complete(|| completed += 1)
      .subscribe(|_| next_count += 1);

    assert_eq!(next_count, 0);
    assert_eq!(completed, 1);
  }

  #[reactive_macro::test]
  fn shorter_source_completes_once() {
    let mut values = vec![];
    let mut completed = 0;

    observable::from_iter(0..2)
      .take(5)
      .on_complete(|| completed += 1)
      .subscribe(|v| values.push(v));

    assert_eq!(values, vec![0, 1]);
    assert_eq!(completed, 1);
  }

  #[reactive_macro::test]
  fn first_is_take_one() {
    assert_eq!(observable::from_iter(7..100).first().block_last(), Ok(Some(7)));
    assert_eq!(observable::empty::<i32>().first().block_last(), Ok(None));
  }

  #[reactive_macro::test]
  fn first_or_default() {
    assert_eq!(observable::from_iter(7..100).first_or(0).block_last(), Ok(Some(7)));
    assert_eq!(observable::empty().first_or(42).block_last(), Ok(Some(42)));
  }
}
