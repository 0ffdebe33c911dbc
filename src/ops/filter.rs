use crate::{observable::Observable, observer::Observer};

/// Emit only those items from an Observable that pass a predicate test
///
/// # Example
///
/// ```
/// use reactive_people::prelude::*;
///
/// let mut coll = vec![];
/// observable::from_iter(0..10).filter(|v| *v % 2 == 0).subscribe(|v| coll.push(v));
///
/// // only even numbers received.
/// assert_eq!(coll, vec![0, 2, 4, 6, 8]);
/// ```
#[derive(Clone)]
pub struct FilterOp<S, F> {
  pub(crate) source: S,
  pub(crate) predicate: F,
}

impl<S, F, Item, Err> Observable<Item, Err> for FilterOp<S, F>
where
  S: Observable<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    self.source.actual_subscribe(FilterObserver { observer, predicate: self.predicate })
  }
}

pub struct FilterObserver<O, F> {
  observer: O,
  predicate: F,
}

impl<Item, Err, O, F> Observer<Item, Err> for FilterObserver<O, F>
where
  O: Observer<Item, Err>,
  F: FnMut(&Item) -> bool,
{
  fn next(&mut self, value: Item) {
    if (self.predicate)(&value) {
      self.observer.next(value)
    }
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
  fn pass_error() {
    let mut err = None;
    observable::throw::<i32, _>("").filter(|_| true).subscribe_err(|_| {}, |e| err = Some(e));
    assert_eq!(err, Some(""));
  }

  #[reactive_macro::test]
  fn nothing_matches() {
    let mut hits = 0;
    let mut completed = false;
    observable::from_iter(0..10)
      .filter(|v| *v > 100)
      .on_complete(|| completed = true)
      .subscribe(|_| hits += 1);

    assert_eq!(hits, 0);
    assert!(completed);
  }

  #[reactive_macro::test]
  fn fork() {
    let obser = observable::from_iter(0..10).filter(|v| v % 2 == 0);
    let evens = obser.clone().collect::<Vec<_>>().block_last();
    let again = obser.collect::<Vec<_>>().block_last();
    assert_eq!(evens, again);
    assert_eq!(evens, Ok(Some(vec![0, 2, 4, 6, 8])));
  }
}
