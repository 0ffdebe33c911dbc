use std::convert::Infallible;

use crate::{
  observable::Observable, observer::Observer, subscription::FinishedSubscription,
};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error.
/// The returned observable is `Clone` whenever `iter` is, and every clone
/// walks its own copy of the iterator, which makes it restartable.
///
/// # Examples
///
/// ```
/// use reactive_people::prelude::*;
///
/// let mut sum = 0;
/// observable::from_iter(0..10).subscribe(|v| sum += v);
/// assert_eq!(sum, 45);
/// ```
pub fn from_iter<Iter>(iter: Iter) -> FromIter<Iter>
where
  Iter: IntoIterator,
{
  FromIter(iter)
}

#[derive(Clone, Debug)]
pub struct FromIter<Iter>(Iter);

impl<Iter> Observable<Iter::Item, Infallible> for FromIter<Iter>
where
  Iter: IntoIterator,
{
  type Unsub = FinishedSubscription;

  fn actual_subscribe<O>(self, mut observer: O) -> Self::Unsub
  where
    O: Observer<Iter::Item, Infallible>,
  {
    let mut iter = self.0.into_iter();
    while !observer.is_finished() {
      match iter.next() {
        Some(v) => observer.next(v),
        None => break,
      }
    }
    observer.complete();
    FinishedSubscription
  }
}
