//! Single operator: require exactly one value.
//!
//! - **Exactly one value**: emitted once the source completes.
//! - **Empty source**: fails with [`SingleError::Empty`].
//! - **Second value**: fails with [`SingleError::MultipleValues`] right away;
//!   the source is told to stop.
//! - **Source error**: forwarded as [`SingleError::Source`].

use thiserror::Error;

use crate::{observable::Observable, observer::Observer};

/// Why a publisher did not produce exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SingleError<E> {
  #[error("the observable has no values")]
  Empty,

  #[error("the observable emitted more than one value")]
  MultipleValues,

  #[error("the observable failed: {0}")]
  Source(E),
}

#[derive(Clone)]
pub struct SingleOp<S> {
  pub(crate) source: S,
}

impl<S, Item, Err> Observable<Item, SingleError<Err>> for SingleOp<S>
where
  S: Observable<Item, Err>,
{
  type Unsub = S::Unsub;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, SingleError<Err>>,
  {
    self.source.actual_subscribe(SingleObserver { observer: Some(observer), value: None })
  }
}

pub struct SingleObserver<O, Item> {
  observer: Option<O>,
  value: Option<Item>,
}

impl<O, Item, Err> Observer<Item, Err> for SingleObserver<O, Item>
where
  O: Observer<Item, SingleError<Err>>,
{
  fn next(&mut self, value: Item) {
    if self.observer.is_none() {
      return;
    }
    if self.value.is_some() {
      self.value = None;
      if let Some(observer) = self.observer.take() {
        observer.error(SingleError::MultipleValues);
      }
    } else {
      self.value = Some(value);
    }
  }

  fn error(self, err: Err) {
    if let Some(observer) = self.observer {
      observer.error(SingleError::Source(err));
    }
  }

  fn complete(self) {
    let Some(mut observer) = self.observer else { return };
    match self.value {
      Some(v) => {
        observer.next(v);
        observer.complete();
      }
      None => observer.error(SingleError::Empty),
    }
  }

  fn is_finished(&self) -> bool { self.observer.as_ref().is_none_or(Observer::is_finished) }
}

#[cfg(test)]
mod tests {
  use std::convert::Infallible;

  use super::SingleError;
  use crate::prelude::*;

  #[reactive_macro::test]
  fn exactly_one_value() {
    let mut value = None;
    let mut completed = false;
    observable::of(42).single().subscribe_all(
      |v| value = Some(v),
      |_| panic!("no error expected"),
      || completed = true,
    );

    assert_eq!(value, Some(42));
    assert!(completed);
  }

  #[reactive_macro::test]
  fn empty_source_fails() {
    let mut err = None;
    observable::empty::<i32>().single().subscribe_err(|_| {}, |e| err = Some(e));
    assert_eq!(err, Some(SingleError::<Infallible>::Empty));
  }

  #[reactive_macro::test]
  fn second_value_fails_and_stops_source() {
    let mut values = vec![];
    let mut err = None;
    let mut pulled = 0;
    observable::from_iter(0..100)
      .tap(|_| pulled += 1)
      .single()
      .subscribe_err(|v| values.push(v), |e| err = Some(e));

    assert!(values.is_empty());
    assert_eq!(err, Some(SingleError::MultipleValues));
    assert_eq!(pulled, 2);
  }

  #[reactive_macro::test]
  fn source_error_is_wrapped() {
    let err = observable::throw::<i32, _>("io").single().block_last();
    assert_eq!(err, Err(SingleError::Source("io")));
  }

  #[reactive_macro::test]
  fn error_messages() {
    assert_eq!(SingleError::<&str>::Empty.to_string(), "the observable has no values");
    assert_eq!(SingleError::Source("io").to_string(), "the observable failed: io");
  }
}
