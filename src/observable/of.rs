use std::marker::PhantomData;

use crate::{
  observable::{from_iter, FromIter, Observable},
  observer::Observer,
  subscription::FinishedSubscription,
};

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an error.
///
/// # Examples
///
/// ```
/// use reactive_people::prelude::*;
///
/// let mut value = 0;
/// observable::of(123).subscribe(|v| value = v);
/// assert_eq!(value, 123);
/// ```
pub fn of<Item>(v: Item) -> FromIter<std::iter::Once<Item>> { from_iter(std::iter::once(v)) }

/// Creates an observable that potentially emits a single value from [`Option`].
///
/// Emits the value if there is one, then completes. Never emits an error.
pub fn of_option<Item>(o: Option<Item>) -> FromIter<std::option::IntoIter<Item>> {
  from_iter(o.into_iter())
}

/// Creates an observable that produces no values.
///
/// Completes immediately. Never emits an error.
pub fn empty<Item>() -> FromIter<std::iter::Empty<Item>> { from_iter(std::iter::empty()) }

/// Creates an observable that emits no items, just terminates with an error.
pub fn throw<Item, Err>(e: Err) -> ThrowObservable<Item, Err> { ThrowObservable(e, PhantomData) }

#[derive(Clone, Debug)]
pub struct ThrowObservable<Item, Err>(Err, PhantomData<fn() -> Item>);

impl<Item, Err> Observable<Item, Err> for ThrowObservable<Item, Err> {
  type Unsub = FinishedSubscription;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    observer.error(self.0);
    FinishedSubscription
  }
}

/// Emits the value or the error held by a [`Result`], then terminates.
pub fn of_result<Item, Err>(r: Result<Item, Err>) -> ResultObservable<Item, Err> {
  ResultObservable(r)
}

#[derive(Clone, Debug)]
pub struct ResultObservable<Item, Err>(Result<Item, Err>);

impl<Item, Err> Observable<Item, Err> for ResultObservable<Item, Err> {
  type Unsub = FinishedSubscription;

  fn actual_subscribe<O>(self, mut observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>,
  {
    match self.0 {
      Ok(v) => {
        observer.next(v);
        observer.complete();
      }
      Err(e) => observer.error(e),
    }
    FinishedSubscription
  }
}
