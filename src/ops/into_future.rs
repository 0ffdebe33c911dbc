//! IntoFuture operator implementation
//!
//! Converts an Observable into a Future resolving with its first value.
//!
//! ## Behavior
//!
//! - **First value**: the future resolves with `Ok(Some(value))` and the
//!   source is told to stop.
//! - **Error from observable**: resolves with `Err(error)`.
//! - **Empty observable**: resolves with `Ok(None)`.
//! - **Source dropped the observer without a terminal event**: resolves with
//!   `Ok(None)`.
//!
//! ## Examples
//!
//! ```rust
//! use reactive_people::prelude::*;
//!
//! let first = futures::executor::block_on(observable::from_iter([4, 5]).into_future());
//! assert_eq!(first, Ok(Some(4)));
//! ```

use std::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use futures::channel::oneshot;
use pin_project_lite::pin_project;

use crate::{observable::Observable, observer::Observer};

pin_project! {
  /// A future that resolves with the first value emitted by an observable.
  #[must_use = "futures do nothing unless polled"]
  pub struct ObservableFuture<Item, Err> {
    #[pin]
    receiver: oneshot::Receiver<Result<Option<Item>, Err>>,
  }
}

impl<Item, Err> ObservableFuture<Item, Err> {
  pub(crate) fn subscribe<S>(source: S) -> Self
  where
    S: Observable<Item, Err>,
  {
    let (sender, receiver) = oneshot::channel();
    source.actual_subscribe(FutureObserver { sender: Some(sender) });
    ObservableFuture { receiver }
  }
}

impl<Item, Err> Future for ObservableFuture<Item, Err> {
  type Output = Result<Option<Item>, Err>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    match self.project().receiver.poll(cx) {
      Poll::Ready(Ok(result)) => Poll::Ready(result),
      Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Ok(None)),
      Poll::Pending => Poll::Pending,
    }
  }
}

/// Sends the first event that settles the future, then reports itself
/// finished.
pub struct FutureObserver<Item, Err> {
  sender: Option<oneshot::Sender<Result<Option<Item>, Err>>>,
}

impl<Item, Err> FutureObserver<Item, Err> {
  fn settle(&mut self, result: Result<Option<Item>, Err>) {
    if let Some(sender) = self.sender.take() {
      // The receiver only goes away when the future was dropped, in which
      // case nobody is interested in the outcome.
      let _ = sender.send(result);
    }
  }
}

impl<Item, Err> Observer<Item, Err> for FutureObserver<Item, Err> {
  fn next(&mut self, value: Item) { self.settle(Ok(Some(value))) }

  fn error(mut self, err: Err) { self.settle(Err(err)) }

  fn complete(mut self) { self.settle(Ok(None)) }

  fn is_finished(&self) -> bool { self.sender.is_none() }
}
