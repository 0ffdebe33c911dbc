//! Bridges an Observable into a [`futures::Stream`].
//!
//! Values arrive as `Ok(item)`, an error as one final `Err(err)`. The stream
//! ends after completion or after the error.

use std::{
  pin::Pin,
  task::{Context, Poll},
};

use futures::{channel::mpsc, Stream};
use pin_project_lite::pin_project;

use crate::{observable::Observable, observer::Observer};

pin_project! {
  #[must_use = "streams do nothing unless polled"]
  pub struct ObservableStream<Item, Err> {
    #[pin]
    receiver: mpsc::UnboundedReceiver<Result<Item, Err>>,
  }
}

impl<Item, Err> ObservableStream<Item, Err> {
  pub(crate) fn subscribe<S>(source: S) -> Self
  where
    S: Observable<Item, Err>,
  {
    let (sender, receiver) = mpsc::unbounded();
    source.actual_subscribe(StreamObserver { sender });
    ObservableStream { receiver }
  }
}

impl<Item, Err> Stream for ObservableStream<Item, Err> {
  type Item = Result<Item, Err>;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
    self.project().receiver.poll_next(cx)
  }

  fn size_hint(&self) -> (usize, Option<usize>) { self.receiver.size_hint() }
}

pub struct StreamObserver<Item, Err> {
  sender: mpsc::UnboundedSender<Result<Item, Err>>,
}

impl<Item, Err> Observer<Item, Err> for StreamObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    // A closed channel means the stream was dropped; the value has no reader.
    let _ = self.sender.unbounded_send(Ok(value));
  }

  fn error(self, err: Err) {
    // Same as `next`: nobody is left to see the error.
    let _ = self.sender.unbounded_send(Err(err));
  }

  fn complete(self) {}

  fn is_finished(&self) -> bool { self.sender.is_closed() }
}

#[cfg(test)]
mod tests {
  use futures::{channel::mpsc, StreamExt};

  use super::StreamObserver;
  use crate::prelude::*;

  #[reactive_macro::test(local)]
  async fn yields_every_value_then_ends() {
    let values: Vec<_> = observable::from_iter(1..=4).into_stream().collect().await;
    assert_eq!(values, vec![Ok(1), Ok(2), Ok(3), Ok(4)]);
  }

  #[reactive_macro::test(local)]
  async fn error_is_the_last_item() {
    let values: Vec<_> =
      observable::of_result::<i32, _>(Err("gone")).into_stream().collect().await;
    assert_eq!(values, vec![Err("gone")]);
  }

  #[reactive_macro::test(local)]
  async fn each_stream_is_an_independent_traversal() {
    let source = observable::from_iter(vec!['a', 'b']);
    let first: Vec<_> = source.clone().into_stream().map(Result::unwrap).collect().await;
    let second: Vec<_> = source.into_stream().map(Result::unwrap).collect().await;
    assert_eq!(first, second);
  }

  #[reactive_macro::test]
  fn dropped_stream_silently_discards_events() {
    let (sender, receiver) = mpsc::unbounded::<Result<i32, &str>>();
    drop(receiver);

    let mut observer = StreamObserver { sender };
    assert!(observer.is_finished());
    observer.next(1);
    observer.error("late");
  }
}
