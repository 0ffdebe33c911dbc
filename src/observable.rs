//! The publisher side: the [`Observable`] trait, the [`ObservableExt`]
//! operator surface and the creation functions.
//!
//! An observable is a lazy description of a sequence. Nothing happens until
//! it is subscribed; every subscription runs the whole description again, so
//! a `Clone` observable is a restartable sequence.

use crate::{
  observer::{Observer, ObserverAll, ObserverErr, ObserverN},
  ops::{
    block::BlockObserver,
    collect::CollectOp,
    default_if_empty::DefaultIfEmptyOp,
    filter::FilterOp,
    into_future::ObservableFuture,
    into_stream::ObservableStream,
    last::LastOp,
    map::MapOp,
    on_complete::OnCompleteOp,
    on_error_return::OnErrorReturnOp,
    single::{SingleError, SingleOp},
    take::TakeOp,
    tap::TapOp,
  },
  subscription::Subscription,
};

mod from_iter;
mod of;
pub use from_iter::*;
pub use of::*;

/// A source of `Item`s that terminates with either completion or one `Err`.
pub trait Observable<Item, Err> {
  type Unsub: Subscription;

  /// Connect `observer` and start emitting.
  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err>;
}

/// Operators and subscribe helpers, available on every [`Observable`].
pub trait ObservableExt<Item, Err>: Observable<Item, Err> + Sized {
  /// Transform every value with `f`.
  #[inline]
  fn map<B, F>(self, f: F) -> MapOp<Self, F, Item>
  where
    F: FnMut(Item) -> B,
  {
    MapOp::new(self, f)
  }

  /// Emit only the values that pass `predicate`.
  #[inline]
  fn filter<F>(self, predicate: F) -> FilterOp<Self, F>
  where
    F: FnMut(&Item) -> bool,
  {
    FilterOp { source: self, predicate }
  }

  /// Emit the first `count` values, then complete without waiting for the
  /// source.
  #[inline]
  fn take(self, count: usize) -> TakeOp<Self> { TakeOp { source: self, count } }

  /// Emit at most one value: the first one.
  ///
  /// An empty source gives an empty result, not an error. Use
  /// [`ObservableExt::single`] when absence should fail.
  #[inline]
  fn first(self) -> TakeOp<Self> { self.take(1) }

  /// Emit the first value, or `default` if the source completes empty.
  #[inline]
  fn first_or(self, default: Item) -> DefaultIfEmptyOp<TakeOp<Self>, Item> {
    self.first().default_if_empty(default)
  }

  /// Emit only the last value, once the source completes.
  #[inline]
  fn last(self) -> LastOp<Self> { LastOp { source: self } }

  /// Emit `default` when the source completes without having emitted.
  #[inline]
  fn default_if_empty(self, default: Item) -> DefaultIfEmptyOp<Self, Item> {
    DefaultIfEmptyOp { source: self, default }
  }

  /// Gather every value into `C` and emit it on completion.
  ///
  /// Nothing is emitted if the source errors.
  #[inline]
  fn collect<C>(self) -> CollectOp<Self, C, Item>
  where
    C: Default + Extend<Item>,
  {
    CollectOp::new(self, C::default())
  }

  /// Require exactly one value. Zero or several values become a
  /// [`SingleError`].
  #[inline]
  fn single(self) -> SingleOp<Self> { SingleOp { source: self } }

  /// Replace an error with a value produced from it, then complete.
  ///
  /// The resulting observable can no longer fail.
  #[inline]
  fn on_error_return<F>(self, f: F) -> OnErrorReturnOp<Self, F, Err>
  where
    F: FnOnce(Err) -> Item,
  {
    OnErrorReturnOp::new(self, f)
  }

  /// Run `f` when the source completes, before passing completion on.
  #[inline]
  fn on_complete<F>(self, f: F) -> OnCompleteOp<Self, F>
  where
    F: FnOnce(),
  {
    OnCompleteOp { source: self, func: f }
  }

  /// Peek at every value without changing it.
  #[inline]
  fn tap<F>(self, f: F) -> TapOp<Self, F>
  where
    F: FnMut(&Item),
  {
    TapOp { source: self, func: f }
  }

  /// Subscribe to an infallible observable with a `next` handler.
  #[inline]
  fn subscribe<N>(self, next: N) -> Self::Unsub
  where
    N: FnMut(Item),
    ObserverN<N>: Observer<Item, Err>,
  {
    self.actual_subscribe(ObserverN(next))
  }

  /// Subscribe with `next` and `error` handlers.
  #[inline]
  fn subscribe_err<N, E>(self, next: N, error: E) -> Self::Unsub
  where
    N: FnMut(Item),
    E: FnOnce(Err),
  {
    self.actual_subscribe(ObserverErr { next, error })
  }

  /// Subscribe with handlers for values, the error and completion.
  #[inline]
  fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C) -> Self::Unsub
  where
    N: FnMut(Item),
    E: FnOnce(Err),
    C: FnOnce(),
  {
    self.actual_subscribe(ObserverAll { next, error, complete })
  }

  /// Subscribe and return the first value, or `None` if the source
  /// completes empty.
  ///
  /// The sources in this crate deliver inside `subscribe`, so the result is
  /// known when this returns.
  #[inline]
  fn block_first(self) -> Result<Option<Item>, Err> { self.first().block_last() }

  /// Subscribe and return the last value, or `None` if the source completes
  /// empty.
  fn block_last(self) -> Result<Option<Item>, Err> {
    let mut slot = Ok(None);
    self.actual_subscribe(BlockObserver { slot: &mut slot });
    slot
  }

  /// Subscribe to a single-value publisher and return its value, if any.
  ///
  /// More than one value is reported as
  /// [`SingleError::MultipleValues`]; the source error is wrapped in
  /// [`SingleError::Source`].
  fn block(self) -> Result<Option<Item>, SingleError<Err>> {
    let mut values = match self.take(2).collect::<Vec<_>>().block_last() {
      Ok(values) => values.unwrap_or_default(),
      Err(err) => return Err(SingleError::Source(err)),
    };
    if values.len() > 1 {
      return Err(SingleError::MultipleValues);
    }
    Ok(values.pop())
  }

  /// Resolve to the first value (or `None`) as a future.
  #[inline]
  fn into_future(self) -> ObservableFuture<Item, Err> { ObservableFuture::subscribe(self) }

  /// Bridge into a `futures::Stream` of `Result<Item, Err>`.
  #[inline]
  fn into_stream(self) -> ObservableStream<Item, Err> { ObservableStream::subscribe(self) }
}

impl<T, Item, Err> ObservableExt<Item, Err> for T where T: Observable<Item, Err> {}

