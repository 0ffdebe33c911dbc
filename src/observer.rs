//! Observer trait and the closure adapters used by `subscribe`.
//!
//! An observer receives zero or more `next` values followed by at most one
//! terminal event, either `error` or `complete`. Terminal methods take `self`
//! by value so nothing can be delivered after them.

use std::convert::Infallible;

// ============================================================================
// Observer Trait
// ============================================================================

/// The consumer side of a publisher.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  ///
  /// This consumes the observer, as no more values can be emitted after an
  /// error
  fn error(self, err: Err);

  /// Handle completion of the observable
  ///
  /// This consumes the observer, as no more values can be emitted after
  /// completion
  fn complete(self);

  /// Returns `true` once the observer will not accept more values.
  ///
  /// Sources poll this between emissions to stop early, which is how
  /// `first` over a long sequence avoids walking the rest of it.
  fn is_finished(&self) -> bool;
}

// ============================================================================
// Closure adapters
// ============================================================================

/// Wraps a `next` closure. Errors are unreachable because the source is
/// infallible, completion is ignored.
#[derive(Clone)]
pub struct ObserverN<N>(pub N);

impl<N, Item> Observer<Item, Infallible> for ObserverN<N>
where
  N: FnMut(Item),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.0)(value) }

  #[inline]
  fn error(self, err: Infallible) { match err {} }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_finished(&self) -> bool { false }
}

/// `next` and `error` handlers, completion ignored.
#[derive(Clone)]
pub struct ObserverErr<N, E> {
  pub(crate) next: N,
  pub(crate) error: E,
}

impl<N, E, Item, Err> Observer<Item, Err> for ObserverErr<N, E>
where
  N: FnMut(Item),
  E: FnOnce(Err),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(self, err: Err) { (self.error)(err) }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_finished(&self) -> bool { false }
}

/// Handlers for all three kinds of event.
#[derive(Clone)]
pub struct ObserverAll<N, E, C> {
  pub(crate) next: N,
  pub(crate) error: E,
  pub(crate) complete: C,
}

impl<N, E, C, Item, Err> Observer<Item, Err> for ObserverAll<N, E, C>
where
  N: FnMut(Item),
  E: FnOnce(Err),
  C: FnOnce(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value) }

  #[inline]
  fn error(self, err: Err) { (self.error)(err) }

  #[inline]
  fn complete(self) { (self.complete)() }

  #[inline]
  fn is_finished(&self) -> bool { false }
}

// ============================================================================
// Tests
// ============================================================================
