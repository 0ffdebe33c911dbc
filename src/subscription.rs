//! Subscription handles returned by `subscribe`.

/// Handle to an active subscription.
pub trait Subscription {
  /// Stop receiving events. A no-op when the subscription already ended.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;
}

/// Returned by sources that deliver everything inside `subscribe`: by the
/// time the caller gets the handle there is nothing left to cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinishedSubscription;

impl Subscription for FinishedSubscription {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}
