//! Blocking retrieval.
//!
//! [`ObservableExt::block_last`](crate::observable::ObservableExt::block_last)
//! and friends subscribe with a [`BlockObserver`] that writes into a slot on
//! the caller's stack. Every source in this crate emits inside `subscribe`,
//! so the slot holds the outcome as soon as `actual_subscribe` returns.

use crate::observer::Observer;

pub struct BlockObserver<'a, Item, Err> {
  pub(crate) slot: &'a mut Result<Option<Item>, Err>,
}

impl<Item, Err> Observer<Item, Err> for BlockObserver<'_, Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { *self.slot = Ok(Some(value)); }

  #[inline]
  fn error(self, err: Err) { *self.slot = Err(err); }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_finished(&self) -> bool { false }
}
