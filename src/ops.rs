//! Operators, one per module. They are reached through
//! [`ObservableExt`](crate::observable::ObservableExt); the types here only
//! show up in signatures.

pub mod block;
pub mod collect;
pub mod default_if_empty;
pub mod filter;
pub mod into_future;
pub mod into_stream;
pub mod last;
pub mod map;
pub mod on_complete;
pub mod on_error_return;
pub mod single;
pub mod take;
pub mod tap;
