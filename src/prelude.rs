//! Prelude module for convenient imports

#[cfg(feature = "config")]
pub use crate::config::StoreConfig;
pub use crate::{
  error::StoreError,
  observable::{self, Observable, ObservableExt},
  observer::Observer,
  ops::single::SingleError,
  person::Person,
  repository::{InMemoryPersonRepository, PersonRepository},
  subscription::Subscription,
};
