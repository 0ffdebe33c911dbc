//! # reactive-people
//!
//! Single-value and multi-value publishers over an in-memory person store.
//!
//! ## Quick Start
//!
//! ```rust
//! use reactive_people::prelude::*;
//!
//! let repo = InMemoryPersonRepository::new();
//!
//! // multi-value publisher
//! repo.find_all().map(|p| p.to_string()).subscribe(|line| println!("{line}"));
//!
//! // single-value publisher: one record or nothing
//! assert_eq!(repo.get_by_id(4).block().unwrap(), Some(Person::new(4, "Barack", "Obama")));
//! assert_eq!(repo.get_by_id(100).block().unwrap(), None);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A lazy, restartable sequence of values |
//! | [`ObservableExt`] | Operators, subscribe helpers, blocking and async bridges |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`PersonRepository`] | `get_by_id` and `find_all` as publishers |
//!
//! ## Feature Flags
//!
//! - **`config`** (default): load store seed data from TOML
//!
//! [`Observable`]: observable::Observable
//! [`ObservableExt`]: observable::ObservableExt
//! [`Observer`]: observer::Observer
//! [`PersonRepository`]: repository::PersonRepository

#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod person;
pub mod prelude;
pub mod repository;
pub mod subscription;

pub use prelude::*;
