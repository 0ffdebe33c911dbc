//! The person store.
//!
//! [`PersonRepository`] hands out publishers instead of values: `find_all`
//! is a multi-value publisher over every record, `get_by_id` a single-value
//! publisher that emits the matching record or completes empty.

use std::{collections::HashSet, convert::Infallible, sync::Arc};

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::{
  error::{Result, StoreError},
  observable::{self, FromIter, Observable, ObservableExt},
  observer::Observer,
  person::Person,
  subscription::FinishedSubscription,
};

static REFERENCE_PEOPLE: Lazy<Arc<[Person]>> = Lazy::new(|| {
  Arc::from([
    Person::new(1, "Alassane", "Niang"),
    Person::new(2, "Elon", "Musk"),
    Person::new(3, "Jeff", "Bezos"),
    Person::new(4, "Barack", "Obama"),
  ])
});

/// The built-in records, in insertion order.
pub fn reference_people() -> &'static [Person] { &REFERENCE_PEOPLE }

/// Data access for [`Person`] records.
///
/// The publishers own what they read, so they can outlive the repository
/// that produced them.
pub trait PersonRepository {
  /// Single-value publisher returned by [`PersonRepository::get_by_id`].
  type ById: Observable<Person, Infallible> + Clone;

  /// Multi-value publisher returned by [`PersonRepository::find_all`].
  type All: Observable<Person, Infallible> + Clone;

  /// At most one record: the first whose id equals `id`. Completes empty
  /// when there is none; absence is never an error.
  fn get_by_id(&self, id: i32) -> Self::ById;

  /// Every record in insertion order. Each subscription is an independent
  /// traversal.
  fn find_all(&self) -> Self::All;
}

/// A fixed, read-only set of records shared behind an [`Arc`].
///
/// Cloning the repository or any publisher it returns shares the same
/// backing slice; nothing is ever mutated, so it can be queried from many
/// threads at once.
#[derive(Clone, Debug)]
pub struct InMemoryPersonRepository {
  people: Arc<[Person]>,
}

impl InMemoryPersonRepository {
  /// A repository over the four reference records.
  pub fn new() -> Self { InMemoryPersonRepository { people: Arc::clone(&REFERENCE_PEOPLE) } }

  /// A repository over `people`, kept in the given order.
  ///
  /// Ids must be pairwise distinct.
  pub fn from_people(people: Vec<Person>) -> Result<Self> {
    let mut seen = HashSet::with_capacity(people.len());
    if let Some(dup) = people.iter().find(|p| !seen.insert(p.id())) {
      return Err(StoreError::DuplicateId(dup.id()));
    }
    debug!(people = people.len(), "person store initialized");
    Ok(InMemoryPersonRepository { people: people.into() })
  }

  /// A repository over the records of a loaded [`StoreConfig`].
  ///
  /// [`StoreConfig`]: crate::config::StoreConfig
  #[cfg(feature = "config")]
  pub fn from_config(config: &crate::config::StoreConfig) -> Result<Self> {
    Self::from_people(config.people.clone())
  }

  /// Number of records held.
  pub fn len(&self) -> usize { self.people.len() }

  /// `true` when the store holds no records.
  pub fn is_empty(&self) -> bool { self.people.is_empty() }
}

impl Default for InMemoryPersonRepository {
  fn default() -> Self { Self::new() }
}

impl PersonRepository for InMemoryPersonRepository {
  type ById = PersonById;
  type All = AllPeople;

  fn get_by_id(&self, id: i32) -> PersonById {
    trace!(id, "get_by_id");
    PersonById { people: self.people.clone(), id }
  }

  fn find_all(&self) -> AllPeople {
    trace!(people = self.people.len(), "find_all");
    AllPeople { people: self.people.clone() }
  }
}

/// Publisher of every record of an [`InMemoryPersonRepository`].
#[derive(Clone, Debug)]
pub struct AllPeople {
  people: Arc<[Person]>,
}

impl Observable<Person, Infallible> for AllPeople {
  type Unsub = FinishedSubscription;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Person, Infallible>,
  {
    records(self.people).actual_subscribe(observer)
  }
}

/// Publisher of the record with a given id, if the store has one.
#[derive(Clone, Debug)]
pub struct PersonById {
  people: Arc<[Person]>,
  id: i32,
}

impl Observable<Person, Infallible> for PersonById {
  type Unsub = FinishedSubscription;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Person, Infallible>,
  {
    let id = self.id;
    records(self.people)
      .filter(move |person| person.id() == id)
      .first()
      .actual_subscribe(observer)
  }
}

fn records(people: Arc<[Person]>) -> FromIter<Records> {
  observable::from_iter(Records { people, next: 0 })
}

/// Walks a shared record slice, cloning each record out.
#[derive(Clone, Debug)]
pub(crate) struct Records {
  people: Arc<[Person]>,
  next: usize,
}

impl Iterator for Records {
  type Item = Person;

  fn next(&mut self) -> Option<Person> {
    let person = self.people.get(self.next)?.clone();
    self.next += 1;
    Some(person)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let left = self.people.len().saturating_sub(self.next);
    (left, Some(left))
  }
}

impl ExactSizeIterator for Records {}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(repo: &InMemoryPersonRepository) -> Vec<i32> {
    let mut ids = vec![];
    repo.find_all().subscribe(|p| ids.push(p.id()));
    ids
  }

  #[reactive_macro::test]
  fn reference_data_in_order() {
    let repo = InMemoryPersonRepository::new();
    assert_eq!(ids(&repo), vec![1, 2, 3, 4]);
    assert_eq!(repo.len(), 4);
    assert!(!repo.is_empty());
  }

  #[reactive_macro::test]
  fn duplicate_ids_are_rejected() {
    let err = InMemoryPersonRepository::from_people(vec![
      Person::new(1, "A", "B"),
      Person::new(2, "C", "D"),
      Person::new(1, "E", "F"),
    ])
    .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(1)));
    assert_eq!(err.to_string(), "duplicate person id 1");
  }

  #[reactive_macro::test]
  fn custom_people_keep_their_order() {
    let repo = InMemoryPersonRepository::from_people(vec![
      Person::new(9, "Grace", "Hopper"),
      Person::new(5, "Linus", "Torvalds"),
    ])
    .unwrap();
    assert_eq!(ids(&repo), vec![9, 5]);
    assert_eq!(repo.get_by_id(5).block(), Ok(Some(Person::new(5, "Linus", "Torvalds"))));
  }

  #[reactive_macro::test]
  fn empty_store() {
    let repo = InMemoryPersonRepository::from_people(vec![]).unwrap();
    assert!(repo.is_empty());
    assert_eq!(repo.find_all().block_first(), Ok(None));
    assert_eq!(repo.get_by_id(1).block(), Ok(None));
  }

  #[reactive_macro::test]
  fn get_by_id_stops_after_the_match() {
    let repo = InMemoryPersonRepository::new();
    let mut seen = vec![];
    records(repo.people.clone()).tap(|p| seen.push(p.id())).filter(|p| p.id() == 2).first().subscribe(|_| {});
    assert_eq!(seen, vec![1, 2]);
  }

  #[reactive_macro::test]
  fn records_report_exact_size() {
    let mut records = Records { people: Arc::clone(&REFERENCE_PEOPLE), next: 0 };
    assert_eq!(records.len(), 4);
    records.next();
    assert_eq!(records.len(), 3);
  }

  fn detached_people() -> AllPeople {
    let repo = InMemoryPersonRepository::new();
    repo.find_all()
  }

  #[reactive_macro::test]
  fn publishers_outlive_their_repository() {
    let all = detached_people();
    assert_eq!(all.clone().last().block_last(), Ok(Some(Person::new(4, "Barack", "Obama"))));

    let by_id = {
      let repo = InMemoryPersonRepository::new();
      repo.get_by_id(3)
    };
    assert_eq!(by_id.block(), Ok(Some(Person::new(3, "Jeff", "Bezos"))));
    assert_eq!(all.block_first(), Ok(Some(Person::new(1, "Alassane", "Niang"))));
  }

  #[reactive_macro::test]
  fn publisher_moves_into_another_thread() {
    let by_id = InMemoryPersonRepository::new().get_by_id(2);
    let found = std::thread::spawn(move || by_id.block()).join().unwrap();
    assert_eq!(found, Ok(Some(Person::new(2, "Elon", "Musk"))));
  }
}
