use std::fmt;

/// An immutable person record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
  id: i32,
  first_name: String,
  last_name: String,
}

impl Person {
  pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
    Person { id, first_name: first_name.into(), last_name: last_name.into() }
  }

  #[inline]
  pub fn id(&self) -> i32 { self.id }

  #[inline]
  pub fn first_name(&self) -> &str { &self.first_name }

  #[inline]
  pub fn last_name(&self) -> &str { &self.last_name }
}

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {} {}", self.id, self.first_name, self.last_name)
  }
}
