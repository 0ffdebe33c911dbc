//! TOML seed data for [`InMemoryPersonRepository`].
//!
//! ```toml
//! [[people]]
//! id = 1
//! first_name = "Alassane"
//! last_name = "Niang"
//! ```
//!
//! [`InMemoryPersonRepository`]: crate::repository::InMemoryPersonRepository

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
  error::{Result, StoreError},
  person::Person,
  repository::reference_people,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
  #[serde(default)]
  pub people: Vec<Person>,
}

impl StoreConfig {
  /// The four built-in records.
  pub fn reference() -> Self { StoreConfig { people: reference_people().to_vec() } }

  pub fn from_toml_str(text: &str) -> Result<Self> { Ok(toml::from_str(text)?) }

  #[instrument(skip_all, fields(path = %path.as_ref().display()))]
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;
    let config = Self::from_toml_str(&text)?;
    debug!(people = config.people.len(), "loaded store config");
    Ok(config)
  }

  pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
    toml::to_string(self)
  }
}

impl Default for StoreConfig {
  fn default() -> Self { Self::reference() }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::StoreConfig;
  use crate::{error::StoreError, person::Person};

  const SEED: &str = r#"
[[people]]
id = 7
first_name = "Ada"
last_name = "Lovelace"

[[people]]
id = 8
first_name = "Alan"
last_name = "Turing"
"#;

  #[reactive_macro::test]
  fn parses_people_in_order() {
    let config = StoreConfig::from_toml_str(SEED).unwrap();
    assert_eq!(
      config.people,
      vec![Person::new(7, "Ada", "Lovelace"), Person::new(8, "Alan", "Turing")]
    );
  }

  #[reactive_macro::test]
  fn empty_document_has_no_people() {
    assert!(StoreConfig::from_toml_str("").unwrap().people.is_empty());
  }

  #[reactive_macro::test]
  fn rejects_malformed_records() {
    let err = StoreConfig::from_toml_str("[[people]]\nid = \"one\"\n").unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
  }

  #[reactive_macro::test]
  fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();
    let config = StoreConfig::load(file.path()).unwrap();
    assert_eq!(config.people.len(), 2);
  }

  #[reactive_macro::test]
  fn missing_file_reports_path() {
    let err = StoreConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
  }

  #[reactive_macro::test]
  fn reference_round_trips_through_toml() {
    let text = StoreConfig::reference().to_toml_string().unwrap();
    assert_eq!(StoreConfig::from_toml_str(&text).unwrap(), StoreConfig::default());
  }
}
