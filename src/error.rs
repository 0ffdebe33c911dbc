use thiserror::Error;

/// Failures while building a store. Queries never fail: a missing id is an
/// empty result.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("duplicate person id {0}")]
  DuplicateId(i32),

  #[cfg(feature = "config")]
  #[error("failed to read store config {path}: {source}")]
  Io {
    path: std::path::PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[cfg(feature = "config")]
  #[error("invalid store config: {0}")]
  Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
