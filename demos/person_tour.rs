//! Example: a tour of the person store
//!
//! Runs the single-value and multi-value publishers through the usual
//! consumer patterns and logs what each one sees. Pass a TOML file as the
//! first argument to seed the store from it instead of the reference data.
//!
//! ```sh
//! RUST_LOG=reactive_people=trace cargo run --example person_tour
//! ```

use reactive_people::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_target(false).compact())
    .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  init_logger();

  let repo = match std::env::args().nth(1) {
    Some(path) => InMemoryPersonRepository::from_config(&StoreConfig::load(path)?)?,
    None => InMemoryPersonRepository::new(),
  };

  // ==========================================================================
  // Single-value publisher
  // ==========================================================================

  let person = repo.get_by_id(1).block()?;
  info!(?person, "block");

  repo.get_by_id(1).subscribe(|person| info!(%person, "subscribe"));

  repo
    .get_by_id(1)
    .map(|person| person.first_name().to_string())
    .subscribe(|first_name| info!(%first_name, "map"));

  repo.get_by_id(100).subscribe_all(
    |person| warn!(%person, "unexpected match"),
    |_| {},
    || info!("no person with id 100"),
  );

  let fallback = repo
    .get_by_id(100)
    .single()
    .on_error_return(|err| {
      warn!(%err, "substituting default");
      Person::new(0, "Nobody", "Known")
    })
    .block_first()?;
  info!(?fallback, "single with default");

  // ==========================================================================
  // Multi-value publisher
  // ==========================================================================

  let first = repo.find_all().block_first()?;
  info!(?first, "block first");

  repo.find_all().subscribe(|person| info!(%person, "subscribe"));

  let list = repo.find_all().collect::<Vec<_>>().block_last()?.unwrap_or_default();
  info!(count = list.len(), "collect to list");
  for person in &list {
    info!(%person, "listed");
  }

  Ok(())
}
