//! # rio_core - Project Rio Game-Log Statistics
//!
//! Reads the JSON stat files Project Rio writes after every game and derives
//! per-character and per-team statistics from them.
//!
//! ## Features
//! - Typed, serde-deserialized stat-file model with JSON Schema export
//! - Single-pass event classification into overlapping categories
//! - Character → at-bat / pitching / fielding event indices
//! - Counting stats, batting average, OBP, SLG, OPS and ERA per slot or team
//! - Schema revision table covering the older stat-file layouts
//! - Parallel batch classification
//!
//! ## Example
//! ```ignore
//! use rio_core::{GameStats, RosterSelector};
//!
//! let stats = GameStats::from_json_str(&std::fs::read_to_string("game.json")?)?;
//! println!("{:?}", stats.ops(0, RosterSelector::All)?);
//! println!("{:?}", stats.runner_on_base_events(&[2, -3])?);
//! ```

pub mod batch;
pub mod classify;
pub mod error;
pub mod models;
pub mod schema;
pub mod stats;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use batch::{classify_batch, classify_json_batch};
pub use classify::{
    classify, CategoryIndex, CharacterEventIndex, Classification, EventCategory, EventSet,
    FielderPosition,
};
pub use error::{StatError, StatResult};
pub use models::{game_record_schema, Base, CharacterGameStat, Event, GameRecord};
pub use schema::{SchemaLayout, SchemaTable, Side};
pub use stats::{GameStats, Roster, RosterSelector};
pub use summary::{GameSummary, TeamSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
