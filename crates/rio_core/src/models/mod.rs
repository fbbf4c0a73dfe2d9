//! Typed view of a decoded Rio stat file.
//!
//! Mandatory keys are plain fields, so a missing one fails ingestion.
//! Sub-records that a play may legitimately lack (runners, pitch, contact,
//! first fielder) are `Option`s.

pub mod character;
pub mod events;
pub mod record;
mod serde_helpers;

pub use character::{CharacterGameStat, DefensiveStats, OffensiveStats};
pub use events::{Base, Contact, Event, FirstFielder, Pitch, Runner, HIT_RESULTS};
pub use record::{GameRecord, EARLIEST_VERSION};

/// JSON Schema describing the accepted stat-file layout.
pub fn game_record_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(GameRecord)
}
