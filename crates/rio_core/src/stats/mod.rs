//! # Game Statistics
//!
//! [`GameStats`] wraps one decoded game. Construction resolves the schema
//! layout for the record's version and runs the classification pass; the
//! wrapper is immutable afterwards and answers every query from those results.
//!
//! ## Usage
//! ```ignore
//! let stats = GameStats::from_json_str(&text)?;
//! let star_hits = stats.star_hit_events();
//! let risp = stats.runner_on_base_events(&[2, -3])?;
//! let ops = stats.ops(0, RosterSelector::All)?;
//! ```

mod accessors;
pub mod derived;
mod queries;
mod roster;

pub use roster::{Roster, RosterSelector, ROSTER_SIZE};

use crate::classify::{classify, CategoryIndex, CharacterEventIndex, Classification};
use crate::error::StatResult;
use crate::models::GameRecord;
use crate::schema::{SchemaLayout, SchemaTable};

#[derive(Debug, Clone)]
pub struct GameStats {
    record: GameRecord,
    layout: SchemaLayout,
    classification: Classification,
}

impl GameStats {
    /// Wrap a record using the built-in schema table.
    pub fn new(record: GameRecord) -> StatResult<Self> {
        Self::with_schema_table(record, SchemaTable::builtin())
    }

    pub fn with_schema_table(record: GameRecord, table: &SchemaTable) -> StatResult<Self> {
        let layout = table.resolve(record.version());
        let classification = classify(&record, &Roster::new(&record, layout))?;
        Ok(Self { record, layout, classification })
    }

    pub fn from_json_str(json: &str) -> StatResult<Self> {
        Self::new(GameRecord::from_json_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> StatResult<Self> {
        Self::new(GameRecord::from_value(value)?)
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn layout(&self) -> SchemaLayout {
        self.layout
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.classification.categories
    }

    pub fn characters(&self) -> &CharacterEventIndex {
        &self.classification.characters
    }

    pub fn roster(&self) -> Roster<'_> {
        Roster::new(&self.record, self.layout)
    }

    pub fn into_record(self) -> GameRecord {
        self.record
    }
}
