//! Rio CLI Library
//!
//! File loading and report assembly for the `rio` binary. All statistics come
//! from `rio_core`; this crate only adds disk I/O and output shaping.

use anyhow::{Context, Result};
use rio_core::{classify_json_batch, EventSet, GameStats, GameSummary, SchemaTable};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in table, or the YAML table at `path` when one is given.
pub fn load_schema_table(path: Option<&Path>) -> Result<SchemaTable> {
    let Some(path) = path else {
        return Ok(SchemaTable::default());
    };
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema table: {}", path.display()))?;
    let table = SchemaTable::from_yaml_str(&yaml)
        .with_context(|| format!("Invalid schema table: {}", path.display()))?;
    tracing::debug!(revisions = table.revisions.len(), "loaded schema table from {}", path.display());
    Ok(table)
}

/// Read and classify one stat file.
pub fn load_game(path: &Path, table: &SchemaTable) -> Result<GameStats> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stat file: {}", path.display()))?;
    let record = rio_core::GameRecord::from_json_str(&json)
        .with_context(|| format!("Failed to parse stat file: {}", path.display()))?;
    GameStats::with_schema_table(record, table)
        .with_context(|| format!("Failed to classify events in {}", path.display()))
}

#[derive(Debug, Serialize)]
pub struct CharacterReport {
    pub char_id: String,
    pub at_bat: Vec<u32>,
    pub pitching: Vec<u32>,
    pub fielding: Vec<u32>,
}

pub fn character_report(stats: &GameStats, char_id: &str) -> CharacterReport {
    CharacterReport {
        char_id: char_id.to_string(),
        at_bat: to_list(stats.character_at_bat_events(char_id)),
        pitching: to_list(stats.character_pitching_events(char_id)),
        fielding: to_list(stats.character_fielding_events(char_id)),
    }
}

pub fn to_list(events: &EventSet) -> Vec<u32> {
    events.iter().copied().collect()
}

/// One line of `rio batch` output. Exactly one of `summary`/`error` is set.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<GameSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    fn failed(path: PathBuf, error: String) -> Self {
        Self { path, summary: None, error: Some(error) }
    }
}

/// Summarize many stat files. Files are read in order, then classified on
/// the rayon pool; a file that fails never affects the others.
pub fn batch_summaries(paths: &[PathBuf], table: &SchemaTable) -> Vec<BatchEntry> {
    let mut entries: Vec<Option<BatchEntry>> = Vec::with_capacity(paths.len());
    let mut documents = Vec::new();
    let mut slots = Vec::new();

    for path in paths {
        match fs::read_to_string(path) {
            Ok(text) => {
                slots.push(entries.len());
                documents.push(text);
                entries.push(None);
            }
            Err(err) => {
                tracing::warn!("skipping {}: {}", path.display(), err);
                entries.push(Some(BatchEntry::failed(path.clone(), format!("read failed: {}", err))));
            }
        }
    }

    for (slot, result) in slots.into_iter().zip(classify_json_batch(&documents, table)) {
        let path = paths[slot].clone();
        entries[slot] = Some(match result.and_then(|stats| stats.summary()) {
            Ok(summary) => BatchEntry { path, summary: Some(summary), error: None },
            Err(err) => BatchEntry::failed(path, err.to_string()),
        });
    }

    entries.into_iter().flatten().collect()
}
