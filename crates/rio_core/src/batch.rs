//! Parallel classification of many games.
//!
//! Records are independent, so each one is wrapped on the rayon pool with no
//! shared mutable state. Results come back in input order and one bad record
//! never fails the others.

use rayon::prelude::*;

use crate::error::StatResult;
use crate::models::GameRecord;
use crate::schema::SchemaTable;
use crate::stats::GameStats;

pub fn classify_batch(records: Vec<GameRecord>, table: &SchemaTable) -> Vec<StatResult<GameStats>> {
    let results: Vec<_> = records
        .into_par_iter()
        .map(|record| GameStats::with_schema_table(record, table))
        .collect();
    log_batch(&results);
    results
}

/// Same as [`classify_batch`], starting from stat-file text.
pub fn classify_json_batch<S>(documents: &[S], table: &SchemaTable) -> Vec<StatResult<GameStats>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<_> = documents
        .par_iter()
        .map(|doc| GameStats::with_schema_table(GameRecord::from_json_str(doc.as_ref())?, table))
        .collect();
    log_batch(&results);
    results
}

fn log_batch(results: &[StatResult<GameStats>]) {
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        log::warn!("batch classification: {} of {} records failed", failed, results.len());
    } else {
        log::debug!("batch classification: {} records", results.len());
    }
}
