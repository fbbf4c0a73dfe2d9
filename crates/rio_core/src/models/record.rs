use chrono::{DateTime, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::character::CharacterGameStat;
use super::events::Event;
use super::serde_helpers::{opt_string_or_number, string_or_number};
use crate::error::{StatError, StatResult};

/// Version assumed when a stat file carries no `Version` key.
pub const EARLIEST_VERSION: &str = "Pre 0.1.7";

/// One decoded Rio stat file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct GameRecord {
    /// Hex string with thousands separators, e.g. "1,2A,F3".
    #[serde(rename = "GameID", deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub game_id: String,
    #[serde(
        rename = "Date - Start",
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub date_start: Option<String>,
    #[serde(
        rename = "Date - End",
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub date_end: Option<String>,
    /// Single timestamp written by the earliest versions.
    #[serde(
        rename = "Date",
        default,
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub date: Option<String>,
    #[serde(rename = "Ranked", default)]
    pub ranked: u8,
    #[serde(rename = "StadiumID", deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub stadium_id: String,
    #[serde(rename = "Away Player")]
    pub away_player: String,
    #[serde(rename = "Home Player")]
    pub home_player: String,
    #[serde(rename = "Away Score")]
    pub away_score: u32,
    #[serde(rename = "Home Score")]
    pub home_score: u32,
    #[serde(rename = "Innings Selected")]
    pub innings_selected: u32,
    #[serde(rename = "Innings Played")]
    pub innings_played: u32,
    /// Empty when nobody quit.
    #[serde(rename = "Quitter Team", default, deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub quitter_team: String,
    #[serde(rename = "Average Ping", default)]
    pub average_ping: u32,
    #[serde(rename = "Lag Spikes", default)]
    pub lag_spikes: u32,
    #[serde(rename = "Version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Character Game Stats")]
    pub character_game_stats: BTreeMap<String, CharacterGameStat>,
    #[serde(rename = "Events")]
    pub events: Vec<Event>,
}

impl GameRecord {
    pub fn from_json_str(json: &str) -> StatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> StatResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Declared schema version, or the earliest known one when absent.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(EARLIEST_VERSION)
    }

    /// Game id as an integer (the file stores comma-grouped hex).
    pub fn game_id_value(&self) -> StatResult<u64> {
        let digits: String = self.game_id.chars().filter(|c| *c != ',').collect();
        u64::from_str_radix(digits.trim(), 16)
            .map_err(|e| StatError::Malformed(format!("GameID '{}': {}", self.game_id, e)))
    }

    pub fn start_date(&self) -> Option<&str> {
        self.date_start.as_deref().or(self.date.as_deref())
    }

    pub fn end_date(&self) -> Option<&str> {
        self.date_end.as_deref()
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_date().and_then(parse_timestamp)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_date().and_then(parse_timestamp)
    }

    pub fn was_quit(&self) -> bool {
        !self.quitter_team.is_empty()
    }

    /// Ended at least one inning early without anyone quitting.
    pub fn is_mercy(&self) -> bool {
        self.innings_selected > self.innings_played && !self.was_quit()
    }

    pub fn is_ranked(&self) -> bool {
        self.ranked == 1
    }

    pub fn is_superstar_game(&self) -> bool {
        self.character_game_stats.values().any(|c| c.is_starred())
    }

    /// Number of the last event, if the game has any events.
    pub fn event_final(&self) -> Option<u32> {
        self.events.last().map(|e| e.event_num)
    }

    pub fn event_first(&self) -> Option<u32> {
        self.events.first().map(|e| e.event_num)
    }
}

/// Rio writes either unix seconds or `ctime`-style text ("Sat Jun 10 00:40:55 2023").
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%a %b %e %H:%M:%S %Y", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
