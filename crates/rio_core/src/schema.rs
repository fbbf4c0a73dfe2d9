//! Schema Revision Table
//!
//! Rio changed two things about stat files over time: which side team index 0
//! refers to, and how `Character Game Stats` keys are spelled.
//!
//! | versions | team 0 | roster key |
//! |----------|--------|------------|
//! | Pre 0.1.7 .. 1.9.1 | home | `Team {n} Roster {slot}` |
//! | 1.9.2 .. 1.9.4 | away | `Team {n} Roster {slot}` |
//! | anything newer | away | `{Away,Home} Roster {slot}` |
//!
//! A record's version is resolved against the table once, when the record is
//! wrapped. The table can be replaced from YAML so new releases can be mapped
//! without a rebuild.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{StatError, StatResult};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Away => "Away",
            Side::Home => "Home",
        }
    }
}

/// Which side team index 0 refers to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamLayout {
    HomeFirst,
    AwayFirst,
}

/// Spelling of the per-slot key inside `Character Game Stats`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RosterKeyStyle {
    /// `Team 0 Roster 3`
    TeamNumbered,
    /// `Away Roster 3`
    SideNamed,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemaLayout {
    pub team_layout: TeamLayout,
    pub roster_keys: RosterKeyStyle,
}

impl SchemaLayout {
    /// `team` must already be validated as 0 or 1.
    pub fn side_of(&self, team: u8) -> Side {
        match (self.team_layout, team) {
            (TeamLayout::HomeFirst, 0) | (TeamLayout::AwayFirst, 1) => Side::Home,
            _ => Side::Away,
        }
    }

    pub fn team_of(&self, side: Side) -> u8 {
        match (self.team_layout, side) {
            (TeamLayout::HomeFirst, Side::Home) | (TeamLayout::AwayFirst, Side::Away) => 0,
            _ => 1,
        }
    }

    pub fn roster_key(&self, team: u8, slot: u8) -> String {
        match self.roster_keys {
            RosterKeyStyle::TeamNumbered => format!("Team {} Roster {}", team, slot),
            RosterKeyStyle::SideNamed => format!("{} Roster {}", self.side_of(team).label(), slot),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SchemaRevision {
    pub versions: Vec<String>,
    #[serde(flatten)]
    pub layout: SchemaLayout,
}

/// Ordered version table; first matching revision wins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SchemaTable {
    pub revisions: Vec<SchemaRevision>,
    /// Layout for versions not listed in any revision.
    pub current: SchemaLayout,
}

static BUILTIN: Lazy<SchemaTable> = Lazy::new(|| SchemaTable {
    revisions: vec![
        SchemaRevision {
            versions: ["Pre 0.1.7", "0.1.7a", "0.1.8", "0.1.9", "1.9.1"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
            layout: SchemaLayout {
                team_layout: TeamLayout::HomeFirst,
                roster_keys: RosterKeyStyle::TeamNumbered,
            },
        },
        SchemaRevision {
            versions: ["1.9.2", "1.9.3", "1.9.4"].iter().map(|v| v.to_string()).collect(),
            layout: SchemaLayout {
                team_layout: TeamLayout::AwayFirst,
                roster_keys: RosterKeyStyle::TeamNumbered,
            },
        },
    ],
    current: SchemaLayout {
        team_layout: TeamLayout::AwayFirst,
        roster_keys: RosterKeyStyle::SideNamed,
    },
});

impl Default for SchemaTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl SchemaTable {
    pub fn builtin() -> &'static SchemaTable {
        &BUILTIN
    }

    pub fn from_yaml_str(yaml: &str) -> StatResult<Self> {
        let table: SchemaTable = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// A version may appear in at most one revision.
    pub fn validate(&self) -> StatResult<()> {
        let mut seen = HashSet::new();
        for version in self.revisions.iter().flat_map(|r| r.versions.iter()) {
            if !seen.insert(version.as_str()) {
                return Err(StatError::SchemaTable(format!(
                    "version '{}' is listed in more than one revision",
                    version
                )));
            }
        }
        Ok(())
    }

    pub fn resolve(&self, version: &str) -> SchemaLayout {
        match self.revisions.iter().find(|r| r.versions.iter().any(|v| v == version)) {
            Some(revision) => revision.layout,
            None => {
                log::debug!("version '{}' not in revision table, using current layout", version);
                self.current
            }
        }
    }
}
