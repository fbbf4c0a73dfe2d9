//! Serializable one-game report: metadata, a batting and pitching line per
//! team, and event counts per category.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::StatResult;
use crate::schema::Side;
use crate::stats::{GameStats, RosterSelector};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BattingLine {
    pub at_bats: u32,
    pub hits: u32,
    pub homeruns: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub rbi: u32,
    pub star_hits_used: u32,
    pub avg: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ops: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PitchingLine {
    pub batters_faced: u32,
    pub outs_pitched: u32,
    pub innings_pitched: f64,
    pub runs_allowed: u32,
    pub hits_allowed: u32,
    pub strikeouts: u32,
    pub era: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub team: u8,
    pub side: Side,
    pub player: String,
    pub score: u32,
    pub captain: Option<String>,
    pub batting: BattingLine,
    pub pitching: PitchingLine,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub game_id: String,
    pub version: String,
    pub stadium: String,
    pub ranked: bool,
    pub innings_selected: u32,
    pub innings_played: u32,
    pub mercy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quitter: Option<String>,
    pub start: Option<String>,
    pub events: usize,
    pub teams: Vec<TeamSummary>,
    pub categories: BTreeMap<&'static str, usize>,
}

impl GameStats {
    pub fn team_summary(&self, team: u8) -> StatResult<TeamSummary> {
        let offense = self.offensive_totals(team, RosterSelector::All)?;
        let defense = self.defensive_totals(team, RosterSelector::All)?;

        Ok(TeamSummary {
            team,
            side: self.side(team)?,
            player: self.player(team)?.to_string(),
            score: self.score(team)?,
            captain: self.captain(team)?.map(str::to_string),
            batting: BattingLine {
                at_bats: offense.at_bats,
                hits: offense.hits,
                homeruns: offense.homeruns,
                walks: offense.walks(),
                strikeouts: offense.strikeouts,
                rbi: offense.rbi,
                star_hits_used: offense.star_hits,
                avg: offense.batting_average(),
                obp: offense.on_base_percentage(),
                slg: offense.slugging(),
                ops: offense.ops(),
            },
            pitching: PitchingLine {
                batters_faced: defense.batters_faced,
                outs_pitched: defense.outs_pitched,
                innings_pitched: defense.innings_pitched(),
                runs_allowed: defense.runs_allowed,
                hits_allowed: defense.hits_allowed,
                strikeouts: defense.strikeouts,
                era: defense.era(),
            },
        })
    }

    pub fn summary(&self) -> StatResult<GameSummary> {
        let record = self.record();
        // away first regardless of how the file numbers the teams
        let teams = [Side::Away, Side::Home]
            .into_iter()
            .map(|side| self.team_summary(self.team_of(side)))
            .collect::<StatResult<Vec<_>>>()?;

        Ok(GameSummary {
            game_id: record.game_id.clone(),
            version: self.version().to_string(),
            stadium: self.stadium().to_string(),
            ranked: self.is_ranked(),
            innings_selected: self.innings_selected(),
            innings_played: self.innings_played(),
            mercy: self.is_mercy(),
            quitter: self.quitter().map(str::to_string),
            start: self.start_time().map(|t| t.to_rfc3339()),
            events: self.events().len(),
            teams,
            categories: self.categories().counts(),
        })
    }
}
