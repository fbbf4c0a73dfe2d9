//! Top-level and per-character accessors.
//!
//! Team arguments are raw team indices (0 or 1); what side they mean depends
//! on the schema layout of the record. Per-character queries take a
//! [`RosterSelector`]; `All` sums (or lists) the nine slots in roster order.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::roster::{check_team, RosterSelector};
use super::GameStats;
use crate::error::StatResult;
use crate::models::{CharacterGameStat, DefensiveStats, OffensiveStats};
use crate::schema::Side;

macro_rules! summed_stats {
    ($totals:ident { $($(#[$meta:meta])* $name:ident => $field:ident,)* }) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<u32> {
                Ok(self.$totals(team, roster)?.$field)
            }
        )*
    };
}

impl GameStats {
    pub fn game_id(&self) -> StatResult<u64> {
        self.record.game_id_value()
    }

    pub fn version(&self) -> &str {
        self.record.version()
    }

    pub fn stadium(&self) -> &str {
        &self.record.stadium_id
    }

    pub fn is_ranked(&self) -> bool {
        self.record.is_ranked()
    }

    /// Raw start timestamp as written in the file.
    pub fn start_date(&self) -> Option<&str> {
        self.record.start_date()
    }

    pub fn end_date(&self) -> Option<&str> {
        self.record.end_date()
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.record.start_time()
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.record.end_time()
    }

    pub fn innings_selected(&self) -> u32 {
        self.record.innings_selected
    }

    pub fn innings_played(&self) -> u32 {
        self.record.innings_played
    }

    pub fn is_mercy(&self) -> bool {
        self.record.is_mercy()
    }

    pub fn was_quit(&self) -> bool {
        self.record.was_quit()
    }

    /// Player who quit, if anyone did.
    pub fn quitter(&self) -> Option<&str> {
        Some(self.record.quitter_team.as_str()).filter(|q| !q.is_empty())
    }

    pub fn ping(&self) -> u32 {
        self.record.average_ping
    }

    pub fn lag_spikes(&self) -> u32 {
        self.record.lag_spikes
    }

    pub fn is_superstar_game(&self) -> bool {
        self.record.is_superstar_game()
    }

    pub fn side(&self, team: u8) -> StatResult<Side> {
        Ok(self.layout.side_of(check_team(team)?))
    }

    pub fn player(&self, team: u8) -> StatResult<&str> {
        Ok(match self.side(team)? {
            Side::Away => &self.record.away_player,
            Side::Home => &self.record.home_player,
        })
    }

    pub fn score(&self, team: u8) -> StatResult<u32> {
        Ok(match self.side(team)? {
            Side::Away => self.record.away_score,
            Side::Home => self.record.home_score,
        })
    }

    fn characters_for(
        &self,
        team: u8,
        roster: impl Into<RosterSelector>,
    ) -> StatResult<Vec<&CharacterGameStat>> {
        self.roster().select(team, roster.into())
    }

    fn character(&self, team: u8, slot: u8) -> StatResult<&CharacterGameStat> {
        self.roster().slot(team, slot)
    }

    pub fn character_name(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<Vec<&str>> {
        Ok(self.characters_for(team, roster)?.into_iter().map(|c| c.char_id.as_str()).collect())
    }

    pub fn is_starred(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<Vec<bool>> {
        Ok(self.characters_for(team, roster)?.into_iter().map(|c| c.is_starred()).collect())
    }

    /// Character id of the team captain, if the file marks one.
    pub fn captain(&self, team: u8) -> StatResult<Option<&str>> {
        Ok(self
            .characters_for(team, RosterSelector::All)?
            .into_iter()
            .find(|c| c.is_captain())
            .map(|c| c.char_id.as_str()))
    }

    pub fn offensive_stats(
        &self,
        team: u8,
        roster: impl Into<RosterSelector>,
    ) -> StatResult<Vec<&OffensiveStats>> {
        Ok(self.characters_for(team, roster)?.into_iter().map(|c| &c.offensive).collect())
    }

    pub fn defensive_stats(
        &self,
        team: u8,
        roster: impl Into<RosterSelector>,
    ) -> StatResult<Vec<&DefensiveStats>> {
        Ok(self.characters_for(team, roster)?.into_iter().map(|c| &c.defensive).collect())
    }

    pub fn fielding_hand(&self, team: u8, slot: u8) -> StatResult<&str> {
        Ok(&self.character(team, slot)?.fielding_hand)
    }

    pub fn batting_hand(&self, team: u8, slot: u8) -> StatResult<&str> {
        Ok(&self.character(team, slot)?.batting_hand)
    }

    pub fn was_pitcher(&self, team: u8, slot: u8) -> StatResult<bool> {
        Ok(self.character(team, slot)?.defensive.was_pitcher())
    }

    pub fn pitches_per_position(&self, team: u8, slot: u8) -> StatResult<BTreeMap<String, u32>> {
        Ok(flatten_positions(&self.character(team, slot)?.defensive.pitches_per_position))
    }

    pub fn outs_per_position(&self, team: u8, slot: u8) -> StatResult<BTreeMap<String, u32>> {
        Ok(flatten_positions(&self.character(team, slot)?.defensive.outs_per_position))
    }

    /// Offensive counting stats summed over the selected slots.
    pub fn offensive_totals(
        &self,
        team: u8,
        roster: impl Into<RosterSelector>,
    ) -> StatResult<OffensiveStats> {
        let mut total = OffensiveStats::default();
        for stats in self.offensive_stats(team, roster)? {
            total += stats;
        }
        Ok(total)
    }

    pub fn defensive_totals(
        &self,
        team: u8,
        roster: impl Into<RosterSelector>,
    ) -> StatResult<DefensiveStats> {
        let mut total = DefensiveStats::default();
        for stats in self.defensive_stats(team, roster)? {
            total += stats;
        }
        Ok(total)
    }

    summed_stats!(defensive_totals {
        batters_faced => batters_faced,
        runs_allowed => runs_allowed,
        batters_walked_ball_four => batters_walked,
        batters_hit_by_pitch => batters_hit,
        hits_allowed => hits_allowed,
        homeruns_allowed => homeruns_allowed,
        pitches_thrown => pitches_thrown,
        stamina => stamina,
        /// Strikeouts recorded while pitching.
        strikeouts_pitched => strikeouts,
        star_pitches_thrown => star_pitches_thrown,
        big_plays => big_plays,
        outs_pitched => outs_pitched,
    });

    summed_stats!(offensive_totals {
        at_bats => at_bats,
        hits => hits,
        singles => singles,
        doubles => doubles,
        triples => triples,
        homeruns => homeruns,
        successful_bunts => successful_bunts,
        sac_flys => sac_flys,
        strikeouts => strikeouts,
        walks_ball_four => walks_ball_four,
        walks_hit_by_pitch => walks_hit_by_pitch,
        rbi => rbi,
        bases_stolen => bases_stolen,
        star_hits_used => star_hits,
    });

    /// Four-ball walks plus hit batters, while pitching.
    pub fn batters_walked(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<u32> {
        Ok(self.defensive_totals(team, roster)?.batters_walked_total())
    }

    /// Four-ball walks plus hit-by-pitch, while batting.
    pub fn walks(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<u32> {
        Ok(self.offensive_totals(team, roster)?.walks())
    }

    pub fn batting_avg(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<Option<f64>> {
        Ok(self.offensive_totals(team, roster)?.batting_average())
    }

    pub fn obp(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<Option<f64>> {
        Ok(self.offensive_totals(team, roster)?.on_base_percentage())
    }

    pub fn slg(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<Option<f64>> {
        Ok(self.offensive_totals(team, roster)?.slugging())
    }

    pub fn ops(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<Option<f64>> {
        Ok(self.offensive_totals(team, roster)?.ops())
    }

    pub fn innings_pitched(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<f64> {
        Ok(self.defensive_totals(team, roster)?.innings_pitched())
    }

    pub fn era(&self, team: u8, roster: impl Into<RosterSelector>) -> StatResult<Option<f64>> {
        Ok(self.defensive_totals(team, roster)?.era())
    }

    /// Roster slot of the character with this id, if they are on `team`.
    pub fn slot_of(&self, team: u8, char_id: &str) -> StatResult<Option<u8>> {
        let roster = self.characters_for(team, RosterSelector::All)?;
        Ok(roster.iter().position(|c| c.char_id == char_id).and_then(|p| u8::try_from(p).ok()))
    }

    /// Team index for the given side under this record's layout.
    pub fn team_of(&self, side: Side) -> u8 {
        self.layout.team_of(side)
    }
}

/// The stat file wraps the position map in a one-element list.
fn flatten_positions(maps: &[BTreeMap<String, u32>]) -> BTreeMap<String, u32> {
    let mut merged = BTreeMap::new();
    for map in maps {
        for (position, count) in map {
            *merged.entry(position.clone()).or_insert(0) += count;
        }
    }
    merged
}
