use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::AddAssign;

use super::serde_helpers::team_number;

/// One roster slot on one side, for the whole game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CharacterGameStat {
    #[serde(rename = "Team", default, deserialize_with = "team_number")]
    #[schemars(with = "u8")]
    pub team: u8,
    #[serde(rename = "RosterID", default)]
    pub roster_id: u8,
    #[serde(rename = "CharID")]
    pub char_id: String,
    #[serde(rename = "Superstar")]
    pub superstar: u8,
    #[serde(rename = "Captain", default)]
    pub captain: u8,
    #[serde(rename = "Fielding Hand", default)]
    pub fielding_hand: String,
    #[serde(rename = "Batting Hand", default)]
    pub batting_hand: String,
    #[serde(rename = "Defensive Stats")]
    pub defensive: DefensiveStats,
    #[serde(rename = "Offensive Stats")]
    pub offensive: OffensiveStats,
}

impl CharacterGameStat {
    pub fn is_starred(&self) -> bool {
        self.superstar == 1
    }

    pub fn is_captain(&self) -> bool {
        self.captain == 1
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct OffensiveStats {
    #[serde(rename = "At Bats")]
    pub at_bats: u32,
    #[serde(rename = "Hits")]
    pub hits: u32,
    #[serde(rename = "Singles")]
    pub singles: u32,
    #[serde(rename = "Doubles")]
    pub doubles: u32,
    #[serde(rename = "Triples")]
    pub triples: u32,
    #[serde(rename = "Homeruns")]
    pub homeruns: u32,
    #[serde(rename = "Successful Bunts")]
    pub successful_bunts: u32,
    #[serde(rename = "Sac Flys")]
    pub sac_flys: u32,
    #[serde(rename = "Strikeouts")]
    pub strikeouts: u32,
    #[serde(rename = "Walks (4 Balls)")]
    pub walks_ball_four: u32,
    #[serde(rename = "Walks (Hit)")]
    pub walks_hit_by_pitch: u32,
    #[serde(rename = "RBI")]
    pub rbi: u32,
    #[serde(rename = "Bases Stolen")]
    pub bases_stolen: u32,
    #[serde(rename = "Star Hits")]
    pub star_hits: u32,
}

impl OffensiveStats {
    /// Four-ball walks plus hit-by-pitch.
    pub fn walks(&self) -> u32 {
        self.walks_ball_four + self.walks_hit_by_pitch
    }

    pub fn total_bases(&self) -> u32 {
        self.singles + self.doubles * 2 + self.triples * 3 + self.homeruns * 4
    }
}

impl AddAssign<&OffensiveStats> for OffensiveStats {
    fn add_assign(&mut self, other: &OffensiveStats) {
        self.at_bats += other.at_bats;
        self.hits += other.hits;
        self.singles += other.singles;
        self.doubles += other.doubles;
        self.triples += other.triples;
        self.homeruns += other.homeruns;
        self.successful_bunts += other.successful_bunts;
        self.sac_flys += other.sac_flys;
        self.strikeouts += other.strikeouts;
        self.walks_ball_four += other.walks_ball_four;
        self.walks_hit_by_pitch += other.walks_hit_by_pitch;
        self.rbi += other.rbi;
        self.bases_stolen += other.bases_stolen;
        self.star_hits += other.star_hits;
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct DefensiveStats {
    #[serde(rename = "Batters Faced")]
    pub batters_faced: u32,
    #[serde(rename = "Runs Allowed")]
    pub runs_allowed: u32,
    #[serde(rename = "Batters Walked")]
    pub batters_walked: u32,
    #[serde(rename = "Batters Hit")]
    pub batters_hit: u32,
    #[serde(rename = "Hits Allowed")]
    pub hits_allowed: u32,
    #[serde(rename = "HRs Allowed")]
    pub homeruns_allowed: u32,
    #[serde(rename = "Pitches Thrown")]
    pub pitches_thrown: u32,
    #[serde(rename = "Stamina")]
    pub stamina: u32,
    #[serde(rename = "Was Pitcher")]
    pub was_pitcher: u8,
    #[serde(rename = "Strikeouts")]
    pub strikeouts: u32,
    #[serde(rename = "Star Pitches Thrown")]
    pub star_pitches_thrown: u32,
    #[serde(rename = "Big Plays")]
    pub big_plays: u32,
    #[serde(rename = "Outs Pitched")]
    pub outs_pitched: u32,
    /// Single-element list in the stat file, keyed by position abbreviation.
    #[serde(rename = "Pitches Per Position", default)]
    pub pitches_per_position: Vec<BTreeMap<String, u32>>,
    #[serde(rename = "Outs Per Position", default)]
    pub outs_per_position: Vec<BTreeMap<String, u32>>,
}

impl DefensiveStats {
    pub fn was_pitcher(&self) -> bool {
        self.was_pitcher == 1
    }

    /// Walks by four balls plus hit batters.
    pub fn batters_walked_total(&self) -> u32 {
        self.batters_walked + self.batters_hit
    }
}

impl AddAssign<&DefensiveStats> for DefensiveStats {
    fn add_assign(&mut self, other: &DefensiveStats) {
        self.batters_faced += other.batters_faced;
        self.runs_allowed += other.runs_allowed;
        self.batters_walked += other.batters_walked;
        self.batters_hit += other.batters_hit;
        self.hits_allowed += other.hits_allowed;
        self.homeruns_allowed += other.homeruns_allowed;
        self.pitches_thrown += other.pitches_thrown;
        self.stamina += other.stamina;
        self.was_pitcher = self.was_pitcher.max(other.was_pitcher);
        self.strikeouts += other.strikeouts;
        self.star_pitches_thrown += other.star_pitches_thrown;
        self.big_plays += other.big_plays;
        self.outs_pitched += other.outs_pitched;
    }
}
