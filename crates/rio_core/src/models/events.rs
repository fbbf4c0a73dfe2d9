use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::serde_helpers::none_label;

/// Plate-appearance result labels that count as hits.
pub const HIT_RESULTS: [&str; 4] = ["Single", "Double", "Triple", "HR"];

/// One of the three bases a runner can occupy at the start of an event.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// 1, 2 or 3.
    pub fn number(self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Base> {
        match n {
            1 => Some(Base::First),
            2 => Some(Base::Second),
            3 => Some(Base::Third),
            _ => None,
        }
    }

    /// Key of the runner sub-record in the stat file.
    pub fn runner_key(self) -> &'static str {
        match self {
            Base::First => "Runner 1B",
            Base::Second => "Runner 2B",
            Base::Third => "Runner 3B",
        }
    }
}

/// A single recorded play.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Event {
    #[serde(rename = "Event Num")]
    pub event_num: u32,
    #[serde(rename = "Inning")]
    pub inning: u32,
    /// 0 = top (team 0 bats), 1 = bottom (team 1 bats)
    #[serde(rename = "Half Inning")]
    pub half_inning: u8,
    #[serde(rename = "Away Score", default)]
    pub away_score: u32,
    #[serde(rename = "Home Score", default)]
    pub home_score: u32,
    #[serde(rename = "Balls")]
    pub balls: u8,
    #[serde(rename = "Strikes")]
    pub strikes: u8,
    #[serde(rename = "Outs")]
    pub outs: u8,
    #[serde(rename = "Star Chance", default)]
    pub star_chance: u8,
    #[serde(rename = "Away Stars", default)]
    pub away_stars: u32,
    #[serde(rename = "Home Stars", default)]
    pub home_stars: u32,
    #[serde(rename = "Pitcher Stamina", default)]
    pub pitcher_stamina: u32,
    #[serde(rename = "Chemistry Links on Base")]
    pub chemistry_links: u8,
    #[serde(rename = "Pitcher Roster Loc")]
    pub pitcher_roster_loc: u8,
    #[serde(rename = "Batter Roster Loc")]
    pub batter_roster_loc: u8,
    #[serde(rename = "Catcher Roster Loc", default)]
    pub catcher_roster_loc: u8,
    #[serde(rename = "RBI")]
    pub rbi: u32,
    #[serde(rename = "Num Outs During Play", default)]
    pub outs_during_play: u8,
    /// "None" while the plate appearance is still in progress.
    #[serde(rename = "Result of AB")]
    pub result_of_ab: String,
    #[serde(rename = "Runner Batter", default, skip_serializing_if = "Option::is_none")]
    pub runner_batter: Option<Runner>,
    #[serde(rename = "Runner 1B", default, skip_serializing_if = "Option::is_none")]
    pub runner_1b: Option<Runner>,
    #[serde(rename = "Runner 2B", default, skip_serializing_if = "Option::is_none")]
    pub runner_2b: Option<Runner>,
    #[serde(rename = "Runner 3B", default, skip_serializing_if = "Option::is_none")]
    pub runner_3b: Option<Runner>,
    #[serde(rename = "Pitch", default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<Pitch>,
}

impl Event {
    pub fn runner(&self, base: Base) -> Option<&Runner> {
        match base {
            Base::First => self.runner_1b.as_ref(),
            Base::Second => self.runner_2b.as_ref(),
            Base::Third => self.runner_3b.as_ref(),
        }
    }

    /// Bases with a runner on them, in base order.
    pub fn occupied_bases(&self) -> Vec<Base> {
        Base::ALL.into_iter().filter(|&b| self.runner(b).is_some()).collect()
    }

    pub fn bases_empty(&self) -> bool {
        Base::ALL.iter().all(|&b| self.runner(b).is_none())
    }

    pub fn is_hit(&self) -> bool {
        HIT_RESULTS.contains(&self.result_of_ab.as_str())
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.pitch.as_ref().and_then(|p| p.contact.as_ref())
    }

    pub fn first_fielder(&self) -> Option<&FirstFielder> {
        self.contact().and_then(|c| c.first_fielder.as_ref())
    }

    /// Side at bat during this event.
    pub fn batting_team(&self) -> u8 {
        self.half_inning
    }

    pub fn fielding_team(&self) -> u8 {
        1 - self.half_inning.min(1)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Runner {
    #[serde(rename = "Runner Roster Loc", default)]
    pub roster_loc: u8,
    #[serde(rename = "Runner Char Id", default)]
    pub char_id: String,
    #[serde(rename = "Runner Initial Base", default)]
    pub initial_base: u8,
    #[serde(rename = "Out Type", default = "none_label")]
    pub out_type: String,
    #[serde(rename = "Out Location", default)]
    pub out_location: u8,
    /// None, Ready, Normal or Perfect
    #[serde(rename = "Steal", default = "none_label")]
    pub steal: String,
    #[serde(rename = "Runner Result Base", default)]
    pub result_base: u8,
}

impl Runner {
    pub fn attempted_steal(&self) -> bool {
        self.steal != "None"
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Pitch {
    #[serde(rename = "Pitcher Team Id", default)]
    pub pitcher_team: u8,
    #[serde(rename = "Pitcher Char Id", default)]
    pub pitcher_char_id: String,
    #[serde(rename = "Pitch Type", default)]
    pub pitch_type: String,
    #[serde(rename = "Charge Type", default)]
    pub charge_type: String,
    #[serde(rename = "Star Pitch")]
    pub star_pitch: u8,
    #[serde(rename = "Pitch Speed", default)]
    pub speed: f64,
    #[serde(rename = "Type of Swing")]
    pub swing_type: String,
    #[serde(rename = "Contact", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

impl Pitch {
    pub fn is_star_pitch(&self) -> bool {
        self.star_pitch == 1
    }

    pub fn is_star_swing(&self) -> bool {
        self.swing_type == "Star"
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Contact {
    #[serde(rename = "Type of Contact", default)]
    pub contact_type: String,
    #[serde(rename = "Star Swing Five-Star")]
    pub five_star_swing: u8,
    #[serde(rename = "Contact Result - Primary", default)]
    pub result_primary: String,
    #[serde(rename = "Contact Result - Secondary", default)]
    pub result_secondary: String,
    #[serde(rename = "First Fielder", default, skip_serializing_if = "Option::is_none")]
    pub first_fielder: Option<FirstFielder>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FirstFielder {
    #[serde(rename = "Fielder Roster Location", default)]
    pub roster_loc: u8,
    /// P, C, 1B, 2B, 3B, SS, LF, CF or RF
    #[serde(rename = "Fielder Position")]
    pub position: String,
    #[serde(rename = "Fielder Character")]
    pub character: String,
    /// None, Sliding or Walljump
    #[serde(rename = "Fielder Action")]
    pub action: String,
    #[serde(rename = "Fielder Manual Selected")]
    pub manual_selected: String,
    #[serde(rename = "Fielder Bobble")]
    pub bobble: String,
}

impl FirstFielder {
    pub const NO_MANUAL_SELECTION: &'static str = "No Selected Char";

    pub fn bobbled(&self) -> bool {
        self.bobble != "None"
    }

    pub fn manually_selected(&self) -> bool {
        self.manual_selected != Self::NO_MANUAL_SELECTION
    }
}
