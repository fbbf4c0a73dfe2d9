use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::StatError;

/// Ordered set of event numbers.
pub type EventSet = BTreeSet<u32>;

pub(crate) static EMPTY_SET: EventSet = BTreeSet::new();

/// Named flag categories an event can fall into. Categories overlap freely.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventCategory {
    Bunt,
    SacFly,
    Strikeout,
    GroundBallDoublePlay,
    ChemError,
    InputError,
    WalkHbp,
    WalkBb,
    Single,
    Double,
    Triple,
    HomeRun,
    Rbi,
    Steal,
    StarHit,
    FirstPitchOfAtBat,
    FullCountPitch,
    StarPitch,
    Bobble,
    FiveStarDinger,
    SlidingCatch,
    WallJump,
    ManualCharacterSelection,
}

impl EventCategory {
    pub const ALL: [EventCategory; 23] = [
        EventCategory::Bunt,
        EventCategory::SacFly,
        EventCategory::Strikeout,
        EventCategory::GroundBallDoublePlay,
        EventCategory::ChemError,
        EventCategory::InputError,
        EventCategory::WalkHbp,
        EventCategory::WalkBb,
        EventCategory::Single,
        EventCategory::Double,
        EventCategory::Triple,
        EventCategory::HomeRun,
        EventCategory::Rbi,
        EventCategory::Steal,
        EventCategory::StarHit,
        EventCategory::FirstPitchOfAtBat,
        EventCategory::FullCountPitch,
        EventCategory::StarPitch,
        EventCategory::Bobble,
        EventCategory::FiveStarDinger,
        EventCategory::SlidingCatch,
        EventCategory::WallJump,
        EventCategory::ManualCharacterSelection,
    ];

    /// Categories filled straight from the `Result of AB` label.
    pub const RESULTS: [EventCategory; 12] = [
        EventCategory::Bunt,
        EventCategory::SacFly,
        EventCategory::Strikeout,
        EventCategory::GroundBallDoublePlay,
        EventCategory::ChemError,
        EventCategory::InputError,
        EventCategory::WalkHbp,
        EventCategory::WalkBb,
        EventCategory::Single,
        EventCategory::Double,
        EventCategory::Triple,
        EventCategory::HomeRun,
    ];

    /// Canonical category name. Result categories share the stat-file label.
    pub fn name(self) -> &'static str {
        match self {
            EventCategory::Bunt => "Bunt",
            EventCategory::SacFly => "SacFly",
            EventCategory::Strikeout => "Strikeout",
            EventCategory::GroundBallDoublePlay => "Ground Ball Double Play",
            EventCategory::ChemError => "Error - Chem",
            EventCategory::InputError => "Error - Input",
            EventCategory::WalkHbp => "Walk HBP",
            EventCategory::WalkBb => "Walk BB",
            EventCategory::Single => "Single",
            EventCategory::Double => "Double",
            EventCategory::Triple => "Triple",
            EventCategory::HomeRun => "HR",
            EventCategory::Rbi => "RBI",
            EventCategory::Steal => "Steal",
            EventCategory::StarHit => "Star Hits",
            EventCategory::FirstPitchOfAtBat => "First Pitch of AB",
            EventCategory::FullCountPitch => "Full Count Pitch",
            EventCategory::StarPitch => "Star Pitch",
            EventCategory::Bobble => "Bobble",
            EventCategory::FiveStarDinger => "Five Star Dinger",
            EventCategory::SlidingCatch => "Sliding Catch",
            EventCategory::WallJump => "Wall Jump",
            EventCategory::ManualCharacterSelection => "Manual Character Selection",
        }
    }

    pub fn from_result_label(label: &str) -> Option<EventCategory> {
        EventCategory::RESULTS.into_iter().find(|c| c.name() == label)
    }

    /// Hit category for a base count of 1..=4.
    pub fn hit(bases: u8) -> Option<EventCategory> {
        match bases {
            1 => Some(EventCategory::Single),
            2 => Some(EventCategory::Double),
            3 => Some(EventCategory::Triple),
            4 => Some(EventCategory::HomeRun),
            _ => None,
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventCategory {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| StatError::UnknownCategory(s.to_string()))
    }
}

/// Defensive position of the first fielder to reach the ball.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FielderPosition {
    P,
    C,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    SS,
    LF,
    CF,
    RF,
}

impl FielderPosition {
    pub const ALL: [FielderPosition; 9] = [
        FielderPosition::P,
        FielderPosition::C,
        FielderPosition::FirstBase,
        FielderPosition::SecondBase,
        FielderPosition::ThirdBase,
        FielderPosition::SS,
        FielderPosition::LF,
        FielderPosition::CF,
        FielderPosition::RF,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            FielderPosition::P => "P",
            FielderPosition::C => "C",
            FielderPosition::FirstBase => "1B",
            FielderPosition::SecondBase => "2B",
            FielderPosition::ThirdBase => "3B",
            FielderPosition::SS => "SS",
            FielderPosition::LF => "LF",
            FielderPosition::CF => "CF",
            FielderPosition::RF => "RF",
        }
    }

    /// Exact match against the abbreviation as written in stat files.
    pub fn from_abbreviation(label: &str) -> Option<Self> {
        FielderPosition::ALL.into_iter().find(|p| p.abbreviation() == label)
    }
}

impl fmt::Display for FielderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Case-insensitive.
impl FromStr for FielderPosition {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        FielderPosition::ALL
            .into_iter()
            .find(|p| p.abbreviation() == upper)
            .ok_or_else(|| StatError::InvalidFielderPosition(s.to_string()))
    }
}

/// Category name → event numbers, plus the numbered bucket families.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CategoryIndex {
    pub(crate) flags: BTreeMap<EventCategory, EventSet>,
    /// Outs at the time of the event, 0..=2.
    pub(crate) outs: [EventSet; 3],
    /// Chemistry links on base, 0..=3.
    pub(crate) chem_links: [EventSet; 4],
    pub(crate) strikes: [EventSet; 3],
    pub(crate) balls: [EventSet; 4],
    pub(crate) half_inning: [EventSet; 2],
    pub(crate) innings: BTreeMap<u32, EventSet>,
    /// Index 0 holds events with the bases empty.
    pub(crate) runner_on_base: [EventSet; 4],
    pub(crate) first_fielder: BTreeMap<FielderPosition, EventSet>,
}

impl CategoryIndex {
    pub(crate) fn new(innings_played: u32) -> Self {
        let mut index = CategoryIndex::default();
        for category in EventCategory::ALL {
            index.flags.insert(category, EventSet::new());
        }
        for inning in 1..=innings_played {
            index.innings.insert(inning, EventSet::new());
        }
        for position in FielderPosition::ALL {
            index.first_fielder.insert(position, EventSet::new());
        }
        index
    }

    pub(crate) fn flag(&mut self, category: EventCategory, event_num: u32) {
        self.flags.entry(category).or_default().insert(event_num);
    }

    pub fn get(&self, category: EventCategory) -> &EventSet {
        self.flags.get(&category).unwrap_or(&EMPTY_SET)
    }

    pub fn outs(&self, outs: usize) -> Option<&EventSet> {
        self.outs.get(outs)
    }

    pub fn chem_links(&self, links: usize) -> Option<&EventSet> {
        self.chem_links.get(links)
    }

    pub fn strikes(&self, strikes: usize) -> Option<&EventSet> {
        self.strikes.get(strikes)
    }

    pub fn balls(&self, balls: usize) -> Option<&EventSet> {
        self.balls.get(balls)
    }

    pub fn half_inning(&self, half: usize) -> Option<&EventSet> {
        self.half_inning.get(half)
    }

    pub fn inning(&self, inning: u32) -> &EventSet {
        self.innings.get(&inning).unwrap_or(&EMPTY_SET)
    }

    /// 0 = bases empty, 1..=3 = runner on that base.
    pub fn runner_on_base(&self, base: usize) -> Option<&EventSet> {
        self.runner_on_base.get(base)
    }

    pub fn first_fielder(&self, position: FielderPosition) -> &EventSet {
        self.first_fielder.get(&position).unwrap_or(&EMPTY_SET)
    }

    /// Event counts per flag category, keyed by canonical name.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        self.flags.iter().map(|(c, set)| (c.name(), set.len())).collect()
    }
}
