use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::{EventSet, EMPTY_SET};

/// Events a single character took part in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CharacterEvents {
    pub at_bat: EventSet,
    pub pitching: EventSet,
    /// Events where the character was the first fielder on the ball.
    pub fielding: EventSet,
}

/// Character id → participation sets. Lookups for unknown ids yield empty sets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CharacterEventIndex {
    pub(crate) by_character: BTreeMap<String, CharacterEvents>,
}

impl CharacterEventIndex {
    pub(crate) fn with_roster<'a>(char_ids: impl IntoIterator<Item = &'a str>) -> Self {
        let by_character =
            char_ids.into_iter().map(|id| (id.to_string(), CharacterEvents::default())).collect();
        Self { by_character }
    }

    pub(crate) fn entry(&mut self, char_id: &str) -> &mut CharacterEvents {
        self.by_character.entry(char_id.to_string()).or_default()
    }

    pub fn get(&self, char_id: &str) -> Option<&CharacterEvents> {
        self.by_character.get(char_id)
    }

    pub fn at_bat(&self, char_id: &str) -> &EventSet {
        self.get(char_id).map_or(&EMPTY_SET, |c| &c.at_bat)
    }

    pub fn pitching(&self, char_id: &str) -> &EventSet {
        self.get(char_id).map_or(&EMPTY_SET, |c| &c.pitching)
    }

    pub fn fielding(&self, char_id: &str) -> &EventSet {
        self.get(char_id).map_or(&EMPTY_SET, |c| &c.fielding)
    }

    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.by_character.keys().map(String::as_str)
    }
}
