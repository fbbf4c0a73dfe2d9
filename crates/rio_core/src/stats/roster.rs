use crate::classify::RosterLookup;
use crate::error::{StatError, StatResult};
use crate::models::{CharacterGameStat, GameRecord};
use crate::schema::SchemaLayout;

/// Slots per side.
pub const ROSTER_SIZE: u8 = 9;

/// Which roster slots a per-character query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterSelector {
    /// All nine slots, in roster order.
    #[default]
    All,
    Slot(u8),
}

impl From<u8> for RosterSelector {
    fn from(slot: u8) -> Self {
        RosterSelector::Slot(slot)
    }
}

impl From<Option<u8>> for RosterSelector {
    fn from(slot: Option<u8>) -> Self {
        slot.map_or(RosterSelector::All, RosterSelector::Slot)
    }
}

pub(crate) fn check_team(team: u8) -> StatResult<u8> {
    if team > 1 {
        return Err(StatError::InvalidTeam(team.into()));
    }
    Ok(team)
}

pub(crate) fn check_slot(slot: u8) -> StatResult<u8> {
    if slot >= ROSTER_SIZE {
        return Err(StatError::InvalidRosterSlot(slot.into()));
    }
    Ok(slot)
}

/// `Character Game Stats` seen through one schema layout.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    record: &'a GameRecord,
    layout: SchemaLayout,
}

impl<'a> Roster<'a> {
    pub fn new(record: &'a GameRecord, layout: SchemaLayout) -> Self {
        Self { record, layout }
    }

    pub fn slot(&self, team: u8, slot: u8) -> StatResult<&'a CharacterGameStat> {
        let team = check_team(team)?;
        let slot = check_slot(slot)?;
        let key = self.layout.roster_key(team, slot);
        self.record
            .character_game_stats
            .get(&key)
            .ok_or_else(|| StatError::MissingField(format!("Character Game Stats: '{}'", key)))
    }

    pub fn select(
        &self,
        team: u8,
        selector: RosterSelector,
    ) -> StatResult<Vec<&'a CharacterGameStat>> {
        match selector {
            RosterSelector::All => (0..ROSTER_SIZE).map(|slot| self.slot(team, slot)).collect(),
            RosterSelector::Slot(slot) => Ok(vec![self.slot(team, slot)?]),
        }
    }
}

impl RosterLookup for Roster<'_> {
    fn character_at(&self, team: u8, slot: u8) -> StatResult<&str> {
        self.slot(team, slot).map(|c| c.char_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaTable;
    use crate::test_fixtures::sample_record_json;

    fn record() -> GameRecord {
        GameRecord::from_value(sample_record_json()).unwrap()
    }

    #[test]
    fn test_slot_lookup_uses_side_keys() {
        let record = record();
        let roster = Roster::new(&record, SchemaTable::builtin().resolve("1.9.5"));
        assert_eq!(roster.character_at(0, 3).unwrap(), "Away3");
        assert_eq!(roster.character_at(1, 0).unwrap(), "Home0");
    }

    #[test]
    fn test_select_all_in_roster_order() {
        let record = record();
        let roster = Roster::new(&record, SchemaTable::builtin().resolve("1.9.5"));
        let ids: Vec<_> =
            roster.select(1, RosterSelector::All).unwrap().iter().map(|c| c.char_id.clone()).collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(ids[0], "Home0");
        assert_eq!(ids[8], "Home8");
    }

    #[test]
    fn test_invalid_selectors() {
        let record = record();
        let roster = Roster::new(&record, SchemaTable::builtin().resolve("1.9.5"));
        assert_eq!(roster.slot(2, 0).unwrap_err(), StatError::InvalidTeam(2));
        assert_eq!(roster.slot(0, 9).unwrap_err(), StatError::InvalidRosterSlot(9));
    }

    #[test]
    fn test_layout_mismatch_is_missing_field() {
        let record = record();
        // an old-version layout looks for "Team 0 Roster 0", which this file lacks
        let roster = Roster::new(&record, SchemaTable::builtin().resolve("1.9.3"));
        assert!(matches!(roster.slot(0, 0), Err(StatError::MissingField(ref k)) if k.contains("Team 0 Roster 0")));
    }

    #[test]
    fn test_selector_conversions() {
        assert_eq!(RosterSelector::from(4), RosterSelector::Slot(4));
        assert_eq!(RosterSelector::from(None), RosterSelector::All);
        assert_eq!(RosterSelector::from(Some(2)), RosterSelector::Slot(2));
    }
}
