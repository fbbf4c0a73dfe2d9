//! Event-set queries over the classification results.

use super::GameStats;
use crate::classify::{EventCategory, EventSet, FielderPosition};
use crate::error::{StatError, StatResult};
use crate::models::{Base, Event};

macro_rules! category_events {
    ($($(#[$meta:meta])* $name:ident => $category:ident,)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> &EventSet {
                self.events_in(EventCategory::$category)
            }
        )*
    };
}

/// Most selectors a runner query accepts, one per base.
const MAX_BASE_SELECTORS: usize = 3;

impl GameStats {
    pub fn events_in(&self, category: EventCategory) -> &EventSet {
        self.categories().get(category)
    }

    /// Lookup by canonical category name, e.g. "Star Hits".
    pub fn category_events(&self, name: &str) -> StatResult<&EventSet> {
        Ok(self.events_in(name.parse()?))
    }

    category_events! {
        successful_bunt_events => Bunt,
        sac_fly_events => SacFly,
        strikeout_events => Strikeout,
        ground_ball_double_play_events => GroundBallDoublePlay,
        chem_error_events => ChemError,
        input_error_events => InputError,
        rbi_events => Rbi,
        /// Events where any runner on base attempted a steal.
        steal_events => Steal,
        star_hit_events => StarHit,
        /// First pitch of each plate appearance (0-0 count).
        first_pitch_events => FirstPitchOfAtBat,
        full_count_pitch_events => FullCountPitch,
        star_pitch_events => StarPitch,
        bobble_events => Bobble,
        five_star_dinger_events => FiveStarDinger,
        sliding_catch_events => SlidingCatch,
        wall_jump_events => WallJump,
        manual_character_selection_events => ManualCharacterSelection,
    }

    pub fn walk_events(&self, include_hbp: bool, include_bb: bool) -> EventSet {
        let mut walks = EventSet::new();
        if include_hbp {
            walks.extend(self.events_in(EventCategory::WalkHbp));
        }
        if include_bb {
            walks.extend(self.events_in(EventCategory::WalkBb));
        }
        walks
    }

    /// `bases` 1..=4 picks single through homerun; any other value returns
    /// every hit.
    pub fn hit_events(&self, bases: u8) -> EventSet {
        match EventCategory::hit(bases) {
            Some(category) => self.events_in(category).clone(),
            None => (1..=4)
                .filter_map(EventCategory::hit)
                .flat_map(|c| self.events_in(c).iter().copied())
                .collect(),
        }
    }

    /// Case-insensitive position abbreviation, e.g. "ss".
    pub fn position_fielding_events(&self, position: &str) -> StatResult<&EventSet> {
        let position: FielderPosition = position.parse()?;
        Ok(self.categories().first_fielder(position))
    }

    /// Empty for innings the game never reached.
    pub fn inning_events(&self, inning: u32) -> &EventSet {
        self.categories().inning(inning)
    }

    pub fn half_inning_events(&self, half: i64) -> StatResult<&EventSet> {
        usize::try_from(half)
            .ok()
            .and_then(|h| self.categories().half_inning(h))
            .ok_or(StatError::InvalidHalfInning(half))
    }

    /// Count buckets; values outside the bucket range yield the empty set.
    pub fn outs_events(&self, outs: usize) -> &EventSet {
        self.categories().outs(outs).unwrap_or(empty())
    }

    pub fn balls_events(&self, balls: usize) -> &EventSet {
        self.categories().balls(balls).unwrap_or(empty())
    }

    pub fn strikes_events(&self, strikes: usize) -> &EventSet {
        self.categories().strikes(strikes).unwrap_or(empty())
    }

    pub fn chem_links_events(&self, links: usize) -> &EventSet {
        self.categories().chem_links(links).unwrap_or(empty())
    }

    pub fn character_at_bat_events(&self, char_id: &str) -> &EventSet {
        self.characters().at_bat(char_id)
    }

    pub fn character_pitching_events(&self, char_id: &str) -> &EventSet {
        self.characters().pitching(char_id)
    }

    pub fn character_fielding_events(&self, char_id: &str) -> &EventSet {
        self.characters().fielding(char_id)
    }

    /// Events matching a base-occupancy pattern.
    ///
    /// Each selector names a base: positive means a runner must be there,
    /// negative means either way, and bases left out must be empty. `[0]` on
    /// its own selects events with the bases empty.
    ///
    /// ```ignore
    /// stats.runner_on_base_events(&[1, -2])?; // runner on 1st, 2nd either way, 3rd empty
    /// stats.runner_on_base_events(&[-1, -2, -3])?; // at least one runner on
    /// ```
    pub fn runner_on_base_events(&self, selectors: &[i64]) -> StatResult<EventSet> {
        if let Some(&bad) = selectors.iter().find(|s| s.abs() > 3) {
            return Err(StatError::InvalidBase(bad));
        }
        if selectors.len() > MAX_BASE_SELECTORS {
            return Err(StatError::TooManyBases(selectors.len()));
        }
        if selectors.contains(&0) {
            if selectors.iter().any(|&s| s != 0) {
                return Err(StatError::NoRunnerCombined(selectors.to_vec()));
            }
            return Ok(self.runner_bucket(0).clone());
        }

        let mut required = Vec::new();
        let mut optional = Vec::new();
        let mut excluded: Vec<usize> = vec![1, 2, 3];
        for &selector in selectors {
            let base = selector.unsigned_abs() as usize;
            excluded.retain(|&b| b != base);
            if selector > 0 {
                required.push(base);
            } else {
                optional.push(base);
            }
        }

        let mut result = match required.split_first() {
            Some((&first, rest)) => {
                let mut acc = self.runner_bucket(first).clone();
                for &base in rest {
                    acc.retain(|e| self.runner_bucket(base).contains(e));
                }
                acc
            }
            None => optional.iter().flat_map(|&b| self.runner_bucket(b).iter().copied()).collect(),
        };
        for base in excluded {
            result.retain(|e| !self.runner_bucket(base).contains(e));
        }
        Ok(result)
    }

    fn runner_bucket(&self, base: usize) -> &EventSet {
        self.categories().runner_on_base(base).unwrap_or(empty())
    }

    pub fn events(&self) -> &[Event] {
        &self.record.events
    }

    pub fn event_final(&self) -> Option<u32> {
        self.record.event_final()
    }

    /// Event with the given number. Negative numbers and numbers past the end
    /// clamp to the final event. `None` when the game has no events or the
    /// number falls in a gap of the numbering.
    pub fn event_by_num(&self, num: i64) -> Option<&Event> {
        let Ok(num) = u32::try_from(num) else {
            return self.record.events.last();
        };
        match self.event_final() {
            Some(last) if num > last => self.record.events.last(),
            _ => self.find_event(num),
        }
    }

    fn find_event(&self, num: u32) -> Option<&Event> {
        self.record
            .events
            .binary_search_by_key(&num, |e| e.event_num)
            .ok()
            .map(|i| &self.record.events[i])
    }

    fn checked_event(&self, num: i64) -> StatResult<&Event> {
        let (first, last) = match (self.record.event_first(), self.record.event_final()) {
            (Some(first), Some(last)) => (first, last),
            _ => (0, 0),
        };
        u32::try_from(num)
            .ok()
            .and_then(|n| self.find_event(n))
            .ok_or(StatError::InvalidEventNum { num, first, last })
    }

    pub fn inning_of_event(&self, num: i64) -> StatResult<u32> {
        Ok(self.checked_event(num)?.inning)
    }

    pub fn half_inning_of_event(&self, num: i64) -> StatResult<u8> {
        Ok(self.checked_event(num)?.half_inning)
    }

    pub fn strikes_of_event(&self, num: i64) -> StatResult<u8> {
        Ok(self.checked_event(num)?.strikes)
    }

    pub fn balls_of_event(&self, num: i64) -> StatResult<u8> {
        Ok(self.checked_event(num)?.balls)
    }

    pub fn outs_of_event(&self, num: i64) -> StatResult<u8> {
        Ok(self.checked_event(num)?.outs)
    }

    /// Bases occupied at the start of the event.
    pub fn runners_of_event(&self, num: i64) -> StatResult<Vec<Base>> {
        Ok(self.checked_event(num)?.occupied_bases())
    }
}

fn empty() -> &'static EventSet {
    &crate::classify::category::EMPTY_SET
}
