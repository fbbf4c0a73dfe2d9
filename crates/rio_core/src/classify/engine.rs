//! # Event Classification Pass
//!
//! One forward walk over `GameRecord::events`. Every event lands in exactly one
//! bucket of each count family (outs, chemistry links, strikes, balls, inning,
//! half inning) and in any number of flag categories. Pitch-derived categories
//! are only considered when the nested sub-record they read from exists:
//!
//! ```text
//! event ── runners? ── pitch? ── contact? ── first fielder?
//! ```
//!
//! Absent optional sub-records end the walk for that event. Bad counts or a
//! roster slot the schema says must exist abort the whole pass.

use crate::error::{StatError, StatResult};
use crate::models::{Event, GameRecord};

use super::category::{CategoryIndex, EventCategory, EventSet, FielderPosition};
use super::character_index::CharacterEventIndex;

/// Resolves the character standing in a roster slot.
pub trait RosterLookup {
    fn character_at(&self, team: u8, slot: u8) -> StatResult<&str>;
}

/// Output of one classification pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    pub categories: CategoryIndex,
    pub characters: CharacterEventIndex,
}

pub fn classify(record: &GameRecord, roster: &impl RosterLookup) -> StatResult<Classification> {
    let mut out = Classification {
        categories: CategoryIndex::new(record.innings_played),
        characters: CharacterEventIndex::with_roster(
            record.character_game_stats.values().map(|c| c.char_id.as_str()),
        ),
    };

    for event in &record.events {
        classify_event(event, roster, &mut out)?;
    }

    log::debug!(
        "classified {} events (game {}, version {})",
        record.events.len(),
        record.game_id,
        record.version()
    );
    Ok(out)
}

fn classify_event(
    event: &Event,
    roster: &impl RosterLookup,
    out: &mut Classification,
) -> StatResult<()> {
    let num = event.event_num;
    let categories = &mut out.categories;

    bucket(&mut categories.half_inning, num, "Half Inning", event.half_inning)?;

    let batter = roster.character_at(event.batting_team(), event.batter_roster_loc)?;
    let pitcher = roster.character_at(event.fielding_team(), event.pitcher_roster_loc)?;
    out.characters.entry(batter).at_bat.insert(num);
    out.characters.entry(pitcher).pitching.insert(num);

    bucket(&mut categories.outs, num, "Outs", event.outs)?;
    bucket(&mut categories.chem_links, num, "Chemistry Links on Base", event.chemistry_links)?;
    bucket(&mut categories.strikes, num, "Strikes", event.strikes)?;
    bucket(&mut categories.balls, num, "Balls", event.balls)?;
    categories
        .innings
        .entry(event.inning)
        .or_insert_with(|| {
            log::warn!("event {} is in inning {}, beyond innings played", num, event.inning);
            EventSet::new()
        })
        .insert(num);

    if let Some(category) = EventCategory::from_result_label(&event.result_of_ab) {
        categories.flag(category, num);
    }

    if event.rbi > 0 {
        categories.flag(EventCategory::Rbi, num);
    }

    if event.bases_empty() {
        categories.runner_on_base[0].insert(num);
    } else {
        for base in event.occupied_bases() {
            categories.runner_on_base[base.number() as usize].insert(num);
            if event.runner(base).is_some_and(|r| r.attempted_steal()) {
                categories.flag(EventCategory::Steal, num);
            }
        }
    }

    let Some(pitch) = &event.pitch else {
        return Ok(());
    };

    if event.is_hit() && pitch.contact.is_some() && pitch.is_star_swing() {
        categories.flag(EventCategory::StarHit, num);
    }
    if event.balls == 0 && event.strikes == 0 {
        categories.flag(EventCategory::FirstPitchOfAtBat, num);
    }
    if event.balls == 3 && event.strikes == 2 {
        categories.flag(EventCategory::FullCountPitch, num);
    }
    if pitch.is_star_pitch() {
        categories.flag(EventCategory::StarPitch, num);
    }

    let Some(contact) = &pitch.contact else {
        return Ok(());
    };

    if contact.five_star_swing == 1 {
        categories.flag(EventCategory::FiveStarDinger, num);
    }

    let Some(fielder) = &contact.first_fielder else {
        return Ok(());
    };

    out.characters.entry(&fielder.character).fielding.insert(num);

    if fielder.bobbled() {
        categories.flag(EventCategory::Bobble, num);
    }
    match fielder.action.as_str() {
        "Sliding" => categories.flag(EventCategory::SlidingCatch, num),
        "Walljump" => categories.flag(EventCategory::WallJump, num),
        _ => {}
    }
    match FielderPosition::from_abbreviation(&fielder.position) {
        Some(position) => {
            categories.first_fielder.entry(position).or_default().insert(num);
        }
        None => log::warn!("event {}: unrecognized fielder position '{}'", num, fielder.position),
    }
    if fielder.manually_selected() {
        categories.flag(EventCategory::ManualCharacterSelection, num);
    }

    Ok(())
}

fn bucket<const N: usize>(
    family: &mut [EventSet; N],
    event: u32,
    field: &'static str,
    value: u8,
) -> StatResult<()> {
    let slot = family.get_mut(value as usize).ok_or(StatError::OutOfRange {
        event,
        field,
        value: value as u32,
        max: (N - 1) as u32,
    })?;
    slot.insert(event);
    Ok(())
}
