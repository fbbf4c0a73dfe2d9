//! Property-based generators for classification tests.
//!
//! Events are generated as raw stat-file JSON so they go through the same
//! deserialization path as real files.

use proptest::prelude::*;
use serde_json::{json, Value};

use crate::test_fixtures::{contact_json, event_json, fielder_json, pitch_json, runner_json, sample_record_json};

pub fn result_label_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("None"),
        Just("Single"),
        Just("Double"),
        Just("Triple"),
        Just("HR"),
        Just("Strikeout"),
        Just("Walk BB"),
        Just("Walk HBP"),
        Just("SacFly"),
        Just("Bunt"),
        Just("Ground Ball Double Play"),
        Just("Error - Input"),
        Just("Out"),
    ]
}

pub fn position_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("P"),
        Just("C"),
        Just("1B"),
        Just("2B"),
        Just("3B"),
        Just("SS"),
        Just("LF"),
        Just("CF"),
        Just("RF"),
    ]
}

/// Pitch sub-record, optionally with contact and a first fielder.
pub fn pitch_strategy() -> impl Strategy<Value = Option<Value>> {
    let fielder = prop::option::of((
        position_strategy(),
        0u8..9,
        prop_oneof![Just("None"), Just("Sliding"), Just("Walljump")],
        any::<bool>(),
        any::<bool>(),
    ))
    .prop_map(|f| {
        f.map(|(position, slot, action, manual, bobble)| {
            fielder_json(
                position,
                &format!("Home{}", slot),
                action,
                if manual { "Home0" } else { "No Selected Char" },
                if bobble { "Fumble" } else { "None" },
            )
        })
    });
    let contact = prop::option::of((0u8..=1, fielder))
        .prop_map(|c| c.map(|(five_star, fielder)| contact_json(five_star, fielder)));

    prop::option::of((
        0u8..=1,
        prop_oneof![Just("None"), Just("Slap"), Just("Charge"), Just("Star")],
        contact,
    ))
    .prop_map(|p| p.map(|(star, swing, contact)| pitch_json(star, swing, contact)))
}

/// Runner sub-records for 1B, 2B and 3B, each present or not.
pub fn runners_strategy() -> impl Strategy<Value = [Option<&'static str>; 3]> {
    let steal = prop::option::of(prop_oneof![Just("None"), Just("Ready"), Just("Perfect")]);
    (steal.clone(), steal.clone(), steal).prop_map(|(first, second, third)| [first, second, third])
}

/// One event with every count inside its bucket range.
pub fn event_strategy() -> impl Strategy<Value = Value> {
    (
        (1u32..=3, 0u8..=1, 0u8..=3, 0u8..=2, 0u8..=2, 0u8..=3),
        (0u8..9, 0u8..9, 0u32..=2),
        result_label_strategy(),
        runners_strategy(),
        pitch_strategy(),
    )
        .prop_map(|((inning, half, balls, strikes, outs, chem), (batter, pitcher, rbi), result, runners, pitch)| {
            let mut event = event_json(0, inning, half, balls, strikes, outs);
            event["Chemistry Links on Base"] = json!(chem);
            event["Batter Roster Loc"] = json!(batter);
            event["Pitcher Roster Loc"] = json!(pitcher);
            event["RBI"] = json!(rbi);
            event["Result of AB"] = json!(result);
            for (base, steal) in (1u8..=3).zip(runners) {
                if let Some(steal) = steal {
                    event[format!("Runner {}B", base)] = runner_json("Away0", base, steal);
                }
            }
            if let Some(pitch) = pitch {
                event["Pitch"] = pitch;
            }
            event
        })
}

/// Sample record with its events replaced by 1..40 generated ones,
/// renumbered from 0.
pub fn record_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(event_strategy(), 1..40).prop_map(|events| {
        let events: Vec<Value> = events
            .into_iter()
            .enumerate()
            .map(|(num, mut event)| {
                event["Event Num"] = json!(num);
                event
            })
            .collect();
        let mut record = sample_record_json();
        record["Events"] = json!(events);
        record
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, EventCategory, EventSet, FielderPosition};
    use crate::models::GameRecord;
    use crate::schema::SchemaTable;
    use crate::stats::Roster;

    fn bucket_of<const N: usize>(family: &[EventSet; N], num: u32) -> Vec<usize> {
        (0..N).filter(|&i| family[i].contains(&num)).collect()
    }

    proptest! {
        #[test]
        fn test_each_event_lands_in_exactly_its_count_buckets(json in record_strategy()) {
            let record = GameRecord::from_value(json).unwrap();
            let layout = SchemaTable::builtin().resolve(record.version());
            let out = classify(&record, &Roster::new(&record, layout)).unwrap();
            let c = &out.categories;

            for event in &record.events {
                let num = event.event_num;
                prop_assert_eq!(bucket_of(&c.half_inning, num), vec![event.half_inning as usize]);
                prop_assert_eq!(bucket_of(&c.balls, num), vec![event.balls as usize]);
                prop_assert_eq!(bucket_of(&c.strikes, num), vec![event.strikes as usize]);
                prop_assert_eq!(bucket_of(&c.outs, num), vec![event.outs as usize]);
                prop_assert_eq!(bucket_of(&c.chem_links, num), vec![event.chemistry_links as usize]);

                let innings: Vec<u32> =
                    c.innings.iter().filter(|(_, s)| s.contains(&num)).map(|(i, _)| *i).collect();
                prop_assert_eq!(innings, vec![event.inning]);

                let runners = bucket_of(&c.runner_on_base, num);
                if event.bases_empty() {
                    prop_assert_eq!(runners, vec![0]);
                } else {
                    let occupied: Vec<usize> =
                        event.occupied_bases().iter().map(|b| b.number() as usize).collect();
                    prop_assert_eq!(runners, occupied);
                }

                if event.pitch.is_none() {
                    for category in [
                        EventCategory::StarPitch,
                        EventCategory::StarHit,
                        EventCategory::FirstPitchOfAtBat,
                        EventCategory::FullCountPitch,
                        EventCategory::FiveStarDinger,
                        EventCategory::Bobble,
                    ] {
                        prop_assert!(!c.get(category).contains(&num));
                    }
                }
                let fielded = FielderPosition::ALL.iter().filter(|p| c.first_fielder(**p).contains(&num)).count();
                prop_assert_eq!(fielded, usize::from(event.first_fielder().is_some()));
            }
        }

        #[test]
        fn test_classification_is_idempotent(json in record_strategy()) {
            let record = GameRecord::from_value(json).unwrap();
            let layout = SchemaTable::builtin().resolve(record.version());
            let roster = Roster::new(&record, layout);
            let first = classify(&record, &roster).unwrap();
            let second = classify(&record, &roster).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_hits_partition_by_base_count(json in record_strategy()) {
            let record = GameRecord::from_value(json).unwrap();
            let layout = SchemaTable::builtin().resolve(record.version());
            let out = classify(&record, &Roster::new(&record, layout)).unwrap();

            let hit_total: usize = (1..=4)
                .filter_map(EventCategory::hit)
                .map(|c| out.categories.get(c).len())
                .sum();
            prop_assert_eq!(hit_total, record.events.iter().filter(|e| e.is_hit()).count());
        }
    }
}
