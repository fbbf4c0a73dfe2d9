//! Test Fixtures Module
//!
//! Shared stat-file builders for unit tests.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::test_fixtures::*;
//! ```

use serde_json::{json, Map, Value};

use crate::schema::{SchemaTable, Side};
use crate::stats::ROSTER_SIZE;

// =============================================================================
// Characters
// =============================================================================

/// One `Character Game Stats` entry. Slot 8 pitched the whole game, slot 0 is
/// captain, and the away captain is starred.
pub fn character_json(side: Side, slot: u8) -> Value {
    let team = match side {
        Side::Away => "0",
        Side::Home => "1",
    };
    let pitcher = slot == 8;
    json!({
        "Team": team,
        "RosterID": slot,
        "CharID": format!("{}{}", side.label(), slot),
        "Superstar": u8::from(side == Side::Away && slot == 0),
        "Captain": u8::from(slot == 0),
        "Fielding Hand": "Right",
        "Batting Hand": if slot % 2 == 0 { "Right" } else { "Left" },
        "Defensive Stats": {
            "Batters Faced": if pitcher { 30 } else { 0 },
            "Runs Allowed": if pitcher { 3 } else { 0 },
            "Batters Walked": if pitcher { 1 } else { 0 },
            "Batters Hit": if pitcher { 1 } else { 0 },
            "Hits Allowed": if pitcher { 6 } else { 0 },
            "HRs Allowed": if pitcher { 1 } else { 0 },
            "Pitches Thrown": if pitcher { 110 } else { 0 },
            "Stamina": if pitcher { 2 } else { 10 },
            "Was Pitcher": u8::from(pitcher),
            "Strikeouts": if pitcher { 5 } else { 0 },
            "Star Pitches Thrown": if pitcher { 1 } else { 0 },
            "Big Plays": 0,
            "Outs Pitched": if pitcher { 27 } else { 0 },
            "Pitches Per Position": [ if pitcher { json!({ "P": 110 }) } else { json!({}) } ],
            "Outs Per Position": [ if pitcher { json!({ "P": 27 }) } else { json!({}) } ]
        },
        "Offensive Stats": {
            "At Bats": if slot == 1 { 4 } else { 3 },
            "Hits": 1,
            "Singles": 1,
            "Doubles": 0,
            "Triples": 0,
            "Homeruns": 0,
            "Successful Bunts": 0,
            "Sac Flys": 0,
            "Strikeouts": 1,
            "Walks (4 Balls)": u8::from(slot == 1),
            "Walks (Hit)": 0,
            "RBI": 0,
            "Bases Stolen": 0,
            "Star Hits": 0
        }
    })
}

// =============================================================================
// Events
// =============================================================================

/// Bare event: bases empty, no pitch, batter in slot 2, pitcher in slot 8.
pub fn event_json(num: u32, inning: u32, half: u8, balls: u8, strikes: u8, outs: u8) -> Value {
    json!({
        "Event Num": num,
        "Inning": inning,
        "Half Inning": half,
        "Away Score": 0,
        "Home Score": 0,
        "Balls": balls,
        "Strikes": strikes,
        "Outs": outs,
        "Star Chance": 0,
        "Away Stars": 0,
        "Home Stars": 0,
        "Pitcher Stamina": 10,
        "Chemistry Links on Base": 0,
        "Pitcher Roster Loc": 8,
        "Batter Roster Loc": 2,
        "Catcher Roster Loc": 1,
        "RBI": 0,
        "Num Outs During Play": 0,
        "Result of AB": "None"
    })
}

pub fn runner_json(char_id: &str, base: u8, steal: &str) -> Value {
    json!({
        "Runner Roster Loc": 0,
        "Runner Char Id": char_id,
        "Runner Initial Base": base,
        "Out Type": "None",
        "Out Location": 0,
        "Steal": steal,
        "Runner Result Base": base
    })
}

pub fn pitch_json(star_pitch: u8, swing: &str, contact: Option<Value>) -> Value {
    let mut pitch = json!({
        "Pitcher Team Id": 1,
        "Pitcher Char Id": "Home8",
        "Pitch Type": "Curve",
        "Charge Type": "N/A",
        "Star Pitch": star_pitch,
        "Pitch Speed": 140,
        "Type of Swing": swing
    });
    if let Some(contact) = contact {
        pitch["Contact"] = contact;
    }
    pitch
}

pub fn contact_json(five_star: u8, fielder: Option<Value>) -> Value {
    let mut contact = json!({
        "Type of Contact": "Nice - Right",
        "Star Swing Five-Star": five_star,
        "Contact Result - Primary": "Landed",
        "Contact Result - Secondary": "Landed"
    });
    if let Some(fielder) = fielder {
        contact["First Fielder"] = fielder;
    }
    contact
}

pub fn fielder_json(position: &str, character: &str, action: &str, manual: &str, bobble: &str) -> Value {
    json!({
        "Fielder Roster Location": 0,
        "Fielder Position": position,
        "Fielder Character": character,
        "Fielder Action": action,
        "Fielder Manual Selected": manual,
        "Fielder Bobble": bobble
    })
}

/// Ten events over three innings:
///
/// | # | situation |
/// |---|-----------|
/// | 0 | first pitch, taken |
/// | 1 | star-swing single to LF, sliding catch attempt |
/// | 2 | first-pitch star-swing single, runner on 1B |
/// | 3 | RBI double to CF, walljump + bobble, manual select, steal from 1B |
/// | 4 | star pitch, five-star dinger HR, no fielder |
/// | 5 | full-count strikeout |
/// | 6 | no pitch, runner on 3B stealing |
/// | 7 | walk (ball four) |
/// | 8 | hit by pitch |
/// | 9 | double play to SS, runner on 1B |
fn sample_events() -> Vec<Value> {
    let mut events = Vec::new();

    let mut e = event_json(0, 1, 0, 0, 0, 0);
    e["Pitch"] = pitch_json(0, "None", None);
    events.push(e);

    let mut e = event_json(1, 1, 0, 0, 1, 0);
    e["Result of AB"] = json!("Single");
    e["Pitch"] = pitch_json(
        0,
        "Star",
        Some(contact_json(0, Some(fielder_json("LF", "Home6", "Sliding", "No Selected Char", "None")))),
    );
    events.push(e);

    let mut e = event_json(2, 1, 0, 0, 0, 0);
    e["Batter Roster Loc"] = json!(3);
    e["Runner 1B"] = runner_json("Away2", 1, "None");
    e["Result of AB"] = json!("Single");
    e["Pitch"] = pitch_json(
        0,
        "Star",
        Some(contact_json(0, Some(fielder_json("RF", "Home7", "None", "No Selected Char", "None")))),
    );
    events.push(e);

    let mut e = event_json(3, 1, 0, 1, 1, 0);
    e["Batter Roster Loc"] = json!(4);
    e["Chemistry Links on Base"] = json!(2);
    e["Runner 1B"] = runner_json("Away3", 1, "Ready");
    e["Runner 2B"] = runner_json("Away2", 2, "None");
    e["Result of AB"] = json!("Double");
    e["RBI"] = json!(1);
    e["Pitch"] = pitch_json(
        0,
        "Charge",
        Some(contact_json(0, Some(fielder_json("CF", "Home5", "Walljump", "Home5", "Fumble")))),
    );
    events.push(e);

    let mut e = event_json(4, 1, 1, 0, 0, 0);
    e["Result of AB"] = json!("HR");
    e["RBI"] = json!(1);
    e["Pitch"] = pitch_json(1, "Star", Some(contact_json(1, None)));
    events.push(e);

    let mut e = event_json(5, 2, 0, 3, 2, 1);
    e["Batter Roster Loc"] = json!(5);
    e["Result of AB"] = json!("Strikeout");
    e["Pitch"] = pitch_json(0, "Slap", None);
    events.push(e);

    let mut e = event_json(6, 2, 0, 1, 2, 2);
    e["Batter Roster Loc"] = json!(6);
    e["Runner 3B"] = runner_json("Away4", 3, "Perfect");
    events.push(e);

    let mut e = event_json(7, 2, 1, 3, 1, 0);
    e["Batter Roster Loc"] = json!(0);
    e["Result of AB"] = json!("Walk BB");
    e["Pitch"] = pitch_json(0, "None", None);
    events.push(e);

    let mut e = event_json(8, 3, 0, 0, 0, 0);
    e["Batter Roster Loc"] = json!(1);
    e["Result of AB"] = json!("Walk HBP");
    e["Pitch"] = pitch_json(0, "None", None);
    events.push(e);

    let mut e = event_json(9, 3, 1, 1, 1, 2);
    e["Batter Roster Loc"] = json!(3);
    e["Runner 1B"] = runner_json("Home0", 1, "None");
    e["Result of AB"] = json!("Ground Ball Double Play");
    e["Pitch"] = pitch_json(
        0,
        "Slap",
        Some(contact_json(0, Some(fielder_json("SS", "Away6", "None", "No Selected Char", "None")))),
    );
    events.push(e);

    events
}

// =============================================================================
// Records
// =============================================================================

/// A complete current-version (1.9.5) stat file with 18 characters keyed
/// `Away Roster n` / `Home Roster n`.
pub fn sample_record_json() -> Value {
    let mut characters = Map::new();
    for side in [Side::Away, Side::Home] {
        for slot in 0..ROSTER_SIZE {
            characters.insert(format!("{} Roster {}", side.label(), slot), character_json(side, slot));
        }
    }

    json!({
        "GameID": "1,2A,F3",
        "Date - Start": "1686355255",
        "Date - End": "1686357055",
        "Ranked": 1,
        "StadiumID": "Mario Stadium",
        "Away Player": "AwayPlayer",
        "Home Player": "HomePlayer",
        "Away Score": 3,
        "Home Score": 5,
        "Innings Selected": 3,
        "Innings Played": 3,
        "Quitter Team": "",
        "Average Ping": 12,
        "Lag Spikes": 0,
        "Version": "1.9.5",
        "Character Game Stats": characters,
        "Events": sample_events()
    })
}

/// Rewrite the roster keys of a current-version file into the layout an older
/// `version` used, and stamp that version on it.
pub fn to_old_schema(mut json: Value, version: &str) -> Value {
    let layout = SchemaTable::builtin().resolve(version);
    let mut renamed = Map::new();
    if let Some(Value::Object(characters)) = json.get_mut("Character Game Stats").map(Value::take) {
        for (key, stat) in characters {
            let (side, slot) = match key.split_once(" Roster ") {
                Some(("Away", slot)) => (Side::Away, slot),
                Some(("Home", slot)) => (Side::Home, slot),
                _ => {
                    renamed.insert(key, stat);
                    continue;
                }
            };
            let slot: u8 = slot.parse().unwrap();
            renamed.insert(layout.roster_key(layout.team_of(side), slot), stat);
        }
    }
    json["Character Game Stats"] = Value::Object(renamed);
    json["Version"] = json!(version);
    json
}
