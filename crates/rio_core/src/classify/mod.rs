//! Event classification: a single pass over a game's events that fills the
//! category buckets and the per-character participation index.

pub mod category;
pub mod character_index;
pub mod engine;

pub use category::{CategoryIndex, EventCategory, EventSet, FielderPosition};
pub use character_index::{CharacterEventIndex, CharacterEvents};
pub use engine::{classify, Classification, RosterLookup};

#[cfg(test)]
mod proptest_gen;
