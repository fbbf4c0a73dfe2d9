//! Field decoders for values Rio writes inconsistently across versions
//! (numbers as strings, strings as numbers).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_string))
}

/// `"Team"` is `"0"` in some versions and `0` in others.
pub(crate) fn team_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s.trim().parse::<u8>().map_err(D::Error::custom),
        StringOrNumber::Int(i) => u8::try_from(i).map_err(D::Error::custom),
        StringOrNumber::Float(f) => Err(D::Error::custom(format!("team number {} is not an integer", f))),
    }
}

pub(crate) fn none_label() -> String {
    "None".to_string()
}
