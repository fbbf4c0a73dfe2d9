use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatError {
    #[error("Invalid team arg {0}. Only team args of 0 or 1 are accepted")]
    InvalidTeam(i64),

    #[error("Invalid roster arg {0}. Only roster args of 0 to 8 are accepted")]
    InvalidRosterSlot(i64),

    #[error("Invalid base num {0}. Only base numbers of -3 to 3 are accepted")]
    InvalidBase(i64),

    #[error("Too many base selectors provided ({0}). At most 3 bases are accepted")]
    TooManyBases(usize),

    #[error("Base 0 (no runners) cannot be combined with other bases: {0:?}")]
    NoRunnerCombined(Vec<i64>),

    #[error("Unknown event category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid fielder position '{0}'. Accepted: P, C, 1B, 2B, 3B, SS, LF, CF, RF")]
    InvalidFielderPosition(String),

    #[error("Invalid half inning {0}. Only 0 or 1 are accepted")]
    InvalidHalfInning(i64),

    #[error("Invalid event num {num}. Events in this game run from {first} to {last}")]
    InvalidEventNum { num: i64, first: u32, last: u32 },

    #[error("Missing mandatory field: {0}")]
    MissingField(String),

    #[error("Event {event}: {field} = {value} is outside 0..={max}")]
    OutOfRange { event: u32, field: &'static str, value: u32, max: u32 },

    #[error("Malformed game record: {0}")]
    Malformed(String),

    #[error("Schema table error: {0}")]
    SchemaTable(String),
}

impl StatError {
    /// Caller passed a selector outside the accepted range or set.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            StatError::InvalidTeam(_)
            | StatError::InvalidRosterSlot(_)
            | StatError::InvalidBase(_)
            | StatError::TooManyBases(_)
            | StatError::NoRunnerCombined(_)
            | StatError::UnknownCategory(_)
            | StatError::InvalidFielderPosition(_)
            | StatError::InvalidHalfInning(_)
            | StatError::InvalidEventNum { .. } => true,
            StatError::MissingField(_)
            | StatError::OutOfRange { .. }
            | StatError::Malformed(_)
            | StatError::SchemaTable(_) => false,
        }
    }

    /// The ingested record itself is defective; retrying cannot help.
    pub fn is_ingestion_defect(&self) -> bool {
        matches!(
            self,
            StatError::MissingField(_) | StatError::OutOfRange { .. } | StatError::Malformed(_)
        )
    }
}

impl From<serde_json::Error> for StatError {
    fn from(err: serde_json::Error) -> Self {
        let msg = err.to_string();
        if msg.starts_with("missing field") {
            StatError::MissingField(msg)
        } else {
            StatError::Malformed(msg)
        }
    }
}

impl From<serde_yaml::Error> for StatError {
    fn from(err: serde_yaml::Error) -> Self {
        StatError::SchemaTable(err.to_string())
    }
}

pub type StatResult<T> = std::result::Result<T, StatError>;
