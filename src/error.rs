//! Error type shared by every cosmology operation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmologyError {
    /// `count_of` was asked for a collection the Cosmology does not track.
    #[error("unknown collection: '{0}'")]
    UnknownCollection(String),

    /// Key access on an Element (or one of its specializations) missed.
    #[error("{kind} has no attribute '{key}'")]
    UnknownAttribute { kind: String, key: String },

    /// A typed field was assigned a value of the wrong kind.
    #[error("attribute '{key}' expects {expected}, got {found}")]
    AttributeType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Events can only be attached to days the timeline has reached.
    #[error("day {day} is beyond the timeline (last day is {last})")]
    DayOutOfRange { day: usize, last: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CosmologyError>;

impl From<std::io::Error> for CosmologyError {
    fn from(err: std::io::Error) -> Self {
        CosmologyError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CosmologyError {
    fn from(err: serde_json::Error) -> Self {
        CosmologyError::Config(err.to_string())
    }
}
