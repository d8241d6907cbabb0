use serde::Deserialize;

use crate::track::Track;

/// What to do when a source cannot be read or has the wrong shape.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OnFail {
    #[default]
    Abort,
    Continue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceTrack {
    pub label: String,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Insufficient { points: usize },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub label: String,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Insufficient { points } => write!(f, "only {} point(s)", points),
            SkipReason::Failed(reason) => write!(f, "{}", reason),
        }
    }
}
