use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

use super::error::{FeedError, ShapeError};
use super::types::Feed;

impl Feed {
    pub fn parse(json: &str, origin: &str) -> Result<Self, FeedError> {
        serde_json::from_str(json).map_err(|source| FeedError::Decode {
            path: origin.to_string(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, FeedError> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| FeedError::Fetch {
            path: origin.clone(),
            source,
        })?;
        Self::parse(&content, &origin)
    }
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ShapeError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| ShapeError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
