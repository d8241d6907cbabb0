use chrono::{DateTime, Utc};

pub const UTC_OFFSET: &str = "-00:00";
pub const PITCH: &str = "0";
pub const BANK: &str = "0";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_feet: i64,
    pub timestamp: DateTime<Utc>,
    pub speed_knots: Option<i64>,
    pub heading_degrees: Option<i64>,
}

impl TrackPoint {
    /// `yyyy-MM-dd` in UTC.
    pub fn date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// `HH:mm:ss` in UTC.
    pub fn time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn utc_offset(&self) -> &'static str {
        UTC_OFFSET
    }

    pub fn pitch(&self) -> &'static str {
        PITCH
    }

    pub fn bank(&self) -> &'static str {
        BANK
    }
}

/// Deduplicated, speed and heading annotated points of one source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub points: Vec<TrackPoint>,
}

impl Track {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.points.first().map(|p| p.timestamp)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.points.last().map(|p| p.timestamp)
    }
}
