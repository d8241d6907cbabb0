use chrono::{DateTime, Utc};

pub const FEET_PER_METER: f64 = 3.280839895;

/// One decoded coordinate/time pair of a feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude_meters: f64,
    pub timestamp: DateTime<Utc>,
}

impl RawPoint {
    pub fn altitude_feet(&self) -> i64 {
        meters_to_feet(self.altitude_meters)
    }
}

pub fn meters_to_feet(meters: f64) -> i64 {
    (meters * FEET_PER_METER).round() as i64
}
