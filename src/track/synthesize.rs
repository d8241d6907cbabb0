use std::collections::HashSet;

use super::geodesy::{bearing_degrees, distance_nm};
use super::types::{Track, TrackPoint};
use crate::feed::RawPoint;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

pub fn synthesize(points: Vec<RawPoint>) -> Track {
    let points = dedup_by_second(points);
    let mut derived = derive_fields(&points);
    backfill_first(&mut derived);
    Track { points: derived }
}

/// Drops every point whose timestamp, truncated to the second, was already seen.
pub fn dedup_by_second(points: Vec<RawPoint>) -> Vec<RawPoint> {
    let mut seen = HashSet::with_capacity(points.len());
    let before = points.len();
    let kept: Vec<RawPoint> = points
        .into_iter()
        .filter(|p| seen.insert(p.timestamp.timestamp()))
        .collect();
    if kept.len() != before {
        log::debug!("dropped {} duplicate timestamps", before - kept.len());
    }
    kept
}

/// Speed and heading of each point relative to its predecessor. The first
/// point is compared with itself and so never moves.
fn derive_fields(points: &[RawPoint]) -> Vec<TrackPoint> {
    let (derived, _) = points.iter().fold(
        (Vec::with_capacity(points.len()), None::<&RawPoint>),
        |(mut acc, last), point| {
            let last = last.unwrap_or(point);
            acc.push(derive_point(last, point));
            (acc, Some(point))
        },
    );
    derived
}

fn derive_point(last: &RawPoint, point: &RawPoint) -> TrackPoint {
    let distance = distance_nm(
        last.latitude,
        last.longitude,
        point.latitude,
        point.longitude,
    );

    let (speed_knots, heading_degrees) = if distance == 0.0 {
        (None, None)
    } else {
        let heading = bearing_degrees(
            last.latitude,
            last.longitude,
            point.latitude,
            point.longitude,
        )
        .floor() as i64;
        let elapsed_ms = (point.timestamp - last.timestamp).num_milliseconds();
        let speed = if elapsed_ms > 0 {
            Some((distance / (elapsed_ms as f64 / MILLIS_PER_HOUR)).floor() as i64)
        } else {
            log::warn!(
                "{} moved {:.3} nm in {} ms since {}, leaving speed unset",
                point.timestamp,
                distance,
                elapsed_ms,
                last.timestamp
            );
            None
        };
        (speed, Some(heading))
    };

    TrackPoint {
        latitude: point.latitude,
        longitude: point.longitude,
        altitude_feet: point.altitude_feet(),
        timestamp: point.timestamp,
        speed_knots,
        heading_degrees,
    }
}

fn backfill_first(points: &mut [TrackPoint]) {
    if let [first, second, ..] = points {
        if first.speed_knots.is_none() {
            first.speed_knots = second.speed_knots;
        }
        if first.heading_degrees.is_none() {
            first.heading_degrees = second.heading_degrees;
        }
    }
}
