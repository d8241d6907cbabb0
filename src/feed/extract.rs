use serde_json::Value;

use super::error::ShapeError;
use super::parsing::parse_timestamp;
use super::point::RawPoint;
use super::types::Feed;

/// Features 0 and 1 are the origin and destination markers.
pub const TRAJECTORY_FEATURE_INDEX: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Points(Vec<RawPoint>),
    /// Fewer than two points, nothing to derive a track from.
    Insufficient { points: usize },
}

pub fn extract(feed: &Feed, feature_index: usize) -> Result<Extraction, ShapeError> {
    let feature = feed
        .features
        .get(feature_index)
        .ok_or(ShapeError::FeatureOutOfRange {
            index: feature_index,
            count: feed.features.len(),
        })?;

    let coordinates = feature
        .geometry
        .as_ref()
        .and_then(|g| g.coordinates.as_array())
        .ok_or(ShapeError::MissingCoordinates {
            index: feature_index,
        })?;
    let times = feature.times().ok_or(ShapeError::MissingTimestamps {
        index: feature_index,
    })?;

    if coordinates.len() != times.len() {
        return Err(ShapeError::LengthMismatch {
            coordinates: coordinates.len(),
            timestamps: times.len(),
        });
    }

    let points = coordinates
        .iter()
        .zip(times)
        .enumerate()
        .map(|(i, (coordinate, time))| decode_point(i, coordinate, time))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "feature {} ({}): {} points",
        feature_index,
        feature.name().unwrap_or("unnamed"),
        points.len()
    );

    if points.len() < 2 {
        return Ok(Extraction::Insufficient {
            points: points.len(),
        });
    }
    Ok(Extraction::Points(points))
}

fn decode_point(index: usize, coordinate: &Value, time: &str) -> Result<RawPoint, ShapeError> {
    let invalid = || ShapeError::InvalidCoordinate { index };
    let components = coordinate
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(invalid)?;

    // KML allows the altitude to be omitted
    let (longitude, latitude, altitude_meters) = match components.as_slice() {
        [lon, lat] => (*lon, *lat, 0.0),
        [lon, lat, alt, ..] => (*lon, *lat, *alt),
        _ => return Err(invalid()),
    };

    Ok(RawPoint {
        longitude,
        latitude,
        altitude_meters,
        timestamp: parse_timestamp(time)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::point::meters_to_feet;

    fn feed_json(coordinates: &str, times: &str) -> String {
        format!(
            r#"{{
                "type": "FeatureCollection",
                "features": [
                    {{"type": "Feature", "properties": {{"name": "KBOS"}}, "geometry": {{"type": "Point", "coordinates": [-71.0, 42.3]}}}},
                    {{"type": "Feature", "properties": {{"name": "KJFK"}}, "geometry": {{"type": "Point", "coordinates": [-73.7, 40.6]}}}},
                    {{"type": "Feature",
                      "properties": {{"name": "track", "coordinateProperties": {{"times": {times}}}}},
                      "geometry": {{"type": "LineString", "coordinates": {coordinates}}}}}
                ]
            }}"#
        )
    }

    #[test]
    fn extracts_trajectory_feature() {
        let json = feed_json(
            "[[-70.0, 40.0, 100], [-70.01, 40.01, 200]]",
            r#"["2024-03-01T12:00:00Z", "2024-03-01T12:01:00Z"]"#,
        );
        let feed = Feed::parse(&json, "test").unwrap();
        let Extraction::Points(points) = extract(&feed, TRAJECTORY_FEATURE_INDEX).unwrap() else {
            panic!("expected points");
        };
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].longitude, -70.01);
        assert_eq!(points[1].latitude, 40.01);
        assert_eq!(points[1].altitude_meters, 200.0);
        assert_eq!(points[1].altitude_feet(), 656);
        assert_eq!(points[1].timestamp.to_rfc3339(), "2024-03-01T12:01:00+00:00");
    }

    #[test]
    fn reads_legacy_coord_times() {
        let json = r#"{"features": [{}, {}, {
            "properties": {"coordTimes": ["2024-03-01T12:00:00Z", "2024-03-01T12:00:30Z"]},
            "geometry": {"type": "LineString", "coordinates": [[1.0, 2.0], [1.1, 2.1]]}
        }]}"#;
        let feed = Feed::parse(json, "test").unwrap();
        let Extraction::Points(points) = extract(&feed, 2).unwrap() else {
            panic!("expected points");
        };
        assert_eq!(points[0].altitude_meters, 0.0);
    }

    #[test]
    fn short_trajectories_are_insufficient() {
        let json = feed_json("[[-70.0, 40.0, 100]]", r#"["2024-03-01T12:00:00Z"]"#);
        let feed = Feed::parse(&json, "test").unwrap();
        assert_eq!(
            extract(&feed, 2).unwrap(),
            Extraction::Insufficient { points: 1 }
        );

        let json = feed_json("[]", "[]");
        let feed = Feed::parse(&json, "test").unwrap();
        assert_eq!(
            extract(&feed, 2).unwrap(),
            Extraction::Insufficient { points: 0 }
        );
    }

    #[test]
    fn shape_errors() {
        let json = feed_json(
            "[[-70.0, 40.0, 100], [-70.01, 40.01, 200]]",
            r#"["2024-03-01T12:00:00Z"]"#,
        );
        let feed = Feed::parse(&json, "test").unwrap();
        assert!(matches!(
            extract(&feed, 2),
            Err(ShapeError::LengthMismatch {
                coordinates: 2,
                timestamps: 1
            })
        ));
        assert!(matches!(
            extract(&feed, 5),
            Err(ShapeError::FeatureOutOfRange { index: 5, count: 3 })
        ));
        // marker features carry no timestamps
        assert!(matches!(
            extract(&feed, 0),
            Err(ShapeError::MissingCoordinates { index: 0 })
                | Err(ShapeError::MissingTimestamps { index: 0 })
        ));

        let json = feed_json("[[-70.0], [-70.01, 40.01]]", r#"["2024-03-01T12:00:00Z", "2024-03-01T12:01:00Z"]"#);
        let feed = Feed::parse(&json, "test").unwrap();
        assert!(matches!(
            extract(&feed, 2),
            Err(ShapeError::InvalidCoordinate { index: 0 })
        ));

        let json = feed_json("[[-70.0, 40.0], [-70.01, 40.01]]", r#"["yesterday", "2024-03-01T12:01:00Z"]"#);
        let feed = Feed::parse(&json, "test").unwrap();
        assert!(matches!(
            extract(&feed, 2),
            Err(ShapeError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            Feed::parse("{not json", "broken.geojson"),
            Err(crate::feed::FeedError::Decode { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let path = std::path::Path::new("/nonexistent/flight.geojson");
        assert!(matches!(
            Feed::from_file(path),
            Err(crate::feed::FeedError::Fetch { .. })
        ));
    }

    #[test]
    fn altitude_conversion() {
        assert_eq!(meters_to_feet(1000.0), 3281);
        assert_eq!(meters_to_feet(0.0), 0);
        assert_eq!(meters_to_feet(304.8), 1000);
    }
}
