use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode feed {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("feed shape error: {0}")]
    Shape(#[from] ShapeError),
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("feature index {index} out of range ({count} features)")]
    FeatureOutOfRange { index: usize, count: usize },
    #[error("feature {index} has no coordinate array")]
    MissingCoordinates { index: usize },
    #[error("feature {index} has no timestamp array")]
    MissingTimestamps { index: usize },
    #[error("{coordinates} coordinates but {timestamps} timestamps")]
    LengthMismatch {
        coordinates: usize,
        timestamps: usize,
    },
    #[error("coordinate {index} is not a [lon, lat, alt] triple")]
    InvalidCoordinate { index: usize },
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
