mod error;
mod extract;
mod parsing;
mod point;
mod types;

pub use error::FeedError;
pub use extract::{extract, Extraction, TRAJECTORY_FEATURE_INDEX};
pub use point::RawPoint;
pub use types::Feed;
