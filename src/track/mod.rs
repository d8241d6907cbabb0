mod geodesy;
mod synthesize;
mod types;

pub use synthesize::{dedup_by_second, synthesize};
pub use types::{Track, TrackPoint};
