use std::path::PathBuf;
use thiserror::Error;

use crate::feed::FeedError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("source {label}: {source}")]
    Feed {
        label: String,
        #[source]
        source: FeedError,
    },
    #[error("no source produced a track")]
    NoTrackData,
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
