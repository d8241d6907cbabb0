use chrono::{DateTime, Utc};

use super::error::ConvertError;
use super::types::{OnFail, SkipReason, Skipped, SourceTrack};
use crate::feed::{extract, Extraction, Feed, FeedError, TRAJECTORY_FEATURE_INDEX};
use crate::g1000::{render_log, Airframe};
use crate::track::{synthesize, Track};

#[derive(Debug, Clone, Copy)]
pub struct Converter {
    pub feature_index: usize,
    pub on_fail: OnFail,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            feature_index: TRAJECTORY_FEATURE_INDEX,
            on_fail: OnFail::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    pub tracks: Vec<SourceTrack>,
    pub skipped: Vec<Skipped>,
}

impl Conversion {
    /// First point of the first source that produced a track.
    pub fn canonical_start(&self) -> Option<DateTime<Utc>> {
        self.tracks
            .iter()
            .find(|t| !t.track.is_empty())
            .and_then(|t| t.track.start())
    }

    pub fn row_count(&self) -> usize {
        self.tracks.iter().map(|t| t.track.len()).sum()
    }

    pub fn render(&self, airframe: &Airframe) -> String {
        let tracks: Vec<Track> = self.tracks.iter().map(|t| t.track.clone()).collect();
        render_log(airframe, &tracks)
    }
}

enum Outcome {
    Track(Track),
    Insufficient(usize),
}

impl Converter {
    pub fn new(feature_index: usize, on_fail: OnFail) -> Self {
        Self {
            feature_index,
            on_fail,
        }
    }

    /// Builds one independent track per source, in the order given.
    pub fn convert<L>(&self, sources: &[String], load: L) -> Result<Conversion, ConvertError>
    where
        L: Fn(&str) -> Result<Feed, FeedError>,
    {
        let mut conversion = Conversion::default();

        for label in sources {
            log::info!("processing source {}", label);

            match self.process(label, &load) {
                Ok(Outcome::Track(track)) => {
                    log::info!("{}: {} points", label, track.len());
                    conversion.tracks.push(SourceTrack {
                        label: label.clone(),
                        track,
                    });
                }
                Ok(Outcome::Insufficient(points)) => {
                    log::warn!("{}: only {} points, skipping", label, points);
                    conversion.skipped.push(Skipped {
                        label: label.clone(),
                        reason: SkipReason::Insufficient { points },
                    });
                }
                Err(source) => match self.on_fail {
                    OnFail::Abort => {
                        return Err(ConvertError::Feed {
                            label: label.clone(),
                            source,
                        })
                    }
                    OnFail::Continue => {
                        log::warn!("{}: {}, skipping", label, source);
                        conversion.skipped.push(Skipped {
                            label: label.clone(),
                            reason: SkipReason::Failed(source.to_string()),
                        });
                    }
                },
            }
        }

        if conversion.tracks.is_empty() {
            return Err(ConvertError::NoTrackData);
        }
        Ok(conversion)
    }

    fn process<L>(&self, label: &str, load: &L) -> Result<Outcome, FeedError>
    where
        L: Fn(&str) -> Result<Feed, FeedError>,
    {
        let feed = load(label)?;
        match extract(&feed, self.feature_index)? {
            Extraction::Points(points) => Ok(Outcome::Track(synthesize(points))),
            Extraction::Insufficient { points } => Ok(Outcome::Insufficient(points)),
        }
    }
}
