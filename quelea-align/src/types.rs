//! Core types for quelea-align.

use serde::Deserialize;

/// Raw ASR segment as emitted by a base recognizer.
///
/// Timestamps are SRT-style strings (`HH:MM:SS.mmm` or `HH:MM:SS,mmm`);
/// parsing happens in [`crate::timestamp`].
#[derive(Clone, Debug, Deserialize)]
pub struct RawSegment {
    /// Segment identifier
    pub id: u32,
    /// Source audio file name
    pub file_name: String,
    /// Start timestamp string
    pub start_time: String,
    /// End timestamp string
    pub end_time: String,
    /// Transcribed text
    pub transcript: String,
}

impl RawSegment {
    /// Create a new raw segment.
    pub fn new(
        id: u32,
        file_name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            id,
            file_name: file_name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            transcript: transcript.into(),
        }
    }
}

/// Segment boundaries in seconds, derived from parsed timestamps.
///
/// Exists only between timestamp normalization and manifest construction.
#[derive(Clone, Copy, Debug)]
pub struct Timing {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Timing {
    /// Create a new timing span.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Segment duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
