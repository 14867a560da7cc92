//! Training-manifest records.

use crate::types::Timing;
use serde::Serialize;

/// ISO 639-3 code for Nigerian Pidgin, the target language of the corpus.
pub const LANG: &str = "pcm";

/// One line of the training manifest.
///
/// Field names and order follow the NeMo / HuggingFace manifest convention.
#[derive(Clone, Debug, Serialize)]
pub struct ManifestEntry {
    /// Source audio file
    pub audio_filepath: String,
    /// Segment duration in seconds, rounded to 2 decimals
    pub duration: f64,
    /// Segment start within the audio file, in seconds
    pub offset: f64,
    /// Transcript text, unmodified
    pub text: String,
    /// Language code, fixed for the whole corpus
    pub lang: String,
}

impl ManifestEntry {
    /// Build an entry from validated timing and transcript.
    pub fn new(audio_filepath: impl Into<String>, timing: Timing, text: impl Into<String>) -> Self {
        Self {
            audio_filepath: audio_filepath.into(),
            duration: round2(timing.duration()),
            offset: timing.start,
            text: text.into(),
            lang: LANG.to_string(),
        }
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
