//! Raw-segment loaders for supported transcript formats.

use color_eyre::Section;
use eyre::{Context, Result, eyre};
use quelea_align::types::RawSegment;
use srtlib::Subtitles;
use std::path::Path;

/// Load raw segments from a transcript file, chosen by extension.
pub fn load_segments(path: &Path, audio: Option<&str>) -> Result<Vec<RawSegment>> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    match extension {
        "json" => from_json(path),
        "srt" => from_srt(path, audio),
        other => Err(eyre!("unsupported transcript format: {other:?}")
            .suggestion("supported inputs are .json segment arrays and .srt subtitles")),
    }
}

/// Load a JSON array of raw segments.
///
/// A record missing a required field fails the whole run.
fn from_json(path: &Path) -> Result<Vec<RawSegment>> {
    let data = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read transcript: {:?}", path.display()))?;

    serde_json::from_str(&data)
        .wrap_err_with(|| format!("malformed segment array: {:?}", path.display()))
}

/// Load an SRT subtitle file, treating each subtitle as one raw segment.
///
/// SRT carries no audio reference, so the file name recorded in the manifest
/// comes from `audio` (default: the input file name with a .wav extension).
/// Timestamps keep SRT's comma form; the pipeline normalizer accepts it.
fn from_srt(path: &Path, audio: Option<&str>) -> Result<Vec<RawSegment>> {
    let audio = match audio {
        Some(name) => name.to_string(),
        None => path
            .with_extension("wav")
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown.wav".to_string()),
    };

    let data = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read subtitles: {:?}", path.display()))?;

    let subtitles = Subtitles::parse_from_str(data)
        .wrap_err_with(|| format!("malformed srt: {:?}", path.display()))?;

    let segments = subtitles
        .to_vec()
        .into_iter()
        .map(|subtitle| {
            RawSegment::new(
                subtitle.num as u32,
                audio.as_str(),
                subtitle.start_time.to_string(),
                subtitle.end_time.to_string(),
                subtitle.text,
            )
        })
        .collect();

    Ok(segments)
}
