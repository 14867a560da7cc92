//! The segment pipeline: normalize, validate, accumulate.

use crate::error::Result;
use crate::manifest::ManifestEntry;
use crate::timestamp;
use crate::types::{RawSegment, Timing};
use crate::validate::{GateConfig, Verdict};

/// Segment pipeline configured with a quality gate.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    /// Quality gate configuration
    pub gate: GateConfig,
    /// Fail the run on malformed timestamps instead of substituting 0.0
    pub strict_timestamps: bool,
}

/// Outcome of one pipeline invocation.
///
/// Accepted entries preserve relative input order; every rejected segment is
/// counted in `discarded`, so `entries.len() + discarded` equals the input
/// length.
#[derive(Clone, Debug, Default)]
pub struct PipelineResult {
    /// Accepted manifest entries in input order
    pub entries: Vec<ManifestEntry>,
    /// Number of rejected segments
    pub discarded: usize,
}

impl PipelineResult {
    /// Total number of segments processed.
    pub fn total(&self) -> usize {
        self.entries.len() + self.discarded
    }
}

impl Pipeline {
    /// Create a pipeline with the given gate and permissive timestamps.
    pub fn new(gate: GateConfig) -> Self {
        Self {
            gate,
            strict_timestamps: false,
        }
    }

    /// Fail on malformed timestamps instead of substituting 0.0.
    pub fn with_strict_timestamps(mut self, strict: bool) -> Self {
        self.strict_timestamps = strict;
        self
    }

    /// Run every segment through the gate, keeping input order.
    ///
    /// Each rejection is logged with the segment id, the reason, and the
    /// transcript text. Only strict timestamp mode can return an error.
    pub fn process(&self, segments: &[RawSegment]) -> Result<PipelineResult> {
        let mut result = PipelineResult::default();

        for segment in segments {
            let timing = Timing::new(
                self.normalize(&segment.start_time)?,
                self.normalize(&segment.end_time)?,
            );

            match self.gate.check(timing, &segment.transcript) {
                Verdict::Valid => {
                    result.entries.push(ManifestEntry::new(
                        segment.file_name.as_str(),
                        timing,
                        segment.transcript.as_str(),
                    ));
                }
                Verdict::Reject(reason) => {
                    result.discarded += 1;
                    tracing::warn!(
                        id = segment.id,
                        reason = %reason,
                        text = segment.transcript,
                        "discarding segment"
                    );
                }
            }
        }

        Ok(result)
    }

    fn normalize(&self, raw: &str) -> Result<f64> {
        if self.strict_timestamps {
            Ok(timestamp::parse(raw)?)
        } else {
            Ok(timestamp::parse_lossy(raw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_segments() -> Vec<RawSegment> {
        vec![
            RawSegment::new(
                1,
                "lagos_traffic.wav",
                "00:00:00.500",
                "00:00:04.200",
                "Abeg, no vex, road block yakata today.",
            ),
            RawSegment::new(
                2,
                "lagos_traffic.wav",
                "00:00:04.200",
                "00:00:04.800",
                "[silence]",
            ),
            RawSegment::new(
                3,
                "lagos_traffic.wav",
                "00:00:05.000",
                "00:00:15.500",
                "You see say fuel price don go up again? Na wa o.",
            ),
            RawSegment::new(4, "lagos_traffic.wav", "00:00:16.000", "00:00:16.400", "Hmm."),
        ]
    }

    #[test]
    fn filters_mock_asr_output() {
        let result = Pipeline::default().process(&mock_segments()).unwrap();

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.discarded, 2);

        // segments 1 and 3 survive, in input order
        assert!((result.entries[0].offset - 0.5).abs() < 1e-9);
        assert!((result.entries[0].duration - 3.7).abs() < 1e-9);
        assert!((result.entries[1].offset - 5.0).abs() < 1e-9);
        assert!((result.entries[1].duration - 10.5).abs() < 1e-9);
        assert!(result.entries[1].text.starts_with("You see say"));
    }

    #[test]
    fn counts_balance_input_length() {
        let segments = mock_segments();
        let result = Pipeline::default().process(&segments).unwrap();

        assert_eq!(result.total(), segments.len());
    }

    #[test]
    fn handles_empty_input() {
        let result = Pipeline::default().process(&[]).unwrap();

        assert!(result.entries.is_empty());
        assert_eq!(result.discarded, 0);
    }

    #[test]
    fn permissive_mode_zeroes_malformed_timestamps() {
        // both boundaries collapse to 0.0, so the segment is too short
        let segments = vec![RawSegment::new(1, "a.wav", "garbage", "nonsense", "text")];

        let result = Pipeline::default().process(&segments).unwrap();

        assert!(result.entries.is_empty());
        assert_eq!(result.discarded, 1);
    }

    #[test]
    fn strict_mode_fails_on_malformed_timestamp() {
        let segments = vec![RawSegment::new(
            1,
            "a.wav",
            "garbage",
            "00:00:05.000",
            "text",
        )];

        let result = Pipeline::default()
            .with_strict_timestamps(true)
            .process(&segments);

        assert!(result.is_err());
    }

    #[test]
    fn custom_bounds_change_admission() {
        let pipeline = Pipeline::new(GateConfig::new(0.1, 30.0));

        let segments = vec![RawSegment::new(
            4,
            "lagos_traffic.wav",
            "00:00:16.000",
            "00:00:16.400",
            "Hmm.",
        )];

        let result = pipeline.process(&segments).unwrap();

        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.discarded, 0);
    }
}
