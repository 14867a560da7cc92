//! quelea-align: segment validation and manifest construction for ASR training data.
//!
//! Converts raw timestamped transcripts from a base recognizer into a
//! filtered, normalized manifest of training samples.
//!
//! # Architecture
//!
//! The pipeline composes three operations, applied to each segment in input
//! order:
//!
//! - [`timestamp`]: SRT-style timestamp strings to floating-point seconds
//! - [`validate`]: duration and content quality gating
//! - [`manifest`]: normalized training-manifest records
//!
//! # Quick Start
//!
//! ```ignore
//! use quelea_align::pipeline::Pipeline;
//! use quelea_align::types::RawSegment;
//!
//! let segments = vec![RawSegment::new(
//!     1,
//!     "lagos_traffic.wav",
//!     "00:00:00.500",
//!     "00:00:04.200",
//!     "Abeg, no vex, road block yakata today.",
//! )];
//!
//! let result = Pipeline::default().process(&segments)?;
//! println!("{} valid, {} discarded", result.entries.len(), result.discarded);
//! ```

pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod timestamp;
pub mod types;
pub mod validate;
