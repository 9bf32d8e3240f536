//! Joint rotations from pose, hand and face landmarks.
//!
//! Landmark sets from a MediaPipe-style detector go in, fixed-length arrays
//! of per-joint quaternions come out: 36 slots for pose, 21 per hand and 4
//! for the face. Missing sets give all-NaN arrays; joints without usable
//! geometry give zero placeholders.

pub mod composer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod frame;
pub mod io;
pub mod landmarks;
pub mod math;
pub mod origin;
pub mod synthetic;
pub mod topology;
pub mod types;

pub use composer::{HolisticRotations, composite, pair, single};
pub use config::{CoordinateSystem, ExtractorConfig};
pub use extractor::RotationExtractor;
pub use landmarks::{LandmarkFrame, LandmarkKind, LandmarkSet};
pub use types::{JointRotation, RotationArray};
