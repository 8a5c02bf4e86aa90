//! Error types of the motion core.
//!
//! Lookups and cursor operations fail with [`MotionError`]; building a motion table
//! fails with [`ConstructionError`]. Neither is transient, so nothing here is retried.
use core::fmt::{self, Display, Formatter};

use crate::motion::{ActuatorAngle, MotionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// The name does not match any motion of the catalog.
    UnknownMotion,
    /// A frame index outside `[0, frame_count)` was requested.
    IndexOutOfRange { index: usize, frame_count: usize },
    /// The operation does not apply to this motion's category (e.g. reversing `bite`).
    Unsupported { motion: MotionId },
    /// The player has no motion bound.
    NotBound,
}

impl Display for MotionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::UnknownMotion => f.write_str("unknown motion"),
            MotionError::IndexOutOfRange { index, frame_count } => {
                write!(f, "frame {index} out of range ({frame_count} frames)")
            }
            MotionError::Unsupported { motion } => {
                write!(f, "operation not supported by motion {motion}")
            }
            MotionError::NotBound => f.write_str("no motion bound"),
        }
    }
}

impl core::error::Error for MotionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    EmptySequence,
    AngleOutOfRange {
        frame: usize,
        actuator: usize,
        angle: ActuatorAngle,
    },
}

impl Display for ConstructionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::EmptySequence => f.write_str("motion has no frames"),
            ConstructionError::AngleOutOfRange {
                frame,
                actuator,
                angle,
            } => write!(
                f,
                "angle {angle} of actuator {actuator} in frame {frame} exceeds the servo range"
            ),
        }
    }
}

impl core::error::Error for ConstructionError {}
