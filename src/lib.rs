//! Library root for the spider motion sequencer.
//!
//! Re-exports all main modules: [`motion`], [`sequencer`], [`robot`], and, with the
//! `firmware` feature, the embassy [`tasks`] driving the real robot.
//! The motion core is plain `no_std` logic and is tested on the host.
#![no_std]

pub mod config;
pub mod error;
pub mod motion;
pub mod robot;
pub mod sequencer;
#[cfg(feature = "firmware")]
pub mod tasks;

pub use error::{ConstructionError, MotionError};
pub use motion::catalog::get_motion;
pub use motion::{
    ActuatorAngle, Category, Direction, Frame, MotionDescriptor, MotionId, MotionPlayer, Sequence,
};
pub use sequencer::Sequencer;
