//! Asynchronous tasks running the robot.
//!
//! This module contains Embassy async tasks for the robot's runtime, including:
//! - [`sequencer_task`]: Owns the [`Sequencer`](crate::Sequencer) and steps it on a fixed cadence.
//! - [`servo_task`]: Drives the PCA9685 boards with the frames it receives.
//! - [`net_task`]: Joins the wifi network and serves the TCP command protocol.
//!
//! Tasks are spawned from `main.rs` and communicate via the channels below.
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use crate::config::{CMD_CHANNEL_SIZE, FRAME_CHANNEL_SIZE};
use crate::motion::Frame;
use crate::robot::commands::SequencerCommand;

pub mod net_task;
pub mod sequencer_task;
pub mod servo_task;

/// Commands from the network to the sequencer.
pub static CMD_CHANNEL: Channel<CriticalSectionRawMutex, SequencerCommand, CMD_CHANNEL_SIZE> =
    Channel::new();

/// Frames from the sequencer to the servo boards.
pub static FRAME_CHANNEL: Channel<CriticalSectionRawMutex, Frame, FRAME_CHANNEL_SIZE> =
    Channel::new();
