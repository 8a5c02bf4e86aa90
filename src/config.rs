//! Compile-time configuration: actuator bank shape, servo timing and firmware plumbing.
use crate::motion::ActuatorAngle;

// ACTUATOR BANK
pub const LEGS: usize = 6;
pub const JOINTS_PER_LEG: usize = 3;
pub const BODY_ACTUATORS: usize = LEGS * JOINTS_PER_LEG;
pub const AUX_ACTUATORS: usize = 4;
pub const ROBOT_ACTUATORS: usize = AUX_ACTUATORS + BODY_ACTUATORS;

/// Highest angle a motion table may hold. Tables are rejected at build time above it.
pub const MAX_ANGLE: ActuatorAngle = 180;

// SERVO TIMING
pub const SERVO_MIN_PULSE_US: u32 = 544; // 0°
pub const SERVO_MAX_PULSE_US: u32 = 2400; // 180°
pub const SERVO_FREQUENCY_HZ: u32 = 50;
pub const PCA_TICKS: u32 = 4096;
pub const PCA_CHANNELS: usize = 16;

/// Time between two sequencer steps while a motion plays.
pub const STEP_PERIOD_MS: u64 = 250;

// TASK PLUMBING
pub const CMD_CHANNEL_SIZE: usize = 4;
pub const FRAME_CHANNEL_SIZE: usize = 4;

// NETWORK
pub const PORT: u16 = 1234;
pub const RX_BUF_SIZE: usize = 256;
pub const TX_BUF_SIZE: usize = 256;
/// Longest command line accepted; longer lines are discarded whole.
pub const LINE_BUF_SIZE: usize = 64;
pub const ACCEPT_BACKOFF_MS: u64 = 500;
