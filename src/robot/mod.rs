//! Robot-side types around the motion core.
//!
//! - [`actuator`]: naming of the actuators of the robot-wide bank.
//! - [`commands`]: text commands selecting and driving motions.
//! - [`servo`]: the [`servo::ActuatorDriver`] seam and a PWM servo bank implementing it.
pub mod actuator;
pub mod commands;
pub mod servo;
