//! Angle tables of every built-in motion.
//!
//! Each table is validated while compiling: an empty table or an angle above
//! `MAX_ANGLE` stops the build instead of surfacing at the first step.
use super::{ActuatorAngle, Sequence};
use crate::config::{AUX_ACTUATORS, BODY_ACTUATORS, ROBOT_ACTUATORS};

const fn build<const N: usize>(frames: &'static [[ActuatorAngle; N]]) -> Sequence<N> {
    match Sequence::new(frames) {
        Ok(sequence) => sequence,
        Err(_) => panic!("invalid motion table"),
    }
}

#[rustfmt::skip]
const FORWARD_FRAMES: &[[ActuatorAngle; BODY_ACTUATORS]] = &[
    [ 80, 60, 90, 100, 90, 90,  80, 60, 90,  80, 90, 90, 100, 60, 90,  80, 90, 90],
    [ 80, 90, 90, 100, 90, 90,  80, 90, 90,  80, 90, 90, 100, 90, 90,  80, 90, 90],
    [ 80, 90, 90, 100, 60, 90,  80, 90, 90,  80, 60, 90, 100, 90, 90,  80, 60, 90],
    [100, 90, 90,  80, 60, 90, 100, 90, 90, 100, 60, 90,  80, 90, 90, 100, 60, 90],
    [100, 90, 90,  80, 90, 90, 100, 90, 90, 100, 90, 90,  80, 90, 90, 100, 90, 90],
    [100, 60, 90,  80, 90, 90, 100, 60, 90, 100, 90, 90,  80, 60, 90, 100, 90, 90],
];

#[rustfmt::skip]
const ROTATE_CW_FRAMES: &[[ActuatorAngle; BODY_ACTUATORS]] = &[
    [ 80, 60, 90, 100, 90, 90,  80, 60, 90, 100, 90, 90,  80, 60, 90, 100, 90, 90],
    [ 80, 90, 90, 100, 90, 90,  80, 90, 90, 100, 90, 90,  80, 90, 90, 100, 90, 90],
    [ 80, 90, 90, 100, 60, 90,  80, 90, 90, 100, 60, 90,  80, 90, 90, 100, 60, 90],
    [100, 90, 90,  80, 60, 90, 100, 90, 90,  80, 60, 90, 100, 90, 90,  80, 60, 90],
    [100, 90, 90,  80, 90, 90, 100, 90, 90,  80, 90, 90, 100, 90, 90,  80, 90, 90],
    [100, 60, 90,  80, 90, 90, 100, 60, 90,  80, 90, 90, 100, 60, 90,  80, 90, 90],
];

#[rustfmt::skip]
const BITE_FRAMES: &[[ActuatorAngle; AUX_ACTUATORS]] = &[
    [90, 90, 90, 90],
    [90, 90,  0, 90],
];

#[rustfmt::skip]
const ATTACK_FRAMES: &[[ActuatorAngle; ROBOT_ACTUATORS]] = &[
    [90, 110, 90, 90,  80, 90, 90,  80, 90, 90,  80, 90, 90,  80, 90, 90,  80, 90, 90,  80, 90, 90],
    [90, 110, 90, 90, 110, 90, 90, 110, 90, 90, 110, 90, 90, 110, 90, 90, 110, 90, 90, 110, 90, 90],
];

const GRAB_FRAMES: &[[ActuatorAngle; AUX_ACTUATORS]] = &[[90, 90, 50, 90]];

const DROP_FRAMES: &[[ActuatorAngle; AUX_ACTUATORS]] = &[[90, 90, 150, 90]];

pub(super) static FORWARD: Sequence<BODY_ACTUATORS> = build(FORWARD_FRAMES);
pub(super) static ROTATE_CW: Sequence<BODY_ACTUATORS> = build(ROTATE_CW_FRAMES);
pub(super) static BITE: Sequence<AUX_ACTUATORS> = build(BITE_FRAMES);
pub(super) static ATTACK: Sequence<ROBOT_ACTUATORS> = build(ATTACK_FRAMES);
pub(super) static GRAB: Sequence<AUX_ACTUATORS> = build(GRAB_FRAMES);
pub(super) static DROP: Sequence<AUX_ACTUATORS> = build(DROP_FRAMES);
