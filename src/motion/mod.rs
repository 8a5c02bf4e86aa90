//! Precomputed motions and the cursor that plays them.
//!
//! - [`Sequence`] holds the immutable angle frames of one motion.
//! - [`MotionDescriptor`] tags a sequence with its actuator group ([`Category`]).
//! - [`catalog`] resolves motion names to descriptors.
//! - [`player`] walks a descriptor frame by frame, forward or in reverse.
//!
//! Frame data is `'static` and never mutated; all playback state lives in
//! [`player::MotionPlayer`] values owned by whoever drives the actuators.
use core::fmt::{self, Display, Formatter};

use crate::config::{AUX_ACTUATORS, BODY_ACTUATORS, MAX_ANGLE, ROBOT_ACTUATORS};
use crate::error::{ConstructionError, MotionError};
use crate::robot::servo::ActuatorDriver;

pub mod catalog;
pub mod player;
mod tables;

pub use catalog::{Catalog, MotionId, CATALOG};
pub use player::{Direction, MotionPlayer};

/// Target angle in degrees for one actuator.
pub type ActuatorAngle = u8;

/// Actuator group a motion drives. Fixes the length of its frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The six legs, three joints each.
    Body,
    /// Grabber/mouth mechanism.
    Auxiliary,
    /// Auxiliary actuators followed by the body ones.
    FullRobot,
}

impl Category {
    pub const fn actuator_count(self) -> usize {
        match self {
            Category::Body => BODY_ACTUATORS,
            Category::Auxiliary => AUX_ACTUATORS,
            Category::FullRobot => ROBOT_ACTUATORS,
        }
    }

    /// Index of the group's first actuator in the robot-wide bank.
    ///
    /// The bank is laid out like a full-robot frame: auxiliary actuators `0..4`,
    /// body actuators `4..22`.
    pub const fn first_actuator(self) -> usize {
        match self {
            Category::Body => AUX_ACTUATORS,
            Category::Auxiliary | Category::FullRobot => 0,
        }
    }

    pub const fn is_reversible(self) -> bool {
        matches!(self, Category::Body)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Category::Body => f.write_str("body"),
            Category::Auxiliary => f.write_str("auxiliary"),
            Category::FullRobot => f.write_str("full robot"),
        }
    }
}

/// Ordered, non-empty list of frames sharing the same actuator count `N`.
#[derive(Debug)]
pub struct Sequence<const N: usize> {
    frames: &'static [[ActuatorAngle; N]],
}

impl<const N: usize> Sequence<N> {
    /// Validates the frames: at least one frame, every angle within `0..=MAX_ANGLE`.
    pub const fn new(frames: &'static [[ActuatorAngle; N]]) -> Result<Self, ConstructionError> {
        if frames.is_empty() {
            return Err(ConstructionError::EmptySequence);
        }

        let mut frame = 0;
        while frame < frames.len() {
            let mut actuator = 0;
            while actuator < N {
                let angle = frames[frame][actuator];
                if angle > MAX_ANGLE {
                    return Err(ConstructionError::AngleOutOfRange {
                        frame,
                        actuator,
                        angle,
                    });
                }
                actuator += 1;
            }
            frame += 1;
        }

        Ok(Self { frames })
    }

    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&'static [ActuatorAngle; N]> {
        self.frames.get(index)
    }
}

/// One snapshot of target angles for every actuator of a group.
///
/// Borrowed from the static tables, so copying a frame never copies angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    category: Category,
    angles: &'static [ActuatorAngle],
}

impl Frame {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn angles(&self) -> &'static [ActuatorAngle] {
        self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// `(actuator, angle)` pairs, actuator being the index in the robot-wide bank.
    pub fn targets(&self) -> impl Iterator<Item = (usize, ActuatorAngle)> + 'static {
        let first = self.category.first_actuator();
        self.angles
            .iter()
            .enumerate()
            .map(move |(i, &angle)| (first + i, angle))
    }

    /// Forwards every target to the driver, stopping at the first failure.
    pub fn apply<D: ActuatorDriver>(&self, driver: &mut D) -> Result<(), D::Error> {
        for (actuator, angle) in self.targets() {
            driver.set_angle(actuator, angle)?;
        }
        Ok(())
    }
}

/// Read-only view of one motion of the catalog.
#[derive(Debug, Clone, Copy)]
pub enum MotionDescriptor {
    Body(&'static Sequence<BODY_ACTUATORS>),
    Auxiliary(&'static Sequence<AUX_ACTUATORS>),
    FullRobot(&'static Sequence<ROBOT_ACTUATORS>),
}

impl MotionDescriptor {
    pub fn category(&self) -> Category {
        match self {
            MotionDescriptor::Body(_) => Category::Body,
            MotionDescriptor::Auxiliary(_) => Category::Auxiliary,
            MotionDescriptor::FullRobot(_) => Category::FullRobot,
        }
    }

    pub fn frame_count(&self) -> usize {
        match self {
            MotionDescriptor::Body(seq) => seq.frame_count(),
            MotionDescriptor::Auxiliary(seq) => seq.frame_count(),
            MotionDescriptor::FullRobot(seq) => seq.frame_count(),
        }
    }

    pub fn actuator_count(&self) -> usize {
        self.category().actuator_count()
    }

    pub fn frame_at(&self, index: usize) -> Result<Frame, MotionError> {
        let angles: Option<&'static [ActuatorAngle]> = match self {
            MotionDescriptor::Body(seq) => seq.frame(index).map(|f| f.as_slice()),
            MotionDescriptor::Auxiliary(seq) => seq.frame(index).map(|f| f.as_slice()),
            MotionDescriptor::FullRobot(seq) => seq.frame(index).map(|f| f.as_slice()),
        };

        angles
            .map(|angles| Frame {
                category: self.category(),
                angles,
            })
            .ok_or(MotionError::IndexOutOfRange {
                index,
                frame_count: self.frame_count(),
            })
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        (0..self.frame_count()).filter_map(|i| self.frame_at(i).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EMPTY: [[ActuatorAngle; AUX_ACTUATORS]; 0] = [];
    static TOO_WIDE: [[ActuatorAngle; AUX_ACTUATORS]; 2] = [[90, 90, 90, 90], [90, 181, 90, 90]];

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            Sequence::new(&EMPTY).unwrap_err(),
            ConstructionError::EmptySequence
        );
    }

    #[test]
    fn out_of_range_angle_is_located() {
        assert_eq!(
            Sequence::new(&TOO_WIDE).unwrap_err(),
            ConstructionError::AngleOutOfRange {
                frame: 1,
                actuator: 1,
                angle: 181
            }
        );
    }

    #[test]
    fn descriptor_reports_shape() {
        static SEQ: Sequence<AUX_ACTUATORS> =
            match Sequence::new(&[[90, 90, 90, 90], [10, 20, 30, 40]]) {
                Ok(seq) => seq,
                Err(_) => panic!("invalid test table"),
            };
        let motion = MotionDescriptor::Auxiliary(&SEQ);

        assert_eq!(motion.category(), Category::Auxiliary);
        assert_eq!(motion.frame_count(), 2);
        assert_eq!(motion.actuator_count(), 4);
        assert_eq!(motion.frame_at(1).unwrap().angles(), &[10, 20, 30, 40]);
        assert_eq!(
            motion.frame_at(2),
            Err(MotionError::IndexOutOfRange {
                index: 2,
                frame_count: 2
            })
        );
        assert_eq!(motion.frames().count(), 2);
    }

    #[test]
    fn body_targets_start_after_auxiliary_actuators() {
        static SEQ: Sequence<BODY_ACTUATORS> = match Sequence::new(&[[90; BODY_ACTUATORS]]) {
            Ok(seq) => seq,
            Err(_) => panic!("invalid test table"),
        };
        let frame = MotionDescriptor::Body(&SEQ).frame_at(0).unwrap();
        let mut targets = frame.targets();

        assert_eq!(targets.next(), Some((AUX_ACTUATORS, 90)));
        assert_eq!(targets.last(), Some((ROBOT_ACTUATORS - 1, 90)));
    }
}
