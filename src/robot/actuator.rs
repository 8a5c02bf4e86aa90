//! Actuator identification for logging.
//!
//! The robot-wide bank holds the auxiliary actuators first, then the legs in
//! table order, [`JOINTS_PER_LEG`] actuators each.
use core::fmt::Display;

use crate::config::{AUX_ACTUATORS, JOINTS_PER_LEG, ROBOT_ACTUATORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuator {
    Auxiliary(usize),
    Joint { leg: usize, joint: usize },
}

impl Actuator {
    pub fn index(self) -> usize {
        match self {
            Actuator::Auxiliary(i) => i,
            Actuator::Joint { leg, joint } => AUX_ACTUATORS + leg * JOINTS_PER_LEG + joint,
        }
    }
}

impl TryFrom<usize> for Actuator {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            i if i < AUX_ACTUATORS => Ok(Actuator::Auxiliary(i)),
            i if i < ROBOT_ACTUATORS => {
                let body = i - AUX_ACTUATORS;
                Ok(Actuator::Joint {
                    leg: body / JOINTS_PER_LEG,
                    joint: body % JOINTS_PER_LEG,
                })
            }
            i => Err(i),
        }
    }
}

impl Display for Actuator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Actuator::Auxiliary(i) => write!(f, "aux {i}"),
            Actuator::Joint { leg, joint } => write!(f, "leg {leg} joint {joint}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_layout() {
        assert_eq!(Actuator::try_from(3), Ok(Actuator::Auxiliary(3)));
        assert_eq!(
            Actuator::try_from(4),
            Ok(Actuator::Joint { leg: 0, joint: 0 })
        );
        assert_eq!(
            Actuator::try_from(21),
            Ok(Actuator::Joint { leg: 5, joint: 2 })
        );
        assert_eq!(Actuator::try_from(22), Err(22));

        for i in 0..ROBOT_ACTUATORS {
            assert_eq!(Actuator::try_from(i).map(Actuator::index), Ok(i));
        }
    }
}
