//! Name to motion resolution.
//!
//! Callers select motions by [`MotionId`] or by name and get a [`MotionDescriptor`]
//! back; how the angle tables are stored stays private to this module tree.
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use super::{tables, MotionDescriptor};
use crate::error::MotionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionId {
    Forward,
    RotateCw,
    Bite,
    Attack,
    Grab,
    Drop,
}

impl MotionId {
    pub const ALL: [MotionId; 6] = [
        MotionId::Forward,
        MotionId::RotateCw,
        MotionId::Bite,
        MotionId::Attack,
        MotionId::Grab,
        MotionId::Drop,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            MotionId::Forward => "forward",
            MotionId::RotateCw => "rotate_cw",
            MotionId::Bite => "bite",
            MotionId::Attack => "attack",
            MotionId::Grab => "grab",
            MotionId::Drop => "drop",
        }
    }

    /// Descriptor of this motion in the built-in catalog.
    pub fn descriptor(self) -> MotionDescriptor {
        match self {
            MotionId::Forward => MotionDescriptor::Body(&tables::FORWARD),
            MotionId::RotateCw => MotionDescriptor::Body(&tables::ROTATE_CW),
            MotionId::Bite => MotionDescriptor::Auxiliary(&tables::BITE),
            MotionId::Attack => MotionDescriptor::FullRobot(&tables::ATTACK),
            MotionId::Grab => MotionDescriptor::Auxiliary(&tables::GRAB),
            MotionId::Drop => MotionDescriptor::Auxiliary(&tables::DROP),
        }
    }
}

impl Display for MotionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MotionId {
    type Err = MotionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        MotionId::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .ok_or(MotionError::UnknownMotion)
    }
}

/// Set of motions a player may bind to.
#[derive(Debug)]
pub struct Catalog {
    motions: &'static [MotionId],
}

/// Every motion the robot knows.
pub static CATALOG: Catalog = Catalog::new(&MotionId::ALL);

impl Catalog {
    pub const fn new(motions: &'static [MotionId]) -> Self {
        Self { motions }
    }

    pub fn contains(&self, id: MotionId) -> bool {
        self.motions.contains(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = MotionId> + '_ {
        self.motions.iter().copied()
    }

    pub fn get(&self, id: MotionId) -> Result<MotionDescriptor, MotionError> {
        if self.contains(id) {
            Ok(id.descriptor())
        } else {
            Err(MotionError::UnknownMotion)
        }
    }

    /// Resolves a motion name such as `"forward"` or `"bite"`.
    pub fn get_motion(&self, name: &str) -> Result<MotionDescriptor, MotionError> {
        self.resolve(name).map(|(_, descriptor)| descriptor)
    }

    pub fn resolve(&self, name: &str) -> Result<(MotionId, MotionDescriptor), MotionError> {
        let id: MotionId = name.parse()?;
        Ok((id, self.get(id)?))
    }
}

/// Resolves a motion name in the built-in catalog.
pub fn get_motion(name: &str) -> Result<MotionDescriptor, MotionError> {
    CATALOG.get_motion(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Category;

    #[test]
    fn catalog_shapes() {
        let expected = [
            ("forward", Category::Body, 6, 18),
            ("rotate_cw", Category::Body, 6, 18),
            ("bite", Category::Auxiliary, 2, 4),
            ("attack", Category::FullRobot, 2, 22),
            ("grab", Category::Auxiliary, 1, 4),
            ("drop", Category::Auxiliary, 1, 4),
        ];

        for (name, category, frames, actuators) in expected {
            let motion = get_motion(name).unwrap();
            assert_eq!(motion.category(), category, "{name}");
            assert_eq!(motion.frame_count(), frames, "{name}");
            assert_eq!(motion.actuator_count(), actuators, "{name}");
            for frame in motion.frames() {
                assert_eq!(frame.len(), actuators, "{name}");
            }
        }
    }

    #[test]
    fn names_round_trip_through_display() {
        for id in MotionId::ALL {
            let mut buf = heapless::String::<16>::new();
            core::fmt::write(&mut buf, format_args!("{id}")).unwrap();
            assert_eq!(buf.parse::<MotionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            get_motion("moonwalk").unwrap_err(),
            MotionError::UnknownMotion
        );
        assert_eq!(
            get_motion("Forward").unwrap_err(),
            MotionError::UnknownMotion
        );
    }

    #[test]
    fn tables_are_shareable_without_locks() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Catalog>();
        assert_sync::<MotionDescriptor>();
        assert_sync::<crate::motion::Frame>();
    }

    #[test]
    fn restricted_catalog_hides_other_motions() {
        static GAITS: Catalog = Catalog::new(&[MotionId::Forward, MotionId::RotateCw]);

        assert!(GAITS.get_motion("forward").is_ok());
        assert_eq!(
            GAITS.get_motion("bite").unwrap_err(),
            MotionError::UnknownMotion
        );
        assert_eq!(GAITS.ids().count(), 2);
    }
}
