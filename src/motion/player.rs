//! Step cursor over a motion.
//!
//! A [`MotionPlayer`] is either unbound or bound to one motion, in which case it
//! remembers the frame it last emitted and the direction it walks the frames in.
//! Motions are cyclic: stepping past either end wraps around.
use log::{debug, trace, warn};

use super::{Catalog, Frame, MotionDescriptor, MotionId, CATALOG};
use crate::error::MotionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    motion: MotionId,
    descriptor: MotionDescriptor,
    position: usize,
    direction: Direction,
}

#[derive(Debug)]
pub struct MotionPlayer {
    catalog: &'static Catalog,
    binding: Option<Binding>,
}

impl Default for MotionPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionPlayer {
    /// Unbound player over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(&CATALOG)
    }

    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            binding: None,
        }
    }

    /// Binds the player to a motion by name. On failure the previous binding is kept.
    pub fn bind(&mut self, name: &str) -> Result<(), MotionError> {
        let (motion, _) = self
            .catalog
            .resolve(name)
            .inspect_err(|_| warn!("[PLAYER] unknown motion {name}"))?;
        self.bind_id(motion)
    }

    pub fn bind_id(&mut self, motion: MotionId) -> Result<(), MotionError> {
        let descriptor = self.catalog.get(motion)?;
        debug!(
            "[PLAYER] bound {motion} ({} frames, {} actuators)",
            descriptor.frame_count(),
            descriptor.actuator_count()
        );
        self.binding = Some(Binding {
            motion,
            descriptor,
            position: 0,
            direction: Direction::Forward,
        });
        Ok(())
    }

    /// Drops the current motion; the player is unbound afterwards.
    pub fn release(&mut self) {
        if let Some(binding) = self.binding.take() {
            debug!("[PLAYER] released {}", binding.motion);
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn motion(&self) -> Option<MotionId> {
        self.binding.map(|b| b.motion)
    }

    pub fn descriptor(&self) -> Option<MotionDescriptor> {
        self.binding.map(|b| b.descriptor)
    }

    pub fn position(&self) -> Option<usize> {
        self.binding.map(|b| b.position)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.binding.map(|b| b.direction)
    }

    /// Moves one frame in the current direction and returns the frame reached.
    pub fn advance(&mut self) -> Result<Frame, MotionError> {
        let binding = self.binding.as_mut().ok_or(MotionError::NotBound)?;
        let frame_count = binding.descriptor.frame_count() as isize;

        binding.position =
            (binding.position as isize + binding.direction.step()).rem_euclid(frame_count) as usize;
        trace!("[PLAYER] {} -> frame {}", binding.motion, binding.position);

        binding.descriptor.frame_at(binding.position)
    }

    /// Last emitted frame (frame 0 right after binding).
    pub fn current(&self) -> Result<Frame, MotionError> {
        let binding = self.binding.as_ref().ok_or(MotionError::NotBound)?;
        binding.descriptor.frame_at(binding.position)
    }

    /// Flips the playback direction. Only body motions can be played backwards.
    pub fn reverse(&mut self) -> Result<(), MotionError> {
        let binding = self.binding.as_mut().ok_or(MotionError::NotBound)?;
        if !binding.descriptor.category().is_reversible() {
            return Err(MotionError::Unsupported {
                motion: binding.motion,
            });
        }
        binding.direction = binding.direction.flipped();
        debug!("[PLAYER] {} now plays {:?}", binding.motion, binding.direction);
        Ok(())
    }

    pub fn reset(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.position = 0;
            binding.direction = Direction::Forward;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_player_refuses_to_step() {
        let mut player = MotionPlayer::new();

        assert_eq!(player.advance(), Err(MotionError::NotBound));
        assert_eq!(player.current(), Err(MotionError::NotBound));
        assert_eq!(player.reverse(), Err(MotionError::NotBound));
        assert_eq!(player.position(), None);
    }

    #[test]
    fn bind_starts_at_first_frame_going_forward() {
        let mut player = MotionPlayer::new();
        player.bind("rotate_cw").unwrap();

        assert_eq!(player.motion(), Some(MotionId::RotateCw));
        assert_eq!(player.position(), Some(0));
        assert_eq!(player.direction(), Some(Direction::Forward));
    }

    #[test]
    fn reverse_from_first_frame_wraps_to_last() {
        let mut player = MotionPlayer::new();
        player.bind("forward").unwrap();
        player.reverse().unwrap();

        let frame = player.advance().unwrap();
        assert_eq!(player.position(), Some(5));
        assert_eq!(frame, MotionId::Forward.descriptor().frame_at(5).unwrap());
    }

    #[test]
    fn reverse_twice_restores_direction() {
        let mut player = MotionPlayer::new();
        player.bind("forward").unwrap();
        player.reverse().unwrap();
        player.reverse().unwrap();

        assert_eq!(player.direction(), Some(Direction::Forward));
    }

    #[test]
    fn non_body_motions_are_forward_only() {
        let mut player = MotionPlayer::new();
        for motion in [MotionId::Bite, MotionId::Attack, MotionId::Grab, MotionId::Drop] {
            player.bind_id(motion).unwrap();
            assert_eq!(player.reverse(), Err(MotionError::Unsupported { motion }));
            assert_eq!(player.direction(), Some(Direction::Forward));
        }
    }

    #[test]
    fn reset_rewinds_and_restores_direction() {
        let mut player = MotionPlayer::new();
        player.bind("forward").unwrap();
        player.advance().unwrap();
        player.advance().unwrap();
        player.reverse().unwrap();
        player.reset();

        assert_eq!(player.position(), Some(0));
        assert_eq!(player.direction(), Some(Direction::Forward));
    }

    #[test]
    fn release_unbinds() {
        let mut player = MotionPlayer::new();
        player.bind("bite").unwrap();
        player.release();

        assert!(!player.is_bound());
        assert_eq!(player.advance(), Err(MotionError::NotBound));
    }
}
