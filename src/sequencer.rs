//! Playback of the whole robot: one [`MotionPlayer`] per independently driven actuator group.
//!
//! The gait player owns the legs (body and full-robot motions), the auxiliary player owns
//! the grabber. A full-robot motion drives every actuator, so it evicts whatever the
//! auxiliary player was doing, and an auxiliary motion evicts a full-robot one.
use heapless::Vec;
use log::{debug, info};

use crate::error::MotionError;
use crate::motion::{Category, Frame, MotionId, MotionPlayer};
use crate::robot::commands::SequencerCommand;

/// Number of players, hence the most frames one operation can emit.
pub const PLAYERS: usize = 2;

/// Frames emitted by one sequencer operation, at most one per player.
pub type Frames = Vec<Frame, PLAYERS>;

/// How many steps the sequencer takes on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Steps(u8),
    Continuous,
}

#[derive(Debug)]
pub struct Sequencer {
    gait: MotionPlayer,
    aux: MotionPlayer,
    playback: Playback,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            gait: MotionPlayer::new(),
            aux: MotionPlayer::new(),
            playback: Playback::Idle,
        }
    }

    pub fn gait(&self) -> &MotionPlayer {
        &self.gait
    }

    pub fn aux(&self) -> &MotionPlayer {
        &self.aux
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Starts playing `motion` continuously and returns its first frame.
    pub fn play(&mut self, motion: MotionId) -> Result<Frames, MotionError> {
        let category = motion.descriptor().category();
        match category {
            Category::Body => self.gait.bind_id(motion)?,
            Category::FullRobot => {
                self.gait.bind_id(motion)?;
                self.aux.release();
            }
            Category::Auxiliary => {
                self.aux.bind_id(motion)?;
                if self.gait.descriptor().map(|d| d.category()) == Some(Category::FullRobot) {
                    self.gait.release();
                }
            }
        }
        info!("[SEQUENCER] playing {motion} ({category})");
        self.playback = Playback::Continuous;
        self.current()
    }

    /// Frames last emitted by every bound player.
    pub fn current(&self) -> Result<Frames, MotionError> {
        self.collect(|player| player.current())
    }

    /// Advances every bound player by one frame.
    pub fn step(&mut self) -> Result<Frames, MotionError> {
        let mut frames = Frames::new();
        for player in [&mut self.aux, &mut self.gait] {
            if player.is_bound() {
                // one slot per player, cannot overflow
                frames.push(player.advance()?).ok();
            }
        }
        if frames.is_empty() {
            return Err(MotionError::NotBound);
        }
        Ok(frames)
    }

    /// One scheduler tick: steps if the playback mode asks for it.
    pub fn tick(&mut self) -> Option<Frames> {
        let next = match self.playback {
            Playback::Idle => return None,
            Playback::Steps(n) if n <= 1 => Playback::Idle,
            Playback::Steps(n) => Playback::Steps(n - 1),
            Playback::Continuous => Playback::Continuous,
        };

        match self.step() {
            Ok(frames) => {
                self.playback = next;
                Some(frames)
            }
            Err(_) => {
                self.playback = Playback::Idle;
                None
            }
        }
    }

    /// Reverses the gait. Auxiliary motions are forward only, so with no gait bound
    /// this reports whatever the auxiliary player refuses.
    pub fn reverse(&mut self) -> Result<(), MotionError> {
        if self.gait.is_bound() {
            self.gait.reverse()
        } else {
            self.aux.reverse()
        }
    }

    /// Rewinds every bound player and returns their first frames.
    pub fn reset(&mut self) -> Result<Frames, MotionError> {
        self.gait.reset();
        self.aux.reset();
        self.current()
    }

    /// Releases both players. Actuators keep their last targets.
    pub fn stop(&mut self) {
        self.gait.release();
        self.aux.release();
        self.playback = Playback::Idle;
    }

    /// Executes a command, returning the frames it emits right away.
    pub fn apply(&mut self, cmd: &SequencerCommand) -> Result<Frames, MotionError> {
        match *cmd {
            SequencerCommand::Play(motion) => self.play(motion),
            SequencerCommand::Step(n) => {
                if !self.gait.is_bound() && !self.aux.is_bound() {
                    return Err(MotionError::NotBound);
                }
                debug!("[SEQUENCER] {n} step(s)");
                self.playback = if n == 0 {
                    Playback::Idle
                } else {
                    Playback::Steps(n)
                };
                Ok(Frames::new())
            }
            SequencerCommand::Reverse => self.reverse().map(|_| Frames::new()),
            SequencerCommand::Reset => self.reset(),
            SequencerCommand::Stop => {
                self.stop();
                Ok(Frames::new())
            }
            SequencerCommand::CloseConnection => Ok(Frames::new()),
        }
    }

    fn collect(
        &self,
        f: impl Fn(&MotionPlayer) -> Result<Frame, MotionError>,
    ) -> Result<Frames, MotionError> {
        let mut frames = Frames::new();
        for player in [&self.aux, &self.gait] {
            if player.is_bound() {
                // one slot per player, cannot overflow
                frames.push(f(player)?).ok();
            }
        }
        Ok(frames)
    }
}
