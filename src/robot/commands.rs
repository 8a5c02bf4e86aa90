//! Text commands understood by the sequencer.
//!
//! One command per line, first token selects the command:
//!
//! | input         | command                               |
//! |---------------|---------------------------------------|
//! | `p <motion>`  | play a motion from the catalog        |
//! | `s [n]`       | advance `n` steps (default 1)         |
//! | `v`           | reverse the gait                      |
//! | `r`           | rewind the playing motions            |
//! | `x`           | stop, holding the last position       |
//! | `q`           | close the connection                  |
//!
//! Input arrives as a byte stream; [`LineDecoder`] cuts it into `\n`-terminated lines,
//! whatever the chunking.
use core::fmt::{self, Display, Formatter};

use heapless::Vec;

use crate::motion::MotionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerCommand {
    Play(MotionId),
    Step(u8),
    Reverse,
    Reset,
    Stop,
    CloseConnection,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseCommandError;

impl Display for ParseCommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised command")
    }
}

impl core::error::Error for ParseCommandError {}

impl TryFrom<&str> for SequencerCommand {
    type Error = ParseCommandError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut tokens = value.split_whitespace();

        let cmd = tokens.next().ok_or(ParseCommandError)?;
        let arg = tokens.next();
        if tokens.next().is_some() {
            return Err(ParseCommandError);
        }

        match (cmd, arg) {
            ("p", Some(name)) => name
                .parse()
                .map(SequencerCommand::Play)
                .map_err(|_| ParseCommandError),
            ("s", None) => Ok(SequencerCommand::Step(1)),
            ("s", Some(n)) => n
                .parse()
                .map(SequencerCommand::Step)
                .map_err(|_| ParseCommandError),
            ("v", None) => Ok(SequencerCommand::Reverse),
            ("r", None) => Ok(SequencerCommand::Reset),
            ("x", None) => Ok(SequencerCommand::Stop),
            ("q", None) => Ok(SequencerCommand::CloseConnection),
            _ => Err(ParseCommandError),
        }
    }
}

/// Reassembles command lines from stream chunks.
///
/// Bytes are buffered until a `\n` arrives, so a command split over several reads
/// (or a UTF-8 character split between two of them) is decoded once, whole.
/// A line longer than `N` bytes is reported as a [`ParseCommandError`] when it ends.
#[derive(Debug, Default)]
pub struct LineDecoder<const N: usize> {
    line: Vec<u8, N>,
    overflow: bool,
}

impl<const N: usize> LineDecoder<N> {
    pub fn new() -> Self {
        Self {
            line: Vec::new(),
            overflow: false,
        }
    }

    /// Feeds one byte; yields a result when it completes a non-blank line.
    pub fn push(&mut self, byte: u8) -> Option<Result<SequencerCommand, ParseCommandError>> {
        if byte != b'\n' {
            if self.line.push(byte).is_err() {
                self.overflow = true;
            }
            return None;
        }

        let overflow = core::mem::replace(&mut self.overflow, false);
        let parsed = match core::str::from_utf8(&self.line).map(str::trim) {
            Ok("") if !overflow => None,
            Ok(line) if !overflow => Some(SequencerCommand::try_from(line)),
            _ => Some(Err(ParseCommandError)),
        };
        self.line.clear();
        parsed
    }

    /// Feeds a chunk; yields one result per line the chunk completes.
    pub fn feed<'a>(
        &'a mut self,
        bytes: &'a [u8],
    ) -> impl Iterator<Item = Result<SequencerCommand, ParseCommandError>> + 'a {
        bytes.iter().filter_map(move |&byte| self.push(byte))
    }

    /// Bytes of the line still waiting for its `\n`.
    pub fn pending(&self) -> &[u8] {
        &self.line
    }
}
