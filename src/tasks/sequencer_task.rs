//! Sequencer task: the scheduler of the motion core.
//!
//! Applies incoming commands, then advances the sequencer once per
//! [`STEP_PERIOD_MS`] while something is playing. Every emitted frame goes to
//! the servo task.
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Receiver, Sender},
};
use embassy_time::{Duration, Ticker};
use log::{debug, info, warn};

use crate::config::{CMD_CHANNEL_SIZE, FRAME_CHANNEL_SIZE, STEP_PERIOD_MS};
use crate::motion::Frame;
use crate::robot::commands::SequencerCommand;
use crate::sequencer::{Frames, Playback, Sequencer};

type FrameSender = Sender<'static, CriticalSectionRawMutex, Frame, FRAME_CHANNEL_SIZE>;

#[embassy_executor::task]
pub async fn sequencer_task(
    cmd_receiver: Receiver<'static, CriticalSectionRawMutex, SequencerCommand, CMD_CHANNEL_SIZE>,
    frame_sender: FrameSender,
) {
    let mut sequencer = Sequencer::new();
    let mut ticker = Ticker::every(Duration::from_millis(STEP_PERIOD_MS));
    info!("[SEQUENCER_TASK] ready, stepping every {STEP_PERIOD_MS} ms");

    loop {
        // Nothing to play: sleep until someone asks for something.
        if sequencer.playback() == Playback::Idle {
            let cmd = cmd_receiver.receive().await;
            handle(&mut sequencer, &cmd, &frame_sender).await;
            ticker.reset();
        }

        while let Ok(cmd) = cmd_receiver.try_receive() {
            handle(&mut sequencer, &cmd, &frame_sender).await;
        }

        ticker.next().await;
        if let Some(frames) = sequencer.tick() {
            send(&frame_sender, frames).await;
        }
    }
}

async fn handle(sequencer: &mut Sequencer, cmd: &SequencerCommand, frame_sender: &FrameSender) {
    let stamp = "[SEQUENCER_TASK] received";
    info!("{stamp} {cmd:?}");
    match sequencer.apply(cmd) {
        Ok(frames) => send(frame_sender, frames).await,
        Err(e) => warn!("{stamp} {cmd:?} but cannot apply it: {e}"),
    }
}

async fn send(frame_sender: &FrameSender, frames: Frames) {
    for frame in frames {
        debug!("[SEQUENCER_TASK] emitting {} frame", frame.category());
        frame_sender.send(frame).await;
    }
}
