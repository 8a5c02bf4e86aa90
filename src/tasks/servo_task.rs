//! Servo task: writes frames to two PCA9685 boards.
//!
//! Board 0 drives actuators `0..16`, board 1 drives `16..22`, each on its own
//! I2C bus so both keep the default address. Channels are written here rather than
//! through [`ActuatorDriver`](crate::robot::servo::ActuatorDriver), whose calls block.
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Receiver};
use esp_hal::{i2c::master::I2c, Async};
use log::{debug, error, info};
use pwm_pca9685::{Channel, Pca9685};

use crate::config::{FRAME_CHANNEL_SIZE, PCA_CHANNELS};
use crate::motion::{ActuatorAngle, Frame};
use crate::robot::actuator::Actuator;
use crate::robot::servo::angle_to_ticks;

pub type PcaBoard = Pca9685<I2c<'static, Async>>;

/// Prescaler giving a 50 Hz period with the 25 MHz internal oscillator.
const PCA_PRESCALE: u8 = 121;

static BOARD_CHANNELS: [Channel; PCA_CHANNELS] = [
    Channel::C0,
    Channel::C1,
    Channel::C2,
    Channel::C3,
    Channel::C4,
    Channel::C5,
    Channel::C6,
    Channel::C7,
    Channel::C8,
    Channel::C9,
    Channel::C10,
    Channel::C11,
    Channel::C12,
    Channel::C13,
    Channel::C14,
    Channel::C15,
];

#[embassy_executor::task]
pub async fn servo_task(
    mut boards: [PcaBoard; 2],
    receiver: Receiver<'static, CriticalSectionRawMutex, Frame, FRAME_CHANNEL_SIZE>,
) {
    for board in boards.iter_mut() {
        board
            .set_prescale(PCA_PRESCALE)
            .await
            .expect("Fail configurating pca driver");
        board.enable().await.expect("Fail enabling the pca driver");
    }
    info!("[SERVO_TASK] pca boards ready");

    loop {
        let frame = receiver.receive().await;
        debug!("[SERVO_TASK] Received a {} frame", frame.category());
        for (actuator, angle) in frame.targets() {
            set_actuator(&mut boards, actuator, angle).await;
        }
    }
}

async fn set_actuator(boards: &mut [PcaBoard; 2], actuator: usize, angle: ActuatorAngle) {
    let Some(board) = boards.get_mut(actuator / PCA_CHANNELS) else {
        error!("[SERVO_TASK] no board wired for actuator {actuator}");
        return;
    };
    let channel = BOARD_CHANNELS[actuator % PCA_CHANNELS];

    if let Err(e) = board
        .set_channel_on_off(channel, 0, angle_to_ticks(angle))
        .await
    {
        match Actuator::try_from(actuator) {
            Ok(name) => error!("[SERVO_TASK] {name} Error writing angle {angle}: {e:?}"),
            Err(i) => error!("[SERVO_TASK] actuator {i} Error writing angle {angle}: {e:?}"),
        }
    }
}
