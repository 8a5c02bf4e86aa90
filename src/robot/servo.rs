use embedded_hal::pwm::SetDutyCycle;
use fugit::Hertz;
use heapless::Vec;
use log::error;

use crate::config::{
    MAX_ANGLE, PCA_TICKS, ROBOT_ACTUATORS, SERVO_FREQUENCY_HZ, SERVO_MAX_PULSE_US,
    SERVO_MIN_PULSE_US,
};
use crate::motion::ActuatorAngle;
use crate::robot::actuator::Actuator;

/// Sink for the targets of a frame: whatever positions actuator `actuator` at `angle`.
///
/// The trait is blocking. The firmware's PCA9685 boards sit behind async I2C, so
/// `servo_task` writes them directly with [`angle_to_ticks`] instead.
pub trait ActuatorDriver {
    type Error;

    fn set_angle(&mut self, actuator: usize, angle: ActuatorAngle) -> Result<(), Self::Error>;
}

fn pulse_us(angle: ActuatorAngle) -> u32 {
    let angle = angle.min(MAX_ANGLE) as u32;
    SERVO_MIN_PULSE_US + angle * (SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US) / MAX_ANGLE as u32
}

/// On-tick count of a PCA9685 channel (12 bit, [`SERVO_FREQUENCY_HZ`]) for an angle.
pub fn angle_to_ticks(angle: ActuatorAngle) -> u16 {
    let period_us = 1_000_000 / SERVO_FREQUENCY_HZ;
    let tick = (pulse_us(angle) * PCA_TICKS + period_us / 2) / period_us;
    tick.min(PCA_TICKS - 1) as u16
}

#[derive(Debug)]
pub struct Servo<PWM> {
    pwm: PWM,
    angle: Option<ActuatorAngle>,
    frequency: Hertz<u32>,
    actuator: Actuator,
}

impl<PWM> Servo<PWM>
where
    PWM: SetDutyCycle,
{
    pub fn new(pwm: PWM, frequency: Hertz<u32>, actuator: Actuator) -> Self {
        Self {
            pwm,
            angle: None,
            frequency,
            actuator,
        }
    }

    /// Sets the servo angle in degrees. Angles above [`MAX_ANGLE`] are clamped.
    pub fn set_angle(&mut self, angle: ActuatorAngle) -> Result<(), PWM::Error> {
        let angle = angle.min(MAX_ANGLE);

        //Avoid setting the same angle again
        if self.angle == Some(angle) {
            return Ok(());
        }

        // THE WIDTH OF THE PULSE DRIVES THE ANGLE, NOT FREQ
        let period_us = 1_000_000 / self.frequency.raw();
        let max_duty = self.pwm.max_duty_cycle() as u32;
        let duty = ((pulse_us(angle) * max_duty) / period_us).min(max_duty) as u16;

        self.pwm
            .set_duty_cycle(duty)
            .inspect_err(|e| error!("{} Error writing angle {angle}: {e:?}", self.actuator))?;
        self.angle = Some(angle);
        Ok(())
    }

    pub fn angle(&self) -> Option<ActuatorAngle> {
        self.angle
    }

    pub fn actuator(&self) -> Actuator {
        self.actuator
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoError<E> {
    /// No servo is wired for this actuator index.
    NoSuchActuator(usize),
    Pwm(E),
}

/// Servos indexed like the robot-wide actuator bank.
///
/// For servos whose PWM comes straight from board pins (LEDC channels on the ESP32),
/// one [`SetDutyCycle`] channel per actuator.
#[derive(Debug)]
pub struct ServoBank<PWM> {
    servos: Vec<Servo<PWM>, ROBOT_ACTUATORS>,
}

impl<PWM> ServoBank<PWM>
where
    PWM: SetDutyCycle,
{
    /// Wraps the channels in order: the first one drives actuator 0.
    /// Channels beyond the bank size are dropped.
    pub fn new(channels: impl IntoIterator<Item = PWM>, frequency: Hertz<u32>) -> Self {
        let servos = channels
            .into_iter()
            .zip(0..ROBOT_ACTUATORS)
            .filter_map(|(pwm, i)| {
                Actuator::try_from(i)
                    .ok()
                    .map(|actuator| Servo::new(pwm, frequency, actuator))
            })
            .collect();
        Self { servos }
    }

    pub fn len(&self) -> usize {
        self.servos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servos.is_empty()
    }

    pub fn servo(&self, actuator: usize) -> Option<&Servo<PWM>> {
        self.servos.get(actuator)
    }
}

impl<PWM> ActuatorDriver for ServoBank<PWM>
where
    PWM: SetDutyCycle,
{
    type Error = ServoError<PWM::Error>;

    fn set_angle(&mut self, actuator: usize, angle: ActuatorAngle) -> Result<(), Self::Error> {
        self.servos
            .get_mut(actuator)
            .ok_or(ServoError::NoSuchActuator(actuator))?
            .set_angle(angle)
            .map_err(ServoError::Pwm)
    }
}
