use embedded_hal::PwmPin;

use crate::config::SERVO_MAX_DEGREES;

/// Pulse width at 0 degrees, same default as the Arduino servo library
pub const MIN_PULSE_US: u32 = 544;
/// Pulse width at full travel
pub const MAX_PULSE_US: u32 = 2400;
/// 50 Hz refresh
pub const PERIOD_US: u32 = 20_000;

/// Hobby servo on a PWM channel running at 50 Hz.
///
/// The channel's max duty must span one full 20 ms period.
pub struct Servo<P> {
    pwm: P,
    angle: u8,
}

impl<P: PwmPin<Duty = u16>> Servo<P> {
    pub fn attach(mut pwm: P) -> Self {
        pwm.enable();
        Self { pwm, angle: 0 }
    }

    /// Moves to `degrees`, clamped to 0..=180.
    pub fn write(&mut self, degrees: u8) {
        let degrees = degrees.min(SERVO_MAX_DEGREES);
        let max_duty = u32::from(self.pwm.get_max_duty());
        let duty = pulse_width_us(degrees) * max_duty / PERIOD_US;
        self.pwm.set_duty(duty as u16);
        self.angle = degrees;
    }

    /// Last angle written.
    pub fn read(&self) -> u8 {
        self.angle
    }

    pub fn detach(mut self) -> P {
        self.pwm.disable();
        self.pwm
    }
}

/// High time of the control pulse for an angle.
pub fn pulse_width_us(degrees: u8) -> u32 {
    let degrees = u32::from(degrees.min(SERVO_MAX_DEGREES));
    MIN_PULSE_US + (MAX_PULSE_US - MIN_PULSE_US) * degrees / u32::from(SERVO_MAX_DEGREES)
}
