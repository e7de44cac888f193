use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;

use super::{read_analog, Sketch};
use crate::config::SERVO_STEP_INTERVAL_MS;
use crate::drivers::Servo;
use crate::error::SketchError;
use crate::scaling::adc_to_degrees;

/// Servo angle follows a potentiometer.
pub struct ServoKnob<A, CH, P, D> {
    adc: A,
    pot: CH,
    servo: Servo<P>,
    delay: D,
}

impl<A, CH, P, D> ServoKnob<A, CH, P, D>
where
    A: OneShot<A, u16, CH>,
    CH: Channel<A>,
    P: PwmPin<Duty = u16>,
    D: DelayMs<u16>,
{
    pub fn new(adc: A, pot: CH, servo: Servo<P>, delay: D) -> Self {
        Self {
            adc,
            pot,
            servo,
            delay,
        }
    }

    pub fn angle(&self) -> u8 {
        self.servo.read()
    }

    pub fn release(self) -> (A, CH, Servo<P>, D) {
        (self.adc, self.pot, self.servo, self.delay)
    }
}

impl<A, CH, P, D> Sketch for ServoKnob<A, CH, P, D>
where
    A: OneShot<A, u16, CH>,
    CH: Channel<A>,
    P: PwmPin<Duty = u16>,
    D: DelayMs<u16>,
{
    fn setup(&mut self) -> Result<(), SketchError> {
        self.servo.write(0);
        Ok(())
    }

    fn tick(&mut self) -> Result<(), SketchError> {
        let raw = read_analog(&mut self.adc, &mut self.pot)?;
        self.servo.write(adc_to_degrees(raw));
        self.delay.delay_ms(SERVO_STEP_INTERVAL_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeDelay, FakePwm};
    use embedded_hal_mock::eh0::adc::{Mock as AdcMock, MockChan0, Transaction};

    #[test]
    fn follows_the_knob() {
        let adc = AdcMock::new(&[
            Transaction::read(0, 1023u16),
            Transaction::read(0, 512),
            Transaction::read(0, 0),
        ]);
        let pwm = FakePwm::new(40_000u16);
        let delay = FakeDelay::default();
        let mut sketch = ServoKnob::new(adc, MockChan0, Servo::attach(pwm.clone()), delay.clone());

        sketch.setup().unwrap();
        assert_eq!(sketch.angle(), 0);

        sketch.tick().unwrap();
        assert_eq!(sketch.angle(), 180);
        sketch.tick().unwrap();
        assert_eq!(sketch.angle(), 90);
        sketch.tick().unwrap();
        assert_eq!(sketch.angle(), 0);

        assert_eq!(pwm.history(), [1088, 4800, 2944, 1088]);
        assert_eq!(delay.millis(), [15, 15, 15]);
        sketch.release().0.done();
    }
}
