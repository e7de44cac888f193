use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

use crate::error::SketchError;

/// Push button wired active-high (external pull-down, reads high while held).
pub struct Button<P> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn is_pressed(&self) -> Result<bool, SketchError> {
        self.pin.is_high().map_err(|_| SketchError::Pin)
    }

    /// Busy-waits until the button is let go, then lets contacts settle.
    ///
    /// Blocks the whole sketch; there is no timeout.
    pub fn wait_for_release<D: DelayMs<u16>>(
        &self,
        delay: &mut D,
        settle_ms: u16,
    ) -> Result<(), SketchError> {
        while self.is_pressed()? {}
        delay.delay_ms(settle_ms);
        Ok(())
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDelay;
    use embedded_hal_mock::eh0::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn waits_for_release_then_settles() {
        let pin = PinMock::new(&[
            Transaction::get(State::High),
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ]);
        let button = Button::new(pin);
        let mut delay = FakeDelay::default();

        button.wait_for_release(&mut delay, 50).unwrap();

        assert_eq!(delay.millis(), [50]);
        button.release().done();
    }

    #[test]
    fn reports_level() {
        let pin = PinMock::new(&[Transaction::get(State::Low), Transaction::get(State::High)]);
        let button = Button::new(pin);
        assert!(!button.is_pressed().unwrap());
        assert!(button.is_pressed().unwrap());
        button.release().done();
    }
}
