use embedded_hal::digital::v2::{InputPin, OutputPin};

use super::Sketch;
use crate::error::SketchError;

/// Button-held LED swap.
///
/// L1 is lit and L2 dark at rest; holding the button swaps them for as long as
/// it reads high.
pub struct LedSwitch<B, L1, L2> {
    button: B,
    l1: L1,
    l2: L2,
}

impl<B, L1, L2> LedSwitch<B, L1, L2>
where
    B: InputPin,
    L1: OutputPin,
    L2: OutputPin,
{
    pub fn new(button: B, l1: L1, l2: L2) -> Self {
        Self { button, l1, l2 }
    }

    fn show(&mut self, pressed: bool) -> Result<(), SketchError> {
        if pressed {
            self.l1.set_low().map_err(|_| SketchError::Pin)?;
            self.l2.set_high().map_err(|_| SketchError::Pin)
        } else {
            self.l1.set_high().map_err(|_| SketchError::Pin)?;
            self.l2.set_low().map_err(|_| SketchError::Pin)
        }
    }

    pub fn release(self) -> (B, L1, L2) {
        (self.button, self.l1, self.l2)
    }
}

impl<B, L1, L2> Sketch for LedSwitch<B, L1, L2>
where
    B: InputPin,
    L1: OutputPin,
    L2: OutputPin,
{
    fn setup(&mut self) -> Result<(), SketchError> {
        self.show(false)
    }

    fn tick(&mut self) -> Result<(), SketchError> {
        let pressed = self.button.is_high().map_err(|_| SketchError::Pin)?;
        self.show(pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh0::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn held_button_swaps_leds() {
        let button = PinMock::new(&[
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ]);
        let l1 = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);
        let l2 = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);

        let mut sketch = LedSwitch::new(button, l1, l2);
        sketch.setup().unwrap();
        sketch.tick().unwrap();
        sketch.tick().unwrap();

        let (mut button, mut l1, mut l2) = sketch.release();
        button.done();
        l1.done();
        l2.done();
    }
}
