use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::PwmPin;

use crate::config::PWM_MAX;

/// 8-bit intensity per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const OFF: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(PWM_MAX, 0, 0);
    pub const GREEN: Color = Color::new(0, PWM_MAX, 0);
    pub const BLUE: Color = Color::new(0, 0, PWM_MAX);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Common-cathode RGB LED with one PWM channel per colour.
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> RgbLed<R, G, B>
where
    R: PwmPin<Duty = u8>,
    G: PwmPin<Duty = u8>,
    B: PwmPin<Duty = u8>,
{
    pub fn new(mut red: R, mut green: G, mut blue: B) -> Self {
        red.enable();
        green.enable();
        blue.enable();
        Self { red, green, blue }
    }

    pub fn set(&mut self, color: Color) {
        self.red.set_duty(color.red);
        self.green.set_duty(color.green);
        self.blue.set_duty(color.blue);
    }

    pub fn off(&mut self) {
        self.set(Color::OFF);
    }

    /// Shows red, green and blue at full intensity, then goes dark.
    pub fn cycle_primaries<D: DelayMs<u16>>(&mut self, delay: &mut D, hold_ms: u16) {
        for color in [Color::RED, Color::GREEN, Color::BLUE, Color::OFF] {
            self.set(color);
            delay.delay_ms(hold_ms);
        }
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}
