//! The classroom sketches
//!
//! Each one owns its peripherals and runs as `setup` once, then `tick` forever.

use core::convert::Infallible;

use embedded_hal::adc::{Channel, OneShot};

use crate::error::SketchError;

pub mod led_switch;
pub mod rgb_mixer;
pub mod servo_knob;
pub mod thermometer;

pub use led_switch::LedSwitch;
pub use rgb_mixer::RgbMixer;
pub use servo_knob::ServoKnob;
pub use thermometer::{Indicators, Thermometer, ThermometerState, Unit};

/// A read-transform-write control loop.
pub trait Sketch {
    /// Runs once after reset.
    fn setup(&mut self) -> Result<(), SketchError>;

    /// One pass of the main loop.
    fn tick(&mut self) -> Result<(), SketchError>;
}

/// Runs `setup` and then `tick` until something fails.
pub fn run<S: Sketch>(sketch: &mut S) -> Result<Infallible, SketchError> {
    sketch.setup()?;
    loop {
        sketch.tick()?;
    }
}

/// Blocking single conversion on `channel`.
pub(crate) fn read_analog<A, CH>(adc: &mut A, channel: &mut CH) -> Result<u16, SketchError>
where
    A: OneShot<A, u16, CH>,
    CH: Channel<A>,
{
    nb::block!(adc.read(channel)).map_err(|_| SketchError::Adc)
}
