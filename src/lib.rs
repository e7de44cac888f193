//! Classroom sketches for an Arduino Uno class board (ATmega328P @ 16MHz)
//!
//! The sketches and drivers are written against `embedded-hal` and run on the
//! host under test; the `hal` module provides the real peripherals and is
//! only built for AVR targets.

#![cfg_attr(not(test), no_std)]

pub mod change;
pub mod config;
pub mod drivers;
pub mod error;
pub mod hal;
pub mod scaling;
pub mod sketches;
pub mod testing;

#[cfg(test)]
mod test_support;

pub use error::SketchError;
pub use sketches::{run, Sketch};
