//! ATmega328P peripherals behind the `embedded-hal` traits
//!
//! The register-level modules only build for AVR; `compare` is plain logic and
//! builds everywhere.

pub mod compare;

#[cfg(target_arch = "avr")]
pub mod adc;
#[cfg(target_arch = "avr")]
pub mod gpio;
#[cfg(target_arch = "avr")]
pub mod pwm;
#[cfg(target_arch = "avr")]
pub mod timer;
#[cfg(target_arch = "avr")]
pub mod uart;

#[cfg(target_arch = "avr")]
pub use adc::Adc;
#[cfg(target_arch = "avr")]
pub use gpio::board;
#[cfg(target_arch = "avr")]
pub use gpio::{Input, Output, Pin};
#[cfg(target_arch = "avr")]
pub use pwm::{ServoPwm, ServoTimer, Timer1Pwm, Timer2Pwm};
#[cfg(target_arch = "avr")]
pub use timer::{delay_ms, Delay};
#[cfg(target_arch = "avr")]
pub use uart::Uart;
