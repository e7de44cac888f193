//! Servo on D9 follows the potentiometer on A0.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega328p::Peripherals;
    use avr_sketchbook::drivers::Servo;
    use avr_sketchbook::hal::adc::A0;
    use avr_sketchbook::hal::board::Pins;
    use avr_sketchbook::hal::{Adc, Delay, ServoTimer};
    use avr_sketchbook::sketches::{self, ServoKnob};

    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);

    let pwm = ServoTimer::new(dp.TC1).into_channel_a(pins.d9.into_output());

    let mut sketch = ServoKnob::new(Adc::new(dp.ADC), A0, Servo::attach(pwm), Delay::new());
    match sketches::run(&mut sketch) {
        Ok(never) => match never {},
        Err(_) => loop {},
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
