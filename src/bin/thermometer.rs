//! TMP36 temperature on a 16x2 LCD, switchable on/off and between C and F.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega328p::Peripherals;
    use avr_sketchbook::drivers::{Button, Lcd};
    use avr_sketchbook::hal::adc::A0;
    use avr_sketchbook::hal::board::Pins;
    use avr_sketchbook::hal::{Adc, Delay};
    use avr_sketchbook::sketches::thermometer::IndicatorLeds;
    use avr_sketchbook::sketches::{self, Thermometer};

    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);

    // RS, EN, D4..D7
    let lcd = Lcd::new(
        pins.d12.into_output(),
        pins.d11.into_output(),
        pins.d5.into_output(),
        pins.d4.into_output(),
        pins.d3.into_output(),
        pins.d2.into_output(),
        Delay::new(),
    );

    let leds = IndicatorLeds::new(
        pins.d10.into_output(),
        pins.d9.into_output(),
        pins.d8.into_output(),
    );

    let mut sketch = Thermometer::new(
        Button::new(pins.d6.into_floating_input()),
        Button::new(pins.d7.into_floating_input()),
        leds,
        Adc::new(dp.ADC),
        A0,
        lcd,
        Delay::new(),
    );
    match sketches::run(&mut sketch) {
        Ok(never) => match never {},
        Err(_) => loop {},
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
