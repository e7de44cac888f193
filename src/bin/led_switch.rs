//! L1 lit at rest, L2 lit while b0 is held.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega328p::Peripherals;
    use avr_sketchbook::hal::board::Pins;
    use avr_sketchbook::sketches::{self, LedSwitch};

    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);

    let b0 = pins.d2.into_floating_input();
    let l1 = pins.d12.into_output();
    let l2 = pins.d13.into_output();

    let mut sketch = LedSwitch::new(b0, l1, l2);
    match sketches::run(&mut sketch) {
        Ok(never) => match never {},
        Err(_) => loop {},
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
