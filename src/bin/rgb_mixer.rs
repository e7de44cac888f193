//! Three pots mix an RGB LED; pot positions are reported on the serial port.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega328p::Peripherals;
    use avr_sketchbook::drivers::{RgbLed, SerialConsole};
    use avr_sketchbook::hal::adc::{A0, A1, A2};
    use avr_sketchbook::hal::board::Pins;
    use avr_sketchbook::hal::{Adc, Delay, Timer1Pwm, Timer2Pwm, Uart};
    use avr_sketchbook::sketches::{self, RgbMixer};

    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);

    #[allow(unused_mut)]
    let mut console = SerialConsole::new(Uart::new(dp.USART0));
    #[cfg(feature = "debug")]
    console.write_line("RGB mixer ready").ok();

    // red on D11 (OC2A), green on D10 (OC1B), blue on D9 (OC1A)
    let red = Timer2Pwm::new(dp.TC2).into_channel_a(pins.d11.into_output());
    let (blue, green) =
        Timer1Pwm::new(dp.TC1).split(pins.d9.into_output(), pins.d10.into_output());

    let mut sketch = RgbMixer::new(
        Adc::new(dp.ADC),
        (A0, A1, A2),
        RgbLed::new(red, green, blue),
        console,
        Delay::new(),
    );
    match sketches::run(&mut sketch) {
        Ok(never) => match never {},
        Err(_) => loop {},
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
