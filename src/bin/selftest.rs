//! Runs the built-in checks on the board and prints the report at 9600 baud.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use avr_device::atmega328p::Peripherals;
    use avr_sketchbook::drivers::SerialConsole;
    use avr_sketchbook::hal::board::Pins;
    use avr_sketchbook::hal::{delay_ms, Uart};
    use avr_sketchbook::testing::{builtin_cases, TestRunner};
    use embedded_hal::digital::v2::OutputPin;

    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);
    let mut led = pins.d13.into_output();

    let mut runner = TestRunner::new(SerialConsole::new(Uart::new(dp.USART0)));
    runner.run_suite("Sketch logic", &builtin_cases()).ok();

    // on-board LED: steady when everything passed, blinking otherwise
    let all_passed = runner.passed() == runner.total();
    loop {
        led.set_high().ok();
        delay_ms(500);
        if !all_passed {
            led.set_low().ok();
        }
        delay_ms(500);
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
