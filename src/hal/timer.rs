use avr_device::atmega328p::TC0;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

#[derive(Clone, Copy)]
enum Prescaler {
    Div8 = 2,
    Div64 = 3,
}

const PRESCALER_MASK: u8 = 0x07;

/// Timer0 in normal mode, used as a polled tick counter.
fn tc0() -> &'static avr_device::atmega328p::tc0::RegisterBlock {
    unsafe { &*TC0::ptr() }
}

fn start(prescaler: Prescaler) {
    let tc = tc0();
    unsafe {
        tc.tccr0a.write(|w| w.bits(0));
        tc.tcnt0.write(|w| w.bits(0));
        tc.tccr0b.modify(|r, w| {
            w.bits((r.bits() & !PRESCALER_MASK) | (prescaler as u8 & PRESCALER_MASK))
        });
    }
}

fn stop() {
    unsafe {
        tc0().tccr0b.modify(|r, w| w.bits(r.bits() & !PRESCALER_MASK));
    }
}

fn wait_ticks(prescaler: Prescaler, ticks: u8) {
    start(prescaler);
    while tc0().tcnt0.read().bits() < ticks {}
    stop();
}

// Millisecond delay using Timer0
pub fn delay_ms(ms: u16) {
    // Configure for 1ms ticks (16MHz/64 = 250kHz, 250 ticks = 1ms)
    for _ in 0..ms {
        wait_ticks(Prescaler::Div64, 250);
    }
}

pub fn delay_us(us: u16) {
    // 16MHz/8 = 2MHz, two ticks per microsecond, chunks stay below 256 ticks
    let mut remaining = us;
    while remaining > 0 {
        let chunk = remaining.min(100);
        wait_ticks(Prescaler::Div8, (chunk * 2) as u8);
        remaining -= chunk;
    }
}

/// Busy-wait delay on Timer0.
///
/// Zero-sized; every instance shares Timer0, which is fine as long as nothing
/// else uses it and delays never nest.
#[derive(Clone, Copy, Default)]
pub struct Delay;

impl Delay {
    pub fn new() -> Self {
        Delay
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        delay_ms(ms);
    }
}

impl DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        delay_ms(ms.into());
    }
}

impl DelayUs<u16> for Delay {
    fn delay_us(&mut self, us: u16) {
        delay_us(us);
    }
}
