use avr_device::atmega328p::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

// ADCSRA bits
const ADEN: u8 = 1 << 7;
const ADSC: u8 = 1 << 6;

// ADMUX REFS0: AVCC reference with a capacitor on AREF
const REFS_AVCC: u8 = 1 << 6;
// ADPS2..0: /128, 125kHz ADC clock at 16MHz
const PRESCALER_DIV128: u8 = 0x07;

/// Analog header pins A0..A5.
pub struct A0;
pub struct A1;
pub struct A2;
pub struct A3;
pub struct A4;
pub struct A5;

macro_rules! impl_channel {
    ($($ch:ident => $mux:expr),+ $(,)?) => {
        $(
            impl Channel<Adc> for $ch {
                type ID = u8;

                fn channel() -> u8 {
                    $mux
                }
            }
        )+
    };
}

impl_channel!(A0 => 0, A1 => 1, A2 => 2, A3 => 3, A4 => 4, A5 => 5);

/// 10-bit successive approximation ADC, blocking conversions.
pub struct Adc {
    regs: ADC,
}

impl Adc {
    pub fn new(adc: ADC) -> Self {
        unsafe {
            adc.adcsra.write(|w| w.bits(ADEN | PRESCALER_DIV128));
            adc.admux.write(|w| w.bits(REFS_AVCC));
        }
        Self { regs: adc }
    }

    pub fn read_blocking(&mut self, mux: u8) -> u16 {
        unsafe {
            // Select channel
            self.regs
                .admux
                .modify(|r, w| w.bits((r.bits() & 0xF0) | (mux & 0x0F)));

            // Start conversion
            self.regs.adcsra.modify(|r, w| w.bits(r.bits() | ADSC));
        }

        // Wait for completion
        while self.regs.adcsra.read().bits() & ADSC != 0 {}

        self.regs.adc.read().bits()
    }
}

impl<PIN> OneShot<Adc, u16, PIN> for Adc
where
    PIN: Channel<Adc, ID = u8>,
{
    type Error = Infallible;

    fn read(&mut self, _pin: &mut PIN) -> nb::Result<u16, Infallible> {
        Ok(self.read_blocking(PIN::channel()))
    }
}
