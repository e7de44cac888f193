use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin, StatefulOutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Pin<PORT, P, MODE> {
    const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $pin:ident, $ddr:ident, $port:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Set DDRx bit
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::new()
            }

            /// Input without pull-up; the buttons have external pull-downs.
            pub fn into_floating_input(self) -> Pin<$PORT, P, Input> {
                // Clear DDRx bit and disable pull-up
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Pin::new()
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            #[inline]
            fn set_high(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Ok(())
            }

            #[inline]
            fn set_low(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Ok(())
            }
        }

        impl<const P: u8> StatefulOutputPin for Pin<$PORT, P, Output> {
            #[inline]
            fn is_set_high(&self) -> Result<bool, Infallible> {
                Ok(unsafe { (*$PORT::ptr()).$port.read().bits() & (1 << P) != 0 })
            }

            #[inline]
            fn is_set_low(&self) -> Result<bool, Infallible> {
                self.is_set_high().map(|high| !high)
            }
        }

        impl<const P: u8> InputPin for Pin<$PORT, P, Input> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Infallible> {
                Ok(unsafe { (*$PORT::ptr()).$pin.read().bits() & (1 << P) != 0 })
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Infallible> {
                self.is_high().map(|high| !high)
            }
        }
    };
}

// The three ATmega328P ports
impl_port!(PORTB, pinb, ddrb, portb);
impl_port!(PORTC, pinc, ddrc, portc);
impl_port!(PORTD, pind, ddrd, portd);

// Arduino Uno header names
pub mod board {
    use super::*;

    pub type D2 = Pin<PORTD, 2, Input>;
    pub type D3 = Pin<PORTD, 3, Input>;
    pub type D4 = Pin<PORTD, 4, Input>;
    pub type D5 = Pin<PORTD, 5, Input>;
    pub type D6 = Pin<PORTD, 6, Input>;
    pub type D7 = Pin<PORTD, 7, Input>;
    pub type D8 = Pin<PORTB, 0, Input>;
    pub type D9 = Pin<PORTB, 1, Input>;
    pub type D10 = Pin<PORTB, 2, Input>;
    pub type D11 = Pin<PORTB, 3, Input>;
    pub type D12 = Pin<PORTB, 4, Input>;
    pub type D13 = Pin<PORTB, 5, Input>;

    /// Digital header pins, all inputs after reset.
    ///
    /// D0/D1 stay with the USART and the analog header belongs to the ADC.
    pub struct Pins {
        pub d2: D2,
        pub d3: D3,
        pub d4: D4,
        pub d5: D5,
        pub d6: D6,
        pub d7: D7,
        pub d8: D8,
        pub d9: D9,
        pub d10: D10,
        pub d11: D11,
        pub d12: D12,
        pub d13: D13,
    }

    impl Pins {
        /// Consumes the port peripherals so no one else touches them.
        pub fn new(_portb: PORTB, _portc: PORTC, _portd: PORTD) -> Self {
            Self {
                d2: Pin::new(),
                d3: Pin::new(),
                d4: Pin::new(),
                d5: Pin::new(),
                d6: Pin::new(),
                d7: Pin::new(),
                d8: Pin::new(),
                d9: Pin::new(),
                d10: Pin::new(),
                d11: Pin::new(),
                d12: Pin::new(),
                d13: Pin::new(),
            }
        }
    }
}
