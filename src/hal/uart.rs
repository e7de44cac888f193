use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use embedded_hal::serial::Write;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// UCSR0A: data register empty
const UDRE0: u8 = 1 << 5;
// UCSR0B: transmitter enable
const TXEN0: u8 = 1 << 3;
// UCSR0C: asynchronous, 8 data bits, no parity, 1 stop bit
const FRAME_8N1: u8 = 0x06;

// Baud rate calculation, 103 for 9600 @ 16MHz
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

/// Polled USART0, transmit only on D1.
pub struct Uart {
    usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            // Set baud rate
            usart.ubrr0.write(|w| w.bits(UBRR));
            usart.ucsr0c.write(|w| w.bits(FRAME_8N1));
            usart.ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self { usart }
    }

    fn status(&self) -> u8 {
        self.usart.ucsr0a.read().bits()
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.status() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            self.usart.udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.status() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }
}
