//! HD44780 character LCD on a 4-bit parallel bus
//!
//! Only the write direction is wired (R/W tied to ground), so the busy flag is
//! never polled; every command is followed by a fixed delay long enough for
//! the slowest instruction in its class.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::OutputPin;
use ufmt::uWrite;

use super::display::CharacterDisplay;
use crate::config::LCD_ROWS;

const CLEAR: u8 = 0x01;
const ENTRY_MODE: u8 = 0x04;
const DISPLAY_CONTROL: u8 = 0x08;
const FUNCTION_SET: u8 = 0x20;
const SET_DDRAM_ADDR: u8 = 0x80;

// Entry mode: cursor moves right, no display shift
const ENTRY_LEFT: u8 = 0x02;
// Display control
const DISPLAY_ON: u8 = 0x04;
// Function set: 4-bit bus, 2 lines, 5x8 font
const TWO_LINES: u8 = 0x08;

const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];
// DDRAM holds 40 characters per line in two-line mode
const ROW_LENGTH: u8 = 40;

#[derive(Clone, Copy)]
enum Mode {
    Command,
    Data,
}

/// 4-bit parallel HD44780 (RS, EN, D4..D7).
///
/// All six pins must share an error type; on the AVR HAL that is `Infallible`.
pub struct Lcd<RS, EN, D4, D5, D6, D7, DL> {
    rs: RS,
    en: EN,
    data: (D4, D5, D6, D7),
    delay: DL,
}

impl<RS, EN, D4, D5, D6, D7, DL, E> Lcd<RS, EN, D4, D5, D6, D7, DL>
where
    RS: OutputPin<Error = E>,
    EN: OutputPin<Error = E>,
    D4: OutputPin<Error = E>,
    D5: OutputPin<Error = E>,
    D6: OutputPin<Error = E>,
    D7: OutputPin<Error = E>,
    DL: DelayUs<u16> + DelayMs<u8>,
{
    /// Takes ownership of the bus. Call [`CharacterDisplay::init`] before writing.
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: DL) -> Self {
        Self {
            rs,
            en,
            data: (d4, d5, d6, d7),
            delay,
        }
    }

    fn set_pin<P: OutputPin<Error = E>>(pin: &mut P, high: bool) -> Result<(), E> {
        if high {
            pin.set_high()
        } else {
            pin.set_low()
        }
    }

    fn pulse_enable(&mut self) -> Result<(), E> {
        self.en.set_high()?;
        self.delay.delay_us(1);
        self.en.set_low()?;
        // commands need > 37us to settle
        self.delay.delay_us(100);
        Ok(())
    }

    fn write4bits(&mut self, nibble: u8) -> Result<(), E> {
        Self::set_pin(&mut self.data.0, nibble & 0x01 != 0)?;
        Self::set_pin(&mut self.data.1, nibble & 0x02 != 0)?;
        Self::set_pin(&mut self.data.2, nibble & 0x04 != 0)?;
        Self::set_pin(&mut self.data.3, nibble & 0x08 != 0)?;
        self.pulse_enable()
    }

    fn send(&mut self, byte: u8, mode: Mode) -> Result<(), E> {
        match mode {
            Mode::Command => self.rs.set_low()?,
            Mode::Data => self.rs.set_high()?,
        }
        self.write4bits(byte >> 4)?;
        self.write4bits(byte & 0x0F)
    }

    fn command(&mut self, byte: u8) -> Result<(), E> {
        self.send(byte, Mode::Command)
    }

    pub fn release(self) -> (RS, EN, D4, D5, D6, D7, DL) {
        let (d4, d5, d6, d7) = self.data;
        (self.rs, self.en, d4, d5, d6, d7, self.delay)
    }
}

impl<RS, EN, D4, D5, D6, D7, DL, E> CharacterDisplay for Lcd<RS, EN, D4, D5, D6, D7, DL>
where
    RS: OutputPin<Error = E>,
    EN: OutputPin<Error = E>,
    D4: OutputPin<Error = E>,
    D5: OutputPin<Error = E>,
    D6: OutputPin<Error = E>,
    D7: OutputPin<Error = E>,
    DL: DelayUs<u16> + DelayMs<u8>,
{
    type Error = E;

    /// Power-on reset by instruction, as described in the HD44780 datasheet.
    fn init(&mut self) -> Result<(), E> {
        // wait for Vcc to rise above 4.5V
        self.delay.delay_ms(50);
        self.rs.set_low()?;
        self.en.set_low()?;

        // three times 8-bit mode to sync up, whatever state it was left in
        self.write4bits(0x03)?;
        self.delay.delay_us(4500);
        self.write4bits(0x03)?;
        self.delay.delay_us(4500);
        self.write4bits(0x03)?;
        self.delay.delay_us(150);

        // switch to 4-bit
        self.write4bits(0x02)?;

        self.command(FUNCTION_SET | TWO_LINES)?;
        self.command(DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(ENTRY_MODE | ENTRY_LEFT)
    }

    fn clear(&mut self) -> Result<(), E> {
        self.command(CLEAR)?;
        // clear is the one slow instruction
        self.delay.delay_us(2000);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), E> {
        let row = row.min(LCD_ROWS - 1) as usize;
        let col = col.min(ROW_LENGTH - 1);
        self.command(SET_DDRAM_ADDR | (col + ROW_OFFSETS[row]))
    }

    fn write_str(&mut self, s: &str) -> Result<(), E> {
        for byte in s.bytes() {
            self.send(byte, Mode::Data)?;
        }
        Ok(())
    }
}

impl<RS, EN, D4, D5, D6, D7, DL, E> uWrite for Lcd<RS, EN, D4, D5, D6, D7, DL>
where
    RS: OutputPin<Error = E>,
    EN: OutputPin<Error = E>,
    D4: OutputPin<Error = E>,
    D5: OutputPin<Error = E>,
    D6: OutputPin<Error = E>,
    D7: OutputPin<Error = E>,
    DL: DelayUs<u16> + DelayMs<u8>,
{
    type Error = E;

    fn write_str(&mut self, s: &str) -> Result<(), E> {
        CharacterDisplay::write_str(self, s)
    }
}
