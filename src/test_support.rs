//! Recording fakes for host tests.
//!
//! Pins, ADC and serial are covered by `embedded-hal-mock`; these fill the gaps
//! where a test wants to inspect what happened instead of scripting it up front.
//! Every fake is `Clone` and shares its state, so a test keeps one handle and
//! moves the other into the code under test.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::PwmPin;
use ufmt::uWrite;

use crate::config::{LCD_COLUMNS, LCD_ROWS};
use crate::drivers::CharacterDisplay;

/// `uWrite` sink collecting into a `String`.
#[derive(Default)]
pub struct Sink(String);

impl Sink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl uWrite for Sink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}

#[derive(Default)]
struct PwmState<D> {
    enabled: bool,
    duty: D,
    history: Vec<D>,
}

/// PWM channel remembering every duty it was given.
#[derive(Clone)]
pub struct FakePwm<D> {
    max: D,
    state: Rc<RefCell<PwmState<D>>>,
}

impl<D: Copy + Default> FakePwm<D> {
    pub fn new(max: D) -> Self {
        Self {
            max,
            state: Rc::new(RefCell::new(PwmState::default())),
        }
    }

    pub fn duty(&self) -> D {
        self.state.borrow().duty
    }

    pub fn history(&self) -> Vec<D> {
        self.state.borrow().history.clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }
}

impl<D: Copy + Default> PwmPin for FakePwm<D> {
    type Duty = D;

    fn disable(&mut self) {
        self.state.borrow_mut().enabled = false;
    }

    fn enable(&mut self) {
        self.state.borrow_mut().enabled = true;
    }

    fn get_duty(&self) -> D {
        self.duty()
    }

    fn get_max_duty(&self) -> D {
        self.max
    }

    fn set_duty(&mut self, duty: D) {
        let mut state = self.state.borrow_mut();
        state.duty = duty;
        state.history.push(duty);
    }
}

/// Delay that only records the requested milliseconds.
#[derive(Clone, Default)]
pub struct FakeDelay {
    ms: Rc<RefCell<Vec<u32>>>,
}

impl FakeDelay {
    pub fn millis(&self) -> Vec<u32> {
        self.ms.borrow().clone()
    }
}

impl DelayMs<u16> for FakeDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.ms.borrow_mut().push(ms.into());
    }
}

impl DelayMs<u8> for FakeDelay {
    fn delay_ms(&mut self, ms: u8) {
        self.ms.borrow_mut().push(ms.into());
    }
}

impl DelayUs<u16> for FakeDelay {
    fn delay_us(&mut self, _us: u16) {}
}

struct Screen {
    rows: [[u8; LCD_COLUMNS as usize]; LCD_ROWS as usize],
    col: u8,
    row: u8,
    initialized: bool,
    clears: usize,
    bytes: usize,
}

/// In-memory 16x2 character display.
#[derive(Clone)]
pub struct FakeDisplay {
    screen: Rc<RefCell<Screen>>,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self {
            screen: Rc::new(RefCell::new(Screen {
                rows: [[b' '; LCD_COLUMNS as usize]; LCD_ROWS as usize],
                col: 0,
                row: 0,
                initialized: false,
                clears: 0,
                bytes: 0,
            })),
        }
    }

    pub fn row(&self, row: usize) -> String {
        String::from_utf8(self.screen.borrow().rows[row].to_vec()).unwrap()
    }

    pub fn clears(&self) -> usize {
        self.screen.borrow().clears
    }

    /// Every byte sent to the display, visible or not.
    pub fn bytes_written(&self) -> usize {
        self.screen.borrow().bytes
    }

    pub fn is_initialized(&self) -> bool {
        self.screen.borrow().initialized
    }
}

impl CharacterDisplay for FakeDisplay {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Infallible> {
        self.screen.borrow_mut().initialized = true;
        self.clear()
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        let mut screen = self.screen.borrow_mut();
        screen.rows = [[b' '; LCD_COLUMNS as usize]; LCD_ROWS as usize];
        screen.col = 0;
        screen.row = 0;
        screen.clears += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Infallible> {
        let mut screen = self.screen.borrow_mut();
        screen.col = col;
        screen.row = row.min(LCD_ROWS - 1);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        let mut screen = self.screen.borrow_mut();
        for byte in s.bytes() {
            let (row, col) = (screen.row as usize, screen.col as usize);
            // characters past the visible width land in hidden display RAM
            if col < LCD_COLUMNS as usize {
                screen.rows[row][col] = byte;
            }
            screen.col = screen.col.saturating_add(1);
            screen.bytes += 1;
        }
        Ok(())
    }
}
