//! TMP36 temperature indicator on a 16x2 LCD
//!
//! Button 1 switches the whole system on and off, button 2 flips between
//! Celsius and Fahrenheit while it is on. Three LEDs mirror the state: green
//! for on, blue for Celsius, yellow for Fahrenheit.

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use super::{read_analog, Sketch};
use crate::config::{BUTTON_DEBOUNCE_MS, LCD_COLUMNS};
use crate::drivers::{Button, CharacterDisplay, LineWriter};
use crate::error::SketchError;
use crate::scaling::{tmp36_celsius, tmp36_fahrenheit, Centi};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn toggled(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }
}

impl uDisplay for Unit {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        })
    }
}

/// Which indicator LEDs should be lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicators {
    pub green: bool,
    pub blue: bool,
    pub yellow: bool,
}

/// The two toggles: system on/off and display unit.
///
/// The unit survives switching the system off and on again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThermometerState {
    enabled: bool,
    unit: Unit,
}

impl ThermometerState {
    pub const fn new() -> Self {
        Self {
            enabled: false,
            unit: Unit::Celsius,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn toggle_power(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggled();
    }

    pub fn indicators(&self) -> Indicators {
        Indicators {
            green: self.enabled,
            blue: self.enabled && self.unit == Unit::Celsius,
            yellow: self.enabled && self.unit == Unit::Fahrenheit,
        }
    }

    /// Temperature to display for a raw sensor sample, `None` while switched off.
    pub fn reading(&self, raw: u16) -> Option<Centi> {
        if !self.enabled {
            return None;
        }
        Some(match self.unit {
            Unit::Celsius => tmp36_celsius(raw),
            Unit::Fahrenheit => tmp36_fahrenheit(raw),
        })
    }
}

impl Default for ThermometerState {
    fn default() -> Self {
        Self::new()
    }
}

/// The green, blue and yellow status LEDs.
pub struct IndicatorLeds<G, B, Y> {
    pub green: G,
    pub blue: B,
    pub yellow: Y,
}

impl<G: OutputPin, B: OutputPin, Y: OutputPin> IndicatorLeds<G, B, Y> {
    pub fn new(green: G, blue: B, yellow: Y) -> Self {
        Self { green, blue, yellow }
    }

    pub fn show(&mut self, lit: Indicators) -> Result<(), SketchError> {
        set_led(&mut self.green, lit.green)?;
        set_led(&mut self.blue, lit.blue)?;
        set_led(&mut self.yellow, lit.yellow)
    }
}

fn set_led<P: OutputPin>(pin: &mut P, lit: bool) -> Result<(), SketchError> {
    if lit {
        pin.set_high().map_err(|_| SketchError::Pin)
    } else {
        pin.set_low().map_err(|_| SketchError::Pin)
    }
}

pub struct Thermometer<PB, UB, G, B, Y, A, CH, LCD, D> {
    power: Button<PB>,
    unit: Button<UB>,
    leds: IndicatorLeds<G, B, Y>,
    adc: A,
    sensor: CH,
    display: LCD,
    delay: D,
    state: ThermometerState,
    // something is on screen that has to be cleared when switching off
    showing: bool,
}

impl<PB, UB, G, B, Y, A, CH, LCD, D> Thermometer<PB, UB, G, B, Y, A, CH, LCD, D>
where
    PB: InputPin,
    UB: InputPin,
    G: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    A: OneShot<A, u16, CH>,
    CH: Channel<A>,
    LCD: CharacterDisplay,
    D: DelayMs<u16>,
{
    pub fn new(
        power: Button<PB>,
        unit: Button<UB>,
        leds: IndicatorLeds<G, B, Y>,
        adc: A,
        sensor: CH,
        display: LCD,
        delay: D,
    ) -> Self {
        Self {
            power,
            unit,
            leds,
            adc,
            sensor,
            display,
            delay,
            state: ThermometerState::new(),
            showing: false,
        }
    }

    pub fn state(&self) -> ThermometerState {
        self.state
    }

    fn show_reading(&mut self, temperature: Centi) -> Result<(), SketchError> {
        let unit = self.state.unit();
        let mut line =
            LineWriter::start(&mut self.display, 0, LCD_COLUMNS).map_err(|_| SketchError::Display)?;
        uwrite!(line, "Temp: {} {}", temperature, unit).map_err(|_| SketchError::Display)?;
        line.finish().map_err(|_| SketchError::Display)?;
        self.showing = true;
        Ok(())
    }

    pub fn release(self) -> (Button<PB>, Button<UB>, IndicatorLeds<G, B, Y>, A, CH, LCD, D) {
        (
            self.power,
            self.unit,
            self.leds,
            self.adc,
            self.sensor,
            self.display,
            self.delay,
        )
    }
}

impl<PB, UB, G, B, Y, A, CH, LCD, D> Sketch for Thermometer<PB, UB, G, B, Y, A, CH, LCD, D>
where
    PB: InputPin,
    UB: InputPin,
    G: OutputPin,
    B: OutputPin,
    Y: OutputPin,
    A: OneShot<A, u16, CH>,
    CH: Channel<A>,
    LCD: CharacterDisplay,
    D: DelayMs<u16>,
{
    fn setup(&mut self) -> Result<(), SketchError> {
        self.leds.show(self.state.indicators())?;
        self.display.init().map_err(|_| SketchError::Display)?;
        self.showing = false;
        Ok(())
    }

    fn tick(&mut self) -> Result<(), SketchError> {
        if self.power.is_pressed()? {
            self.state.toggle_power();
            self.leds.show(self.state.indicators())?;
            self.power.wait_for_release(&mut self.delay, BUTTON_DEBOUNCE_MS)?;
        }

        if self.state.is_enabled() {
            if self.unit.is_pressed()? {
                self.state.toggle_unit();
                self.leds.show(self.state.indicators())?;
                self.unit.wait_for_release(&mut self.delay, BUTTON_DEBOUNCE_MS)?;
            }

            let raw = read_analog(&mut self.adc, &mut self.sensor)?;
            if let Some(temperature) = self.state.reading(raw) {
                self.show_reading(temperature)?;
            }
        } else if self.showing {
            self.display.clear().map_err(|_| SketchError::Display)?;
            self.showing = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeDelay, FakeDisplay};
    use embedded_hal_mock::eh0::adc::{Mock as AdcMock, MockChan0, Transaction as AdcTransaction};
    use embedded_hal_mock::eh0::digital::{Mock as PinMock, State, Transaction};
    use std::vec::Vec;

    fn reads(states: &[State]) -> PinMock {
        let expected: Vec<Transaction> = states.iter().map(|s| Transaction::get(s.clone())).collect();
        PinMock::new(&expected)
    }

    fn writes(states: &[State]) -> PinMock {
        let expected: Vec<Transaction> = states.iter().map(|s| Transaction::set(s.clone())).collect();
        PinMock::new(&expected)
    }

    #[test]
    fn four_observable_states() {
        let mut state = ThermometerState::new();
        let mut seen = Vec::new();
        for _ in 0..2 {
            for _ in 0..2 {
                seen.push((state.is_enabled(), state.unit(), state.indicators(), state.reading(153)));
                state.toggle_unit();
            }
            state.toggle_power();
        }

        let lit = |green, blue, yellow| Indicators { green, blue, yellow };
        assert_eq!(
            seen,
            [
                (false, Unit::Celsius, lit(false, false, false), None),
                (false, Unit::Fahrenheit, lit(false, false, false), None),
                (true, Unit::Celsius, lit(true, true, false), Some(Centi(2478))),
                (true, Unit::Fahrenheit, lit(true, false, true), Some(Centi(7660))),
            ]
        );
    }

    #[test]
    fn starts_off_in_celsius() {
        let state = ThermometerState::default();
        assert!(!state.is_enabled());
        assert_eq!(state.unit(), Unit::Celsius);
        assert_eq!(state.reading(512), None);
    }

    #[test]
    fn buttons_drive_leds_and_display() {
        use State::{High, Low};

        // tick 1: power pressed, held once, released
        // tick 2: unit pressed and released straight away
        // tick 3: power pressed and released, tick 4: idle
        let power = reads(&[High, High, Low, Low, High, Low, Low]);
        let unit = reads(&[Low, High, Low]);
        let green = writes(&[Low, High, High, Low]);
        let blue = writes(&[Low, High, Low, Low]);
        let yellow = writes(&[Low, Low, High, Low]);
        let adc = AdcMock::new(&[AdcTransaction::read(0, 153u16), AdcTransaction::read(0, 153)]);
        let display = FakeDisplay::new();
        let delay = FakeDelay::default();

        let mut sketch = Thermometer::new(
            Button::new(power),
            Button::new(unit),
            IndicatorLeds::new(green, blue, yellow),
            adc,
            MockChan0,
            display.clone(),
            delay.clone(),
        );

        sketch.setup().unwrap();
        assert!(display.is_initialized());
        assert_eq!(display.clears(), 1);

        sketch.tick().unwrap();
        assert_eq!(display.row(0), "Temp: 24.78 C   ");

        sketch.tick().unwrap();
        assert_eq!(display.row(0), "Temp: 76.60 F   ");
        assert_eq!(sketch.state().unit(), Unit::Fahrenheit);

        sketch.tick().unwrap();
        assert!(!sketch.state().is_enabled());
        assert_eq!(display.clears(), 2);
        assert_eq!(display.row(0), " ".repeat(16));

        sketch.tick().unwrap();
        assert_eq!(display.clears(), 2);
        assert_eq!(delay.millis(), [50, 50, 50]);

        let (power, unit, leds, mut adc, _, _, _) = sketch.release();
        power.release().done();
        unit.release().done();
        let IndicatorLeds {
            mut green,
            mut blue,
            mut yellow,
        } = leds;
        green.done();
        blue.done();
        yellow.done();
        adc.done();
    }
}
