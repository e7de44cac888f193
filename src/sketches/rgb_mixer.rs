use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::Write;
use embedded_hal::PwmPin;
use ufmt::uwrite;

use super::{read_analog, Sketch};
use crate::change::ChangeDetector;
use crate::config::{COLOR_TEST_INTERVAL_MS, POT_SAMPLE_INTERVAL_MS};
use crate::drivers::{Color, RgbLed, SerialConsole};
use crate::error::SketchError;
use crate::scaling::{adc_to_duty, adc_to_percent, Centi};

/// Three potentiometers mixing an RGB LED, with the pot positions reported
/// over serial whenever any of them moves.
pub struct RgbMixer<A, CR, CG, CB, R, G, B, S, D> {
    adc: A,
    pots: (CR, CG, CB),
    led: RgbLed<R, G, B>,
    console: SerialConsole<S>,
    delay: D,
    reported: ChangeDetector<[u16; 3]>,
}

impl<A, CR, CG, CB, R, G, B, S, D> RgbMixer<A, CR, CG, CB, R, G, B, S, D>
where
    A: OneShot<A, u16, CR> + OneShot<A, u16, CG> + OneShot<A, u16, CB>,
    CR: Channel<A>,
    CG: Channel<A>,
    CB: Channel<A>,
    R: PwmPin<Duty = u8>,
    G: PwmPin<Duty = u8>,
    B: PwmPin<Duty = u8>,
    S: Write<u8>,
    D: DelayMs<u16>,
{
    pub fn new(
        adc: A,
        pots: (CR, CG, CB),
        led: RgbLed<R, G, B>,
        console: SerialConsole<S>,
        delay: D,
    ) -> Self {
        Self {
            adc,
            pots,
            led,
            console,
            delay,
            reported: ChangeDetector::new(),
        }
    }

    fn sample(&mut self) -> Result<[u16; 3], SketchError> {
        Ok([
            read_analog(&mut self.adc, &mut self.pots.0)?,
            read_analog(&mut self.adc, &mut self.pots.1)?,
            read_analog(&mut self.adc, &mut self.pots.2)?,
        ])
    }

    fn report(&mut self, raw: [u16; 3]) -> Result<(), SketchError> {
        let [red, green, blue] = raw.map(|v| Centi::from_whole(adc_to_percent(v).into()));
        uwrite!(
            self.console,
            "Potentiometer red: {}% | Potentiometer green: {}% | Potentiometer blue: {}%\r\n",
            red,
            green,
            blue
        )
        .map_err(|_| SketchError::Serial)
    }

    pub fn release(self) -> (A, (CR, CG, CB), RgbLed<R, G, B>, SerialConsole<S>, D) {
        (self.adc, self.pots, self.led, self.console, self.delay)
    }
}

impl<A, CR, CG, CB, R, G, B, S, D> Sketch for RgbMixer<A, CR, CG, CB, R, G, B, S, D>
where
    A: OneShot<A, u16, CR> + OneShot<A, u16, CG> + OneShot<A, u16, CB>,
    CR: Channel<A>,
    CG: Channel<A>,
    CB: Channel<A>,
    R: PwmPin<Duty = u8>,
    G: PwmPin<Duty = u8>,
    B: PwmPin<Duty = u8>,
    S: Write<u8>,
    D: DelayMs<u16>,
{
    fn setup(&mut self) -> Result<(), SketchError> {
        self.led
            .cycle_primaries(&mut self.delay, COLOR_TEST_INTERVAL_MS);
        Ok(())
    }

    fn tick(&mut self) -> Result<(), SketchError> {
        let raw = self.sample()?;
        if self.reported.update(raw) {
            self.report(raw)?;
        }

        let color = Color::new(adc_to_duty(raw[0]), adc_to_duty(raw[1]), adc_to_duty(raw[2]));
        self.led.set(color);

        #[cfg(feature = "debug")]
        {
            self.console
                .debug("duty r", color.red)
                .and_then(|_| self.console.debug("duty g", color.green))
                .and_then(|_| self.console.debug("duty b", color.blue))
                .map_err(|_| SketchError::Serial)?;
        }

        self.delay.delay_ms(POT_SAMPLE_INTERVAL_MS);
        Ok(())
    }
}
