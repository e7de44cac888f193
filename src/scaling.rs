//! Linear scaling of raw analog readings
//!
//! Everything here is integer arithmetic: the ATmega328P has no FPU and `ufmt`
//! cannot print floats, so fractional values are carried as hundredths.

use crate::config::{ADC_MAX, ADC_VREF_MV, PWM_MAX, SERVO_MAX_DEGREES};
use ufmt::{uDisplay, uWrite, Formatter};

/// Re-maps `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Same truncating formula as the Arduino core: values outside the input range
/// are extrapolated, not clamped.
pub const fn map(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

#[inline]
const fn clamp_adc(raw: u16) -> i32 {
    if raw > ADC_MAX {
        ADC_MAX as i32
    } else {
        raw as i32
    }
}

/// 10-bit ADC reading to 8-bit PWM duty (0→0, 1023→255).
pub fn adc_to_duty(raw: u16) -> u8 {
    map(clamp_adc(raw), 0, ADC_MAX as i32, 0, PWM_MAX as i32) as u8
}

/// 10-bit ADC reading to a whole percentage (0→0, 1023→100).
pub fn adc_to_percent(raw: u16) -> u8 {
    map(clamp_adc(raw), 0, ADC_MAX as i32, 0, 100) as u8
}

/// 10-bit ADC reading to a servo angle (0→0°, 1023→180°).
pub fn adc_to_degrees(raw: u16) -> u8 {
    map(clamp_adc(raw), 0, ADC_MAX as i32, 0, SERVO_MAX_DEGREES as i32) as u8
}

/// Fixed-point value in hundredths, printed as `12.34`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Centi(pub i32);

impl Centi {
    pub const fn from_whole(value: i32) -> Self {
        Centi(value * 100)
    }

    pub const fn hundredths(self) -> i32 {
        self.0
    }
}

impl uDisplay for Centi {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let abs = self.0.unsigned_abs();
        let frac = abs % 100;
        uDisplay::fmt(&(abs / 100), f)?;
        f.write_str(if frac < 10 { ".0" } else { "." })?;
        uDisplay::fmt(&frac, f)
    }
}

/// Integer division rounded half away from zero, as `Print` does for floats.
const fn div_round(n: i32, d: i32) -> i32 {
    if n >= 0 {
        (n + d / 2) / d
    } else {
        (n - d / 2) / d
    }
}

// hundredths of a degree C = (raw * 5000mV * 10 / 1023) - 5000, over a common denominator
const fn tmp36_numerator(raw: u16) -> i32 {
    clamp_adc(raw) * ADC_VREF_MV * 10 - 5000 * ADC_MAX as i32
}

/// TMP36 output: 10 mV/°C with a 500 mV offset, sampled against a 5 V reference.
pub const fn tmp36_celsius(raw: u16) -> Centi {
    Centi(div_round(tmp36_numerator(raw), ADC_MAX as i32))
}

/// Same reading in Fahrenheit, rounded once from the exact Celsius fraction.
pub const fn tmp36_fahrenheit(raw: u16) -> Centi {
    let denom = ADC_MAX as i32 * 5;
    Centi(div_round(tmp36_numerator(raw) * 9 + 3200 * denom, denom))
}

/// F = C * 9/5 + 32, in hundredths.
pub const fn celsius_to_fahrenheit(celsius: Centi) -> Centi {
    Centi(div_round(celsius.0 * 9, 5) + 3200)
}
