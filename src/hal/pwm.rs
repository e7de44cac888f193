//! PWM (Pulse Width Modulation) HAL implementation
//!
//! Timer1 and Timer2 in 8-bit fast PWM drive the LED channels; Timer1 can
//! instead run as a 16-bit 50 Hz timer for a servo, which takes over both of
//! its output compare channels.

use avr_device::atmega328p::{PORTB, TC1, TC2};
use embedded_hal::PwmPin;

use super::compare::route_output;
use super::gpio::{Output, Pin};

// Compare output mode, non-inverting (COMnx1)
const COM_A: u8 = 1 << 7;
const COM_B: u8 = 1 << 5;

// Clock select for /64 on Timer1 (CS11|CS10) and Timer2 (CS22)
const TC1_DIV64: u8 = 0x03;
const TC2_DIV64: u8 = 0x04;
// Clock select for /8 on Timer1 (CS11): 0.5us ticks at 16MHz
const TC1_DIV8: u8 = 0x02;

/// 50 Hz at 0.5us per tick
const SERVO_TOP: u16 = 40_000 - 1;

/// Timer1 in 8-bit fast PWM, ~976 Hz.
pub struct Timer1Pwm {
    _tc1: TC1,
}

impl Timer1Pwm {
    pub fn new(tc1: TC1) -> Self {
        unsafe {
            // WGM10 | WGM12: fast PWM, 8-bit
            tc1.tccr1a.write(|w| w.bits(0x01));
            tc1.tccr1b.write(|w| w.bits(0x08 | TC1_DIV64));
        }
        Self { _tc1: tc1 }
    }

    /// OC1A on D9 and OC1B on D10.
    pub fn split(
        self,
        _d9: Pin<PORTB, 1, Output>,
        _d10: Pin<PORTB, 2, Output>,
    ) -> (Pwm1A, Pwm1B) {
        (Pwm1A { enabled: false }, Pwm1B { enabled: false })
    }
}

/// Timer2 in 8-bit fast PWM, ~976 Hz.
pub struct Timer2Pwm {
    _tc2: TC2,
}

impl Timer2Pwm {
    pub fn new(tc2: TC2) -> Self {
        unsafe {
            // WGM20 | WGM21: fast PWM
            tc2.tccr2a.write(|w| w.bits(0x03));
            tc2.tccr2b.write(|w| w.bits(TC2_DIV64));
        }
        Self { _tc2: tc2 }
    }

    /// OC2A on D11.
    pub fn into_channel_a(self, _d11: Pin<PORTB, 3, Output>) -> Pwm2A {
        Pwm2A { enabled: false }
    }
}

macro_rules! impl_pwm_channel {
    ($name:ident, $TC:ident, $ctrl:ident, $ocr:ident, $com:expr, $Duty:ty, $max:expr) => {
        pub struct $name {
            enabled: bool,
        }

        impl $name {
            fn route(&mut self, duty_is_zero: bool) {
                let enabled = self.enabled;
                unsafe {
                    (*$TC::ptr())
                        .$ctrl
                        .modify(|r, w| w.bits(route_output(r.bits(), $com, enabled, duty_is_zero)));
                }
            }
        }

        impl PwmPin for $name {
            type Duty = $Duty;

            fn disable(&mut self) {
                self.enabled = false;
                self.route(true);
            }

            fn enable(&mut self) {
                self.enabled = true;
                let duty = self.get_duty();
                self.route(duty == 0);
            }

            fn get_duty(&self) -> $Duty {
                unsafe { (*$TC::ptr()).$ocr.read().bits() as $Duty }
            }

            fn get_max_duty(&self) -> $Duty {
                $max
            }

            fn set_duty(&mut self, duty: $Duty) {
                unsafe {
                    (*$TC::ptr()).$ocr.write(|w| w.bits(duty.into()));
                }
                self.route(duty == 0);
            }
        }
    };
}

impl_pwm_channel!(Pwm1A, TC1, tccr1a, ocr1a, COM_A, u8, u8::MAX);
impl_pwm_channel!(Pwm1B, TC1, tccr1a, ocr1b, COM_B, u8, u8::MAX);
impl_pwm_channel!(Pwm2A, TC2, tccr2a, ocr2a, COM_A, u8, u8::MAX);

/// Timer1 as a 50 Hz servo timer (mode 14, ICR1 top).
pub struct ServoTimer {
    _tc1: TC1,
}

impl ServoTimer {
    pub fn new(tc1: TC1) -> Self {
        unsafe {
            // WGM11 in TCCR1A, WGM12|WGM13 in TCCR1B: fast PWM with ICR1 as top
            tc1.tccr1a.write(|w| w.bits(0x02));
            tc1.tccr1b.write(|w| w.bits(0x18 | TC1_DIV8));
            tc1.icr1.write(|w| w.bits(SERVO_TOP));
        }
        Self { _tc1: tc1 }
    }

    /// OC1A on D9.
    pub fn into_channel_a(self, _d9: Pin<PORTB, 1, Output>) -> ServoPwm {
        ServoPwm { enabled: false }
    }
}

// One full period, so duty = pulse_us * 2
impl_pwm_channel!(ServoPwm, TC1, tccr1a, ocr1a, COM_A, u16, SERVO_TOP + 1);
