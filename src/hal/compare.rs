//! Output-compare pin routing shared by the PWM channels
//!
//! In fast PWM a compare value of 0 still produces a one-tick spike every
//! period, so a channel at zero duty is disconnected from its pin and the pin
//! falls back to its PORT bit, which is low.

/// Timer control register value with the channel's COM bits set or cleared.
pub const fn route_output(ctrl: u8, com: u8, enabled: bool, duty_is_zero: bool) -> u8 {
    if enabled && !duty_is_zero {
        ctrl | com
    } else {
        ctrl & !com
    }
}
