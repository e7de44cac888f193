//! Configuration constants for the ATmega328P sketches

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// ADC reference voltage in millivolts
pub const ADC_VREF_MV: i32 = 5000;

/// Largest 10-bit ADC reading
pub const ADC_MAX: u16 = 1023;

/// Largest 8-bit PWM duty
pub const PWM_MAX: u8 = 255;

/// Full servo travel in degrees
pub const SERVO_MAX_DEGREES: u8 = 180;

/// How long each colour is held during the RGB self-test
pub const COLOR_TEST_INTERVAL_MS: u16 = 1000;

/// Pause between potentiometer samples in the RGB mixer
pub const POT_SAMPLE_INTERVAL_MS: u16 = 100;

/// Pause between servo position updates
pub const SERVO_STEP_INTERVAL_MS: u16 = 15;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u16 = 50;

/// Character LCD geometry
pub const LCD_COLUMNS: u8 = 16;
pub const LCD_ROWS: u8 = 2;
