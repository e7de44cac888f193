pub mod button;
pub mod display;
pub mod lcd;
pub mod rgb_led;
pub mod serial_console;
pub mod servo;

pub use button::Button;
pub use display::{CharacterDisplay, LineWriter};
pub use lcd::Lcd;
pub use rgb_led::{Color, RgbLed};
pub use serial_console::SerialConsole;
pub use servo::Servo;
