use ufmt::{uDisplay, uWrite, Formatter};

/// Failure while driving a sketch's peripherals.
///
/// The AVR HAL never produces these (its error types are `Infallible`), but the
/// sketches are generic over `embedded-hal` and keep propagating whatever the
/// underlying pins report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchError {
    Pin,
    Adc,
    Serial,
    Display,
}

impl uDisplay for SketchError {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            SketchError::Pin => "pin access failed",
            SketchError::Adc => "adc conversion failed",
            SketchError::Serial => "serial write failed",
            SketchError::Display => "display write failed",
        })
    }
}
