use ufmt::uWrite;

/// Character display with cursor-positioned text writes.
pub trait CharacterDisplay {
    type Error;

    /// Brings the controller up and leaves the screen blank.
    fn init(&mut self) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Zero-based column and row.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;
}

/// Writes one row from column 0 and blanks whatever the text did not cover.
///
/// Old characters stay on an HD44780 until overwritten, so a shorter reading
/// would otherwise leave the tail of the previous one behind.
pub struct LineWriter<'a, D: CharacterDisplay> {
    display: &'a mut D,
    width: u8,
    written: u8,
}

impl<'a, D: CharacterDisplay> LineWriter<'a, D> {
    pub fn start(display: &'a mut D, row: u8, width: u8) -> Result<Self, D::Error> {
        display.set_cursor(0, row)?;
        Ok(Self {
            display,
            width,
            written: 0,
        })
    }

    pub fn finish(self) -> Result<(), D::Error> {
        for _ in self.written..self.width {
            self.display.write_str(" ")?;
        }
        Ok(())
    }
}

impl<D: CharacterDisplay> uWrite for LineWriter<'_, D> {
    type Error = D::Error;

    fn write_str(&mut self, s: &str) -> Result<(), D::Error> {
        let len = u8::try_from(s.len()).unwrap_or(u8::MAX);
        self.written = self.written.saturating_add(len);
        self.display.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDisplay;
    use ufmt::uwrite;

    #[test]
    fn shorter_line_blanks_leftovers() {
        let mut display = FakeDisplay::new();
        let mut line = LineWriter::start(&mut display, 0, 16).unwrap();
        uwrite!(line, "Temp: {}", 12345u16).unwrap();
        line.finish().unwrap();
        assert_eq!(display.row(0), "Temp: 12345     ");

        let mut line = LineWriter::start(&mut display, 0, 16).unwrap();
        uwrite!(line, "Temp: {}", 7u16).unwrap();
        line.finish().unwrap();
        assert_eq!(display.row(0), "Temp: 7         ");
        assert_eq!(display.row(1), " ".repeat(16));
    }

    #[test]
    fn overlong_text_is_not_padded() {
        let mut display = FakeDisplay::new();
        let text = "x".repeat(260);
        let mut line = LineWriter::start(&mut display, 1, 16).unwrap();
        uwrite!(line, "{}", text.as_str()).unwrap();
        line.finish().unwrap();
        assert_eq!(display.bytes_written(), 260);
        assert_eq!(display.row(1), "x".repeat(16));
    }
}
