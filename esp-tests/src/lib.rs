//! Host-seitige Test-Helfer für esp-core
//!
//! Der MockStripWriter zeichnet jede Frame-Serialisierung auf, damit
//! Integration-Tests den "Draht" inspizieren können: welche Pixel in
//! welcher Reihenfolge mit welchem Inhalt geschrieben wurden.

use esp_core::strip::{LedError, StripWriter};
use rgb::RGB8;

/// Mock Strip Writer - zeichnet Serialisierungen auf
#[derive(Default)]
pub struct MockStripWriter {
    /// Jede `write_pixels`-Serialisierung, in Aufruf-Reihenfolge
    pub writes: Vec<Vec<RGB8>>,
    /// Simuliere Fehler beim nächsten write_pixels()
    pub fail_next_write: bool,
}

impl MockStripWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Serialisierungen
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Der zuletzt serialisierte Frame
    pub fn last_frame(&self) -> Option<&[RGB8]> {
        self.writes.last().map(|frame| frame.as_slice())
    }
}

impl StripWriter for MockStripWriter {
    fn write_pixels(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.writes.push(pixels.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_writes_in_order() {
        let mut mock = MockStripWriter::new();
        mock.write_pixels(&[RGB8::new(1, 0, 0)]).unwrap();
        mock.write_pixels(&[RGB8::new(0, 1, 0)]).unwrap();

        assert_eq!(mock.write_count(), 2);
        assert_eq!(mock.last_frame(), Some(&[RGB8::new(0, 1, 0)][..]));
    }

    #[test]
    fn test_mock_fail_next_write() {
        let mut mock = MockStripWriter::new();
        mock.fail_next_write = true;

        let result = mock.write_pixels(&[RGB8::new(1, 2, 3)]);
        assert_eq!(result, Err(LedError::WriteFailed));
        assert_eq!(mock.write_count(), 0);
    }
}
