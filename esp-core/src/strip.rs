//! LED Strip Driver - besitzt Frame und Ausgabe-Link
//!
//! Der [`LedStrip`] ist der einzige Eigentümer des Farbpuffers und des
//! physischen LED-Links. Mapper schreiben Farben ausschließlich über
//! `set_color` und stoßen die Ausgabe über `update`/`clear` an.

use rgb::RGB8;

use crate::frame::Frame;

/// Fehler-Typ für LED-Schreiboperationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für Strip-Hardware-Zugriff
///
/// Serialisiert einen kompletten Frame (alle Pixel in Index-Reihenfolge)
/// auf den physischen Link. Die Bit-Timing-Erzeugung (WS2812-Envelope)
/// liegt vollständig hinter diesem Trait.
///
/// # Implementierungen
/// - **Production:** RmtStripWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStripWriter (zeichnet Frames auf)
pub trait StripWriter {
    /// Schreibt alle Pixel in Index-Reihenfolge auf den Strip
    ///
    /// Blockiert bis die Hardware alle Zellen übernommen hat.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_pixels(&mut self, pixels: &[RGB8]) -> Result<(), LedError>;
}

/// LED Strip mit N Pixeln
///
/// Besitzt den [`Frame`] exklusiv. Zwischen den `set_color`-Aufrufen und
/// `update` gibt es kein Locking - der Aufrufer schließt erst alle
/// Schreibzugriffe ab und ruft dann `update`.
pub struct LedStrip<W: StripWriter, const N: usize> {
    frame: Frame<N>,
    writer: W,
}

impl<W: StripWriter, const N: usize> LedStrip<W, N> {
    /// Erstellt einen Strip mit dunklem Frame
    pub fn new(writer: W) -> Self {
        Self {
            frame: Frame::new(),
            writer,
        }
    }

    /// Setzt die Farbe eines Pixels im Frame
    ///
    /// Indizes außerhalb von `0..N` sind ein stilles No-Op.
    /// Die Änderung wird erst mit dem nächsten `update` sichtbar.
    pub fn set_color(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.frame.set(index, RGB8::new(r, g, b));
    }

    /// Serialisiert den kompletten Frame auf die Hardware
    ///
    /// Blockiert bis alle N Zellen übertragen sind.
    pub fn update(&mut self) -> Result<(), LedError> {
        self.writer.write_pixels(self.frame.as_slice())
    }

    /// Setzt alle Pixel auf Schwarz und serialisiert sofort
    pub fn clear(&mut self) -> Result<(), LedError> {
        self.frame.clear();
        self.update()
    }

    /// Readback des Frames (für Tests und Diagnostik)
    pub fn frame(&self) -> &Frame<N> {
        &self.frame
    }

    /// Zugriff auf den Writer (für Tests und Diagnostik)
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
