//! Snake-Animation (Platzhalter-Modus)
//!
//! Eine vierpixelige Schlange läuft über den Ring, der Farbton wandert
//! mit: 30° Versatz pro Körperpixel, 1° pro Schritt.

use crate::color::hue_to_rgb;
use crate::strip::{LedError, LedStrip, StripWriter};

/// Länge der Schlange in Pixeln
pub const SNAKE_LENGTH: usize = 4;

/// Helligkeit der Snake-Pixel
const SNAKE_VALUE: u8 = 200;

/// Zustand der Snake-Animation
///
/// Ein `step` entspricht genau einem Scheduler-Quantum.
pub struct Snake {
    head: usize,
    hue: u16,
}

impl Snake {
    pub const fn new() -> Self {
        Self { head: 0, hue: 0 }
    }

    /// Rendert einen Animationsschritt in den Strip
    ///
    /// Löscht den Frame, zeichnet die Schlange ab der aktuellen
    /// Kopfposition und serialisiert. Kopf und Farbton rücken danach
    /// eine Position weiter.
    pub fn step<W: StripWriter, const N: usize>(
        &mut self,
        strip: &mut LedStrip<W, N>,
    ) -> Result<(), LedError> {
        strip.clear()?;

        for j in 0..SNAKE_LENGTH {
            let index = (self.head + j) % N;
            let color = hue_to_rgb(self.hue + (j as u16) * 30, SNAKE_VALUE);
            strip.set_color(index, color.r, color.g, color.b);
        }
        strip.update()?;

        self.head = (self.head + 1) % N;
        self.hue = (self.hue + 1) % 360;
        Ok(())
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
