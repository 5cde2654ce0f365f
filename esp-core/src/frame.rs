//! LED Frame - Farbpuffer für einen kompletten Strip
//!
//! Ein Frame hält genau N Farbzellen. Die Länge steht zur Compile-Zeit
//! fest und ändert sich nie. Schreibzugriffe mit ungültigem Index sind
//! bewusst ein No-Op (siehe `set`).

use rgb::RGB8;

/// Farbpuffer mit fester Länge N
///
/// Der Frame gehört exklusiv dem [`LedStrip`](crate::strip::LedStrip).
/// Mapper schreiben nie direkt in den Frame, sondern nur über die
/// Setter des Strips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    pixels: [RGB8; N],
}

impl<const N: usize> Frame<N> {
    /// Erstellt einen Frame mit allen Pixeln aus (alles schwarz)
    pub const fn new() -> Self {
        Self {
            pixels: [RGB8::new(0, 0, 0); N],
        }
    }

    /// Setzt ein Pixel auf eine Farbe
    ///
    /// Indizes außerhalb von `0..N` werden still ignoriert - das ist
    /// die dokumentierte No-Op-Policy, kein Fehlerfall.
    pub fn set(&mut self, index: usize, color: RGB8) {
        if index < N {
            self.pixels[index] = color;
        }
    }

    /// Liest ein Pixel zurück
    ///
    /// Indizes außerhalb von `0..N` liefern Schwarz.
    pub fn get(&self, index: usize) -> RGB8 {
        if index < N {
            self.pixels[index]
        } else {
            RGB8::new(0, 0, 0)
        }
    }

    /// Setzt alle Pixel auf Schwarz
    pub fn clear(&mut self) {
        self.pixels = [RGB8::new(0, 0, 0); N];
    }

    /// Alle Pixel in Index-Reihenfolge
    pub fn as_slice(&self) -> &[RGB8] {
        &self.pixels
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}
