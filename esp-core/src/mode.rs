//! Render-Modi und Mode Register
//!
//! Der [`ModeCell`] ist der EINZIGE Zustand, der zwischen dem
//! Button-Event-Kontext und der Render-Schleife geteilt wird. Ein
//! einzelnes atomares Byte, keine Locks: der Button-Handler schreibt,
//! die Render-Schleife liest einmal pro Quantum.

use core::sync::atomic::{AtomicU8, Ordering};

/// Die geschlossene Menge der Render-Modi
///
/// Die Deklarationsreihenfolge ist die Schaltreihenfolge des Buttons;
/// der erste Modus ist der Startzustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Platzhalter-Animation: Snake läuft über den Ring
    Snake = 0,
    /// Wasserwaage: Beschleunigungsachsen auf LED-Segmente
    Tilt = 1,
    /// Audio-Spektrum auf den Ring
    Spectrum = 2,
    /// Telemetrie über UART, Tilt-Anzeige läuft mit
    Telemetry = 3,
}

impl Mode {
    /// Anzahl der Modi
    pub const COUNT: u8 = 4;

    /// Modus aus einem Registerwert (modulo COUNT)
    pub fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => Mode::Snake,
            1 => Mode::Tilt,
            2 => Mode::Spectrum,
            _ => Mode::Telemetry,
        }
    }

    /// Nachfolger in der Schaltreihenfolge (zyklisch)
    pub fn next(self) -> Self {
        Self::from_index(self as u8 + 1)
    }
}

/// Atomares Mode Register
///
/// Einzelnes Maschinenwort. Der Button-Kontext ist der einzige
/// Schreiber (`advance`), die Render-Schleife der einzige Leser
/// (`load`) - deshalb reicht Load/Store ohne Read-Modify-Write-Schleife.
pub struct ModeCell(AtomicU8);

impl ModeCell {
    /// Erstellt das Register mit einem Startmodus
    pub const fn new(initial: Mode) -> Self {
        Self(AtomicU8::new(initial as u8))
    }

    /// Liest den aktuellen Modus
    pub fn load(&self) -> Mode {
        Mode::from_index(self.0.load(Ordering::Acquire))
    }

    /// Schaltet zyklisch zum nächsten Modus weiter
    ///
    /// Gibt den neuen Modus zurück. Nur aus dem Button-Kontext aufrufen.
    pub fn advance(&self) -> Mode {
        let next = self.load().next();
        self.0.store(next as u8, Ordering::Release);
        next
    }
}
