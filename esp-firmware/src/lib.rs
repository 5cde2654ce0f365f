// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{Mode, ModeCell};

use esp_core::LedStrip;

use crate::config::NUM_LEDS;
use crate::hal::RmtStripWriter;

// ============================================================================
// Geteilter Zustand
// ============================================================================

/// Globales Mode Register
///
/// Der EINZIGE Zustand, der die Task-Grenze überquert: ein atomares
/// Byte. Der Button-Task schreibt (`advance`), die Render-Schleife
/// liest einmal pro Quantum (`load`). Startmodus ist Snake.
pub static MODE: ModeCell = ModeCell::new(Mode::Snake);

// ============================================================================
// Type-Aliase
// ============================================================================

/// Der eine physische LED-Ring dieses Geräts
///
/// Statt:  LedStrip<RmtStripWriter<'a>, 12>
/// Nutze:  RingStrip<'a>
pub type RingStrip<'a> = LedStrip<RmtStripWriter<'a>, NUM_LEDS>;
