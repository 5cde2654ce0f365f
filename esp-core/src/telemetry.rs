//! Telemetrie-Formatierung
//!
//! Formatiert ein Beschleunigungs-Sample als Textzeile für den
//! seriellen Transport. Festes Dezimalformat mit drei Nachkommastellen,
//! wie es das Gegenstück auf der Empfängerseite erwartet.

use core::fmt::Write;

use heapless::String;

use crate::accel::AccelSample;

/// Maximale Zeilenlänge inklusive CRLF
pub const LINE_CAPACITY: usize = 64;

/// Formatiert ein Sample als `X: {:.3} g, Y: {:.3} g, Z: {:.3} g\r\n`
///
/// Die Kapazität von 64 Bytes reicht für jeden darstellbaren Wert;
/// die Zeile wird nie still abgeschnitten.
pub fn format_line(sample: &AccelSample) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    // Kapazität ist für das feste Format ausreichend dimensioniert,
    // write! kann hier nicht fehlschlagen
    let _ = write!(
        line,
        "X: {:.3} g, Y: {:.3} g, Z: {:.3} g\r\n",
        sample.x_g, sample.y_g, sample.z_g
    );
    line
}
