//! Farb-Helfer: Hue → RGB
//!
//! Ganzzahl-HSV mit voller Sättigung, wie sie Snake- und Spektrum-Modus
//! gemeinsam nutzen.

use rgb::RGB8;

/// Wandelt einen Farbwinkel in eine RGB-Farbe um
///
/// `hue` in Grad (wird modulo 360 genommen), `value` ist die Helligkeit
/// des hellsten Kanals (0-255). Sättigung ist immer maximal.
pub fn hue_to_rgb(hue: u16, value: u8) -> RGB8 {
    let hue = hue % 360;
    let v = value as u32;

    // Position innerhalb des 60°-Sektors, skaliert auf 0-255
    let sector = hue / 60;
    let offset = (hue % 60) as u32;
    let rising = (v * offset + 30) / 60; // 0 → v über den Sektor
    let falling = (v * (60 - offset) + 30) / 60; // v → 0 über den Sektor

    let (r, g, b) = match sector {
        0 => (v, rising, 0),
        1 => (falling, v, 0),
        2 => (0, v, rising),
        3 => (0, falling, v),
        4 => (rising, 0, v),
        _ => (v, 0, falling),
    };

    RGB8::new(r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue_to_rgb(0, 255), RGB8::new(255, 0, 0));
        assert_eq!(hue_to_rgb(120, 255), RGB8::new(0, 255, 0));
        assert_eq!(hue_to_rgb(240, 255), RGB8::new(0, 0, 255));
    }

    #[test]
    fn test_hue_wraps_at_360() {
        assert_eq!(hue_to_rgb(360, 200), hue_to_rgb(0, 200));
        assert_eq!(hue_to_rgb(480, 200), hue_to_rgb(120, 200));
    }

    #[test]
    fn test_zero_value_is_black() {
        for hue in (0..360).step_by(15) {
            assert_eq!(hue_to_rgb(hue, 0), RGB8::new(0, 0, 0));
        }
    }

    #[test]
    fn test_channels_never_exceed_value() {
        for hue in 0..360 {
            let c = hue_to_rgb(hue, 200);
            assert!(c.r <= 200 && c.g <= 200 && c.b <= 200);
        }
    }
}
