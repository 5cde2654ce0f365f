//! Tilt-Anzeige ("Wasserwaage")
//!
//! Jede Beschleunigungsachse bekommt ein eigenes Drittel des Rings und
//! eine eigene Grundfarbe: X rot, Y grün, Z blau. So sind alle drei
//! Indikatoren gleichzeitig sichtbar, ohne sich zu überschreiben.

use rgb::RGB8;

use crate::accel::AccelSample;
use crate::strip::{LedError, LedStrip, StripWriter};

/// Zusammenhängender Index-Bereich einer Achse auf dem Strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSegment {
    /// Erster LED-Index des Segments
    pub base: usize,
    /// Anzahl LEDs im Segment
    pub span: usize,
}

/// Teilt einen Strip mit N LEDs in drei Achsen-Segmente
///
/// Bei nicht durch 3 teilbarem N bekommt die Z-Achse den Rest.
pub const fn thirds<const N: usize>() -> [AxisSegment; 3] {
    let third = N / 3;
    [
        AxisSegment {
            base: 0,
            span: third,
        },
        AxisSegment {
            base: third,
            span: third,
        },
        AxisSegment {
            base: 2 * third,
            span: N - 2 * third,
        },
    ]
}

/// Grundfarben der drei Achsen: X rot, Y grün, Z blau
pub const AXIS_COLORS: [RGB8; 3] = [
    RGB8::new(255, 0, 0),
    RGB8::new(0, 255, 0),
    RGB8::new(0, 0, 255),
];

/// Bildet einen g-Wert auf einen LED-Index im Segment ab
///
/// Lineare Abbildung `index = base + round((g + 1) * (span - 1) / 2)`,
/// anschließend auf das Segment geklemmt. Werte außerhalb von ±1 g
/// landen damit auf dem jeweiligen Segment-Rand; ein Indikator kann
/// nie in das Segment einer anderen Achse hineinlaufen.
pub fn segment_index(value_g: f32, segment: AxisSegment) -> usize {
    let scale = (segment.span - 1) as f32 / 2.0;
    let pos = libm::roundf((value_g + 1.0) * scale);
    let offset = if pos < 0.0 { 0 } else { pos as usize };
    segment.base + offset.min(segment.span - 1)
}

/// Rendert ein kalibriertes Sample als drei Achsen-Indikatoren
///
/// Schreibt genau drei Pixel in den Frame; der Aufrufer löscht vorher
/// und ruft danach `update`.
pub fn render<W: StripWriter, const N: usize>(
    strip: &mut LedStrip<W, N>,
    sample: &AccelSample,
    segments: &[AxisSegment; 3],
) -> Result<(), LedError> {
    let axes = [sample.x_g, sample.y_g, sample.z_g];
    for ((value, segment), color) in axes.iter().zip(segments.iter()).zip(AXIS_COLORS.iter()) {
        let index = segment_index(*value, *segment);
        strip.set_color(index, color.r, color.g, color.b);
    }
    strip.update()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEG: AxisSegment = AxisSegment { base: 4, span: 4 };

    #[test]
    fn test_level_maps_to_segment_middle() {
        // 0 g → round(1.5) = 2 → Index 6
        assert_eq!(segment_index(0.0, SEG), 6);
    }

    #[test]
    fn test_extremes_hit_segment_edges() {
        assert_eq!(segment_index(-1.0, SEG), 4);
        assert_eq!(segment_index(1.0, SEG), 7);
    }

    #[test]
    fn test_clamping_beyond_one_g() {
        assert_eq!(segment_index(-5.0, SEG), 4);
        assert_eq!(segment_index(5.0, SEG), 7);
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let mut last = 0;
        let mut g = -2.0f32;
        while g <= 2.0 {
            let index = segment_index(g, SEG);
            assert!(index >= last, "nicht monoton bei {g}");
            assert!((4..8).contains(&index));
            last = index;
            g += 0.01;
        }
    }

    #[test]
    fn test_thirds_cover_whole_strip() {
        let segments = thirds::<12>();
        assert_eq!(segments[0], AxisSegment { base: 0, span: 4 });
        assert_eq!(segments[1], AxisSegment { base: 4, span: 4 });
        assert_eq!(segments[2], AxisSegment { base: 8, span: 4 });
    }
}
