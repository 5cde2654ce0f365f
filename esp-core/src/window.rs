//! Fenster-Koeffizienten für die Spektralanalyse
//!
//! Hann-Fenster, einmal beim Start berechnet und als Q15 abgelegt.
//! Die Fensterung vor der FFT reduziert Spectral Leakage.

use crate::q15::q15_mul;

/// Füllt `coeffs` mit einem Hann-Fenster in Q15
///
/// w[n] = 0.5 * (1 - cos(2π n / (N-1))), quantisiert auf Q15.
/// Wird einmal beim Start aufgerufen; danach sind die Koeffizienten
/// unveränderlich.
pub fn fill_hann_q15(coeffs: &mut [i16]) {
    let denom = (coeffs.len() - 1) as f32;
    for (n, c) in coeffs.iter_mut().enumerate() {
        let phase = n as f32 / denom;
        let w = 0.5 * (1.0 - libm::cosf(2.0 * core::f32::consts::PI * phase));
        *c = (w * 32767.0 + 0.5) as i16;
    }
}

/// Multipliziert Samples elementweise mit den Fenster-Koeffizienten
///
/// Beide Slices müssen gleich lang sein; der Aufrufer (Renderer) hat
/// das beim Start validiert.
pub fn apply_window(samples: &mut [i16], coeffs: &[i16]) {
    for (s, &c) in samples.iter_mut().zip(coeffs.iter()) {
        *s = q15_mul(*s, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_endpoints_are_zero() {
        let mut coeffs = [0i16; 256];
        fill_hann_q15(&mut coeffs);
        assert_eq!(coeffs[0], 0);
        assert_eq!(coeffs[255], 0);
    }

    #[test]
    fn test_hann_peak_in_the_middle() {
        let mut coeffs = [0i16; 257];
        fill_hann_q15(&mut coeffs);
        // Mitte von N=257 liegt exakt auf dem Maximum
        assert_eq!(coeffs[128], 32767);
    }

    #[test]
    fn test_hann_is_symmetric() {
        let mut coeffs = [0i16; 256];
        fill_hann_q15(&mut coeffs);
        for n in 0..128 {
            // 1 LSB Toleranz für Float-Rundung in cosf
            assert!(
                (coeffs[n] - coeffs[255 - n]).abs() <= 1,
                "asymmetrisch bei n={n}"
            );
        }
    }

    #[test]
    fn test_apply_window_zeroes_edges() {
        let mut coeffs = [0i16; 64];
        fill_hann_q15(&mut coeffs);
        let mut samples = [0x4000i16; 64];
        apply_window(&mut samples, &coeffs);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[63], 0);
        // Mitte bleibt nahe am Original
        assert!(samples[32] > 0x3F00);
    }
}
