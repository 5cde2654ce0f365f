//! Spektral-Mapper: Sample Buffer → Band-Magnituden → Ring-Farben
//!
//! Pipeline pro Render-Zyklus:
//! 1. frischen Q15-Sample-Buffer vom Mikrofon holen (macht der Aufrufer)
//! 2. Hann-Fensterung in Q15
//! 3. reelle FFT der Länge 1024
//! 4. Magnitude pro Bin
//! 5. Peak pro Frequenzband (ein Band pro LED)
//! 6. Normierung auf den lautesten Band-Peak, Farbe pro LED, Flush
//!
//! Numerik-Vertrag: Q15 bis einschließlich Fensterung (Rundung half-up,
//! sättigend, siehe [`crate::q15`]); die Transformation selbst läuft in
//! f32 über `microfft` mit Eingangsskala 1/32768.

use microfft::real::rfft_1024;

use crate::color::hue_to_rgb;
use crate::strip::{LedError, LedStrip, StripWriter};
use crate::window::{apply_window, fill_hann_q15};

/// FFT-Länge = Länge des Sample Buffers
pub const FFT_SIZE: usize = 1024;

/// Nutzbare Spektral-Bins (DC bis Nyquist, exklusiv)
pub const SPECTRUM_BINS: usize = FFT_SIZE / 2;

// Radix-2 FFT setzt eine Zweierpotenz voraus
const _: () = assert!(FFT_SIZE.is_power_of_two());

/// Band-Kanten für einen 12er-Ring: 13 monoton steigende Bin-Indizes
///
/// Annähernd logarithmische Teilung; Bin 0 (DC) bleibt bewusst außen vor.
pub const BAND_EDGES_12: [usize; 13] = [1, 2, 3, 5, 8, 12, 19, 30, 47, 74, 117, 184, 290];

/// Magnituden unterhalb dieser Schwelle gelten als Stille
///
/// Schützt die Normierung vor der Division durch null: ein komplett
/// stiller Buffer schaltet alle LEDs aus statt NaN zu produzieren.
const SILENCE_FLOOR: f32 = 1.0;

/// Konfigurationsfehler der Band-Kanten, einmalig beim Start geprüft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpectrumError {
    /// Kantenzahl passt nicht zu N+1
    EdgeCountMismatch,
    /// Kanten steigen nicht streng monoton
    NonMonotonicEdges,
    /// Letzte Kante liegt hinter Nyquist
    EdgeOutOfRange,
}

/// Spektrum-Renderer für einen Strip mit N LEDs
///
/// Hält Fenster-Koeffizienten und FFT-Arbeitspuffer, damit die
/// Render-Schleife ohne große Stack-Frames auskommt.
pub struct SpectrumRenderer<const N: usize> {
    window: [i16; FFT_SIZE],
    scratch: [f32; FFT_SIZE],
    edges: &'static [usize],
}

impl<const N: usize> SpectrumRenderer<N> {
    /// Erstellt den Renderer und validiert die Band-Kanten
    ///
    /// # Fehlerbehandlung
    /// Schlägt die Validierung fehl, darf der Spektrum-Modus nicht
    /// betrieben werden; der Scheduler läuft mit den übrigen Modi weiter.
    pub fn new(edges: &'static [usize]) -> Result<Self, SpectrumError> {
        if edges.len() != N + 1 {
            return Err(SpectrumError::EdgeCountMismatch);
        }
        if edges.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(SpectrumError::NonMonotonicEdges);
        }
        if edges[edges.len() - 1] > SPECTRUM_BINS {
            return Err(SpectrumError::EdgeOutOfRange);
        }

        let mut window = [0i16; FFT_SIZE];
        fill_hann_q15(&mut window);

        Ok(Self {
            window,
            scratch: [0.0; FFT_SIZE],
            edges,
        })
    }

    /// Rendert einen Sample-Buffer als Spektrum auf den Strip
    ///
    /// Der Buffer wird destruktiv konsumiert (Fensterung in-place);
    /// jeder Zyklus braucht einen frischen Buffer.
    pub fn render<W: StripWriter>(
        &mut self,
        samples: &mut [i16; FFT_SIZE],
        strip: &mut LedStrip<W, N>,
    ) -> Result<(), LedError> {
        apply_window(samples, &self.window);

        for (dst, &s) in self.scratch.iter_mut().zip(samples.iter()) {
            *dst = s as f32 / 32768.0;
        }
        let spectrum = rfft_1024(&mut self.scratch);
        // microfft packt den reellen Nyquist-Anteil in bin[0].im - verwerfen
        spectrum[0].im = 0.0;

        // Peak-Magnitude pro Band (Reduktion: Maximum, nicht Summe)
        let mut peaks = [0.0f32; N];
        for (band, peak) in peaks.iter_mut().enumerate() {
            let lo = self.edges[band];
            let hi = self.edges[band + 1];
            for bin in &spectrum[lo..hi] {
                let magnitude = libm::sqrtf(bin.norm_sqr());
                if magnitude > *peak {
                    *peak = magnitude;
                }
            }
        }

        // Normierung auf den lautesten Peak, mit Stille-Schwelle
        let loudest = peaks.iter().fold(0.0f32, |a, &b| if b > a { b } else { a });
        if loudest < SILENCE_FLOOR {
            return strip.clear();
        }

        for (band, &peak) in peaks.iter().enumerate() {
            let value = (peak / loudest * 255.0) as u8;
            let color = hue_to_rgb((band * 360 / N) as u16, value);
            strip.set_color(band, color.r, color.g, color.b);
        }
        strip.update()
    }
}
