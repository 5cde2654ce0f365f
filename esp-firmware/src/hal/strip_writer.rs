// Strip Writer - serialisiert Frames über das RMT Peripheral
//
// Das RMT Peripheral erzeugt das WS2812-Bit-Timing in Hardware;
// ein verletztes Bit-Envelope würde alle nachfolgenden Pixel des
// Frames korrumpieren, deshalb läuft das Timing nicht in Software.

use rgb::RGB8;

use esp_core::strip::{LedError, StripWriter};
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

use crate::config::NUM_LEDS;

// Buffer-Größe für den Ring (12 LEDs * 3 Farben * 8 Bits + 1 Reset)
pub const STRIP_BUFFER_SIZE: usize = NUM_LEDS * 24 + 1;

/// Real Hardware Strip Writer
///
/// Nutzt das ESP32 RMT Peripheral um den WS2812-Ring anzusteuern.
/// `write_pixels` blockiert bis alle Zellen übertragen sind.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtStripWriter<'a> {
    strip: SmartLedsAdapter<'a, STRIP_BUFFER_SIZE>,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `led_gpio`: GPIO Peripheral für die LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(12) Macro)
    pub fn new(
        led_gpio: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; STRIP_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let strip = SmartLedsAdapter::new(rmt.channel0, led_gpio, buffer);

        Self { strip }
    }
}

impl<'a> StripWriter for RmtStripWriter<'a> {
    fn write_pixels(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        self.strip
            .write(pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
