// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use esp_core::tilt::{self, AxisSegment};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des LED-Rings (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Ring
pub const NUM_LEDS: usize = 12;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Schrittdauer der Snake-Animation in Millisekunden
pub const SNAKE_STEP_MS: u64 = 50;

// ============================================================================
// Button Konfiguration
// ============================================================================

/// GPIO-Pin des Mode-Buttons (BOOT-Taster, fallende Flanke)
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Entprell-Pause nach einer erkannten Flanke in Millisekunden
pub const BUTTON_DEBOUNCE_MS: u64 = 200;

// ============================================================================
// Beschleunigungssensor (LIS3DH, I2C)
// ============================================================================

/// I2C-Pins: SDA und SCL
pub const I2C_SDA_PIN: u8 = 6;
pub const I2C_SCL_PIN: u8 = 7;

/// I2C-Busfrequenz in kHz
pub const I2C_FREQUENCY_KHZ: u32 = 400;

/// 7-Bit I2C-Adresse des LIS3DH
pub const LIS3DH_ADDRESS: u8 = 0x19;

/// Render-Intervall der Tilt-Anzeige in Millisekunden
pub const TILT_INTERVAL_MS: u64 = 100;

/// Achsen-Segmente der Tilt-Anzeige: je ein Ring-Drittel pro Achse
pub const TILT_SEGMENTS: [AxisSegment; 3] = tilt::thirds::<NUM_LEDS>();

// ============================================================================
// Mikrofon (ADC1)
// ============================================================================

/// GPIO-Pin des Mikrofons
/// Gültige Eingänge: GPIO0, GPIO1, GPIO2 (ADC1-Kanäle 0-2).
/// Jeder andere Wert fällt mit Warnung auf GPIO2 zurück.
pub const MIC_GPIO: u8 = 2;

/// Bekannter Gleichanteil des Mikrofonsignals in Wandler-Counts
/// (halber 12-Bit-Bereich, abhängig vom Mikrofon-Breakout)
pub const MIC_DC_OFFSET: i16 = 2048;

/// Warte-Intervall wenn der Spektrum-Modus deaktiviert ist (ms)
pub const SPECTRUM_IDLE_MS: u64 = 100;

// ============================================================================
// Telemetrie (UART)
// ============================================================================

/// UART-Pins für den Telemetrie-Transport (z.B. HC-05 Bluetooth-Modul)
pub const TELEMETRY_TX_PIN: u8 = 4;
pub const TELEMETRY_RX_PIN: u8 = 5;

/// Baudrate des Telemetrie-Transports
pub const TELEMETRY_BAUD_RATE: u32 = 115200;

/// Sende-Intervall der Telemetrie in Millisekunden
/// Begrenzt bewusst auch die Tilt-Spiegelung in diesem Modus
pub const TELEMETRY_INTERVAL_MS: u64 = 500;
