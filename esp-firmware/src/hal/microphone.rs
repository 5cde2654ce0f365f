// Mikrofon-Adapter über ADC1
//
// Füllt den Sample-Buffer blockierend mit One-Shot-Conversions und
// zentriert/skaliert jeden Rohwert nach Q15 (esp_core::q15). Die
// Blockdauer entspricht exakt buffer.len() Sample-Perioden; ein
// laufender Fill wird nie abgebrochen.

use esp_core::q15::center_and_scale;
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1, GPIO2};

use crate::config::MIC_DC_OFFSET;

/// Gültige Mikrofon-Eingänge (ADC1-Kanäle 0-2)
///
/// Die Auswahl trifft `main` anhand von `config::MIC_GPIO`; ungültige
/// Pins fallen dort mit Warnung auf GPIO2 zurück.
pub enum MicInput<'d> {
    Gpio0(GPIO0<'d>),
    Gpio1(GPIO1<'d>),
    Gpio2(GPIO2<'d>),
}

// Pro Kanal ein eigener AdcPin-Typ, daher das Enum statt Generics
enum MicChannel<'d> {
    Channel0(AdcPin<GPIO0<'d>, ADC1<'d>>),
    Channel1(AdcPin<GPIO1<'d>, ADC1<'d>>),
    Channel2(AdcPin<GPIO2<'d>, ADC1<'d>>),
}

/// Mikrofon am ADC1
///
/// Besitzt den Wandler und den gewählten Eingangskanal exklusiv.
pub struct Microphone<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    channel: MicChannel<'d>,
}

impl<'d> Microphone<'d> {
    /// Mappt den gewählten Eingang auf seinen ADC-Kanal
    pub fn new(adc1: ADC1<'d>, input: MicInput<'d>) -> Self {
        let mut config = AdcConfig::new();
        let channel = match input {
            MicInput::Gpio0(pin) => {
                MicChannel::Channel0(config.enable_pin(pin, Attenuation::_11dB))
            }
            MicInput::Gpio1(pin) => {
                MicChannel::Channel1(config.enable_pin(pin, Attenuation::_11dB))
            }
            MicInput::Gpio2(pin) => {
                MicChannel::Channel2(config.enable_pin(pin, Attenuation::_11dB))
            }
        };
        let adc = Adc::new(adc1, config);
        Self { adc, channel }
    }

    /// Blockierender Buffer-Fill: exakt `buffer.len()` Samples
    ///
    /// Jeder Rohwert wird um den bekannten Gleichanteil zentriert und
    /// auf Q15 skaliert. Kein Early-Return, keine Cancellation - der
    /// Scheduler wechselt den Modus erst an der nächsten Quantum-Grenze.
    pub fn read_blocking(&mut self, buffer: &mut [i16]) {
        let Self { adc, channel } = self;
        for slot in buffer.iter_mut() {
            let raw = match channel {
                MicChannel::Channel0(pin) => nb::block!(adc.read_oneshot(pin)),
                MicChannel::Channel1(pin) => nb::block!(adc.read_oneshot(pin)),
                MicChannel::Channel2(pin) => nb::block!(adc.read_oneshot(pin)),
            };
            // Der One-Shot-Betrieb kennt keinen echten Fehlerfall;
            // zur Sicherheit fällt ein Fehler auf den Ruhepegel zurück
            let value = raw.unwrap_or(MIC_DC_OFFSET as u16);
            *slot = center_and_scale(value, MIC_DC_OFFSET);
        }
    }
}
