// Render Task - kooperativer Scheduler über das Mode Register
//
// Ein Schleifendurchlauf = genau ein Arbeits-Quantum des aktuellen
// Modus (ein Animationsschritt, ein Sample-und-Render-Durchlauf).
// Das Mode Register wird nur an der Quantum-Grenze gelesen; laufende
// blockierende Operationen werden nie abgebrochen.

use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use esp_hal_smartled::smart_led_buffer;

use esp_core::{BAND_EDGES_12, FFT_SIZE, LedStrip, Mode, Snake, SpectrumRenderer};
use esp_core::{telemetry, tilt};
use esp_hal::Blocking;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::uart::{Config as UartConfig, Uart};

use crate::config::{
    I2C_FREQUENCY_KHZ, LIS3DH_ADDRESS, NUM_LEDS, RMT_CLOCK_MHZ, SNAKE_STEP_MS, SPECTRUM_IDLE_MS,
    TELEMETRY_BAUD_RATE, TELEMETRY_INTERVAL_MS, TILT_INTERVAL_MS, TILT_SEGMENTS,
};
use crate::hal::{Lis3dh, MicInput, Microphone, RmtStripWriter};
use crate::{MODE, RingStrip};

/// Render Task - besitzt sämtliche Render-Peripherie exklusiv
///
/// Initialisiert Strip, Sensoren und Telemetrie-Transport und tritt
/// dann in die Scheduler-Schleife ein. Ein fehlgeschlagenes
/// Peripherie-Init deaktiviert nur die betroffenen Modi; der
/// Scheduler läuft mit dem Rest weiter.
#[embassy_executor::task]
#[allow(clippy::too_many_arguments)]
pub async fn render_task(
    led_gpio: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    i2c_peripheral: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO6<'static>,
    scl: esp_hal::peripherals::GPIO7<'static>,
    adc_peripheral: esp_hal::peripherals::ADC1<'static>,
    mic_input: MicInput<'static>,
    uart_peripheral: esp_hal::peripherals::UART1<'static>,
    uart_tx: esp_hal::peripherals::GPIO4<'static>,
    uart_rx: esp_hal::peripherals::GPIO5<'static>,
) {
    // Buffer für SmartLED Daten erstellen (12 LEDs)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(12);
    let writer = RmtStripWriter::new(led_gpio, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);
    let mut strip: RingStrip<'_> = LedStrip::new(writer);

    // Beschleunigungssensor: Init-Fehler deaktiviert Tilt + Telemetrie
    let mut accel = match I2c::new(
        i2c_peripheral,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    ) {
        Ok(bus) => {
            let bus = bus.with_sda(sda).with_scl(scl);
            let mut sensor = Lis3dh::new(bus, LIS3DH_ADDRESS);
            match sensor.init() {
                Ok(()) => Some(sensor),
                Err(e) => {
                    error!("LIS3DH: init failed, tilt/telemetry disabled: {}", e);
                    None
                }
            }
        }
        Err(_) => {
            error!("LIS3DH: I2C setup failed, tilt/telemetry disabled");
            None
        }
    };

    // Mikrofon + Sample Buffer (ein frischer Fill pro Spektrum-Quantum)
    let mut microphone = Microphone::new(adc_peripheral, mic_input);
    let mut sample_buffer = [0i16; FFT_SIZE];

    // Spektrum-Renderer: Band-Kanten werden genau einmal validiert
    let mut spectrum = match SpectrumRenderer::<NUM_LEDS>::new(&BAND_EDGES_12) {
        Ok(renderer) => Some(renderer),
        Err(e) => {
            error!("Spectrum: invalid band edges, mode disabled: {}", e);
            None
        }
    };

    // UART für Telemetrie (fire-and-forget, kein Handshake)
    let mut uart = match Uart::new(
        uart_peripheral,
        UartConfig::default().with_baudrate(TELEMETRY_BAUD_RATE),
    ) {
        Ok(uart) => Some(uart.with_tx(uart_tx).with_rx(uart_rx)),
        Err(_) => {
            error!("Telemetry: UART setup failed, running without transport");
            None
        }
    };

    let mut snake = Snake::new();
    info!("Render: scheduler started in mode {}", MODE.load());

    // Scheduler-Schleife: läuft bis zum Power-Off
    loop {
        match MODE.load() {
            Mode::Snake => {
                if let Err(e) = snake.step(&mut strip) {
                    error!("Render: LED write failed: {}", e);
                }
                Timer::after(Duration::from_millis(SNAKE_STEP_MS)).await;
            }
            Mode::Tilt => tilt_quantum(&mut strip, &mut accel).await,
            Mode::Spectrum => {
                spectrum_quantum(&mut strip, &mut microphone, &mut sample_buffer, &mut spectrum)
                    .await;
            }
            Mode::Telemetry => telemetry_quantum(&mut strip, &mut accel, &mut uart).await,
        }
    }
}

/// Ein Quantum Tilt-Anzeige: eine Messung, ein Frame
async fn tilt_quantum(strip: &mut RingStrip<'_>, accel: &mut Option<Lis3dh<'static>>) {
    let Some(sensor) = accel else {
        // Sensor-Subsystem ist tot: Modus bleibt dunkel, Scheduler läuft weiter
        let _ = strip.clear();
        Timer::after(Duration::from_millis(TILT_INTERVAL_MS)).await;
        return;
    };

    match sensor.read_calibrated() {
        Ok(sample) => {
            let result = strip
                .clear()
                .and_then(|()| tilt::render(strip, &sample, &TILT_SEGMENTS));
            if let Err(e) = result {
                error!("Render: LED write failed: {}", e);
            }
        }
        // Transienter Bus-Fehler: Zyklus überspringen, nächstes Quantum liest neu
        Err(e) => warn!("LIS3DH: read failed, skipping cycle: {}", e),
    }

    Timer::after(Duration::from_millis(TILT_INTERVAL_MS)).await;
}

/// Ein Quantum Spektrum: ein Buffer-Fill, eine FFT, ein Frame
async fn spectrum_quantum(
    strip: &mut RingStrip<'_>,
    microphone: &mut Microphone<'static>,
    sample_buffer: &mut [i16; FFT_SIZE],
    spectrum: &mut Option<SpectrumRenderer<NUM_LEDS>>,
) {
    let Some(renderer) = spectrum else {
        let _ = strip.clear();
        Timer::after(Duration::from_millis(SPECTRUM_IDLE_MS)).await;
        return;
    };

    // Blockiert für exakt FFT_SIZE Sample-Perioden und läuft immer zu Ende
    microphone.read_blocking(sample_buffer);

    if let Err(e) = renderer.render(sample_buffer, strip) {
        error!("Render: LED write failed: {}", e);
    }

    // Quantum-Grenze: hier greift ein zwischenzeitlicher Moduswechsel
    Timer::after(Duration::from_millis(1)).await;
}

/// Ein Quantum Telemetrie: eine Messung, eine UART-Zeile, ein Frame
async fn telemetry_quantum(
    strip: &mut RingStrip<'_>,
    accel: &mut Option<Lis3dh<'static>>,
    uart: &mut Option<Uart<'static, Blocking>>,
) {
    let Some(sensor) = accel else {
        let _ = strip.clear();
        Timer::after(Duration::from_millis(TELEMETRY_INTERVAL_MS)).await;
        return;
    };

    match sensor.read_calibrated() {
        Ok(sample) => {
            // Blockierender Write: die Telemetrie-Kadenz hängt bewusst am
            // Durchsatz des Transports
            if let Some(port) = uart {
                let line = telemetry::format_line(&sample);
                if port.write_bytes(line.as_bytes()).is_err() {
                    warn!("Telemetry: UART write failed");
                }
            }

            // Dieselbe Messung spiegelt sich auf der Tilt-Anzeige
            let result = strip
                .clear()
                .and_then(|()| tilt::render(strip, &sample, &TILT_SEGMENTS));
            if let Err(e) = result {
                error!("Render: LED write failed: {}", e);
            }
        }
        Err(e) => warn!("LIS3DH: read failed, skipping cycle: {}", e),
    }

    Timer::after(Duration::from_millis(TELEMETRY_INTERVAL_MS)).await;
}
