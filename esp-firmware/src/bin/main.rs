// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::warn;

// Projekt-Module und Konfiguration
use esp_sensorring::config::MIC_GPIO;
use esp_sensorring::hal::MicInput;
use esp_sensorring::tasks::{mode_button_task, render_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt die
/// beiden Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Mode-Button: BOOT-Taster, fallende Flanke gegen Pull-Up
    let button = Input::new(peripherals.GPIO9, InputConfig::default().with_pull(Pull::Up));

    // Mikrofon-Eingang wählen: drei gültige ADC-Pins, sonst Fallback
    let mic_input = match MIC_GPIO {
        0 => MicInput::Gpio0(peripherals.GPIO0),
        1 => MicInput::Gpio1(peripherals.GPIO1),
        2 => MicInput::Gpio2(peripherals.GPIO2),
        other => {
            warn!(
                "Microphone: GPIO{} is not a valid microphone input, falling back to GPIO2",
                other
            );
            MicInput::Gpio2(peripherals.GPIO2)
        }
    };

    // Spawn Button Task (einziger Schreiber des Mode Registers)
    spawner.spawn(mode_button_task(button)).unwrap();

    // Spawn Render Task (besitzt alle Render-Peripherie exklusiv)
    spawner
        .spawn(render_task(
            peripherals.GPIO8,
            peripherals.RMT,
            peripherals.I2C0,
            peripherals.GPIO6,
            peripherals.GPIO7,
            peripherals.ADC1,
            mic_input,
            peripherals.UART1,
            peripherals.GPIO4,
            peripherals.GPIO5,
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
