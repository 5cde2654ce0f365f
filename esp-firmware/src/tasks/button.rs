// Button Task - Moduswechsel über Flanken-Erkennung
use defmt::info;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use crate::MODE;
use crate::config::BUTTON_DEBOUNCE_MS;

/// Mode Button Task
///
/// Wartet auf fallende Flanken am BOOT-Taster und schaltet das globale
/// Mode Register zyklisch weiter. Der Handler tut bewusst fast nichts:
/// Register weiterschalten, Log-Zeile, Entprell-Pause. Die
/// Render-Schleife übernimmt den neuen Modus an ihrer nächsten
/// Quantum-Grenze - ein laufendes LED-Update oder ein blockierender
/// Sample-Read wird nie unterbrochen.
#[embassy_executor::task]
pub async fn mode_button_task(mut button: Input<'static>) {
    info!("Button: task started");

    loop {
        button.wait_for_falling_edge().await;

        let mode = MODE.advance();
        info!("Button: switched to mode {}", mode);

        // Entprellen: mechanische Flanken innerhalb der Pause ignorieren
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
