//! Integration Tests für Mode Register und Scheduler-Dispatch
//!
//! Der Scheduler selbst ist eine Endlosschleife auf der Hardware;
//! host-seitig wird hier sein Kern nachgestellt: Mode lesen, genau ein
//! Quantum des zugehörigen Mappers ausführen.

use esp_core::{LedStrip, Mode, ModeCell, Snake};
use esp_core::accel::AccelSample;
use esp_core::snake::SNAKE_LENGTH;
use esp_core::tilt::{self, AxisSegment};
use esp_tests::MockStripWriter;
use rgb::RGB8;

const NUM_LEDS: usize = 12;
const SEGMENTS: [AxisSegment; 3] = tilt::thirds::<NUM_LEDS>();

fn ring() -> LedStrip<MockStripWriter, NUM_LEDS> {
    LedStrip::new(MockStripWriter::new())
}

// ============================================================================
// Tests: Mode Register
// ============================================================================

#[test]
fn test_initial_mode_is_snake() {
    let cell = ModeCell::new(Mode::Snake);
    assert_eq!(cell.load(), Mode::Snake);
}

#[test]
fn test_m_edge_events_advance_to_m_mod_num_modes() {
    for m in 0..40u8 {
        let cell = ModeCell::new(Mode::Snake);
        for _ in 0..m {
            cell.advance();
        }
        assert_eq!(cell.load(), Mode::from_index(m % Mode::COUNT));
    }
}

#[test]
fn test_register_holds_value_without_events() {
    let cell = ModeCell::new(Mode::Telemetry);
    for _ in 0..1000 {
        assert_eq!(cell.load(), Mode::Telemetry);
    }
}

#[test]
fn test_full_button_cycle_returns_to_start() {
    let cell = ModeCell::new(Mode::Snake);
    for _ in 0..Mode::COUNT {
        cell.advance();
    }
    assert_eq!(cell.load(), Mode::Snake);
}

// ============================================================================
// Tests: Dispatch (ein Quantum pro Modus)
// ============================================================================

/// Ein Quantum des Scheduler-Kerns: Mode lesen, einen Mapper-Schritt rendern
fn run_quantum(
    cell: &ModeCell,
    strip: &mut LedStrip<MockStripWriter, NUM_LEDS>,
    snake: &mut Snake,
    sample: &AccelSample,
) {
    match cell.load() {
        Mode::Snake => snake.step(strip).unwrap(),
        Mode::Tilt | Mode::Telemetry => {
            strip.clear().unwrap();
            tilt::render(strip, sample, &SEGMENTS).unwrap();
        }
        Mode::Spectrum => strip.clear().unwrap(),
    }
}

#[test]
fn test_snake_quantum_lights_snake_length_pixels() {
    let mut strip = ring();
    let mut snake = Snake::new();
    snake.step(&mut strip).unwrap();

    let frame = strip.writer().last_frame().unwrap();
    let lit = frame.iter().filter(|p| **p != RGB8::new(0, 0, 0)).count();
    assert_eq!(lit, SNAKE_LENGTH);
}

#[test]
fn test_snake_advances_one_pixel_per_quantum() {
    let mut strip = ring();
    let mut snake = Snake::new();

    snake.step(&mut strip).unwrap();
    let first: Vec<RGB8> = strip.writer().last_frame().unwrap().to_vec();
    snake.step(&mut strip).unwrap();
    let second = strip.writer().last_frame().unwrap();

    // Kopf rückt weiter: Pixel 0 war Teil der ersten Schlange,
    // nach dem zweiten Schritt beginnt sie bei Pixel 1
    assert_ne!(first[0], RGB8::new(0, 0, 0));
    assert_eq!(second[0], RGB8::new(0, 0, 0));
    assert_ne!(second[SNAKE_LENGTH], RGB8::new(0, 0, 0));
}

#[test]
fn test_mode_change_takes_effect_at_next_quantum() {
    let cell = ModeCell::new(Mode::Snake);
    let mut strip = ring();
    let mut snake = Snake::new();
    let level = AccelSample {
        x_g: 0.0,
        y_g: 0.0,
        z_g: 0.0,
    };

    // Quantum 1: Snake rendert
    run_quantum(&cell, &mut strip, &mut snake, &level);
    let lit = strip
        .writer()
        .last_frame()
        .unwrap()
        .iter()
        .filter(|p| **p != RGB8::new(0, 0, 0))
        .count();
    assert_eq!(lit, SNAKE_LENGTH);

    // Button-Event zwischen den Quanten
    cell.advance();

    // Quantum 2: jetzt rendert die Tilt-Anzeige (drei Indikatoren)
    run_quantum(&cell, &mut strip, &mut snake, &level);
    let lit = strip
        .writer()
        .last_frame()
        .unwrap()
        .iter()
        .filter(|p| **p != RGB8::new(0, 0, 0))
        .count();
    assert_eq!(lit, 3);
}
