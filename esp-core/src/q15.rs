//! Q15 Festkomma-Arithmetik
//!
//! Der akustische Pfad rechnet bis einschließlich Fensterung in Q15:
//! ein `i16` repräsentiert den Bereich [-1.0, 1.0) mit implizitem
//! Skalenfaktor 1/32768. Multiplikation rundet kaufmännisch und
//! sättigt statt zu überlaufen.

/// Q15 × Q15 → Q15
///
/// Rundung: half-up (`+ 0x4000` vor dem Shift).
/// Sättigung: nur der Fall `-1.0 × -1.0` überläuft und wird auf
/// `i16::MAX` geklemmt.
pub fn q15_mul(a: i16, b: i16) -> i16 {
    let product = (a as i32 * b as i32 + 0x4000) >> 15;
    product.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Zentriert einen ADC-Rohwert und skaliert ihn auf Q15
///
/// `raw` ist ein vorzeichenloser 12-Bit-Wandlerwert, `dc_offset` der
/// bekannte Gleichanteil des Mikrofons (typisch halber Wandlerbereich).
/// Das Ergebnis belegt per Links-Shift um 4 Bit den vollen i16-Bereich;
/// Ausreißer außerhalb des 12-Bit-Bereichs sättigen.
pub fn center_and_scale(raw: u16, dc_offset: i16) -> i16 {
    let centered = raw as i32 - dc_offset as i32;
    (centered << 4).clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
