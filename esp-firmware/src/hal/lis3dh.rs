// LIS3DH Beschleunigungssensor über I2C
//
// Der Treiber spricht die Register-Schnittstelle; die Umrechnung
// Rohbytes → g-Werte liegt als Pure Logic in esp_core::accel.

use defmt::{info, warn};

use esp_core::accel::{AccelError, AccelSample};
use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;

// Register-Adressen
const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL_REG1: u8 = 0x20;
const REG_CTRL_REG4: u8 = 0x23;
const REG_OUT_X_L: u8 = 0x28;

/// Auto-Increment-Bit für Multi-Byte-Reads
const AUTO_INCREMENT: u8 = 0x80;

/// Erwarteter Inhalt des WHO_AM_I Registers
const WHO_AM_I_VALUE: u8 = 0x33;

/// CTRL_REG1: 100 Hz Datenrate, Normal Mode, alle drei Achsen aktiv
const CTRL_REG1_100HZ_ALL_AXES: u8 = 0x57;

/// CTRL_REG4: Messbereich ±2g
const CTRL_REG4_RANGE_2G: u8 = 0x00;

/// LIS3DH Treiber
///
/// Besitzt den I2C-Bus exklusiv. Alle Methoden melden Bus-Fehler als
/// `AccelError::Bus`; der Aufrufer entscheidet (Skip-Zyklus bei
/// Messfehlern, Subsystem-Aus bei Init-Fehlern).
pub struct Lis3dh<'d> {
    i2c: I2c<'d, Blocking>,
    address: u8,
}

impl<'d> Lis3dh<'d> {
    pub fn new(i2c: I2c<'d, Blocking>, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Initialisiert den Sensor und verifiziert die Identität
    ///
    /// Liest WHO_AM_I und vergleicht mit dem erwarteten Wert, danach
    /// Datenrate und Messbereich konfigurieren.
    ///
    /// # Fehlerbehandlung
    /// Nach einem Fehler darf der Aufrufer NICHT mit Messungen
    /// fortfahren - die Tilt-/Telemetrie-Modi bleiben dann deaktiviert.
    pub fn init(&mut self) -> Result<(), AccelError> {
        let mut who_am_i = [0u8; 1];
        self.read_register(REG_WHO_AM_I, &mut who_am_i)?;

        if who_am_i[0] != WHO_AM_I_VALUE {
            warn!(
                "LIS3DH: WHO_AM_I mismatch: expected {=u8:#x}, got {=u8:#x}",
                WHO_AM_I_VALUE, who_am_i[0]
            );
            return Err(AccelError::WrongDevice);
        }

        self.write_register(REG_CTRL_REG1, CTRL_REG1_100HZ_ALL_AXES)?;
        self.write_register(REG_CTRL_REG4, CTRL_REG4_RANGE_2G)?;

        info!("LIS3DH: initialized (100 Hz, +/-2g)");
        Ok(())
    }

    /// Liest Beschleunigung aller drei Achsen, kalibriert in g
    ///
    /// Burst-Read der sechs Achsen-Bytes ab OUT_X_L mit Auto-Increment.
    /// Kein Retry: bei `AccelError::Bus` überspringt der Aufrufer den
    /// Zyklus und versucht es im nächsten Quantum erneut.
    pub fn read_calibrated(&mut self) -> Result<AccelSample, AccelError> {
        let mut raw = [0u8; 6];
        self.read_register(REG_OUT_X_L | AUTO_INCREMENT, &mut raw)?;
        Ok(AccelSample::from_raw_bytes(&raw))
    }

    // Register-Adresse schreiben, dann blockierend zurücklesen
    fn read_register(&mut self, reg: u8, data: &mut [u8]) -> Result<(), AccelError> {
        self.i2c
            .write_read(self.address, &[reg], data)
            .map_err(|_| AccelError::Bus)
    }

    // Einzelnes Register beschreiben (2-Byte-Write)
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), AccelError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| AccelError::Bus)
    }
}
