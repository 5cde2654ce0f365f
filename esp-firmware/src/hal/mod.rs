// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus
// esp-core bzw. hinter schmalen Adapter-Typen.

pub mod lis3dh;
pub mod microphone;
pub mod strip_writer;

pub use lis3dh::Lis3dh;
pub use microphone::{MicInput, Microphone};
pub use strip_writer::RmtStripWriter;
