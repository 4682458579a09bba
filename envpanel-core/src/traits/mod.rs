//! Collaborator traits
//!
//! These traits define the interface between the sensor display cycle
//! and hardware-specific implementations.

pub mod display;
pub mod sensor;
pub mod sink;

pub use display::{DisplayError, DisplaySurface, TextSize};
pub use sensor::{ClimateSensor, LightSensor, SensorError};
pub use sink::DiagnosticSink;
