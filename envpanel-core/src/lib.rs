//! Board-agnostic core logic for the envpanel sensor display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (climate sensor, light sensor, display, log sink)
//! - Reading value types and ADC voltage conversion
//! - Frame layouts for the climate, error and light screens
//! - Diagnostic line formatting
//! - Compile-time configuration
//! - The sensor display cycle itself

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod format;
pub mod reading;
pub mod screen;
pub mod traits;

#[cfg(test)]
mod mock;

pub use config::{CycleConfig, DisplayGeometry, CONFIG};
pub use cycle::{CycleParts, InitError, SensorDisplayCycle};
pub use reading::{AdcScale, ClimateReading, LightReading};
pub use screen::{Screen, ScreenKind};
