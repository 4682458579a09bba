//! Compile-time configuration
//!
//! All tunables are constants baked into the firmware. There is no
//! runtime configuration surface.

use crate::reading::AdcScale;

/// How long the climate (or climate error) screen stays up, in ms
pub const SHOW_DHT_MS: u32 = 3000;

/// How long the light screen stays up, in ms
pub const SHOW_LDR_MS: u32 = 3000;

/// One-time delay after initialization before the first read, in ms
pub const STARTUP_SETTLE_MS: u32 = 500;

/// Panel dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    pub width: u8,
    pub height: u8,
}

impl DisplayGeometry {
    /// 128x64 monochrome OLED
    pub const fn new() -> Self {
        Self {
            width: 128,
            height: 64,
        }
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Sensor display cycle configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleConfig {
    /// Dwell after the climate or error screen (ms)
    pub climate_dwell_ms: u32,
    /// Dwell after the light screen (ms)
    pub light_dwell_ms: u32,
    /// Delay after initialization (ms)
    pub settle_ms: u32,
    /// Light sensor ADC scaling
    pub adc: AdcScale,
    /// Display size
    pub geometry: DisplayGeometry,
}

impl CycleConfig {
    /// Creates the configuration from the compile-time constants.
    pub const fn new() -> Self {
        Self {
            climate_dwell_ms: SHOW_DHT_MS,
            light_dwell_ms: SHOW_LDR_MS,
            settle_ms: STARTUP_SETTLE_MS,
            adc: AdcScale::new(),
            geometry: DisplayGeometry::new(),
        }
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Global configuration instance.
pub static CONFIG: CycleConfig = CycleConfig::new();
