//! Sensor reading value types
//!
//! Readings are produced once per cycle iteration and never outlive it.

use crate::traits::SensorError;

/// A validated temperature/humidity pair
///
/// Can only be built from two real numbers, so a NaN never reaches
/// formatting or rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    temperature_c: f32,
    humidity_pct: f32,
}

impl ClimateReading {
    /// Validate a raw temperature (°C) and relative humidity (%)
    ///
    /// Fails with `NotANumber` if either value is NaN. Partial validity is
    /// not modelled.
    pub fn new(temperature_c: f32, humidity_pct: f32) -> Result<Self, SensorError> {
        if temperature_c.is_nan() || humidity_pct.is_nan() {
            return Err(SensorError::NotANumber);
        }
        Ok(Self {
            temperature_c,
            humidity_pct,
        })
    }

    /// Temperature in degrees Celsius
    pub fn temperature_c(&self) -> f32 {
        self.temperature_c
    }

    /// Relative humidity in percent
    pub fn humidity_pct(&self) -> f32 {
        self.humidity_pct
    }
}

/// ADC full-scale count and reference voltage
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcScale {
    /// Highest count the converter produces (4095 for 12-bit)
    pub full_scale: u16,
    /// Voltage corresponding to `full_scale`
    pub reference_volts: f32,
}

impl AdcScale {
    /// 12-bit converter referenced to 3.3 V
    pub const fn new() -> Self {
        Self {
            full_scale: 4095,
            reference_volts: 3.3,
        }
    }

    /// Convert a raw count to volts
    ///
    /// `volts = raw / full_scale * reference`
    pub fn volts(&self, raw: u16) -> f32 {
        (raw as f32 / self.full_scale as f32) * self.reference_volts
    }
}

impl Default for AdcScale {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw light-sensor count and its derived voltage
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightReading {
    raw: u16,
    voltage: f32,
}

impl LightReading {
    /// Build a reading from a raw ADC count
    ///
    /// Counts above `full_scale` are clamped to it.
    pub fn from_raw(raw: u16, scale: &AdcScale) -> Self {
        let raw = raw.min(scale.full_scale);
        Self {
            raw,
            voltage: scale.volts(raw),
        }
    }

    /// Raw ADC count
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Voltage at the ADC pin
    pub fn voltage(&self) -> f32 {
        self.voltage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_climate_reading_valid() {
        let reading = ClimateReading::new(23.5, 41.2).unwrap();
        assert_eq!(reading.temperature_c(), 23.5);
        assert_eq!(reading.humidity_pct(), 41.2);
    }

    #[test]
    fn test_climate_reading_rejects_nan() {
        assert_eq!(
            ClimateReading::new(f32::NAN, 41.2),
            Err(SensorError::NotANumber)
        );
        assert_eq!(
            ClimateReading::new(23.5, f32::NAN),
            Err(SensorError::NotANumber)
        );
        assert_eq!(
            ClimateReading::new(f32::NAN, f32::NAN),
            Err(SensorError::NotANumber)
        );
    }

    #[test]
    fn test_voltage_boundaries() {
        let scale = AdcScale::default();
        assert_eq!(LightReading::from_raw(0, &scale).voltage(), 0.0);
        assert!((LightReading::from_raw(4095, &scale).voltage() - 3.3).abs() < 1e-6);
    }

    #[test]
    fn test_voltage_midscale() {
        let reading = LightReading::from_raw(2048, &AdcScale::default());
        assert_eq!(reading.raw(), 2048);
        assert!((reading.voltage() - 1.6504).abs() < 1e-3);
    }

    #[test]
    fn test_raw_clamped_to_full_scale() {
        let reading = LightReading::from_raw(u16::MAX, &AdcScale::default());
        assert_eq!(reading.raw(), 4095);
        assert!((reading.voltage() - 3.3).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_voltage_matches_formula(raw in 0u16..=4095) {
            let reading = LightReading::from_raw(raw, &AdcScale::default());
            let expected = raw as f64 / 4095.0 * 3.3;
            prop_assert_eq!(reading.raw(), raw);
            prop_assert!((reading.voltage() as f64 - expected).abs() < 1e-5);
        }

        #[test]
        fn prop_real_pairs_are_valid(t in -40.0f32..80.0, h in 0.0f32..100.0) {
            let reading = ClimateReading::new(t, h).unwrap();
            prop_assert_eq!(reading.temperature_c(), t);
            prop_assert_eq!(reading.humidity_pct(), h);
        }

        #[test]
        fn prop_nan_anywhere_is_invalid(v in -40.0f32..80.0, nan_first in any::<bool>()) {
            let result = if nan_first {
                ClimateReading::new(f32::NAN, v)
            } else {
                ClimateReading::new(v, f32::NAN)
            };
            prop_assert_eq!(result, Err(SensorError::NotANumber));
        }
    }
}
