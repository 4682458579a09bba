//! Light-dependent resistor on an ADC channel
//!
//! Circuit: 3V3 -- LDR -- ADC_PIN -- fixed resistor -- GND, so the count
//! rises with light level. The driver reports raw counts; conversion to
//! volts happens in the core.

use envpanel_core::traits::LightSensor;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// LDR voltage divider sampled by an `AdcReader`
pub struct Ldr<ADC> {
    adc: ADC,
    /// Highest count the converter can produce
    full_scale: u16,
    /// Last successful sample, reported again when a conversion fails
    last: u16,
}

impl<ADC> Ldr<ADC> {
    /// Create a new LDR sensor for a converter with the given full scale
    pub fn new(adc: ADC, full_scale: u16) -> Self {
        Self {
            adc,
            full_scale,
            last: 0,
        }
    }

    pub fn last(&self) -> u16 {
        self.last
    }
}

impl<ADC: AdcReader> LightSensor for Ldr<ADC> {
    fn read_raw(&mut self) -> u16 {
        match self.adc.read() {
            Ok(raw) => self.last = raw.min(self.full_scale),
            Err(()) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("LDR conversion failed, repeating {}", self.last);
            }
        }
        self.last
    }
}

/// Dummy ADC for testing (returns a fixed value)
#[cfg(test)]
pub struct DummyAdc(pub u16);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, ()> {
        Ok(self.0)
    }
}
