//! RP2040 ADC channel adapter

use embassy_rp::adc::{Adc, Blocking, Channel};
use envpanel_drivers::sensor::AdcReader;

/// One ADC input sampled with blocking single-shot conversions
pub struct RpAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl RpAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for RpAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.adc.blocking_read(&mut self.channel).map_err(|_| ())
    }
}
