//! DHT11/DHT22 humidity and temperature sensor
//!
//! Thin adapter over `dht-sensor`, which owns the single-wire transfer.
//! The data line must be an open-drain output that reads back the line
//! level while released.

use dht_sensor::{dht11, dht22, DhtError, DhtReading};
use embedded_hal_02::digital::v2::{InputPin, OutputPin};
use envpanel_core::traits::{ClimateSensor, SensorError};
use envpanel_core::ClimateReading;

/// Sensor variant, which fixes the data encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhtKind {
    /// 1 °C / 1 % resolution, 0..50 °C
    Dht11,
    /// 0.1 °C / 0.1 % resolution, -40..80 °C
    #[default]
    Dht22,
}

/// DHT sensor on one data line
pub struct Dht<P, D> {
    pin: P,
    delay: D,
    kind: DhtKind,
}

impl<P, D, E> Dht<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: dht_sensor::Delay,
{
    pub fn new(pin: P, delay: D, kind: DhtKind) -> Self {
        Self { pin, delay, kind }
    }

    pub fn kind(&self) -> DhtKind {
        self.kind
    }

    /// Run one complete transfer
    pub fn measure(&mut self) -> Result<ClimateReading, SensorError> {
        let (temperature, humidity) = match self.kind {
            DhtKind::Dht11 => {
                let r = dht11::Reading::read(&mut self.delay, &mut self.pin)
                    .map_err(sensor_error)?;
                (r.temperature as f32, r.relative_humidity as f32)
            }
            DhtKind::Dht22 => {
                let r = dht22::Reading::read(&mut self.delay, &mut self.pin)
                    .map_err(sensor_error)?;
                (r.temperature, r.relative_humidity)
            }
        };
        ClimateReading::new(temperature, humidity)
    }
}

fn sensor_error<E>(error: DhtError<E>) -> SensorError {
    match error {
        DhtError::PinError(_) => SensorError::Bus,
        DhtError::ChecksumMismatch => SensorError::Checksum,
        DhtError::Timeout => SensorError::Timeout,
    }
}

impl<P, D, E> ClimateSensor for Dht<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: dht_sensor::Delay,
{
    fn begin(&mut self) {
        // Idle level is released (high)
        self.pin.set_high().ok();
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.measure().map(|r| r.temperature_c())
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        self.measure().map(|r| r.humidity_pct())
    }

    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        self.measure()
    }
}
