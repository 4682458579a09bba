//! Climate and light sensor traits

use crate::reading::ClimateReading;

/// Errors that can occur while reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not drive the expected edge in time
    Timeout,
    /// Transferred data failed its checksum
    Checksum,
    /// Transducer produced no usable value
    NotANumber,
    /// Underlying pin or bus reported an error
    Bus,
}

/// Trait for combined temperature/humidity sensors
///
/// Implementations handle the specific sensor type (DHT11, DHT22, ...).
/// Each read takes `&mut self` because sampling drives the data line.
pub trait ClimateSensor {
    /// Prepare the sensor for reads
    ///
    /// Called once during initialization, after the display is up.
    fn begin(&mut self) {}

    /// Read the current temperature in degrees Celsius
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Read the current relative humidity in percent
    fn read_humidity(&mut self) -> Result<f32, SensorError>;

    /// Read temperature and humidity as one validated reading
    ///
    /// Drivers that sample both values in a single transaction should
    /// override this so one call is one read on the wire.
    fn read_climate(&mut self) -> Result<ClimateReading, SensorError> {
        let temperature = self.read_temperature()?;
        let humidity = self.read_humidity()?;
        ClimateReading::new(temperature, humidity)
    }
}

/// Trait for analog light sensors
pub trait LightSensor {
    /// Read the raw ADC count
    ///
    /// Always yields a value; the count never exceeds the converter's
    /// full scale.
    fn read_raw(&mut self) -> u16;
}
