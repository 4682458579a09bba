//! Text formatting for diagnostic lines and frame fields
//!
//! Everything is written into fixed-capacity strings. Output that does not
//! fit is truncated rather than panicking.

use core::fmt::Write;

use heapless::String;

use crate::reading::{ClimateReading, LightReading};

/// Maximum bytes in a diagnostic line
pub const LINE_LEN: usize = 64;

/// Maximum bytes in a single frame field
pub const FIELD_LEN: usize = 22;

/// A formatted diagnostic line
pub type Line = String<LINE_LEN>;

/// A formatted frame field
pub type Field = String<FIELD_LEN>;

/// Printed once at boot, after an empty line
pub const STARTUP_BANNER: &str = "envpanel: DHT22 + LDR -> OLED";

/// Printed when the display cannot be brought up, just before halting
pub const DISPLAY_INIT_FAILED_LINE: &str = "SSD1306 allocation failed";

/// Printed in place of the climate line when the reading is invalid
pub const CLIMATE_ERROR_LINE: &str = "Error reading DHT22 sensor!";

/// `Temperature: 23.5 °C  |  Humidity: 41.2 %`
pub fn climate_line(reading: &ClimateReading) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "Temperature: {:.1} °C  |  Humidity: {:.1} %",
        reading.temperature_c(),
        reading.humidity_pct()
    );
    line
}

/// `LDR ADC: 2048  |  Voltage: 1.65 V`
pub fn light_line(reading: &LightReading) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "LDR ADC: {}  |  Voltage: {:.2} V",
        reading.raw(),
        reading.voltage()
    );
    line
}

/// `23.5 C`
pub fn temperature_field(reading: &ClimateReading) -> Field {
    field(format_args!("{:.1} C", reading.temperature_c()))
}

/// `41.2 %`
pub fn humidity_field(reading: &ClimateReading) -> Field {
    field(format_args!("{:.1} %", reading.humidity_pct()))
}

/// `2048`
pub fn raw_field(reading: &LightReading) -> Field {
    field(format_args!("{}", reading.raw()))
}

/// `Voltage: 1.65 V`
pub fn voltage_field(reading: &LightReading) -> Field {
    field(format_args!("Voltage: {:.2} V", reading.voltage()))
}

fn field(args: core::fmt::Arguments<'_>) -> Field {
    let mut s = Field::new();
    let _ = s.write_fmt(args);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::AdcScale;

    #[test]
    fn test_climate_line() {
        let reading = ClimateReading::new(23.5, 41.2).unwrap();
        assert_eq!(
            climate_line(&reading).as_str(),
            "Temperature: 23.5 °C  |  Humidity: 41.2 %"
        );
    }

    #[test]
    fn test_climate_line_negative_temperature() {
        let reading = ClimateReading::new(-4.24, 99.96).unwrap();
        let line = climate_line(&reading);
        assert!(line.starts_with("Temperature: -4.2"));
        assert!(line.ends_with("Humidity: 100.0 %"));
    }

    #[test]
    fn test_light_line() {
        let reading = LightReading::from_raw(2048, &AdcScale::default());
        assert_eq!(light_line(&reading).as_str(), "LDR ADC: 2048  |  Voltage: 1.65 V");
    }

    #[test]
    fn test_light_line_boundaries() {
        let scale = AdcScale::default();
        assert_eq!(
            light_line(&LightReading::from_raw(4095, &scale)).as_str(),
            "LDR ADC: 4095  |  Voltage: 3.30 V"
        );
        assert_eq!(
            light_line(&LightReading::from_raw(0, &scale)).as_str(),
            "LDR ADC: 0  |  Voltage: 0.00 V"
        );
    }

    #[test]
    fn test_fields() {
        let climate = ClimateReading::new(23.5, 41.2).unwrap();
        assert_eq!(temperature_field(&climate).as_str(), "23.5 C");
        assert_eq!(humidity_field(&climate).as_str(), "41.2 %");

        let light = LightReading::from_raw(1234, &AdcScale::default());
        assert_eq!(raw_field(&light).as_str(), "1234");
        assert_eq!(voltage_field(&light).as_str(), "Voltage: 0.99 V");
    }

    #[test]
    fn test_oversized_value_truncates() {
        let reading = ClimateReading::new(f32::MAX, 50.0).unwrap();
        // Must not panic; the temperature alone overflows a field
        let field = temperature_field(&reading);
        assert!(field.len() <= FIELD_LEN);
    }
}
