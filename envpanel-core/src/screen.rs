//! Frame layouts
//!
//! Each screen is drawn from scratch: clear, a fixed top-to-bottom field
//! sequence, flush. Nothing is diffed against the previous frame.
//!
//! Coordinates are pixels on the 128x64 panel. `Double` text is 16 px tall,
//! `Normal` text 8 px.

use crate::format;
use crate::reading::{ClimateReading, LightReading};
use crate::traits::{DisplayError, DisplaySurface, TextSize};

/// Title of the climate screen
pub const CLIMATE_TITLE: &str = "Environment";

/// Label above the humidity value
pub const HUMIDITY_LABEL: &str = "Humidity";

/// Only line of the climate error screen
pub const CLIMATE_ERROR_TEXT: &str = "DHT read error!";

/// Title of the light screen
pub const LIGHT_TITLE: &str = "Light (LDR)";

/// Which screen is on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    /// Temperature and humidity
    Climate,
    /// Climate read failed
    ClimateError,
    /// Raw light count and voltage
    Light,
}

/// A frame to be rendered, carrying the values it shows
///
/// `Climate` and `ClimateError` share the first slot of an iteration;
/// `Light` always fills the second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Climate(ClimateReading),
    ClimateError,
    Light(LightReading),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Climate(_) => ScreenKind::Climate,
            Screen::ClimateError => ScreenKind::ClimateError,
            Screen::Light(_) => ScreenKind::Light,
        }
    }

    /// Draw this screen and push it to the panel
    pub fn render<D: DisplaySurface>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.clear();

        match self {
            Screen::Climate(reading) => {
                draw(display, TextSize::Normal, 0, 0, CLIMATE_TITLE);
                draw(
                    display,
                    TextSize::Double,
                    0,
                    14,
                    &format::temperature_field(reading),
                );
                draw(display, TextSize::Normal, 0, 40, HUMIDITY_LABEL);
                draw(
                    display,
                    TextSize::Double,
                    0,
                    48,
                    &format::humidity_field(reading),
                );
            }
            Screen::ClimateError => {
                draw(display, TextSize::Normal, 0, 20, CLIMATE_ERROR_TEXT);
            }
            Screen::Light(reading) => {
                draw(display, TextSize::Normal, 0, 0, LIGHT_TITLE);
                draw(display, TextSize::Double, 0, 14, &format::raw_field(reading));
                draw(
                    display,
                    TextSize::Normal,
                    0,
                    44,
                    &format::voltage_field(reading),
                );
            }
        }

        display.flush()
    }
}

fn draw<D: DisplaySurface>(display: &mut D, size: TextSize, x: u8, y: u8, text: &str) {
    display.set_text_size(size);
    display.set_cursor(x, y);
    display.print(text);
}
