//! Sensor display cycle
//!
//! The whole application is one sequential loop:
//!
//! ```text
//! init ─▶ ┌─ read climate ─▶ log + render climate/error ─▶ dwell ─┐
//!         └─ dwell ◀─ log + render light ◀─ read light ◀────────┘
//! ```
//!
//! Dwell is a blocking delay. Nothing runs while a frame is held, and a
//! dwell always runs to completion.

use embedded_hal::delay::DelayNs;

use crate::config::CycleConfig;
use crate::format;
use crate::reading::LightReading;
use crate::screen::{Screen, ScreenKind};
use crate::traits::{ClimateSensor, DiagnosticSink, DisplayError, DisplaySurface, LightSensor};

/// Hardware handles owned by the cycle
///
/// Built once during board bring-up and moved in.
pub struct CycleParts<C, L, D, S, T> {
    /// Temperature/humidity sensor
    pub climate: C,
    /// Light sensor
    pub light: L,
    /// Display surface
    pub display: D,
    /// Diagnostic log sink
    pub sink: S,
    /// Blocking delay provider
    pub delay: T,
}

/// Display bring-up failed
///
/// Carries the untouched parts back to the caller, which is expected to
/// halt. No sensor has been read.
pub struct InitError<C, L, D, S, T> {
    /// Why the display could not be started
    pub cause: DisplayError,
    /// The parts that were passed to `init`
    pub parts: CycleParts<C, L, D, S, T>,
}

/// The climate/light poll-render-dwell loop
pub struct SensorDisplayCycle<C, L, D, S, T> {
    climate: C,
    light: L,
    display: D,
    sink: S,
    delay: T,
    config: CycleConfig,
    shown: Option<ScreenKind>,
}

impl<C, L, D, S, T> SensorDisplayCycle<C, L, D, S, T>
where
    C: ClimateSensor,
    L: LightSensor,
    D: DisplaySurface,
    S: DiagnosticSink,
    T: DelayNs,
{
    /// Run the one-time initialization
    ///
    /// Announces itself on the sink, then brings up the display. If the
    /// display fails, logs one line and returns the parts; sensors are
    /// never touched in that case. Otherwise clears the panel, prepares
    /// the climate sensor and waits `settle_ms`.
    pub fn init(
        parts: CycleParts<C, L, D, S, T>,
        config: CycleConfig,
    ) -> Result<Self, InitError<C, L, D, S, T>> {
        let CycleParts {
            mut climate,
            light,
            mut display,
            mut sink,
            mut delay,
        } = parts;

        sink.write_line("");
        sink.write_line(format::STARTUP_BANNER);

        if let Err(cause) = display.begin() {
            sink.write_line(format::DISPLAY_INIT_FAILED_LINE);
            return Err(InitError {
                cause,
                parts: CycleParts {
                    climate,
                    light,
                    display,
                    sink,
                    delay,
                },
            });
        }

        display.clear();
        display.flush().ok();

        climate.begin();

        delay.delay_ms(config.settle_ms);

        Ok(Self {
            climate,
            light,
            display,
            sink,
            delay,
            config,
            shown: None,
        })
    }

    /// Run iterations forever
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Run exactly one iteration: climate phase, then light phase
    pub fn step(&mut self) {
        self.climate_phase();
        self.light_phase();
    }

    /// The screen most recently sent to the display
    pub fn shown(&self) -> Option<ScreenKind> {
        self.shown
    }

    fn climate_phase(&mut self) {
        let screen = match self.climate.read_climate() {
            Ok(reading) => {
                self.sink.write_line(&format::climate_line(&reading));
                Screen::Climate(reading)
            }
            Err(_error) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Climate read failed: {}", _error);
                self.sink.write_line(format::CLIMATE_ERROR_LINE);
                Screen::ClimateError
            }
        };

        self.show(screen);
        self.delay.delay_ms(self.config.climate_dwell_ms);
    }

    fn light_phase(&mut self) {
        let raw = self.light.read_raw();
        let reading = LightReading::from_raw(raw, &self.config.adc);

        self.sink.write_line(&format::light_line(&reading));

        self.show(Screen::Light(reading));
        self.delay.delay_ms(self.config.light_dwell_ms);
    }

    fn show(&mut self, screen: Screen) {
        // A failed flush leaves the old frame up; the loop keeps its cadence
        if let Err(_error) = screen.render(&mut self.display) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display flush failed: {}", _error);
        }
        self.shown = Some(screen.kind());
    }
}
