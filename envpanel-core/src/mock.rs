//! Recording collaborators shared by the unit tests
//!
//! Every mock appends to one `Trace`, so tests can assert on the exact
//! interleaving of reads, draws, log lines and delays.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use crate::traits::{
    ClimateSensor, DiagnosticSink, DisplayError, DisplaySurface, LightSensor, SensorError,
    TextSize,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ClimateBegin,
    ClimateRead,
    LightRead,
    DisplayBegin,
    Clear,
    Cursor(u8, u8),
    Size(TextSize),
    Print(String),
    Flush,
    Line(String),
    DelayMs(u32),
}

#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn prints(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Print(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.0.borrow().iter().filter(|e| *e == event).count()
    }
}

/// Climate sensor returning scripted `(temperature, humidity)` pairs
///
/// Repeats the last pair once the script runs out.
pub struct MockClimate {
    pub trace: Trace,
    script: VecDeque<Result<(f32, f32), SensorError>>,
    last: Result<(f32, f32), SensorError>,
}

impl MockClimate {
    pub fn new(trace: Trace, script: &[Result<(f32, f32), SensorError>]) -> Self {
        Self {
            trace,
            script: script.iter().copied().collect(),
            last: Err(SensorError::Timeout),
        }
    }

    fn next_sample(&mut self) -> Result<(f32, f32), SensorError> {
        if let Some(sample) = self.script.pop_front() {
            self.last = sample;
        }
        self.last
    }
}

impl ClimateSensor for MockClimate {
    fn begin(&mut self) {
        self.trace.push(Event::ClimateBegin);
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.next_sample().map(|(t, _)| t)
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        self.next_sample().map(|(_, h)| h)
    }

    fn read_climate(&mut self) -> Result<crate::reading::ClimateReading, SensorError> {
        self.trace.push(Event::ClimateRead);
        let (t, h) = self.next_sample()?;
        crate::reading::ClimateReading::new(t, h)
    }
}

pub struct MockLight {
    pub trace: Trace,
    pub raw: u16,
}

impl LightSensor for MockLight {
    fn read_raw(&mut self) -> u16 {
        self.trace.push(Event::LightRead);
        self.raw
    }
}

pub struct MockDisplay {
    pub trace: Trace,
    pub fail_begin: bool,
    pub fail_flush: bool,
}

impl MockDisplay {
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            fail_begin: false,
            fail_flush: false,
        }
    }
}

impl DisplaySurface for MockDisplay {
    fn begin(&mut self) -> Result<(), DisplayError> {
        self.trace.push(Event::DisplayBegin);
        if self.fail_begin {
            Err(DisplayError::Communication)
        } else {
            Ok(())
        }
    }

    fn clear(&mut self) {
        self.trace.push(Event::Clear);
    }

    fn set_cursor(&mut self, x: u8, y: u8) {
        self.trace.push(Event::Cursor(x, y));
    }

    fn set_text_size(&mut self, size: TextSize) {
        self.trace.push(Event::Size(size));
    }

    fn print(&mut self, text: &str) {
        self.trace.push(Event::Print(text.to_string()));
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.trace.push(Event::Flush);
        if self.fail_flush {
            Err(DisplayError::Communication)
        } else {
            Ok(())
        }
    }
}

pub struct MockSink {
    pub trace: Trace,
}

impl DiagnosticSink for MockSink {
    fn write_line(&mut self, line: &str) {
        self.trace.push(Event::Line(line.to_string()));
    }
}

pub struct MockDelay {
    pub trace: Trace,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.push(Event::DelayMs(ms));
    }
}
