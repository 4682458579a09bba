//! Serial console diagnostic sink
//!
//! Every line goes to the UART with a CRLF terminator and is mirrored to
//! the defmt log, so a probe shows the same output as the serial monitor.

use defmt::*;
use envpanel_core::traits::DiagnosticSink;

/// Line sink over any blocking byte writer
pub struct SerialSink<W> {
    tx: W,
}

impl<W: embedded_io::Write> SerialSink<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }
}

impl<W: embedded_io::Write> DiagnosticSink for SerialSink<W> {
    fn write_line(&mut self, line: &str) {
        info!("{=str}", line);

        let written = self
            .tx
            .write_all(line.as_bytes())
            .and_then(|_| self.tx.write_all(b"\r\n"))
            .and_then(|_| self.tx.flush());
        if written.is_err() {
            warn!("Serial write failed");
        }
    }
}
