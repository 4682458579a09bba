//! Diagnostic sink trait

/// Line-oriented text destination for diagnostics (e.g., a serial console)
///
/// Lines are passed without a terminator; the sink appends its own.
pub trait DiagnosticSink {
    /// Write one complete line
    fn write_line(&mut self, line: &str);
}
