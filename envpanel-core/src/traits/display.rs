//! Display surface trait for the monochrome OLED

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus communication with the panel failed
    Communication,
    /// Operation requires `begin()` to have succeeded
    NotInitialized,
}

/// Text scale
///
/// `Normal` is the 1x font, `Double` the 2x one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    #[default]
    Normal,
    Double,
}

/// Trait for a buffered bitmap display
///
/// Drawing operations only touch the frame buffer. Nothing reaches the
/// panel until `flush` is called.
pub trait DisplaySurface {
    /// Bring up the bus link and panel
    fn begin(&mut self) -> Result<(), DisplayError>;

    /// Clear the entire frame buffer
    fn clear(&mut self);

    /// Move the text cursor to a pixel position (top-left of the next glyph)
    fn set_cursor(&mut self, x: u8, y: u8);

    /// Set the scale used by subsequent `print` calls
    fn set_text_size(&mut self, size: TextSize);

    /// Draw text at the cursor and advance it
    fn print(&mut self, text: &str);

    /// Send the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
