//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Keeps a full
//! frame buffer in RAM; text and graphics are drawn with embedded-graphics
//! and only reach the panel on `flush`.

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use envpanel_core::traits::{DisplayError, DisplaySurface, TextSize};
use envpanel_core::DisplayGeometry;

use core::convert::Infallible;

/// SSD1306 I2C address (0x3C, or 0x3D with SA0 high)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const GEOMETRY: DisplayGeometry = DisplayGeometry::new();
const WIDTH: usize = GEOMETRY.width as usize;
const HEIGHT: usize = GEOMETRY.height as usize;
const PAGES: usize = HEIGHT / 8;

/// Control bytes prefixed to every I2C write
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
}

/// Power-on sequence for a 128x64 panel on the internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x02,                  // Page addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF, // High contrast
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_RAM,
    cmd::SET_NORMAL,
    cmd::DEACTIVATE_SCROLL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
    /// Top-left of the next glyph
    cursor: Point,
    text_size: TextSize,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new SSD1306 driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SSD1306_ADDR)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [[0; WIDTH]; PAGES],
            cursor: Point::zero(),
            text_size: TextSize::Normal,
            initialized: false,
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd])
    }

    /// Write the frame buffer to the panel, one page at a time
    pub fn write_frame(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN)?;
            self.command(cmd::SET_HIGH_COLUMN)?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c.write(self.address, &data)?;
        }
        Ok(())
    }
}

impl<I2C> Ssd1306<I2C> {
    /// Set or clear one pixel; coordinates off the panel are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let bit = 1 << (y % 8);
        if on {
            self.buffer[y / 8][x] |= bit;
        } else {
            self.buffer[y / 8][x] &= !bit;
        }
    }

    fn font(&self) -> &'static MonoFont<'static> {
        match self.text_size {
            TextSize::Normal => &FONT_5X8,
            TextSize::Double => &FONT_9X15,
        }
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl<I2C: I2c> DisplaySurface for Ssd1306<I2C> {
    fn begin(&mut self) -> Result<(), DisplayError> {
        self.init().map_err(|_| DisplayError::Communication)?;
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    fn set_cursor(&mut self, x: u8, y: u8) {
        self.cursor = Point::new(x as i32, y as i32);
    }

    fn set_text_size(&mut self, size: TextSize) {
        self.text_size = size;
    }

    fn print(&mut self, text: &str) {
        let style = MonoTextStyle::new(self.font(), BinaryColor::On);
        let origin = self.cursor;
        self.cursor = Text::with_baseline(text, origin, style, Baseline::Top)
            .draw(self)
            .unwrap_or(origin);
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.write_frame().map_err(|_| DisplayError::Communication)
    }
}
