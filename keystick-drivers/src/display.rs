//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. The frame
//! buffer is an `embedded-graphics` draw target; screens of text are
//! rendered with an 8 px wide mono font, each line centered horizontally.

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use keystick_core::feedback::Screen;
use keystick_core::traits::{DisplayError, TextDisplay};
use keystick_hal::I2cBus;

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

const FONT: &MonoFont<'static> = &FONT_8X13;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const ENTIRE_ON_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// SSD1306 OLED driver
pub struct Ssd1306<B> {
    bus: B,
    address: u8,
    ready: bool,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<B: I2cBus> Ssd1306<B> {
    /// Create a new driver at the default address
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, SSD1306_ADDR)
    }

    /// Create a new driver at a specific address
    pub fn with_address(bus: B, address: u8) -> Self {
        Self {
            bus,
            address,
            ready: false,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the controller and blank the panel
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEMORY_MODE,
            0x00, // Horizontal addressing
            cmd::SET_START_LINE,
            cmd::SET_SEG_REMAP,
            cmd::SET_MUX_RATIO,
            (HEIGHT - 1) as u8,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config, 128x64 panels
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::ENTIRE_ON_RESUME,
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Internal charge pump
            cmd::DEACTIVATE_SCROLL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }
        self.ready = true;

        self.clear();
        self.flush()
    }

    /// Check if `init` has completed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    /// Read back one pixel of the frame buffer
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let byte = &mut self.buffer[y / 8][x];
        if on {
            *byte |= 1 << (y % 8);
        } else {
            *byte &= !(1 << (y % 8));
        }
    }

    /// Draw `text` centered horizontally with its top at `y`
    pub fn draw_centered(&mut self, y: u8, text: &str) {
        let glyph_width = FONT.character_size.width as usize;
        let text_width = text.chars().count() * glyph_width;
        let x = WIDTH.saturating_sub(text_width) / 2;

        let style = MonoTextStyle::new(FONT, BinaryColor::On);
        let origin = Point::new(x as i32, i32::from(y));
        // Drawing into the frame buffer cannot fail
        let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(self);
    }

    /// Flush the frame buffer to the display
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotReady);
        }

        self.command(cmd::SET_COLUMN_ADDR)?;
        self.command(0)?;
        self.command((WIDTH - 1) as u8)?;
        self.command(cmd::SET_PAGE_ADDR)?;
        self.command(0)?;
        self.command((PAGES - 1) as u8)?;

        // Horizontal addressing wraps to the next page on its own
        for page in 0..PAGES {
            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(&self.buffer[page]);
            self.bus
                .write(self.address, &data)
                .map_err(|_| DisplayError::Bus)?;
        }

        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.bus
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(|_| DisplayError::Bus)
    }
}

impl<B> OriginDimensions for Ssd1306<B> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<B: I2cBus> DrawTarget for Ssd1306<B> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}

impl<B: I2cBus> TextDisplay for Ssd1306<B> {
    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        if !self.ready {
            return Err(DisplayError::NotReady);
        }

        self.clear();
        for line in screen.lines() {
            self.draw_centered(line.y, line.text.as_str());
        }
        self.flush()
    }
}
