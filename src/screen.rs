pub const SCREEN_WIDTH: u32 = 240;
pub const SCREEN_HEIGHT: u32 = 160;

/// 15-bit BGR color as stored in the framebuffer (5 bits per channel, red in the low bits).
pub type Color = u16;

pub const fn rgb5(r: u16, g: u16, b: u16) -> Color {
    (r & 0x1F) | ((g & 0x1F) << 5) | ((b & 0x1F) << 10)
}

/// Expands a 5-bit-per-channel color to RGBA8.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let expand = |c: u16| -> u8 {
        let c = (c & 0x1F) as u8;
        (c << 3) | (c >> 2)
    };
    [expand(color), expand(color >> 5), expand(color >> 10), 255]
}

/// Anything the game can draw on, one pixel at a time.
pub trait PixelSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Caller guarantees `x < width` and `y < height`.
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Linear 16bpp framebuffer with the handheld's fixed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u32,
    height: u32,
    buffer: Vec<Color>,
}

impl Screen {
    pub fn new() -> Self {
        Self::with_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; (width * height) as usize],
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            self.buffer.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    /// Writes the framebuffer into an RGBA8 frame of the same dimensions.
    pub fn copy_to_rgba(&self, frame: &mut [u8]) {
        for (pixel, &color) in frame.chunks_exact_mut(4).zip(self.buffer.iter()) {
            pixel.copy_from_slice(&color_to_rgba(color));
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSurface for Screen {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} screen",
            x,
            y,
            self.width,
            self.height
        );
        self.buffer[(y * self.width + x) as usize] = color;
    }
}
