use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::screen::{PixelSurface, Screen};

/// Shows the 16bpp framebuffer in a desktop window, scaled by the GPU.
pub struct GraphicsRenderer {
    pixels: Pixels,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, screen: &Screen) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(screen.width(), screen.height(), surface_texture)?;
        Ok(Self { pixels })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    pub fn present(&mut self, screen: &Screen) -> Result<(), pixels::Error> {
        screen.copy_to_rgba(self.pixels.frame_mut());
        self.pixels.render()
    }
}
