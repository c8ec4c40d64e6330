// Drawing-target abstraction used by the particle animator.
//
// The web frontend implements [`Surface`] on top of a 2D canvas context;
// host tests implement it with a recorder so frames can be inspected without
// a browser.

use glam::Vec2;

/// Logical viewport size plus the device pixel ratio used for the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Backing-store size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.device_pixel_ratio).max(0.0) as u32;
        let h = (self.height * self.device_pixel_ratio).max(0.0) as u32;
        (w, h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` form, as accepted by canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface {
    /// Match the backing store to the viewport and scale drawing to logical pixels.
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
