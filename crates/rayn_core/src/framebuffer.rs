//! Output canvas.

use crate::Color;

/// Vertical traversal order over framebuffer rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Row `height - 1` first (the top of the image), as PPM expects.
    TopDown,
    /// Row `0` first (the bottom of the image), as BMP expects.
    BottomUp,
}

/// A width x height grid of colors stored row-major.
///
/// Row `y = 0` is the bottom of the image, matching the camera's screen
/// coordinates where `v` grows upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Build a framebuffer from row-major pixels (bottom row first).
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// All pixels, row-major, bottom row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable access for renderers that fill whole rows at once.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// The pixels of row `y`, left to right.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Iterate over `(y, row)` pairs in the requested vertical order.
    pub fn rows(&self, order: RowOrder) -> impl Iterator<Item = (u32, &[Color])> + '_ {
        let height = self.height;
        (0..height)
            .map(move |i| match order {
                RowOrder::BottomUp => i,
                RowOrder::TopDown => height - 1 - i,
            })
            .map(move |y| (y, self.row(y)))
    }

    /// Replace every pixel with `f(color, x, y)`, row by row from the bottom.
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(Color, u32, u32) -> Color,
    {
        for y in 0..self.height {
            for x in 0..self.width {
                let index = self.index(x, y);
                self.pixels[index] = f(self.pixels[index], x, y);
            }
        }
    }
}
