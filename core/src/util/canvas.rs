//! A rectangular grid of pixels.

use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug, Formatter};

use crate::math::color::Color;

/// A 2-D pixel buffer that owns its elements, backed by a `Vec`.
///
/// Pixels are stored contiguously in row-major order, such that pixel
/// (x, y) maps to the element at index
/// ```text
/// y * width + x
/// ```
/// in the backing vector.
#[derive(Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Returns a `width` × `height` canvas with every pixel black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width * height],
        }
    }

    /// The number of pixel columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// The number of pixel rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the color of the pixel at (x, y).
    ///
    /// # Panics
    /// If (x, y) is outside the canvas.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        assert!(x < self.width, "x {x} out of range ({})", self.width);
        self.pixels[y * self.width + x]
    }

    /// Sets the pixel at (x, y) to `color`.
    ///
    /// # Panics
    /// If (x, y) is outside the canvas.
    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        assert!(x < self.width, "x {x} out of range ({})", self.width);
        self.pixels[y * self.width + x] = color;
    }

    /// Returns an iterator over the pixel rows of `self`, top to bottom.
    ///
    /// Always yields exactly [`height`][Self::height] rows; for a
    /// zero-width canvas every row is the empty slice.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        (0..self.height)
            .map(|y| &self.pixels[y * self.width..(y + 1) * self.width])
    }
}

impl Debug for Canvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Canvas {}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::color::color;

    #[test]
    fn new_canvas_is_black() {
        let c = Canvas::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        assert!(c.rows().flatten().all(|&px| px == Color::BLACK));
        assert_eq!(c.rows().count(), 20);
    }

    #[test]
    fn pixel_round_trip() {
        let mut c = Canvas::new(10, 20);
        let red = color(1.0, 0.0, 0.0);
        c.put_pixel(2, 3, red);
        assert_eq!(c.pixel(2, 3), red);
        assert_eq!(c.pixel(3, 2), Color::BLACK);
    }

    #[test]
    fn zero_width_canvas_still_has_its_rows() {
        let c = Canvas::new(0, 2);
        assert_eq!(c.rows().count(), 2);
        assert!(c.rows().all(<[Color]>::is_empty));
    }

    #[test]
    #[should_panic]
    fn out_of_range_write_panics() {
        Canvas::new(4, 4).put_pixel(4, 0, Color::WHITE);
    }

    #[test]
    #[should_panic]
    fn out_of_range_read_panics() {
        let _ = Canvas::new(4, 4).pixel(0, 4);
    }
}
