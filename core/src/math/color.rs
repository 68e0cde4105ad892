//! RGB colors with unbounded floating-point channels.
//!
//! Channels nominally range over [0, 1] but are allowed to leave that
//! range during arithmetic; values are only clamped at quantization time
//! by [`Color::to_bytes`].

use core::ops::{Add, Mul, Sub};

use crate::math::approx::ApproxEq;

//
// Types
//

/// An RGB color with `f64` channels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Returns a new color with `r`, `g`, and `b` channels.
pub const fn color(r: f64, g: f64, b: f64) -> Color {
    Color { r, g, b }
}

//
// Inherent impls
//

impl Color {
    /// All channels zero.
    pub const BLACK: Self = color(0.0, 0.0, 0.0);
    /// All channels one.
    pub const WHITE: Self = color(1.0, 1.0, 1.0);

    /// Quantizes `self` to 8-bit channels.
    ///
    /// Each channel is clamped to [0, 1], scaled by 255, and rounded to
    /// the nearest integer.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
            .map(|c| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
    }
}

//
// Local trait impls
//

impl ApproxEq for Color {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        [self.r, self.g, self.b]
            .approx_eq_eps(&[other.r, other.g, other.b], eps)
    }
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }
}

//
// Foreign trait impls
//

impl Add for Color {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        color(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        color(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        color(self.r * s, self.g * s, self.b * s)
    }
}

/// The Hadamard (channel-wise) product.
impl Mul for Color {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        color(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn addition() {
        let a = color(0.9, 0.6, 0.75);
        let b = color(0.7, 0.1, 0.25);
        assert_approx_eq!(a + b, color(1.6, 0.7, 1.0));
    }

    #[test]
    fn subtraction() {
        let a = color(0.9, 0.6, 0.75);
        let b = color(0.7, 0.1, 0.25);
        assert_approx_eq!(a - b, color(0.2, 0.5, 0.5));
    }

    #[test]
    fn scaling() {
        assert_approx_eq!(
            color(0.2, 0.3, 0.4) * 2.0,
            color(0.4, 0.6, 0.8)
        );
    }

    #[test]
    fn hadamard_product() {
        let a = color(1.0, 0.2, 0.4);
        let b = color(0.9, 1.0, 0.1);
        assert_approx_eq!(a * b, color(0.9, 0.2, 0.04));
    }

    #[test]
    fn quantization() {
        assert_eq!(color(0.0, 0.5, 1.0).to_bytes(), [0, 128, 255]);
        // Out-of-range channels clamp rather than wrap
        assert_eq!(color(1.5, -0.5, 0.8).to_bytes(), [255, 0, 204]);
    }
}
