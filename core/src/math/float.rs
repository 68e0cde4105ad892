//! Floating-point compatibility API.
//!
//! `sqrt` is not available in `core`. This module provides it using either
//! the std intrinsic or the `libm` crate, depending on which feature is
//! enabled. As a fallback, it also implements an approximate version even
//! if neither feature is enabled.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::sqrt;
}

pub mod fallback {
    use super::fast_recip_sqrt;

    /// Returns the approximate reciprocal of the square root of `x`.
    #[inline]
    pub fn recip_sqrt(x: f64) -> f64 {
        fast_recip_sqrt(x)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        1.0 / recip_sqrt(x)
    }
}

/// Returns a fast approximation of the reciprocal square root of a number.
#[inline]
pub fn fast_recip_sqrt(x: f64) -> f64 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u64 = 0x5fe6_eb50_c7b5_37a9;
    let mut y = f64::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
    // Three rounds of Newton's method
    y = y * (1.5 - 0.5 * x * y * y);
    y = y * (1.5 - 0.5 * x * y * y);
    y = y * (1.5 - 0.5 * x * y * y);
    y
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f64 = core::primitive::f64;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f64;

#[cfg(not(feature = "fp"))]
pub use fallback as f64;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[cfg(feature = "libm")]
    #[test]
    fn libm_sqrt() {
        assert_eq!(libm::sqrt(9.0), 3.0);
        assert_eq!(libm::sqrt(16.0), 4.0);
        assert!(libm::sqrt(-1.0).is_nan());
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_sqrt() {
        assert_eq!(f64::sqrt(9.0), 3.0);
        assert!(f64::sqrt(-1.0).is_nan());
    }

    #[test]
    fn fallback_sqrt() {
        use fallback as fb;
        assert_approx_eq!(fb::sqrt(9.0), 3.0);
        assert_approx_eq!(fb::sqrt(16.0), 4.0);
        assert_approx_eq!(fb::recip_sqrt(9.0), 1.0 / 3.0);
    }
}
