//! Numeric foundation of the `prism` ray tracer.
//!
//! Includes a math library with matrices, point/vector tuples, and
//! colors, plus a pixel canvas serializable as a plain-text PPM image.
//! The centerpiece is the [matrix engine][math::mat]: construction,
//! equality, multiplication, transposition, determinants by cofactor
//! expansion, and inversion, with every failure mode surfaced as a
//! typed error.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available items requiring I/O (saving PPM files) and the
//!   standard library's floating-point functions.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via
//!   the [libm](https://crates.io/crates/libm) crate.
//!
//! All features are disabled by default.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

pub mod math;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        approx::{ApproxEq, EPSILON},
        color::{Color, color},
        mat::{Matrix, scale, translate},
        tuple::{Tuple, point, tuple, vector},
    };

    pub use crate::util::canvas::Canvas;
}
