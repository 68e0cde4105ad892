//! Linear algebra and color math for the prism renderer.
//!
//! Includes [matrices][mat] — the algebraic core of the crate, up to and
//! including inversion by cofactor expansion — as well as
//! [point/vector tuples][tuple], [colors][color], and utilities such as
//! [approximate equality comparisons][approx].
//!
//! Everything here is a pure function over immutable-after-construction
//! value types: no operation mutates its inputs, so values may be freely
//! shared across threads.

pub use {
    approx::{ApproxEq, EPSILON},
    color::{Color, color},
    mat::{Matrix, scale, translate},
    tuple::{Tuple, point, tuple, vector},
};

pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod tuple;
