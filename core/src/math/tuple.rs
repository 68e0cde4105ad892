//! Points and direction vectors as 4-component tuples.
//!
//! A tuple is a point if its `w` component is 1 and a direction vector if
//! it is 0. Subtracting two points yields a vector, adding a vector to a
//! point yields a point, and so on; the `w` arithmetic works out without
//! special cases. The matrix engine consumes tuples as 4-element column
//! vectors via [`Tuple::to_array`] and rebuilds them from 4-element
//! results.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;

use Error::*;

//
// Types
//

/// A point or direction in homogeneous coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Error from a tuple operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Tried to rebuild a tuple from a sequence whose length is not 4.
    Length(usize),
    /// Division by a numerically zero scalar.
    DivisionByZero,
}

/// Result of a tuple operation.
pub type Result<T> = core::result::Result<T, Error>;

//
// Constructors
//

/// Returns a new point, a tuple with `w` = 1.
pub const fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple { x, y, z, w: 1.0 }
}

/// Returns a new direction vector, a tuple with `w` = 0.
pub const fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple { x, y, z, w: 0.0 }
}

/// Returns a new tuple with an arbitrary `w` component.
pub const fn tuple(x: f64, y: f64, z: f64, w: f64) -> Tuple {
    Tuple { x, y, z, w }
}

//
// Inherent impls
//

impl Tuple {
    /// Returns whether `self` represents a point (`w` ≅ 1).
    pub fn is_point(&self) -> bool {
        self.w.approx_eq(&1.0)
    }
    /// Returns whether `self` represents a direction vector (`w` ≅ 0).
    pub fn is_vector(&self) -> bool {
        self.w.approx_eq(&0.0)
    }

    /// Returns the components of `self` as a flat 4-element array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
            + self.w * other.w
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// Only the x, y, and z components participate; the result is always
    /// a direction vector.
    pub fn cross(&self, other: &Self) -> Self {
        vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the magnitude (Euclidean length) of `self`.
    pub fn magnitude(&self) -> f64 {
        use crate::math::float::f64;
        f64::sqrt(self.dot(self))
    }

    /// Returns `self` scaled to unit length.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if the magnitude of `self` is
    /// numerically zero.
    pub fn normalize(&self) -> Result<Self> {
        self.div(self.magnitude())
    }

    /// Returns `self` divided by the scalar `s`.
    ///
    /// # Errors
    /// Returns [`Error::DivisionByZero`] if `s` is numerically zero.
    pub fn div(&self, s: f64) -> Result<Self> {
        if s.approx_eq(&0.0) {
            return Err(DivisionByZero);
        }
        Ok(tuple(self.x / s, self.y / s, self.z / s, self.w / s))
    }
}

//
// Local trait impls
//

impl ApproxEq for Tuple {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.to_array().approx_eq_eps(&other.to_array(), eps)
    }
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }
}

//
// Foreign trait impls
//

impl From<[f64; 4]> for Tuple {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        tuple(x, y, z, w)
    }
}

impl TryFrom<&[f64]> for Tuple {
    type Error = Error;

    /// Rebuilds a tuple from a strict 4-element flattening.
    fn try_from(s: &[f64]) -> Result<Self> {
        match *s {
            [x, y, z, w] => Ok(tuple(x, y, z, w)),
            _ => Err(Length(s.len())),
        }
    }
}

impl Add for Tuple {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        tuple(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        tuple(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        tuple(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        tuple(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Length(n) => {
                write!(f, "expected 4 elements to build a tuple, got {n}")
            }
            DivisionByZero => f.write_str("tuple division by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    #[test]
    fn point_has_w_one() {
        let p = point(4.3, -4.2, 3.1);
        assert_eq!(p.w, 1.0);
        assert!(p.is_point());
        assert!(!p.is_vector());
    }

    #[test]
    fn vector_has_w_zero() {
        let v = vector(4.3, -4.2, 3.1);
        assert_eq!(v.w, 0.0);
        assert!(v.is_vector());
        assert!(!v.is_point());
    }

    #[test]
    fn addition() {
        let a = tuple(3.0, -2.0, 5.0, 1.0);
        let b = tuple(-2.0, 3.0, 1.0, 0.0);
        assert_approx_eq!(a + b, tuple(1.0, 1.0, 6.0, 1.0));
    }

    #[test]
    fn subtracting_points_gives_a_vector() {
        let a = point(3.0, 2.0, 1.0);
        let b = point(5.0, 6.0, 7.0);
        let d = a - b;
        assert!(d.is_vector());
        assert_approx_eq!(d, vector(-2.0, -4.0, -6.0));
    }

    #[test]
    fn subtracting_vector_from_point_gives_a_point() {
        let p = point(3.0, 2.0, 1.0);
        let v = vector(5.0, 6.0, 7.0);
        assert_approx_eq!(p - v, point(-2.0, -4.0, -6.0));
    }

    #[test]
    fn negation() {
        let a = tuple(1.0, -2.0, 3.0, -4.0);
        assert_approx_eq!(-a, tuple(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn scalar_multiplication() {
        let a = tuple(1.0, -2.0, 3.0, -4.0);
        assert_approx_eq!(a * 3.5, tuple(3.5, -7.0, 10.5, -14.0));
        assert_approx_eq!(a * 0.5, tuple(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn scalar_division() {
        let a = tuple(1.0, -2.0, 3.0, -4.0);
        assert_approx_eq!(
            a.div(2.0).unwrap(),
            tuple(0.5, -1.0, 1.5, -2.0)
        );
    }

    #[test]
    fn division_by_zero_fails() {
        let a = tuple(1.0, -2.0, 3.0, -4.0);
        assert_eq!(a.div(0.0), Err(DivisionByZero));
        // Numerically zero counts as zero
        assert_eq!(a.div(1e-9), Err(DivisionByZero));
    }

    #[test]
    fn magnitude() {
        assert_approx_eq!(vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_approx_eq!(vector(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert_approx_eq!(vector(1.0, 2.0, 3.0).magnitude(), 14.0_f64.sqrt());
        assert_approx_eq!(
            vector(-1.0, -2.0, -3.0).magnitude(),
            14.0_f64.sqrt()
        );
    }

    #[test]
    fn normalization() {
        let v = vector(4.0, 0.0, 0.0);
        assert_approx_eq!(v.normalize().unwrap(), vector(1.0, 0.0, 0.0));

        let v = vector(1.0, 2.0, 3.0);
        let n = v.normalize().unwrap();
        assert_approx_eq!(n, vector(0.26726, 0.53452, 0.80178));
        assert_approx_eq!(n.magnitude(), 1.0);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        assert_eq!(
            vector(0.0, 0.0, 0.0).normalize(),
            Err(DivisionByZero)
        );
    }

    #[test]
    fn dot_product() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(2.0, 3.0, 4.0);
        assert_approx_eq!(a.dot(&b), 20.0);
    }

    #[test]
    fn cross_product() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(2.0, 3.0, 4.0);
        assert_approx_eq!(a.cross(&b), vector(-1.0, 2.0, -1.0));
        assert_approx_eq!(b.cross(&a), vector(1.0, -2.0, 1.0));
    }

    #[test]
    fn array_round_trip() {
        let t = tuple(1.0, -2.0, 3.0, 1.0);
        assert_eq!(t.to_array(), [1.0, -2.0, 3.0, 1.0]);
        assert_eq!(Tuple::try_from(&t.to_array()[..]), Ok(t));
    }

    #[test]
    fn from_short_slice_fails() {
        assert_eq!(Tuple::try_from(&[1.0, 2.0][..]), Err(Length(2)));
        assert_eq!(
            Tuple::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0][..]),
            Err(Length(5))
        );
    }
}
