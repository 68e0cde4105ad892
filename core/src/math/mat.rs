//! Matrices and the algebra needed to invert them.
//!
//! [`Matrix`] is a rectangular grid of `f64` scalars with a flat,
//! row-major backing store. Every operation is a pure function: inputs
//! are never mutated, results are always freshly allocated, and anything
//! that can go wrong surfaces as a typed [`Error`]. The interesting part
//! is the determinant, computed by cofactor expansion along the first
//! row; its cost grows factorially with size, which is acceptable here
//! because the renderer only ever inverts 4×4 transform matrices.

use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug, Display, Formatter};

use crate::math::approx::ApproxEq;
use crate::math::tuple::Tuple;

use Error::*;

//
// Types
//

/// A rectangular grid of `f64` scalars.
///
/// Elements are stored contiguously in row-major order, such that element
/// (row, col) maps to index
/// ```text
/// row * width + col
/// ```
/// in the backing vector. Rows are guaranteed rectangular by
/// construction; a matrix with no elements is always the canonical 0×0
/// matrix.
#[derive(Clone, PartialEq)]
pub struct Matrix {
    width: usize,
    height: usize,
    els: Vec<f64>,
}

/// Error from a malformed or unsatisfiable matrix operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Construction from rows of unequal length.
    Jagged {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// The length of the first row.
        width: usize,
    },
    /// Element or row/column access outside the bounds of the matrix.
    OutOfBounds { row: usize, col: usize },
    /// Multiplication with a zero-width or zero-height operand.
    EmptyOperand,
    /// Operands of incompatible dimensions, or a square-only operation
    /// applied to a non-square matrix.
    DimensionMismatch,
    /// Inversion of a singular matrix.
    NotInvertible,
}

/// Result of a matrix operation.
pub type Result<T> = core::result::Result<T, Error>;

//
// Inherent impls
//

impl Matrix {
    /// Builds a matrix from a 2-D scalar literal.
    ///
    /// The width is the length of the first row and the height the number
    /// of rows. Input with no rows, or rows of length zero, yields the
    /// 0×0 matrix.
    ///
    /// # Errors
    /// Returns [`Error::Jagged`] if any row's length differs from the
    /// first row's.
    ///
    /// # Examples
    /// ```
    /// use prism_core::math::mat::Matrix;
    ///
    /// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]])?;
    /// assert_eq!((m.width(), m.height()), (2, 2));
    /// # Ok::<(), prism_core::math::mat::Error>(())
    /// ```
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let mut els = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(Jagged { row: i, len: row.len(), width });
            }
            els.extend_from_slice(row);
            height += 1;
        }
        if width == 0 {
            // Any number of empty rows canonicalizes to the 0×0 matrix.
            height = 0;
        }
        Ok(Self { width, height, els })
    }

    /// Returns the n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeroed(n, n);
        for i in 0..n {
            m.els[i * n + i] = 1.0;
        }
        m
    }

    fn zeroed(width: usize, height: usize) -> Self {
        Self { width, height, els: vec![0.0; width * height] }
    }

    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the element at the given 0-based coordinates.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `row` ≥ height or `col` ≥ width.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.height || col >= self.width {
            return Err(OutOfBounds { row, col });
        }
        Ok(self.at(row, col))
    }

    /// Unchecked element access for internal use.
    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.els[row * self.width + col]
    }

    /// Returns the matrix product `self × rhs`.
    ///
    /// The result has `self.height()` rows and `rhs.width()` columns,
    /// with element (r, c) the dot product of row r of `self` and
    /// column c of `rhs`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyOperand`] if either operand has a zero
    /// dimension, or [`Error::DimensionMismatch`] unless
    /// `self.width() == rhs.height()`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        if self.width == 0
            || self.height == 0
            || rhs.width == 0
            || rhs.height == 0
        {
            return Err(EmptyOperand);
        }
        if self.width != rhs.height {
            return Err(DimensionMismatch);
        }
        let mut out = Self::zeroed(rhs.width, self.height);
        for r in 0..out.height {
            for c in 0..out.width {
                let mut sum = 0.0;
                for i in 0..self.width {
                    sum += self.at(r, i) * rhs.at(i, c);
                }
                out.els[r * out.width + c] = sum;
            }
        }
        Ok(out)
    }

    /// Multiplies `self` by a tuple treated as a column vector and
    /// repacks the 4-element result into a new tuple.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] unless `self` is 4×4.
    pub fn mul_tuple(&self, t: &Tuple) -> Result<Tuple> {
        if self.width != 4 || self.height != 4 {
            return Err(DimensionMismatch);
        }
        let v = t.to_array();
        let mut out = [0.0; 4];
        for (r, el) in out.iter_mut().enumerate() {
            *el = (0..4).map(|i| self.at(r, i) * v[i]).sum();
        }
        Ok(out.into())
    }

    /// Returns the transpose of `self`, a new `width × height` matrix
    /// with element (c, r) equal to `self`'s (r, c).
    ///
    /// Transposing twice yields a matrix equal to the original.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeroed(self.height, self.width);
        for r in 0..self.height {
            for c in 0..self.width {
                out.els[c * out.width + r] = self.at(r, c);
            }
        }
        out
    }

    /// Returns a copy of `self` with one row and one column removed,
    /// preserving the relative order of the remaining elements.
    ///
    /// A single-row or single-column matrix collapses to the canonical
    /// 0×0 matrix.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `skip_row` or `skip_col` does
    /// not name an existing row or column.
    pub fn submatrix(&self, skip_row: usize, skip_col: usize) -> Result<Self> {
        if skip_row >= self.height || skip_col >= self.width {
            return Err(OutOfBounds { row: skip_row, col: skip_col });
        }
        if self.width == 1 || self.height == 1 {
            // Removing the only row or column leaves no elements, which
            // canonicalizes to the 0×0 matrix
            return Ok(Self { width: 0, height: 0, els: Vec::new() });
        }
        let els = (0..self.height)
            .filter(|&r| r != skip_row)
            .flat_map(|r| {
                (0..self.width)
                    .filter(|&c| c != skip_col)
                    .map(move |c| self.at(r, c))
            })
            .collect();
        Ok(Self {
            width: self.width - 1,
            height: self.height - 1,
            els,
        })
    }

    /// Returns the minor at (row, col): the determinant of the submatrix
    /// with that row and column removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.submatrix(row, col)?.determinant()
    }

    /// Returns the cofactor at (row, col): the minor, negated when
    /// `row + col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// Returns the determinant of `self`.
    ///
    /// Computed by cofactor expansion along the first row, recursing
    /// through [`Matrix::submatrix`]. The 0×0 determinant is 1 (the
    /// empty product) and the 1×1 determinant is the single element.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if `self` is not square.
    pub fn determinant(&self) -> Result<f64> {
        if self.width != self.height {
            return Err(DimensionMismatch);
        }
        Ok(match self.height {
            0 => 1.0,
            1 => self.els[0],
            2 => self.els[0] * self.els[3] - self.els[1] * self.els[2],
            n => {
                let mut det = 0.0;
                for col in 0..n {
                    det += self.at(0, col) * self.cofactor(0, col)?;
                }
                det
            }
        })
    }

    /// Returns whether `self` has an inverse: it is square and its
    /// determinant is not numerically zero.
    pub fn is_invertible(&self) -> bool {
        self.determinant().is_ok_and(not_singular)
    }

    /// Returns the inverse of `self` using the adjugate-over-determinant
    /// formula: the matrix of cofactors, divided by the determinant,
    /// transposed.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] if `self` is not square, or
    /// [`Error::NotInvertible`] if its determinant is numerically zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if !not_singular(det) {
            return Err(NotInvertible);
        }
        let mut cof = Self::zeroed(self.width, self.height);
        for r in 0..self.height {
            for c in 0..self.width {
                cof.els[r * self.width + c] = self.cofactor(r, c)? / det;
            }
        }
        Ok(cof.transpose())
    }
}

/// A determinant within machine epsilon of zero makes the inversion
/// formula numerically meaningless, so such matrices are treated as
/// singular even when the value is not exactly 0.
fn not_singular(det: f64) -> bool {
    det > f64::EPSILON || det < -f64::EPSILON
}

//
// Transform constructors
//

/// Returns the 4×4 translation matrix moving points by (x, y, z).
///
/// Direction vectors (w = 0) are unaffected by translation.
pub fn translate(x: f64, y: f64, z: f64) -> Matrix {
    [
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

/// Returns the 4×4 scaling matrix with factors (x, y, z).
pub fn scale(x: f64, y: f64, z: f64) -> Matrix {
    [
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
    .into()
}

//
// Local trait impls
//

impl ApproxEq for Matrix {
    fn approx_eq_eps(&self, other: &Self, eps: &f64) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.els[..].approx_eq_eps(&other.els[..], eps)
    }
    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }
}

//
// Foreign trait impls
//

impl<const W: usize, const H: usize> From<[[f64; W]; H]> for Matrix {
    /// Converts a rectangular 2-D array into a matrix.
    ///
    /// Unlike [`Matrix::from_rows`] this cannot fail: the array's shape
    /// is known at compile time.
    fn from(rows: [[f64; W]; H]) -> Self {
        if W == 0 || H == 0 {
            return Self { width: 0, height: 0, els: Vec::new() };
        }
        Self {
            width: W,
            height: H,
            els: rows.as_flattened().to_vec(),
        }
    }
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} [", self.height, self.width)?;
        for row in self.els.chunks_exact(self.width.max(1)) {
            writeln!(f, "    {row:8.4?}")?;
        }
        write!(f, "]")
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Jagged { row, len, width } => write!(
                f,
                "row {row} has {len} elements, expected {width}"
            ),
            OutOfBounds { row, col } => {
                write!(f, "position ({row}, {col}) is outside the matrix")
            }
            EmptyOperand => f.write_str("multiplication by an empty matrix"),
            DimensionMismatch => {
                f.write_str("incompatible matrix dimensions")
            }
            NotInvertible => f.write_str("matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
