//! Testing and asserting approximate equality.

use core::iter::zip;

/// The absolute tolerance used by [`ApproxEq::approx_eq`].
///
/// Every tolerant comparison in the crate goes through this one value so
/// that equality means the same thing for scalars, tuples, colors, and
/// matrices alike.
pub const EPSILON: f64 = 1e-5;

/// Trait for testing approximate equality.
///
/// Floating-point types are only an approximation of real numbers due to
/// their finite precision. The presence of rounding errors means that two
/// floats may not compare equal even if their counterparts in ℝ would.
/// Even such a simple expression as `0.1 + 0.2 == 0.3` will evaluate to
/// false due to precision issues.
///
/// Two values are considered approximately equal if their absolute
/// difference is at most some small value, "epsilon". The values this
/// library works with stay near unit magnitude (color channels, unit
/// vectors, 4×4 transform entries), so a fixed absolute epsilon is
/// sufficient and keeps comparisons predictable.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = f64> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::default_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::default_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the absolute epsilon `eps`.
    fn approx_eq_eps(&self, other: &Other, eps: &Epsilon) -> bool;

    /// Returns the default epsilon of type `Epsilon`.
    fn default_epsilon() -> Epsilon;
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        // |self - other| <= eps, spelled without `abs` so the comparison
        // stays available in builds without any fp provider. NaN on
        // either side compares unequal.
        let diff = self - other;
        -*eps <= diff && diff <= *eps
    }

    fn default_epsilon() -> Self {
        EPSILON
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, eps))
    }
    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, eps)
    }
    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

impl<E, T: ApproxEq<T, E>> ApproxEq<Self, E> for Option<T> {
    fn approx_eq_eps(&self, other: &Self, eps: &E) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, eps),
            (Some(_), None) | (None, Some(_)) => false,
            (None, None) => true,
        }
    }

    fn default_epsilon() -> E {
        T::default_epsilon()
    }
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use prism_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use prism_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 100.5, eps = 1.0);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use prism_core::assert_approx_eq;
/// assert_approx_eq!(3.14, 0.0, eps = 0.001,
///     "3.14 is not a good approximation of {}!", 0.0);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}
