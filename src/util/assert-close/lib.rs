//! `assert_close!`, an `assert_eq!` for floating point data.
//!
//! ```
//! #[macro_use] extern crate rsp2_assert_close;
//! # fn main() {
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-12, f64::cos(std::f64::consts::FRAC_PI_2), 0.0);
//! assert_close!(rel=1e-3, vec![1.0, 2.0], vec![1.0001, 2.0]);
//! # }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Panics unless two values are within tolerance.
///
/// Optional leading `rel=` and `abs=` set the tolerances (default: `rel` of
/// `DEFAULT_NONZERO_TOL` and `abs` of zero).  Anything after the two values is a
/// format string and arguments for the panic message.
#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$rel, $abs] $($rest)+)
    };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$rel, $abs] $($rest)+)
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$rel, 0.0] $($rest)+)
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close_impl!([$crate::DEFAULT_NONZERO_TOL, $abs] $($rest)+)
    };
    ($($rest:tt)+) => {
        $crate::__assert_close_impl!([$crate::DEFAULT_NONZERO_TOL, 0.0] $($rest)+)
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_impl {
    ([$rel:expr, $abs:expr] $a:expr, $b:expr $(,)*) => {
        $crate::__assert_close_impl!([$rel, $abs] $a, $b, "not nearly equal!")
    };
    ([$rel:expr, $abs:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let (a, b) = (&$a, &$b);
        let tol = $crate::Tolerances { rel: $rel, abs: $abs };
        if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
            panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.rel, tol.abs, a, b, e,
            );
        }
    }};
}

/// `true` if `a` and `b` agree to within either tolerance.
///
/// Follows Python's `math.isclose`; infinities only compare equal to themselves, and NaN is
/// never close to anything.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { rel, abs }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    if a == b { return true; }
    if a.is_infinite() || b.is_infinite() { return false; }
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub rel: f64,
    pub abs: f64,
}

#[derive(Debug, Error)]
pub enum CheckCloseError {
    #[error("values differ: {left} vs {right}")]
    Value { left: f64, right: f64 },

    #[error("lengths differ: {left} vs {right}")]
    Length { left: usize, right: usize },

    #[error("keys differ: {left} vs {right}")]
    Keys { left: String, right: String },

    #[error("at {at}: {inner}")]
    Within { at: String, inner: Box<CheckCloseError> },
}

impl CheckCloseError {
    fn within(self, at: impl fmt::Display) -> Self
    { CheckCloseError::Within { at: at.to_string(), inner: Box::new(self) } }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError::Value { left: *self, right: *other }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (**self).check_close(*other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.len() != other.len() {
            return Err(CheckCloseError::Length { left: self.len(), right: other.len() });
        }
        for (index, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.within(format_args!("index {}", index)))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

/// Maps are close when they have identical keys and close values.
impl<K: Ord + fmt::Debug, V: CheckClose> CheckClose for BTreeMap<K, V> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        if !self.keys().eq(other.keys()) {
            return Err(CheckCloseError::Keys {
                left: format!("{:?}", self.keys().collect::<Vec<_>>()),
                right: format!("{:?}", other.keys().collect::<Vec<_>>()),
            });
        }
        for ((key, a), b) in self.iter().zip(other.values()) {
            a.check_close(b, tol).map_err(|e| e.within(format_args!("key {:?}", key)))?;
        }
        Ok(())
    }
}
