//! Arbitrary precision signed integers.

use dashu::base::{Abs, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An arbitrary precision signed integer.
///
/// Polynomial coefficients are exact: sums and scalar products never
/// overflow or round. The wrapper keeps the `dashu` dependency out of the
/// polynomial crates' public signatures.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates an integer from a machine word.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0 == IBig::ZERO {
            0
        } else if DashuSigned::is_negative(&self.0) {
            -1
        } else {
            1
        }
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Converts to an `i64` if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Consumes the wrapper and returns the inner `IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Borrows the inner `IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Integer::new(10);
        let b = Integer::new(-3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(7));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() * b.clone()).to_i64(), Some(-30));
        assert_eq!((-a).to_i64(), Some(-10));
        assert_eq!((&b + &b).to_i64(), Some(-6));
    }

    #[test]
    fn test_identities() {
        assert!(Integer::zero().is_zero());
        assert!(Integer::one().is_one());
        assert!(!Integer::new(2).is_one());
    }

    #[test]
    fn test_sign() {
        assert_eq!(Integer::new(-5).signum(), -1);
        assert_eq!(Integer::new(0).signum(), 0);
        assert_eq!(Integer::new(5).signum(), 1);
        assert!(Integer::new(-5).is_negative());
        assert_eq!(Integer::new(-5).abs(), Integer::new(5));
    }

    #[test]
    fn test_beyond_i64() {
        let big = Integer::new(i64::MAX) * Integer::new(2);
        assert_eq!(big.to_i64(), None);
        assert_eq!(big.to_string(), "18446744073709551614");
    }
}
