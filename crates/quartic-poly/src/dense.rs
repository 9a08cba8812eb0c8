//! Dense univariate polynomials.
//!
//! The dense representation indexes coefficients directly by exponent. It is
//! the right choice for low-degree polynomials with contiguous support; it
//! cannot represent negative exponents.

use num_traits::Zero;
use quartic_integers::Integer;
use std::fmt;

use crate::sparse::SparsePoly;
use crate::term::Term;

/// A dense univariate polynomial with exact integer coefficients.
///
/// `coeffs[i]` holds the coefficient of `x^i`. Canonical form:
/// - the zero polynomial is the empty vector
/// - otherwise the last coefficient is nonzero (no trailing zero padding)
///
/// Instances are immutable; every operation returns a fresh polynomial.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DensePoly {
    /// Coefficients in ascending exponent order.
    coeffs: Vec<Integer>,
}

impl DensePoly {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the single-term polynomial `coeff * x^exponent`.
    ///
    /// A zero coefficient yields the zero polynomial regardless of the
    /// exponent. Negative exponents are not representable in dense form,
    /// which the `usize` parameter makes structural.
    #[must_use]
    pub fn monomial(coeff: Integer, exponent: usize) -> Self {
        if coeff.is_zero() {
            return Self::zero();
        }

        let mut coeffs = vec![Integer::zero(); exponent + 1];
        coeffs[exponent] = coeff;
        let poly = Self { coeffs };
        debug_assert!(poly.is_well_formed());
        poly
    }

    /// Creates a polynomial from coefficients in ascending exponent order.
    ///
    /// Trailing zeros are stripped, so the result is always canonical; an
    /// all-zero vector collapses to the zero polynomial.
    #[must_use]
    pub fn from_coeffs(mut coeffs: Vec<Integer>) -> Self {
        while coeffs.last().map_or(false, Integer::is_zero) {
            coeffs.pop();
        }
        let poly = Self { coeffs };
        debug_assert!(poly.is_well_formed());
        poly
    }

    /// Returns the lowest exponent with a nonzero coefficient, or 0 for the
    /// zero polynomial.
    #[must_use]
    pub fn min_exponent(&self) -> i64 {
        self.coeffs
            .iter()
            .position(|c| !c.is_zero())
            .map_or(0, |i| i as i64)
    }

    /// Returns the highest exponent with a nonzero coefficient, or 0 for the
    /// zero polynomial.
    #[must_use]
    pub fn max_exponent(&self) -> i64 {
        if self.coeffs.is_empty() {
            0
        } else {
            (self.coeffs.len() - 1) as i64
        }
    }

    /// Returns the coefficient of `x^exp`.
    ///
    /// Total over all of `i64`: exponents outside the stored range, negative
    /// ones included, yield 0.
    #[must_use]
    pub fn coeff(&self, exp: i64) -> Integer {
        usize::try_from(exp)
            .ok()
            .and_then(|i| self.coeffs.get(i))
            .cloned()
            .unwrap_or_else(Integer::zero)
    }

    /// Returns all stored coefficients in ascending exponent order.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Checks the canonical-form invariant: empty storage, or a nonzero
    /// final coefficient.
    ///
    /// A violation indicates a bug in this crate, not a caller error; the
    /// arithmetic operations check it with `debug_assert!`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.coeffs.last().map_or(true, |c| !c.is_zero())
    }

    /// Adds another dense polynomial.
    ///
    /// Coefficients are summed pointwise into a buffer of the longer length,
    /// then trailing zeros left by cancellation are truncated so the result
    /// is canonical (`2x + -2x` collapses to the zero polynomial).
    #[must_use]
    pub fn add_dense(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }

        let len = self.coeffs.len().max(other.coeffs.len());
        let mut sums = Vec::with_capacity(len);
        for i in 0..len {
            sums.push(self.coeff(i as i64) + other.coeff(i as i64));
        }

        let sum = Self::from_coeffs(sums);
        debug_assert!(sum.is_well_formed());
        sum
    }

    /// Adds a sparse polynomial, producing a sparse result.
    ///
    /// Each nonzero dense term is folded into the sparse operand one at a
    /// time. The result is sparse because the sparse operand may carry
    /// negative exponents that dense storage cannot hold.
    #[must_use]
    pub fn add_sparse(&self, other: &SparsePoly) -> SparsePoly {
        let mut sum = other.clone();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            sum = sum.add_sparse(&SparsePoly::monomial(c.clone(), i as i64));
        }

        debug_assert!(sum.is_well_formed());
        sum
    }

    /// Multiplies every coefficient by a scalar.
    ///
    /// Scaling the zero polynomial, or scaling by zero, yields the zero
    /// polynomial. Over the integers a nonzero factor cannot zero out a
    /// coefficient, so canonical form is preserved without re-truncation.
    #[must_use]
    pub fn scale(&self, factor: &Integer) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        if factor.is_zero() {
            return Self::zero();
        }

        let scaled = Self {
            coeffs: self.coeffs.iter().map(|c| c * factor).collect(),
        };
        debug_assert!(scaled.is_well_formed());
        scaled
    }
}

impl fmt::Display for DensePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        // Highest exponent first; zero coefficients are skipped. Rendering
        // goes through Term so dense and sparse emit identical text for the
        // same polynomial.
        let rendered: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| Term::new(c.clone(), i as i64).to_string())
            .collect();

        write!(f, "{}", rendered.join(" + "))
    }
}
