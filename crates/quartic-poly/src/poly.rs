//! The representation-polymorphic polynomial contract.
//!
//! [`Polynomial`] is the capability set both representations implement;
//! [`Poly`] is the closed union of the two. Dispatch on representation kind
//! happens only here, at the addition and equality seams, never inside the
//! representations themselves.

use num_traits::{One, Zero};
use quartic_integers::Integer;
use std::fmt;
use thiserror::Error;

use crate::dense::DensePoly;
use crate::sparse::SparsePoly;
use crate::term::Term;

/// The operations every polynomial representation supports.
///
/// Subtraction and negation are provided methods derived from addition and
/// scalar multiplication, so both representations inherit them without
/// duplicating any logic.
pub trait Polynomial: fmt::Display {
    /// Returns the lowest exponent with a nonzero coefficient; 0 for the
    /// zero polynomial by convention.
    fn min_exponent(&self) -> i64;

    /// Returns the highest exponent with a nonzero coefficient; 0 for the
    /// zero polynomial by convention.
    fn max_exponent(&self) -> i64;

    /// Returns the coefficient of `x^exp`, or 0 if no term exists there.
    /// Total over all of `i64`; never fails.
    fn coeff(&self, exp: i64) -> Integer;

    /// Returns true if this is the zero polynomial.
    fn is_zero(&self) -> bool;

    /// Checks the representation's canonical-form invariant.
    fn is_well_formed(&self) -> bool;

    /// Returns the sum of this polynomial and `other`. Neither operand is
    /// changed. Adding across representations yields a sparse result.
    fn add(&self, other: &Poly) -> Poly;

    /// Returns this polynomial with every coefficient multiplied by
    /// `factor`. The operand is not changed.
    fn scale(&self, factor: &Integer) -> Poly;

    /// Returns the difference of this polynomial and `other`, derived as
    /// `self + (-1) * other`.
    fn sub(&self, other: &Poly) -> Poly {
        self.add(&other.scale(&-Integer::one()))
    }

    /// Returns the additive inverse, derived as `(-1) * self`.
    fn neg(&self) -> Poly {
        self.scale(&-Integer::one())
    }
}

/// A polynomial in either representation.
///
/// The set of representations is closed: cross-representation arithmetic
/// and equality match on exactly these two cases.
#[derive(Clone, Debug)]
pub enum Poly {
    /// Dense representation: coefficient vector indexed by exponent.
    Dense(DensePoly),
    /// Sparse representation: sorted list of nonzero terms.
    Sparse(SparsePoly),
}

/// Failure to convert a polynomial into dense form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DenseConversionError {
    /// The polynomial carries a term below `x^0`.
    #[error("exponent {0} is not representable in dense storage")]
    NegativeExponent(i64),
}

impl Polynomial for DensePoly {
    fn min_exponent(&self) -> i64 {
        DensePoly::min_exponent(self)
    }

    fn max_exponent(&self) -> i64 {
        DensePoly::max_exponent(self)
    }

    fn coeff(&self, exp: i64) -> Integer {
        DensePoly::coeff(self, exp)
    }

    fn is_zero(&self) -> bool {
        DensePoly::is_zero(self)
    }

    fn is_well_formed(&self) -> bool {
        DensePoly::is_well_formed(self)
    }

    fn add(&self, other: &Poly) -> Poly {
        match other {
            Poly::Dense(q) => Poly::Dense(self.add_dense(q)),
            Poly::Sparse(q) => Poly::Sparse(self.add_sparse(q)),
        }
    }

    fn scale(&self, factor: &Integer) -> Poly {
        Poly::Dense(DensePoly::scale(self, factor))
    }
}

impl Polynomial for SparsePoly {
    fn min_exponent(&self) -> i64 {
        SparsePoly::min_exponent(self)
    }

    fn max_exponent(&self) -> i64 {
        SparsePoly::max_exponent(self)
    }

    fn coeff(&self, exp: i64) -> Integer {
        SparsePoly::coeff(self, exp)
    }

    fn is_zero(&self) -> bool {
        SparsePoly::is_zero(self)
    }

    fn is_well_formed(&self) -> bool {
        SparsePoly::is_well_formed(self)
    }

    fn add(&self, other: &Poly) -> Poly {
        match other {
            Poly::Sparse(q) => Poly::Sparse(self.add_sparse(q)),
            Poly::Dense(q) => Poly::Sparse(self.add_dense(q)),
        }
    }

    fn scale(&self, factor: &Integer) -> Poly {
        Poly::Sparse(SparsePoly::scale(self, factor))
    }
}

impl Polynomial for Poly {
    fn min_exponent(&self) -> i64 {
        match self {
            Poly::Dense(p) => p.min_exponent(),
            Poly::Sparse(p) => p.min_exponent(),
        }
    }

    fn max_exponent(&self) -> i64 {
        match self {
            Poly::Dense(p) => p.max_exponent(),
            Poly::Sparse(p) => p.max_exponent(),
        }
    }

    fn coeff(&self, exp: i64) -> Integer {
        match self {
            Poly::Dense(p) => p.coeff(exp),
            Poly::Sparse(p) => p.coeff(exp),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Poly::Dense(p) => p.is_zero(),
            Poly::Sparse(p) => p.is_zero(),
        }
    }

    fn is_well_formed(&self) -> bool {
        match self {
            Poly::Dense(p) => p.is_well_formed(),
            Poly::Sparse(p) => p.is_well_formed(),
        }
    }

    fn add(&self, other: &Poly) -> Poly {
        match self {
            Poly::Dense(p) => Polynomial::add(p, other),
            Poly::Sparse(p) => Polynomial::add(p, other),
        }
    }

    fn scale(&self, factor: &Integer) -> Poly {
        match self {
            Poly::Dense(p) => Polynomial::scale(p, factor),
            Poly::Sparse(p) => Polynomial::scale(p, factor),
        }
    }
}

/// Semantic equality: two polynomials are equal iff they agree on every
/// coefficient at every exponent, regardless of representation.
///
/// Same-representation comparisons use the canonical storage directly;
/// cross-representation comparisons compare canonical renderings, which
/// both representations are contracted to emit identically.
impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Poly::Dense(p), Poly::Dense(q)) => p == q,
            (Poly::Sparse(p), Poly::Sparse(q)) => p == q,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for Poly {}

impl PartialEq<SparsePoly> for DensePoly {
    fn eq(&self, other: &SparsePoly) -> bool {
        self.to_string() == other.to_string()
    }
}

impl PartialEq<DensePoly> for SparsePoly {
    fn eq(&self, other: &DensePoly) -> bool {
        self.to_string() == other.to_string()
    }
}

impl From<DensePoly> for Poly {
    fn from(poly: DensePoly) -> Self {
        Poly::Dense(poly)
    }
}

impl From<SparsePoly> for Poly {
    fn from(poly: SparsePoly) -> Self {
        Poly::Sparse(poly)
    }
}

/// Dense to sparse conversion is total: every nonzero coefficient becomes a
/// term, already in ascending exponent order.
impl From<&DensePoly> for SparsePoly {
    fn from(poly: &DensePoly) -> Self {
        let terms = poly
            .coeffs()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| Term::new(c.clone(), i as i64))
            .collect();
        SparsePoly::from_terms(terms)
    }
}

/// Sparse to dense conversion fails if any term sits below `x^0`.
impl TryFrom<&SparsePoly> for DensePoly {
    type Error = DenseConversionError;

    fn try_from(poly: &SparsePoly) -> Result<Self, Self::Error> {
        if poly.is_zero() {
            return Ok(DensePoly::zero());
        }

        let min = poly.min_exponent();
        if min < 0 {
            return Err(DenseConversionError::NegativeExponent(min));
        }

        // every exponent is non-negative from here on
        let mut coeffs = vec![Integer::zero(); poly.max_exponent() as usize + 1];
        for term in poly {
            coeffs[term.exponent() as usize] = term.coefficient().clone();
        }
        Ok(DensePoly::from_coeffs(coeffs))
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly::Dense(p) => fmt::Display::fmt(p, f),
            Poly::Sparse(p) => fmt::Display::fmt(p, f),
        }
    }
}
