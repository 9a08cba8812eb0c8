//! Sparse univariate polynomials.
//!
//! The sparse representation stores only the nonzero terms, sorted by
//! ascending exponent. It is the right choice when the support is wide or
//! the exponents are negative: `x^-100` is a single term here, and not
//! representable densely at all.

use num_traits::Zero;
use quartic_integers::Integer;
use std::cmp::Ordering;
use std::fmt;

use crate::dense::DensePoly;
use crate::term::Term;

/// A sparse univariate polynomial with exact integer coefficients.
///
/// Canonical form:
/// - terms are sorted strictly ascending by exponent
/// - no two terms share an exponent
/// - no term has a zero coefficient
/// - the empty term list is the zero polynomial
///
/// Instances are immutable; every operation returns a fresh polynomial.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SparsePoly {
    /// Nonzero terms in ascending exponent order.
    terms: Vec<Term>,
}

impl SparsePoly {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the single-term polynomial `coeff * x^exponent`.
    ///
    /// A zero coefficient yields the zero polynomial. The exponent may be
    /// negative.
    #[must_use]
    pub fn monomial(coeff: Integer, exponent: i64) -> Self {
        if coeff.is_zero() {
            return Self::zero();
        }

        let poly = Self {
            terms: vec![Term::new(coeff, exponent)],
        };
        debug_assert!(poly.is_well_formed());
        poly
    }

    /// Creates a polynomial from an arbitrary collection of terms.
    ///
    /// Terms are sorted by exponent, like exponents are combined, and terms
    /// whose coefficient is (or sums to) zero are dropped, so the result is
    /// always canonical.
    #[must_use]
    pub fn from_terms(mut terms: Vec<Term>) -> Self {
        terms.sort_by_key(Term::exponent);

        let mut combined: Vec<Term> = Vec::with_capacity(terms.len());
        for term in terms {
            if let Some(last) = combined.last() {
                if last.exponent() == term.exponent() {
                    let sum = last.coefficient() + term.coefficient();
                    combined.pop();
                    if !sum.is_zero() {
                        combined.push(Term::new(sum, term.exponent()));
                    }
                    continue;
                }
            }
            if !term.coefficient().is_zero() {
                combined.push(term);
            }
        }

        let poly = Self { terms: combined };
        debug_assert!(poly.is_well_formed());
        poly
    }

    /// Returns an iterator over the terms from lowest to highest exponent.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Returns the terms in ascending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the lowest exponent with a nonzero coefficient, or 0 for the
    /// zero polynomial.
    #[must_use]
    pub fn min_exponent(&self) -> i64 {
        self.terms.first().map_or(0, Term::exponent)
    }

    /// Returns the highest exponent with a nonzero coefficient, or 0 for the
    /// zero polynomial.
    #[must_use]
    pub fn max_exponent(&self) -> i64 {
        self.terms.last().map_or(0, Term::exponent)
    }

    /// Returns the coefficient of `x^exp`, or 0 if no term exists there.
    #[must_use]
    pub fn coeff(&self, exp: i64) -> Integer {
        match self.terms.binary_search_by_key(&exp, Term::exponent) {
            Ok(i) => self.terms[i].coefficient().clone(),
            Err(_) => Integer::zero(),
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Checks the canonical-form invariant: strictly ascending exponents and
    /// no zero coefficients.
    ///
    /// A violation indicates a bug in this crate, not a caller error; the
    /// arithmetic operations check it with `debug_assert!`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.terms.iter().all(|t| !t.coefficient().is_zero())
            && self
                .terms
                .windows(2)
                .all(|w| w[0].exponent() < w[1].exponent())
    }

    /// Adds another sparse polynomial by merging the two term lists.
    ///
    /// Classic ordered merge: equal exponents sum their coefficients (a zero
    /// sum drops the term entirely), otherwise the smaller exponent is
    /// emitted unchanged. Once one side is exhausted the other's remaining
    /// terms are appended verbatim. Terms are emitted in ascending order
    /// throughout, so no sort pass is needed afterwards.
    #[must_use]
    pub fn add_sparse(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }

        let mut merged = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();

        loop {
            match (lhs.peek(), rhs.peek()) {
                (Some(a), Some(b)) => match a.exponent().cmp(&b.exponent()) {
                    Ordering::Equal => {
                        let sum = a.coefficient() + b.coefficient();
                        if !sum.is_zero() {
                            merged.push(Term::new(sum, a.exponent()));
                        }
                        lhs.next();
                        rhs.next();
                    }
                    Ordering::Less => {
                        merged.push((*a).clone());
                        lhs.next();
                    }
                    Ordering::Greater => {
                        merged.push((*b).clone());
                        rhs.next();
                    }
                },
                // the leftover terms cannot collide with anything already
                // emitted, so they are appended as-is
                (Some(_), None) => {
                    merged.extend(lhs.cloned());
                    break;
                }
                (None, Some(_)) => {
                    merged.extend(rhs.cloned());
                    break;
                }
                (None, None) => break,
            }
        }

        let sum = Self { terms: merged };
        debug_assert!(sum.is_well_formed());
        sum
    }

    /// Adds a dense polynomial, producing a sparse result.
    ///
    /// Every exponent in the dense operand's `[min_exponent, max_exponent]`
    /// range is folded in as a single-term polynomial. This is O(range)
    /// rather than O(terms), a cost inherent to crossing representations;
    /// acceptable for correctness, not chosen for speed.
    #[must_use]
    pub fn add_dense(&self, other: &DensePoly) -> Self {
        let mut sum = self.clone();
        for exp in other.min_exponent()..=other.max_exponent() {
            sum = sum.add_sparse(&Self::monomial(other.coeff(exp), exp));
        }

        debug_assert!(sum.is_well_formed());
        sum
    }

    /// Multiplies every term's coefficient by a scalar.
    ///
    /// Scaling the zero polynomial, or scaling by zero, yields the zero
    /// polynomial. A nonzero integer factor cannot zero out a coefficient,
    /// so the no-zero-term invariant holds without filtering.
    #[must_use]
    pub fn scale(&self, factor: &Integer) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        if factor.is_zero() {
            return Self::zero();
        }

        let scaled = Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.coefficient() * factor, t.exponent()))
                .collect(),
        };
        debug_assert!(scaled.is_well_formed());
        scaled
    }
}

impl<'a> IntoIterator for &'a SparsePoly {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SparsePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        // highest exponent first
        let rendered: Vec<String> = self.terms.iter().rev().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" + "))
    }
}
