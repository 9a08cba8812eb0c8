//! Single polynomial terms.

use num_traits::One;
use quartic_integers::Integer;
use std::fmt;

/// A single term of a polynomial: a coefficient paired with an exponent.
///
/// In `2x^3` the coefficient is 2 and the exponent is 3. Exponents may be
/// negative. Terms are immutable once constructed and compare structurally
/// on both fields.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    coeff: Integer,
    exp: i64,
}

impl Term {
    /// Creates a term from a coefficient and an exponent.
    #[must_use]
    pub fn new(coeff: Integer, exp: i64) -> Self {
        Self { coeff, exp }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &Integer {
        &self.coeff
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exp
    }
}

/// Canonical term rendering.
///
/// - exponent 0 renders the coefficient alone
/// - exponent 1 renders `{coeff}x`, including `1x`
/// - coefficient 1 with any other exponent renders `x^{exp}`
/// - everything else renders `{coeff}x^{exp}`
///
/// Coefficient -1 renders as `-1x^{exp}`, not `-x^{exp}`. The quirk is part
/// of the canonical string grammar and is asserted by tests.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exp == 0 {
            write!(f, "{}", self.coeff)
        } else if self.exp == 1 {
            write!(f, "{}x", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "x^{}", self.exp)
        } else {
            write!(f, "{}x^{}", self.coeff, self.exp)
        }
    }
}
