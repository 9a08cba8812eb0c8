//! # Quartic
//!
//! Exact univariate polynomial arithmetic over the integers, with dense and
//! sparse representations behind one contract.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: arbitrary precision integer coefficients
//! - **Dual Representation**: dense coefficient vectors for contiguous
//!   low-degree polynomials, sparse term lists for wide or negative
//!   exponent support
//! - **One Contract**: addition, scalar multiplication, subtraction,
//!   negation, equality and canonical rendering work uniformly across
//!   representations
//! - **Immutable Values**: operations never mutate their operands
//!
//! ## Quick Start
//!
//! ```rust
//! use quartic::prelude::*;
//!
//! let one = Poly::Dense(DensePoly::monomial(Integer::new(1), 0));
//! let tiny = Poly::Sparse(SparsePoly::monomial(Integer::new(1), -100));
//! assert_eq!(one.add(&tiny).to_string(), "1 + x^-100");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quartic_integers as integers;
pub use quartic_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quartic_integers::Integer;
    pub use quartic_poly::{DenseConversionError, DensePoly, Poly, Polynomial, SparsePoly, Term};
}
