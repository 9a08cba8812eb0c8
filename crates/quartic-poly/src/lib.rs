//! # quartic-poly
//!
//! Exact univariate polynomial arithmetic for Quartic.
//!
//! This crate provides:
//! - Dense polynomials backed by a coefficient vector indexed by exponent
//! - Sparse polynomials backed by a sorted list of nonzero terms, which may
//!   carry negative exponents
//! - A shared [`Polynomial`] contract and the [`Poly`] closed enum bridging
//!   the two representations
//!
//! ## Representation Selection
//!
//! Dense storage is optimal when exponents are small and contiguous; sparse
//! storage is optimal when exponents are large, widely spaced, or negative
//! (e.g. `x^-100`). Mixed-representation addition always yields a sparse
//! result, since dense storage cannot hold negative exponents.
//!
//! All values are immutable: every operation takes its operands by reference
//! and allocates a fresh result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod poly;
pub mod sparse;
pub mod term;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use poly::{DenseConversionError, Poly, Polynomial};
pub use sparse::SparsePoly;
pub use term::Term;
