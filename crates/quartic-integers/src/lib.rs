//! # quartic-integers
//!
//! Exact signed integer arithmetic for Quartic.
//!
//! This crate provides the [`Integer`] coefficient type used throughout the
//! polynomial crates: a thin wrapper around `dashu::IBig` that implements
//! the `num_traits` identities and the arithmetic operators polynomial
//! algorithms need, for both owned values and references.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
