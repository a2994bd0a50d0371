//! # monic-poly
//!
//! Dense univariate polynomial arithmetic over a generic coefficient type.
//!
//! This crate provides:
//! - `Polynomial<T>`, a dense coefficient vector with on-demand degree
//! - Addition, subtraction, schoolbook multiplication and evaluation
//! - Euclidean division and remainder
//! - Composition `p(q(x))`
//! - A monic GCD via the Euclidean algorithm
//!
//! ## Zero divisors
//!
//! Dividing by the zero polynomial does not fail: the quotient is the zero
//! polynomial and the remainder is the dividend. This is surprising, so
//! `checked_div` and `checked_rem` are offered for callers that want a
//! [`PolyError::DivisionByZero`] instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;
pub mod ops;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use error::{PolyError, Result};
