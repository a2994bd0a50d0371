//! # monic-rings
//!
//! Coefficient rings for `monic` polynomials.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `OrderedRing`, `Coefficient`
//! - Implementations for the primitive signed integers and floats
//! - Exact rationals `Q`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── OrderedRing
//!       └── Coefficient (+ Div + Display)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod floats;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use rationals::Q;
pub use traits::{Coefficient, OrderedRing, Ring};
