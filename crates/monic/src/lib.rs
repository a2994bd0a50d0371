//! # monic
//!
//! Dense univariate polynomials over a generic coefficient ring.
//!
//! ## Features
//!
//! - **Generic Coefficients**: primitive integers, floats, exact rationals
//! - **Ring Arithmetic**: addition, subtraction, schoolbook multiplication
//! - **Euclidean Division**: quotient, remainder, checked variants
//! - **Composition and GCD**: `p(q(x))` and monic GCDs
//!
//! ## Quick Start
//!
//! ```rust
//! use monic::prelude::*;
//!
//! let p = Polynomial::new(vec![1i64, 0, 1]); // x^2 + 1
//! let d = Polynomial::new(vec![1i64, 1]); // x + 1
//!
//! assert_eq!((&p / &d).to_string(), "x-1");
//! assert_eq!((&p % &d).to_string(), "2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use monic_poly as poly;
pub use monic_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use monic_poly::{PolyError, Polynomial};
    pub use monic_rings::{Coefficient, OrderedRing, Ring, Q};
}
