//! Polynomial algorithms.
//!
//! This module contains the operations built on top of ring arithmetic:
//! - Euclidean division and remainder
//! - Composition
//! - Monic GCD

pub mod compose;
pub mod division;
pub mod gcd;

pub use compose::compose;
pub use division::{checked_div, checked_div_rem, checked_rem, div_rem, divide, remainder};
pub use gcd::{gcd_monic, make_monic};
