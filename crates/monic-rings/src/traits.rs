//! Algebraic structure traits.
//!
//! This module defines the capabilities a coefficient type must provide
//! before it can be used inside a `Polynomial`.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
///
/// Negation is not required as a separate operation; it is derived by
/// subtracting from `zero()`. Equality is `PartialEq` so that floating
/// point types qualify.
pub trait Ring:
    Clone + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// The additive inverse of `one()`.
    fn neg_one() -> Self {
        Self::zero() - Self::one()
    }

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Returns true if this equals `-1`.
    fn is_neg_one(&self) -> bool {
        *self == Self::neg_one()
    }
}

/// A ring with a (possibly partial) order compatible with its sign.
pub trait OrderedRing: Ring + PartialOrd {
    /// Returns true if this is strictly greater than zero.
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// Returns true if this is strictly less than zero.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

/// Everything a polynomial coefficient needs.
///
/// Division is whatever the type provides: truncating for the primitive
/// integers, exact for `Q` and the floats.
pub trait Coefficient: OrderedRing + Div<Output = Self> + Display {}

impl<T> Coefficient for T where T: OrderedRing + Div<Output = T> + Display {}
