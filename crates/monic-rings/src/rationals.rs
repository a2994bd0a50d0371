//! The field of rational numbers Q.

use num_rational::Rational64;
use num_traits::{One, Signed, Zero};

use crate::traits::{OrderedRing, Ring};

/// The field of rational numbers.
///
/// This is a wrapper around `num_rational::Rational64` that implements
/// the coefficient traits. Values are kept in lowest terms with a
/// positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Q(pub Rational64);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational64::new(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational64::from_integer(n))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the inner rational.
    #[must_use]
    pub fn into_inner(self) -> Rational64 {
        self.0
    }
}

impl Default for Q {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational64::zero())
    }

    fn one() -> Self {
        Self(Rational64::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl OrderedRing for Q {
    fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

/// # Panics
///
/// Panics when dividing by zero.
impl std::ops::Div for Q {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational64> for Q {
    fn from(value: Rational64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
