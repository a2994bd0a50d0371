//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order and are never
//! normalized on the caller's behalf: arithmetic may leave trailing zeros
//! behind. Every operation goes through [`Polynomial::degree`], which
//! rescans the storage each time, so cancellation is always observed.

use std::fmt;

use monic_rings::traits::{Coefficient, Ring};

use crate::algorithms::{compose, division, gcd};
use crate::error::Result;

/// A dense univariate polynomial.
///
/// `coeffs[i]` is the coefficient of `x^i`. Two read models are offered:
/// the raw storage ([`iter`](Self::iter), [`raw_coefficients`](Self::raw_coefficients)),
/// which may include trailing zeros, and the effective view
/// ([`coefficients`](Self::coefficients), [`coefficient_at`](Self::coefficient_at)),
/// which stops at the effective degree.
#[derive(Clone, Debug)]
pub struct Polynomial<T: Ring> {
    /// Coefficients in ascending degree order, possibly zero-padded.
    coeffs: Vec<T>,
}

impl<T: Ring> Polynomial<T> {
    /// Creates a polynomial from coefficients, index = power.
    ///
    /// The sequence is stored as given, trailing zeros included.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    /// Creates a polynomial by copying every element of `iter`.
    #[must_use]
    pub fn from_range<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            coeffs: iter.into_iter().collect(),
        }
    }

    /// Creates a constant polynomial holding a single coefficient.
    ///
    /// A zero constant yields the zero polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(T::zero())
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![T::zero(), T::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Returns the effective degree, or `-1` for the zero polynomial.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn degree(&self) -> isize {
        // Vec lengths never exceed isize::MAX.
        self.degree_usize().map_or(-1, |d| d as isize)
    }

    /// Returns the effective degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree_usize(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Returns true if every stored coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.degree_usize().is_none()
    }

    /// Returns the coefficient of x^i.
    ///
    /// Indices past the effective degree yield zero.
    #[must_use]
    pub fn coefficient_at(&self, i: usize) -> T {
        match self.degree_usize() {
            Some(d) if i <= d => self.coeffs[i].clone(),
            _ => T::zero(),
        }
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coefficient(&self) -> Option<T> {
        self.degree_usize().map(|d| self.coeffs[d].clone())
    }

    /// Returns the coefficients up to the effective degree.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        let len = self.degree_usize().map_or(0, |d| d + 1);
        &self.coeffs[..len]
    }

    /// Returns the stored coefficients, trailing zeros included.
    #[must_use]
    pub fn raw_coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns mutable access to the stored coefficients.
    pub fn coefficients_mut(&mut self) -> &mut Vec<T> {
        &mut self.coeffs
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.coeffs.len()
    }

    /// Iterates over the stored coefficients from x^0 upward.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Consumes the polynomial and returns its storage.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }

    /// Returns a copy with trailing zeros dropped.
    ///
    /// The zero polynomial keeps a single stored zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        match self.degree_usize() {
            Some(d) => Self::new(self.coeffs[..=d].to_vec()),
            None => Self::zero(),
        }
    }

    /// Length the storage must reach to hold both operands' support.
    fn support_len(&self, other: &Self) -> usize {
        let a = self.degree_usize().map_or(0, |d| d + 1);
        let b = other.degree_usize().map_or(0, |d| d + 1);
        a.max(b)
    }

    /// Adds `other` into `self`.
    pub fn add_assign(&mut self, other: &Self) {
        self.coeffs.resize(self.support_len(other), T::zero());
        for (i, c) in other.coefficients().iter().enumerate() {
            self.coeffs[i] = self.coeffs[i].clone() + c.clone();
        }
    }

    /// Subtracts `other` from `self`.
    ///
    /// Only the positions up to `other`'s degree are touched; the rest of
    /// the resized storage is left as it was.
    pub fn sub_assign(&mut self, other: &Self) {
        self.coeffs.resize(self.support_len(other), T::zero());
        for (i, c) in other.coefficients().iter().enumerate() {
            self.coeffs[i] = self.coeffs[i].clone() - c.clone();
        }
    }

    /// Multiplies `self` by `other` in place.
    pub fn mul_assign(&mut self, other: &Self) {
        *self = self.multiply(other);
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add_assign(other);
        result
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.sub_assign(other);
        result
    }

    /// Negates a polynomial by subtracting it from zero.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::zero().subtract(self)
    }

    /// Multiplies two polynomials by schoolbook convolution: O(n·m).
    ///
    /// The result stores `degree(a) + degree(b) + 1` coefficients, clamped
    /// at zero, so a zero operand yields an all-zero product.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let len = usize::try_from(self.degree() + other.degree() + 1).unwrap_or(0);
        let mut result = vec![T::zero(); len];

        for (i, a) in self.coefficients().iter().enumerate() {
            for (j, b) in other.coefficients().iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        Self::new(self.coefficients().iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Sums `c[i] * x^i` while accumulating the running power, rather than
    /// using Horner's scheme.
    #[must_use]
    pub fn evaluate(&self, x: &T) -> T {
        let mut result = T::zero();
        let mut power = T::one();
        for c in self.coefficients() {
            result = result + power.clone() * c.clone();
            power = power * x.clone();
        }
        result
    }

    /// Substitutes `inner` for x: returns `self(inner(x))`.
    #[must_use]
    pub fn compose_with(&self, inner: &Self) -> Self {
        compose::compose(self, inner)
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Euclidean quotient. Division by the zero polynomial yields zero.
    #[must_use]
    pub fn divide(&self, divisor: &Self) -> Self {
        division::divide(self, divisor)
    }

    /// Euclidean remainder: `self - (self / divisor) * divisor`.
    #[must_use]
    pub fn remainder(&self, divisor: &Self) -> Self {
        division::remainder(self, divisor)
    }

    /// Returns quotient and remainder together.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        division::div_rem(self, divisor)
    }

    /// Euclidean quotient that rejects a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`](crate::PolyError::DivisionByZero)
    /// if `divisor` is the zero polynomial.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        division::checked_div(self, divisor)
    }

    /// Euclidean remainder that rejects a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`](crate::PolyError::DivisionByZero)
    /// if `divisor` is the zero polynomial.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        division::checked_rem(self, divisor)
    }

    /// Monic greatest common divisor of `self` and `other`.
    #[must_use]
    pub fn gcd_monic(&self, other: &Self) -> Self {
        gcd::gcd_monic(self, other)
    }

    /// Divides through by the leading coefficient.
    #[must_use]
    pub fn monic(&self) -> Self {
        gcd::make_monic(self)
    }

    /// Renders the polynomial as a string, see the `Display` impl.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl<T: Ring> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Polynomials are equal when their effective coefficients match;
/// zero padding is ignored.
impl<T: Ring> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients() == other.coefficients()
    }
}

impl<T: Ring + Eq> Eq for Polynomial<T> {}

impl<T: Ring> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Ring> From<T> for Polynomial<T> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

impl<T: Ring> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_range(iter)
    }
}

impl<'a, T: Ring> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

/// Terms are written from the highest power down, e.g. `3*x^2-x+1`.
///
/// Unit coefficients are elided except on the constant term, positive
/// coefficients after the first term get a `+`, and negative ones carry
/// the sign of their own `Display` output. The zero polynomial is `0`.
impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(degree) = self.degree_usize() else {
            return write!(f, "{}", T::zero());
        };

        let mut plus = false;
        for i in (0..=degree).rev() {
            let c = &self.coeffs[i];
            if c.is_zero() {
                continue;
            }

            if c.is_neg_one() {
                if i == 0 {
                    write!(f, "-1")?;
                } else {
                    write!(f, "-")?;
                }
            } else if c.is_one() {
                if plus {
                    write!(f, "+")?;
                }
                if i == 0 {
                    write!(f, "1")?;
                }
            } else {
                if plus && c.is_positive() {
                    write!(f, "+")?;
                }
                write!(f, "{c}")?;
                if i != 0 {
                    write!(f, "*")?;
                }
            }

            if i != 0 {
                write!(f, "x")?;
            }
            if i > 1 {
                write!(f, "^{i}")?;
            }
            plus = true;
        }

        Ok(())
    }
}
