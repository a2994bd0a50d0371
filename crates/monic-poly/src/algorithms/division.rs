//! Euclidean division of polynomials.
//!
//! Long division divides leading coefficients with the coefficient type's
//! own `/`. Over the integers that division truncates, so the quotient is
//! exact only when every leading coefficient divides evenly.

use monic_rings::traits::Coefficient;
use tracing::{debug, trace};

use crate::dense::Polynomial;
use crate::error::{PolyError, Result};

/// Computes the quotient of `dividend` by `divisor`.
///
/// A zero divisor yields the zero polynomial rather than an error; use
/// [`checked_div`] to have it rejected.
#[must_use]
pub fn divide<T: Coefficient>(dividend: &Polynomial<T>, divisor: &Polynomial<T>) -> Polynomial<T> {
    if let Some(d) = divisor.degree_usize() {
        long_divide(dividend, divisor, d)
    } else {
        debug!("division by the zero polynomial, returning zero");
        Polynomial::zero()
    }
}

/// Computes `dividend - (dividend / divisor) * divisor`.
///
/// With a zero divisor the remainder is the dividend itself.
#[must_use]
pub fn remainder<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> Polynomial<T> {
    div_rem(dividend, divisor).1
}

/// Computes quotient and remainder together.
#[must_use]
pub fn div_rem<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> (Polynomial<T>, Polynomial<T>) {
    let quotient = divide(dividend, divisor);
    let remainder = dividend.subtract(&quotient.multiply(divisor));
    (quotient, remainder)
}

/// Like [`divide`], but rejects a zero divisor.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `divisor` is the zero polynomial.
pub fn checked_div<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> Result<Polynomial<T>> {
    if divisor.is_zero() {
        return Err(PolyError::DivisionByZero);
    }
    Ok(divide(dividend, divisor))
}

/// Like [`remainder`], but rejects a zero divisor.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `divisor` is the zero polynomial.
pub fn checked_rem<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> Result<Polynomial<T>> {
    checked_div_rem(dividend, divisor).map(|(_, r)| r)
}

/// Like [`div_rem`], but rejects a zero divisor.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `divisor` is the zero polynomial.
pub fn checked_div_rem<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
) -> Result<(Polynomial<T>, Polynomial<T>)> {
    if divisor.is_zero() {
        return Err(PolyError::DivisionByZero);
    }
    Ok(div_rem(dividend, divisor))
}

/// Schoolbook long division by a divisor of degree `divisor_degree`.
fn long_divide<T: Coefficient>(
    dividend: &Polynomial<T>,
    divisor: &Polynomial<T>,
    divisor_degree: usize,
) -> Polynomial<T> {
    let lead = divisor.coefficient_at(divisor_degree);
    let len = dividend
        .degree_usize()
        .map_or(0, |d| (d + 1).saturating_sub(divisor_degree));
    let mut quotient = vec![T::zero(); len];
    let mut rest = dividend.clone();

    while let Some(top) = rest.degree_usize().filter(|&top| top >= divisor_degree) {
        let shift = top - divisor_degree;
        let term = rest.coefficient_at(top) / lead.clone();
        trace!(degree = top, shift, term = %term, "long division step");

        quotient[shift] = term.clone();
        rest.sub_assign(&Polynomial::monomial(term, shift).multiply(divisor));

        // Truncating or inexact coefficient division can leave the leading
        // term in place; drop it so the loop always makes progress.
        if !rest.coefficient_at(top).is_zero() {
            trace!(degree = top, "leading term not eliminated, discarding");
            rest.coefficients_mut()[top] = T::zero();
        }
    }

    Polynomial::new(quotient)
}
