//! Monic polynomial GCD.
//!
//! The GCD is found with the Euclidean algorithm and then normalized so
//! its leading coefficient is one. Over a field such as `Q` the result is
//! the usual monic GCD; over truncating integer coefficients it is only
//! meaningful when the intermediate divisions happen to be exact.

use monic_rings::traits::Coefficient;
use tracing::{debug, trace};

use crate::algorithms::division::{divide, remainder};
use crate::dense::Polynomial;

/// Computes the monic GCD of `a` and `b`.
///
/// The pair `(a, b)` is repeatedly replaced by `(b % a, a)` until the
/// first entry is zero; the second is then made monic. If both inputs are
/// zero the zero polynomial is returned.
///
/// A remainder whose degree fails to drop below its divisor's can only
/// come from inexact coefficient division. The reduction stops there and
/// the current divisor is taken as the result.
#[must_use]
pub fn gcd_monic<T: Coefficient>(a: &Polynomial<T>, b: &Polynomial<T>) -> Polynomial<T> {
    let mut p1 = a.clone();
    let mut p2 = b.clone();

    while let Some(d1) = p1.degree_usize() {
        let r = remainder(&p2, &p1);
        trace!(divisor_degree = d1, remainder_degree = r.degree(), "euclidean step");

        if r.degree_usize().is_some_and(|dr| dr >= d1) {
            debug!(degree = d1, "remainder did not shrink, stopping reduction");
            return make_monic(&p1);
        }

        p2 = std::mem::replace(&mut p1, r);
    }

    make_monic(&p2)
}

/// Divides `p` by its leading coefficient.
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn make_monic<T: Coefficient>(p: &Polynomial<T>) -> Polynomial<T> {
    match p.leading_coefficient() {
        Some(lead) if lead.is_one() => p.clone(),
        Some(lead) => divide(p, &Polynomial::constant(lead)),
        None => p.clone(),
    }
}
