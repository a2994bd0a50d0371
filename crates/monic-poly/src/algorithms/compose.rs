//! Polynomial composition.

use monic_rings::traits::Ring;

use crate::dense::Polynomial;

/// Computes `outer(inner(x))`.
///
/// Each power of `inner` is rebuilt from scratch by repeated
/// multiplication, so the cost is O(deg(outer)² · deg(inner)) products.
#[must_use]
pub fn compose<T: Ring>(outer: &Polynomial<T>, inner: &Polynomial<T>) -> Polynomial<T> {
    let mut result = Polynomial::zero();

    for (i, c) in outer.coefficients().iter().enumerate() {
        let mut term = Polynomial::constant(c.clone());
        for _ in 0..i {
            term.mul_assign(inner);
        }
        result.add_assign(&term);
    }

    result
}
