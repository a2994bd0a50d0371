//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use monic_rings::rationals::Q;

    // Strategy for generating small integer coefficients
    fn small_int() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    // Rational coefficients stay small so Rational64 never overflows
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-10i64..10i64).prop_map(Q::from_integer)
    }

    fn tiny_coeff() -> impl Strategy<Value = Q> {
        (-5i64..5i64).prop_map(Q::from_integer)
    }

    // Integer polynomials of degree 0-4, trailing zeros allowed
    fn small_int_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(small_int(), 0..=5).prop_map(Polynomial::new)
    }

    // Rational polynomials of degree 0-3, trailing zeros allowed
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 1..=4).prop_map(Polynomial::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Nonzero rational polynomials of degree at most `max_degree`
    fn tiny_poly(max_degree: usize) -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(tiny_coeff(), 1..=max_degree + 1)
            .prop_map(Polynomial::new)
            .prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_int_poly(), b in small_int_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_int_poly(), b in small_int_poly(), c in small_int_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_int_poly(), b in small_int_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn poly_distributive(a in small_int_poly(), b in small_int_poly(), c in small_int_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_zero(a in small_int_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.multiply(&zero).is_zero());
            prop_assert!(zero.multiply(&a).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_int_poly()) {
            prop_assert_eq!(a.subtract(&a).degree(), -1);
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in small_int_poly(), b in small_int_poly()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assert_eq!(a.multiply(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_int_poly(), b in small_int_poly()) {
            // deg(a + b) <= max(deg(a), deg(b))
            let sum = a.add(&b);
            prop_assert!(sum.degree() <= a.degree().max(b.degree()));
        }

        // Equality ignores storage padding

        #[test]
        fn poly_eq_ignores_padding(coeffs in proptest::collection::vec(small_int(), 0..=5), pad in 0usize..4) {
            let mut padded = coeffs.clone();
            padded.extend(std::iter::repeat(0).take(pad));
            prop_assert_eq!(Polynomial::new(padded), Polynomial::new(coeffs));
        }

        // Evaluation homomorphism

        #[test]
        fn poly_eval_add(a in small_int_poly(), b in small_int_poly(), x in small_int()) {
            prop_assert_eq!(a.add(&b).evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_int_poly(), b in small_int_poly(), x in -5i64..5i64) {
            prop_assert_eq!(a.multiply(&b).evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
        }

        // Composition

        #[test]
        fn poly_compose_eval(a in tiny_poly(3), b in tiny_poly(2), x in -2i64..=2i64) {
            let x = Q::from_integer(x);
            prop_assert_eq!(a.compose_with(&b).evaluate(&x), a.evaluate(&b.evaluate(&x)));
        }

        // Euclidean division over a field

        #[test]
        fn poly_division_identity(a in small_poly(), d in nonzero_poly()) {
            let (quot, rem) = a.div_rem(&d);
            prop_assert_eq!(quot.multiply(&d).add(&rem), a);
            prop_assert!(rem.degree() < d.degree());
        }

        #[test]
        fn poly_checked_division_agrees(a in small_poly(), d in nonzero_poly()) {
            prop_assert_eq!(a.checked_div(&d), Ok(a.divide(&d)));
            prop_assert_eq!(a.checked_rem(&d), Ok(a.remainder(&d)));
        }

        // GCD

        #[test]
        fn poly_gcd_divides_both(a in tiny_poly(2), b in tiny_poly(2)) {
            let g = a.gcd_monic(&b);
            prop_assert_eq!(g.leading_coefficient(), Some(Q::from_integer(1)));
            prop_assert!(a.remainder(&g).is_zero());
            prop_assert!(b.remainder(&g).is_zero());
        }

        #[test]
        fn poly_gcd_of_common_factor(a in tiny_poly(1), b in tiny_poly(1), c in tiny_poly(1)) {
            // c (made monic) divides gcd(a*c, b*c)
            let g = a.multiply(&c).gcd_monic(&b.multiply(&c));
            prop_assert!(g.remainder(&c.monic()).is_zero());
        }
    }
}
