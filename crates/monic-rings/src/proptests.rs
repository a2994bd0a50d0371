//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::rationals::Q;
    use crate::traits::{OrderedRing, Ring};

    fn small_q() -> impl Strategy<Value = Q> {
        (-100i64..100i64, 1i64..20i64).prop_map(|(n, d)| Q::new(n, d))
    }

    fn nonzero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("rational must be non-zero", |q| !q.is_zero())
    }

    proptest! {
        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn q_division_is_exact(a in small_q(), b in nonzero_q()) {
            prop_assert_eq!((a.clone() / b.clone()) * b, a);
        }

        #[test]
        fn q_neg_one_via_subtraction(a in small_q()) {
            prop_assert_eq!(Q::neg_one() * a.clone(), Q::zero() - a);
        }

        #[test]
        fn integer_sign_matches_ordering(a in -1000i64..1000i64) {
            prop_assert_eq!(OrderedRing::is_positive(&a), a > 0);
            prop_assert_eq!(OrderedRing::is_negative(&a), a < 0);
        }

        #[test]
        fn float_sign_matches_ordering(a in -1.0e6f64..1.0e6f64) {
            prop_assert_eq!(<f64 as OrderedRing>::is_positive(&a), a > 0.0);
            prop_assert_eq!(<f64 as OrderedRing>::is_negative(&a), a < 0.0);
        }
    }
}
