//! The primitive floats as coefficient rings.
//!
//! Arithmetic is IEEE-754; no attempt is made at numerical stability.

use crate::traits::{OrderedRing, Ring};

macro_rules! impl_float_ring {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ring for $t {
                fn zero() -> Self {
                    0.0
                }

                fn one() -> Self {
                    1.0
                }

                fn neg_one() -> Self {
                    -1.0
                }
            }

            impl OrderedRing for $t {}
        )*
    };
}

impl_float_ring!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_zero_is_zero() {
        assert!((-0.0f64).is_zero());
        assert!(!OrderedRing::is_negative(&-0.0f64));
        assert!(!OrderedRing::is_positive(&-0.0f64));
    }

    #[test]
    fn test_nan_is_unsigned() {
        assert!(!<f64 as OrderedRing>::is_positive(&f64::NAN));
        assert!(!<f64 as OrderedRing>::is_negative(&f64::NAN));
        assert!(!f64::NAN.is_zero());
    }
}
