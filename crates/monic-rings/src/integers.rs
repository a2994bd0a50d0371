//! The primitive signed integers as coefficient rings.
//!
//! Division on these types truncates toward zero, so polynomial division
//! over them is exact only when the leading coefficients divide evenly.

use crate::traits::{OrderedRing, Ring};

macro_rules! impl_integer_ring {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ring for $t {
                fn zero() -> Self {
                    0
                }

                fn one() -> Self {
                    1
                }

                fn neg_one() -> Self {
                    -1
                }
            }

            impl OrderedRing for $t {}
        )*
    };
}

impl_integer_ring!(i8, i16, i32, i64, i128, isize);
