//! Operator overloads for [`Polynomial`].
//!
//! Binary operators take both operands by reference (`&a + &b`), since the
//! inherent methods of the same name already borrow. Compound assignment
//! accepts either an owned or a borrowed right-hand side.
//!
//! | operator | meaning          |
//! |----------|------------------|
//! | `+ - *`  | ring arithmetic  |
//! | `/ %`    | Euclidean division |
//! | `&`      | composition `a(b(x))` |
//!
//! There is no operator for the GCD; use [`Polynomial::gcd_monic`].

use std::ops::{
    Add, AddAssign, BitAnd, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

use monic_rings::traits::{Coefficient, Ring};

use crate::dense::Polynomial;

impl<T: Ring> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<T: Ring> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T: Ring> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Ring> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Ring> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Coefficient> Div for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: Coefficient> Rem for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn rem(self, rhs: Self) -> Self::Output {
        self.remainder(rhs)
    }
}

/// `&p & &q` is `p(q(x))`.
impl<T: Ring> BitAnd for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.compose_with(rhs)
    }
}

impl<T: Ring> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, rhs: &Polynomial<T>) {
        Polynomial::add_assign(self, rhs);
    }
}

impl<T: Ring> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, rhs: Polynomial<T>) {
        Polynomial::add_assign(self, &rhs);
    }
}

impl<T: Ring> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, rhs: &Polynomial<T>) {
        Polynomial::sub_assign(self, rhs);
    }
}

impl<T: Ring> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, rhs: Polynomial<T>) {
        Polynomial::sub_assign(self, &rhs);
    }
}

impl<T: Ring> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, rhs: &Polynomial<T>) {
        Polynomial::mul_assign(self, rhs);
    }
}

impl<T: Ring> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, rhs: Polynomial<T>) {
        Polynomial::mul_assign(self, &rhs);
    }
}
