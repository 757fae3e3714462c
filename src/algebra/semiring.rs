//! Semiring instances: two monoid structures over one carrier.
//!
//! A semiring is composed from an additive monoid and a multiplicative monoid
//! where multiplication distributes over addition and the additive identity
//! annihilates under multiplication. The composition is explicit rather than
//! encoded through trait inheritance: a [`Semiring`] holds its two monoid
//! instances as values, so any pair of lawful monoids over the same carrier
//! can be assembled and then checked by the law suite.

use std::fmt;
use std::marker::PhantomData;

use super::monoid::Monoid;
use super::numeric::{Product, Sum};

/// A semiring instance over carrier `A`, composed of an additive monoid
/// `Add` and a multiplicative monoid `Mul`.
pub struct Semiring<A, Add, Mul> {
    additive: Add,
    multiplicative: Mul,
    carrier: PhantomData<fn() -> A>,
}

/// The wrapping/IEEE semiring over a numeric carrier.
pub type NumericSemiring<T> = Semiring<T, Sum<T>, Product<T>>;

impl<A, Add, Mul> Semiring<A, Add, Mul>
where
    Add: Monoid<A>,
    Mul: Monoid<A>,
{
    /// Composes a semiring from its additive and multiplicative parts.
    ///
    /// Both parts must be monoids over the same carrier; anything else is
    /// rejected at compile time.
    pub const fn new(additive: Add, multiplicative: Mul) -> Self {
        Self {
            additive,
            multiplicative,
            carrier: PhantomData,
        }
    }

    /// The additive identity.
    pub fn zero(&self) -> A {
        self.additive.identity()
    }

    /// The multiplicative identity.
    pub fn one(&self) -> A {
        self.multiplicative.identity()
    }

    /// Additive combine.
    pub fn add(&self, lhs: A, rhs: A) -> A {
        self.additive.combine(lhs, rhs)
    }

    /// Multiplicative combine.
    pub fn mul(&self, lhs: A, rhs: A) -> A {
        self.multiplicative.combine(lhs, rhs)
    }

    /// Additive combine over optional operands; absent operands act as zero.
    pub fn add_option(&self, lhs: Option<A>, rhs: Option<A>) -> A {
        self.additive.combine_option(lhs, rhs)
    }

    /// Sums an iterator; empty input yields [`Semiring::zero`].
    pub fn sum<I>(&self, values: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        self.additive.combine_all(values)
    }

    /// Multiplies an iterator together; empty input yields [`Semiring::one`].
    pub fn product<I>(&self, values: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        self.multiplicative.combine_all(values)
    }

    /// The additive monoid instance.
    pub fn additive(&self) -> &Add {
        &self.additive
    }

    /// The multiplicative monoid instance.
    pub fn multiplicative(&self) -> &Mul {
        &self.multiplicative
    }
}

impl<A, Add: Clone, Mul: Clone> Clone for Semiring<A, Add, Mul> {
    fn clone(&self) -> Self {
        Self {
            additive: self.additive.clone(),
            multiplicative: self.multiplicative.clone(),
            carrier: PhantomData,
        }
    }
}

impl<A, Add: Copy, Mul: Copy> Copy for Semiring<A, Add, Mul> {}

impl<A, Add: fmt::Debug, Mul: fmt::Debug> fmt::Debug for Semiring<A, Add, Mul> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Semiring")
            .field("additive", &self.additive)
            .field("multiplicative", &self.multiplicative)
            .finish()
    }
}

/// Resolves the wrapping/IEEE semiring instance for `T`.
///
/// Unsupported carriers fail to compile; there is no runtime lookup.
pub fn numeric_semiring<T>() -> NumericSemiring<T>
where
    Sum<T>: Monoid<T>,
    Product<T>: Monoid<T>,
{
    Semiring::new(Sum::new(), Product::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_semiring_concrete_scenario() {
        let semiring = numeric_semiring::<i32>();
        assert_eq!(semiring.add(2, 3), 5);
        assert_eq!(semiring.mul(2, 3), 6);
        assert_eq!(semiring.zero(), 0);
        assert_eq!(semiring.one(), 1);
    }

    #[test]
    fn byte_semiring_wraps_on_overflow() {
        let semiring = numeric_semiring::<i8>();
        assert_eq!(semiring.add(127, 1), -128);
        assert_eq!(semiring.mul(127, 2), -2);
    }

    #[test]
    fn folds_start_from_the_identities() {
        let semiring = numeric_semiring::<u16>();
        assert_eq!(semiring.sum(std::iter::empty()), 0);
        assert_eq!(semiring.product(std::iter::empty()), 1);
        assert_eq!(semiring.sum([1, 2, 3]), 6);
        assert_eq!(semiring.product([2, 3, 4]), 24);
    }

    #[test]
    fn add_option_treats_absent_as_zero() {
        let semiring = numeric_semiring::<i64>();
        assert_eq!(semiring.add_option(None, Some(9)), 9);
        assert_eq!(semiring.add_option(Some(9), None), 9);
        assert_eq!(semiring.add_option(None, None), 0);
    }
}
