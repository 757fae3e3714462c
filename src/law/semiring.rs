//! Laws for semiring instances and additive inverses.

use std::fmt::Debug;

use proptest::test_runner::TestCaseError;

use crate::algebra::monoid::{AdditiveInverse, Monoid};
use crate::algebra::semiring::Semiring;
use crate::generators::combinators::Generator;

use super::equivalence::Equivalence;
use super::monoid::{commutativity_law, monoid_laws};
use super::property::{Property, run_law};

/// Multiplication distributes over addition from both sides:
/// `mul(a, add(b, c)) == add(mul(a, b), mul(a, c))` and its mirror.
pub fn distributivity_law<A, Add, Mul, E>(
    semiring: Semiring<A, Add, Mul>,
    values: &Generator<A>,
    equivalence: E,
) -> Property
where
    A: Clone + Debug + 'static,
    Add: Monoid<A> + 'static,
    Mul: Monoid<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let triples = (
        values.as_strategy().clone(),
        values.as_strategy().clone(),
        values.as_strategy().clone(),
    );
    Property::new("distributivity", move |config| {
        run_law(
            config,
            &triples,
            |(a, b, c)| vec![format!("{a:?}"), format!("{b:?}"), format!("{c:?}")],
            |(a, b, c)| {
                let left = semiring.mul(a.clone(), semiring.add(b.clone(), c.clone()));
                let right = semiring.add(
                    semiring.mul(a.clone(), b.clone()),
                    semiring.mul(a.clone(), c.clone()),
                );
                if !equivalence.equivalent(&left, &right) {
                    return Err(TestCaseError::fail(format!(
                        "mul(a, add(b, c)) = {left:?} but add(mul(a, b), mul(a, c)) = {right:?}"
                    )));
                }
                let left = semiring.mul(semiring.add(b.clone(), c.clone()), a.clone());
                let right = semiring.add(semiring.mul(b, a.clone()), semiring.mul(c, a));
                if !equivalence.equivalent(&left, &right) {
                    return Err(TestCaseError::fail(format!(
                        "mul(add(b, c), a) = {left:?} but add(mul(b, a), mul(c, a)) = {right:?}"
                    )));
                }
                Ok(())
            },
        )
    })
}

/// The additive identity annihilates under multiplication:
/// `mul(zero, a) == zero` and `mul(a, zero) == zero`.
pub fn absorption_law<A, Add, Mul, E>(
    semiring: Semiring<A, Add, Mul>,
    values: &Generator<A>,
    equivalence: E,
) -> Property
where
    A: Clone + Debug + 'static,
    Add: Monoid<A> + 'static,
    Mul: Monoid<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let singles = values.as_strategy().clone();
    Property::new("absorption", move |config| {
        run_law(
            config,
            &singles,
            |a| vec![format!("{a:?}")],
            |a| {
                let zero = semiring.zero();
                let left = semiring.mul(semiring.zero(), a.clone());
                if !equivalence.equivalent(&left, &zero) {
                    return Err(TestCaseError::fail(format!(
                        "mul(zero, a) = {left:?} but zero = {zero:?}"
                    )));
                }
                let right = semiring.mul(a, semiring.zero());
                if !equivalence.equivalent(&right, &zero) {
                    return Err(TestCaseError::fail(format!(
                        "mul(a, zero) = {right:?} but zero = {zero:?}"
                    )));
                }
                Ok(())
            },
        )
    })
}

/// Every value cancels against its inverse:
/// `combine(a, inverse(a)) == identity` and its mirror.
pub fn additive_inverse_law<A, M, E>(instance: M, values: &Generator<A>, equivalence: E) -> Property
where
    A: Clone + Debug + 'static,
    M: AdditiveInverse<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let singles = values.as_strategy().clone();
    Property::new("additive inverse", move |config| {
        run_law(
            config,
            &singles,
            |a| vec![format!("{a:?}")],
            |a| {
                let identity = instance.identity();
                let left = instance.combine(a.clone(), instance.inverse(a.clone()));
                if !equivalence.equivalent(&left, &identity) {
                    return Err(TestCaseError::fail(format!(
                        "combine(a, inverse(a)) = {left:?} but identity = {identity:?}"
                    )));
                }
                let right = instance.combine(instance.inverse(a.clone()), a);
                if !equivalence.equivalent(&right, &identity) {
                    return Err(TestCaseError::fail(format!(
                        "combine(inverse(a), a) = {right:?} but identity = {identity:?}"
                    )));
                }
                Ok(())
            },
        )
    })
}

/// The full semiring battery: both monoid halves (the additive one also
/// commutative), distributivity, and absorption.
pub fn semiring_laws<A, Add, Mul, E>(
    semiring: Semiring<A, Add, Mul>,
    values: &Generator<A>,
    equivalence: E,
) -> Vec<Property>
where
    A: Clone + Debug + 'static,
    Add: Monoid<A> + Clone + 'static,
    Mul: Monoid<A> + Clone + 'static,
    E: Equivalence<A> + Clone + 'static,
{
    let mut laws: Vec<Property> =
        monoid_laws(semiring.additive().clone(), values, equivalence.clone())
            .into_iter()
            .map(|property| property.prefixed("additive"))
            .collect();
    laws.push(
        commutativity_law(semiring.additive().clone(), values, equivalence.clone())
            .prefixed("additive"),
    );
    laws.extend(
        monoid_laws(semiring.multiplicative().clone(), values, equivalence.clone())
            .into_iter()
            .map(|property| property.prefixed("multiplicative")),
    );
    laws.push(distributivity_law(semiring.clone(), values, equivalence.clone()));
    laws.push(absorption_law(semiring, values, equivalence));
    laws
}
