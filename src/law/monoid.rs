//! Laws for semigroup and monoid instances.

use std::fmt::Debug;

use proptest::test_runner::TestCaseError;

use crate::algebra::monoid::{Monoid, Semigroup};
use crate::generators::combinators::Generator;

use super::equivalence::Equivalence;
use super::property::{Property, run_law};

/// `combine(combine(a, b), c) == combine(a, combine(b, c))` for sampled
/// triples.
pub fn associativity_law<A, S, E>(instance: S, values: &Generator<A>, equivalence: E) -> Property
where
    A: Clone + Debug + 'static,
    S: Semigroup<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let triples = (
        values.as_strategy().clone(),
        values.as_strategy().clone(),
        values.as_strategy().clone(),
    );
    Property::new("associativity", move |config| {
        run_law(
            config,
            &triples,
            |(a, b, c)| vec![format!("{a:?}"), format!("{b:?}"), format!("{c:?}")],
            |(a, b, c)| {
                let left = instance.combine(instance.combine(a.clone(), b.clone()), c.clone());
                let right = instance.combine(a, instance.combine(b, c));
                if equivalence.equivalent(&left, &right) {
                    Ok(())
                } else {
                    Err(TestCaseError::fail(format!(
                        "combine(combine(a, b), c) = {left:?} but combine(a, combine(b, c)) = {right:?}"
                    )))
                }
            },
        )
    })
}

/// `combine(identity, a) == a` and `combine(a, identity) == a` for sampled
/// values. A malformed identity element fails on the first sample.
pub fn identity_law<A, M, E>(instance: M, values: &Generator<A>, equivalence: E) -> Property
where
    A: Clone + Debug + 'static,
    M: Monoid<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let singles = values.as_strategy().clone();
    Property::new("identity", move |config| {
        run_law(
            config,
            &singles,
            |a| vec![format!("{a:?}")],
            |a| {
                let left = instance.combine(instance.identity(), a.clone());
                if !equivalence.equivalent(&left, &a) {
                    return Err(TestCaseError::fail(format!(
                        "combine(identity, a) = {left:?} but a = {a:?}"
                    )));
                }
                let right = instance.combine(a.clone(), instance.identity());
                if !equivalence.equivalent(&right, &a) {
                    return Err(TestCaseError::fail(format!(
                        "combine(a, identity) = {right:?} but a = {a:?}"
                    )));
                }
                Ok(())
            },
        )
    })
}

/// Absent operands act as the identity element:
/// `combine_option(None, Some(a)) == a`, `combine_option(Some(a), None) == a`,
/// and both absent yields the identity.
pub fn option_identity_law<A, M, E>(instance: M, values: &Generator<A>, equivalence: E) -> Property
where
    A: Clone + Debug + 'static,
    M: Monoid<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let singles = values.as_strategy().clone();
    Property::new("absent-operand identity", move |config| {
        run_law(
            config,
            &singles,
            |a| vec![format!("{a:?}")],
            |a| {
                let left = instance.combine_option(None, Some(a.clone()));
                if !equivalence.equivalent(&left, &a) {
                    return Err(TestCaseError::fail(format!(
                        "combine_option(None, a) = {left:?} but a = {a:?}"
                    )));
                }
                let right = instance.combine_option(Some(a.clone()), None);
                if !equivalence.equivalent(&right, &a) {
                    return Err(TestCaseError::fail(format!(
                        "combine_option(a, None) = {right:?} but a = {a:?}"
                    )));
                }
                let both_absent = instance.combine_option(None, None);
                let identity = instance.identity();
                if !equivalence.equivalent(&both_absent, &identity) {
                    return Err(TestCaseError::fail(format!(
                        "combine_option(None, None) = {both_absent:?} but identity = {identity:?}"
                    )));
                }
                Ok(())
            },
        )
    })
}

/// `combine(a, b) == combine(b, a)` for sampled pairs.
pub fn commutativity_law<A, S, E>(instance: S, values: &Generator<A>, equivalence: E) -> Property
where
    A: Clone + Debug + 'static,
    S: Semigroup<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let pairs = (values.as_strategy().clone(), values.as_strategy().clone());
    Property::new("commutativity", move |config| {
        run_law(
            config,
            &pairs,
            |(a, b)| vec![format!("{a:?}"), format!("{b:?}")],
            |(a, b)| {
                let left = instance.combine(a.clone(), b.clone());
                let right = instance.combine(b, a);
                if equivalence.equivalent(&left, &right) {
                    Ok(())
                } else {
                    Err(TestCaseError::fail(format!(
                        "combine(a, b) = {left:?} but combine(b, a) = {right:?}"
                    )))
                }
            },
        )
    })
}

/// `combine(a, a) == a` for sampled values. Holds for order and boolean
/// instances, not for arithmetic ones.
pub fn idempotency_law<A, S, E>(instance: S, values: &Generator<A>, equivalence: E) -> Property
where
    A: Clone + Debug + 'static,
    S: Semigroup<A> + 'static,
    E: Equivalence<A> + 'static,
{
    let singles = values.as_strategy().clone();
    Property::new("idempotency", move |config| {
        run_law(
            config,
            &singles,
            |a| vec![format!("{a:?}")],
            |a| {
                let combined = instance.combine(a.clone(), a.clone());
                if equivalence.equivalent(&combined, &a) {
                    Ok(())
                } else {
                    Err(TestCaseError::fail(format!(
                        "combine(a, a) = {combined:?} but a = {a:?}"
                    )))
                }
            },
        )
    })
}

/// The full monoid battery: associativity, identity, absent-operand
/// identity.
pub fn monoid_laws<A, M, E>(instance: M, values: &Generator<A>, equivalence: E) -> Vec<Property>
where
    A: Clone + Debug + 'static,
    M: Monoid<A> + Clone + 'static,
    E: Equivalence<A> + Clone + 'static,
{
    vec![
        associativity_law(instance.clone(), values, equivalence.clone()),
        identity_law(instance.clone(), values, equivalence.clone()),
        option_identity_law(instance, values, equivalence),
    ]
}

#[cfg(test)]
mod tests {
    use crate::algebra::collections::concat_monoid;
    use crate::algebra::numeric::{max_monoid, sum_monoid};
    use crate::generators::collections::string_values;
    use crate::generators::numeric::{i32_values, i64_values};
    use crate::law::equivalence::Exact;
    use crate::law::property::{CheckConfig, LawOutcome};

    use super::*;

    /// Deliberately malformed: claims `1` as the additive identity.
    #[derive(Clone)]
    struct BrokenIdentity;

    impl Semigroup<i32> for BrokenIdentity {
        fn combine(&self, lhs: i32, rhs: i32) -> i32 {
            lhs.wrapping_add(rhs)
        }
    }

    impl Monoid<i32> for BrokenIdentity {
        fn identity(&self) -> i32 {
            1
        }
    }

    /// Deliberately non-associative: saturating addition.
    struct Saturating;

    impl Semigroup<i32> for Saturating {
        fn combine(&self, lhs: i32, rhs: i32) -> i32 {
            lhs.saturating_add(rhs)
        }
    }

    #[test]
    fn lawful_instances_pass() {
        let config = CheckConfig::default();
        for property in monoid_laws(sum_monoid::<i32>(), &i32_values(), Exact) {
            assert!(
                property.check(&config).is_pass(),
                "expected {} to pass",
                property.name()
            );
        }
        assert!(
            commutativity_law(sum_monoid::<i32>(), &i32_values(), Exact)
                .check(&config)
                .is_pass()
        );
        assert!(
            idempotency_law(max_monoid::<i64>(), &i64_values(), Exact)
                .check(&config)
                .is_pass()
        );
    }

    #[test]
    fn concat_passes_monoid_laws_but_not_commutativity() {
        let config = CheckConfig::default();
        let strings = string_values(8);
        for property in monoid_laws(concat_monoid(), &strings, Exact) {
            assert!(property.check(&config).is_pass());
        }
        let commutativity = commutativity_law(concat_monoid(), &strings, Exact).check(&config);
        assert!(!commutativity.is_pass());
    }

    #[test]
    fn malformed_identity_is_reported_with_a_counterexample() {
        let config = CheckConfig::default();
        let outcome = identity_law(BrokenIdentity, &i32_values(), Exact).check(&config);
        match outcome {
            LawOutcome::Failed { counterexample } => {
                assert_eq!(counterexample.operands.len(), 1);
                assert!(counterexample.message.contains("identity"));
            }
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn non_associative_operation_is_caught() {
        let config = CheckConfig::default().with_samples(500);
        let outcome = associativity_law(Saturating, &i32_values(), Exact).check(&config);
        match outcome {
            LawOutcome::Failed { counterexample } => {
                assert_eq!(counterexample.operands.len(), 3);
            }
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn violations_reproduce_exactly_under_the_same_seed() {
        let config = CheckConfig::default().with_seed(77);
        let first = identity_law(BrokenIdentity, &i32_values(), Exact).check(&config);
        let second = identity_law(BrokenIdentity, &i32_values(), Exact).check(&config);
        assert_eq!(first, second);
    }
}
