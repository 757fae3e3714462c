//! The static registry of built-in instances and their law suites.
//!
//! Registration is authorship: adding a carrier type means writing its
//! instance and listing its suite here, next to the laws that vouch for it.
//! There is no runtime lookup to fall out of sync with.

use std::fmt::Debug;

use crate::algebra::collections::{all_monoid, any_monoid, concat_monoid};
use crate::algebra::monoid::{AdditiveInverse, Monoid};
use crate::algebra::numeric::{Product, Sum, max_monoid, min_monoid, sum_monoid};
use crate::algebra::semiring::numeric_semiring;
use crate::generators::collections::{string_values, vec_values};
use crate::generators::combinators::Generator;
use crate::generators::numeric::{
    bool_values, f32_values, f64_values, i8_values, i16_values, i32_values, i64_values, u8_values,
    u16_values, u32_values, u64_values,
};
use crate::law::equivalence::{Equivalence, Exact, WithinTolerance};
use crate::law::monoid::{commutativity_law, idempotency_law, monoid_laws};
use crate::law::semiring::{additive_inverse_law, semiring_laws};

use super::LawSuite;

fn wrapping_suite<T>(subject: &str, values: &Generator<T>) -> LawSuite
where
    T: Clone + Debug + PartialEq + 'static,
    Sum<T>: Monoid<T>,
    Product<T>: Monoid<T>,
{
    LawSuite::new(subject, semiring_laws(numeric_semiring::<T>(), values, Exact))
}

fn signed_wrapping_suite<T>(subject: &str, values: &Generator<T>) -> LawSuite
where
    T: Clone + Debug + PartialEq + 'static,
    Sum<T>: AdditiveInverse<T>,
    Product<T>: Monoid<T>,
{
    let mut laws = semiring_laws(numeric_semiring::<T>(), values, Exact);
    laws.push(additive_inverse_law(sum_monoid::<T>(), values, Exact));
    LawSuite::new(subject, laws)
}

fn float_suite<T>(subject: &str, values: &Generator<T>, tolerance: f64) -> LawSuite
where
    T: Clone + Debug + 'static,
    Sum<T>: AdditiveInverse<T>,
    Product<T>: Monoid<T>,
    WithinTolerance: Equivalence<T>,
{
    let equivalence = WithinTolerance::new(tolerance);
    let mut laws = semiring_laws(numeric_semiring::<T>(), values, equivalence);
    laws.push(additive_inverse_law(sum_monoid::<T>(), values, equivalence));
    LawSuite::new(subject, laws)
}

fn semilattice_suite<T, M>(subject: &str, instance: M, values: &Generator<T>) -> LawSuite
where
    T: Clone + Debug + PartialEq + 'static,
    M: Monoid<T> + Clone + 'static,
{
    let mut laws = monoid_laws(instance.clone(), values, Exact);
    laws.push(commutativity_law(instance.clone(), values, Exact));
    laws.push(idempotency_law(instance, values, Exact));
    LawSuite::new(subject, laws)
}

/// Every built-in (algebra class, instance) pair with its law battery.
pub fn builtin_suites() -> Vec<LawSuite> {
    vec![
        signed_wrapping_suite::<i8>("i8 semiring", &i8_values()),
        signed_wrapping_suite::<i16>("i16 semiring", &i16_values()),
        signed_wrapping_suite::<i32>("i32 semiring", &i32_values()),
        signed_wrapping_suite::<i64>("i64 semiring", &i64_values()),
        wrapping_suite::<u8>("u8 semiring", &u8_values()),
        wrapping_suite::<u16>("u16 semiring", &u16_values()),
        wrapping_suite::<u32>("u32 semiring", &u32_values()),
        wrapping_suite::<u64>("u64 semiring", &u64_values()),
        float_suite::<f32>("f32 semiring", &f32_values(), 1e-2),
        float_suite::<f64>("f64 semiring", &f64_values(), 1e-6),
        semilattice_suite("i64 min", min_monoid::<i64>(), &i64_values()),
        semilattice_suite("i64 max", max_monoid::<i64>(), &i64_values()),
        semilattice_suite("bool all", all_monoid(), &bool_values()),
        semilattice_suite("bool any", any_monoid(), &bool_values()),
        LawSuite::new(
            "string concat",
            monoid_laws(concat_monoid(), &string_values(16), Exact),
        ),
        LawSuite::new(
            "vec<i32> concat",
            monoid_laws(concat_monoid(), &vec_values(i32_values(), 8), Exact),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::law::property::CheckConfig;

    use super::*;

    #[test]
    fn every_builtin_suite_passes() {
        let config = CheckConfig::default();
        for suite in builtin_suites() {
            for case in suite.run(&config) {
                assert!(
                    case.status.is_pass(),
                    "{} / {} did not pass: {:?}",
                    case.subject,
                    case.law,
                    case
                );
            }
        }
    }

    #[test]
    fn registry_covers_the_numeric_carriers() {
        let subjects: Vec<String> = builtin_suites()
            .iter()
            .map(|suite| suite.subject().to_string())
            .collect();
        for expected in [
            "i8 semiring",
            "i64 semiring",
            "u8 semiring",
            "f64 semiring",
            "string concat",
        ] {
            assert!(
                subjects.iter().any(|s| s == expected),
                "missing suite {expected}"
            );
        }
    }
}
