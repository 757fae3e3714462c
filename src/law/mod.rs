//! Reusable law properties over algebra instances.
//!
//! Each law is written once per algebra class and applies uniformly to every
//! instance: instance authors plug into the suite instead of writing bespoke
//! tests. Executing a [`Property`] draws seeded samples, evaluates both sides
//! of the law equation under an equivalence policy, and reports a structured
//! outcome. A violation is data, never a panic.

pub mod equivalence;
pub mod monoid;
pub mod property;
pub mod semiring;

pub use equivalence::{Equivalence, Exact, WithinTolerance};
pub use monoid::{
    associativity_law, commutativity_law, idempotency_law, identity_law, monoid_laws,
    option_identity_law,
};
pub use property::{CheckConfig, Counterexample, LawOutcome, Property};
pub use semiring::{absorption_law, additive_inverse_law, distributivity_law, semiring_laws};
