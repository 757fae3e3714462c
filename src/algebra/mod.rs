//! Algebraic structures and their statically resolved instances.
//!
//! An *instance* is a value describing how to combine elements of one carrier
//! type (see [`Semigroup`], [`Monoid`], [`Semiring`]). Instances are
//! immutable, zero-sized, and resolved at compile time through trait bounds:
//! asking for an instance of an unsupported type does not compile.

pub mod collections;
pub mod monoid;
pub mod numeric;
pub mod semiring;

pub use collections::{All, Any, Concat, all_monoid, any_monoid, concat_monoid};
pub use monoid::{AdditiveInverse, Monoid, Semigroup};
pub use numeric::{Max, Min, Product, Sum, max_monoid, min_monoid, product_monoid, sum_monoid};
pub use semiring::{NumericSemiring, Semiring, numeric_semiring};
