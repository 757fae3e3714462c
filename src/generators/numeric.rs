//! Numeric value generators with edge-value weighting.
//!
//! Integer generators mix the carrier's bounds and the algebra identities in
//! with uniform samples, so wrapping behavior is exercised on every run.
//! Float generators stay inside a bounded finite range (plus signed zero and
//! unit edge values): the laws under test are statements about finite
//! arithmetic, and the bound keeps rounding error within the tolerance the
//! equivalence policy allows.

use proptest::prelude::*;

use super::combinators::Generator;

macro_rules! int_values {
    ($($name:ident => $t:ty),* $(,)?) => {$(
        /// Edge-weighted values spanning the full carrier range.
        pub fn $name() -> Generator<$t> {
            Generator::new(prop_oneof![
                1 => Just(<$t>::MIN),
                1 => Just(<$t>::MAX),
                1 => Just(0 as $t),
                1 => Just(1 as $t),
                6 => any::<$t>(),
            ])
        }
    )*};
}

int_values!(
    i8_values => i8,
    i16_values => i16,
    i32_values => i32,
    i64_values => i64,
    u8_values => u8,
    u16_values => u16,
    u32_values => u32,
    u64_values => u64,
);

/// Bounded finite `f64` values with signed zero and unit edge cases.
pub fn f64_values() -> Generator<f64> {
    Generator::new(prop_oneof![
        1 => Just(0.0_f64),
        1 => Just(-0.0_f64),
        1 => Just(1.0_f64),
        1 => Just(-1.0_f64),
        6 => -1_000.0_f64..=1_000.0_f64,
    ])
}

/// Bounded finite `f32` values with signed zero and unit edge cases.
pub fn f32_values() -> Generator<f32> {
    Generator::new(prop_oneof![
        1 => Just(0.0_f32),
        1 => Just(-0.0_f32),
        1 => Just(1.0_f32),
        1 => Just(-1.0_f32),
        6 => -100.0_f32..=100.0_f32,
    ])
}

/// Uniform boolean values.
pub fn bool_values() -> Generator<bool> {
    Generator::new(any::<bool>())
}
