//! The generator type and its composition combinators.

use std::fmt::Debug;

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

/// A reusable description of how to produce values of `A`.
///
/// Generators are stateless: all randomness lives in the
/// [`SampleSource`](super::SampleSource) drawing from them, so one generator
/// can back any number of independent sample streams.
pub struct Generator<A> {
    strategy: BoxedStrategy<A>,
}

impl<A: Debug + 'static> Generator<A> {
    /// Wraps a proptest strategy as a generator.
    pub fn new<S>(strategy: S) -> Self
    where
        S: Strategy<Value = A> + 'static,
    {
        Self {
            strategy: strategy.boxed(),
        }
    }

    /// Maps produced values through `f`.
    pub fn map<B, F>(self, f: F) -> Generator<B>
    where
        B: Debug + 'static,
        F: Fn(A) -> B + 'static,
    {
        Generator::new(self.strategy.prop_map(f))
    }

    /// Pairs this generator with another, producing tuples.
    pub fn zip<B: Debug + 'static>(self, other: Generator<B>) -> Generator<(A, B)> {
        Generator::new((self.strategy, other.strategy))
    }

    /// Produces vectors of values with lengths in `len`.
    pub fn vec_of(self, len: impl Into<proptest::collection::SizeRange>) -> Generator<Vec<A>> {
        Generator::new(proptest::collection::vec(self.strategy, len))
    }

    /// Produces optional values, with absent cases mixed in at a fixed
    /// one-in-four weight.
    pub fn option_of(self) -> Generator<Option<A>>
    where
        A: Clone,
    {
        Generator::new(prop_oneof![
            1 => Just(Option::<A>::None),
            3 => self.strategy.prop_map(Some),
        ])
    }
}

impl<A> Generator<A> {
    pub(crate) fn as_strategy(&self) -> &BoxedStrategy<A> {
        &self.strategy
    }
}

impl<A> Clone for Generator<A> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
        }
    }
}

impl<A> Debug for Generator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").finish_non_exhaustive()
    }
}

/// Pairs two independent generators.
pub fn pair<A, B>(first: Generator<A>, second: Generator<B>) -> Generator<(A, B)>
where
    A: Debug + 'static,
    B: Debug + 'static,
{
    first.zip(second)
}

#[cfg(test)]
mod tests {
    use crate::generators::numeric::i32_values;
    use crate::generators::source::SampleSource;

    use super::*;

    #[test]
    fn map_and_zip_compose() {
        let doubled = i32_values().map(|v| i64::from(v) * 2);
        let pairs = pair(i32_values(), doubled);
        let mut source = SampleSource::new(7);
        for _ in 0..50 {
            let (_, d) = source.draw(&pairs).expect("draw should succeed");
            assert_eq!(d % 2, 0);
        }
    }

    #[test]
    fn vec_of_respects_length_bounds() {
        let vecs = i32_values().vec_of(2..=5);
        let mut source = SampleSource::new(11);
        for _ in 0..50 {
            let values = source.draw(&vecs).expect("draw should succeed");
            assert!((2..=5).contains(&values.len()));
        }
    }

    #[test]
    fn option_of_produces_both_cases() {
        let options = i32_values().option_of();
        let mut source = SampleSource::new(13);
        let mut absent = 0usize;
        let mut present = 0usize;
        for _ in 0..200 {
            match source.draw(&options).expect("draw should succeed") {
                None => absent += 1,
                Some(_) => present += 1,
            }
        }
        assert!(absent > 0, "expected at least one absent sample");
        assert!(present > 0, "expected at least one present sample");
    }
}
