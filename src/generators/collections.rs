//! Collection-oriented generators.

use std::fmt::Debug;

use proptest::prelude::*;

use super::combinators::Generator;

/// Printable-ASCII strings up to `max_len` characters, empty included.
pub fn string_values(max_len: usize) -> Generator<String> {
    assert!(max_len > 0, "max_len must be > 0");
    Generator::new(
        proptest::string::string_regex(&format!("[ -~]{{0,{max_len}}}"))
            .expect("printable-ascii regex should compile"),
    )
}

/// Vectors of `element` values up to `max_len` elements, empty included.
pub fn vec_values<A>(element: Generator<A>, max_len: usize) -> Generator<Vec<A>>
where
    A: Debug + 'static,
{
    assert!(max_len > 0, "max_len must be > 0");
    element.vec_of(0..=max_len)
}
