//! Deterministic value generators feeding the law suite.
//!
//! A [`Generator`] describes how to produce values of one type; a
//! [`SampleSource`] draws from generators deterministically given a seed.
//! Restarting a source means reseeding it, never resuming mid-sequence.

pub mod collections;
pub mod combinators;
pub mod numeric;
pub mod source;

pub use combinators::{Generator, pair};
pub use source::{DEFAULT_SEED, DrawError, SampleSource};
