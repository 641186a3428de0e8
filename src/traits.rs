//! Core trait definitions.
//!
//! The engine does not care where its precomputed upper bounds come from:
//! the Markov recurrence table, the same table tightened by oracle records,
//! or a synthetic table in a test all look the same through [`BoundSource`].

/// A precomputed upper bound on complexity(n), queryable per n.
///
/// Implementations must return a value that is **never below** the true
/// integer complexity of `n`; a too-small bound makes the summand estimator
/// drop splits the engine still needs, which corrupts the final table
/// rather than slowing it down.
///
/// Lookups outside the range the source was built for are a programmer
/// error and should panic.
pub trait BoundSource {
    /// Upper bound on complexity(n).
    fn bound(&self, n: u64) -> u32;
}

impl<B: BoundSource + ?Sized> BoundSource for &B {
    fn bound(&self, n: u64) -> u32 {
        (**self).bound(n)
    }
}
