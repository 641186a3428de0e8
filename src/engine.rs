//! The pruned single-pass complexity engine.
//!
//! One forward pass over n = 2..=N. Each step combines:
//! 1. the predecessor bound `table[n-1] + 1`;
//! 2. additive splits `table[m] + table[n-m]`, with m capped by the tighter
//!    of the structural limit (inverse-growth bound) and the estimated
//!    limit (epsilon-biased summand exponent);
//! 3. multiplicative propagation `table[k·n] ≤ table[k] + table[n]`,
//!    written forward into indices not yet finalized.
//!
//! The forward product writes are read by later iterations' steps 1 and 2,
//! which is why the pass must visit n in strictly increasing order and why
//! it stays single-threaded.

use crate::bounds::growth::structural_summand_limit;
use crate::bounds::summand::summand_limit;
use crate::table::ComplexityTable;
use crate::traits::BoundSource;
use crate::utils::complexity_ceiling;

/// Single-pass engine computing exact complexities for 1..=N.
///
/// Typical usage:
/// ```
/// use integer_complexity::{bounds::markov::MarkovTable, ComplexityEngine};
///
/// let engine = ComplexityEngine::new(100, MarkovTable::build(100));
/// let run = engine.run();
/// assert_eq!(run.table.get(12), 7); // 12 = (1+1+1)·(1+1)·(1+1)
/// ```
pub struct ComplexityEngine<B> {
    n_max: u64,
    bounds: B,
}

/// Result of a full engine pass.
#[derive(Debug, Clone)]
pub struct ComplexityRun {
    /// Exact complexity for every n in 1..=N.
    pub table: ComplexityTable,
    /// How often the estimated summand limit beat the structural one.
    /// Diagnostic only; the algorithm always uses the minimum of the two.
    pub estimator_improvements: u64,
}

impl<B: BoundSource> ComplexityEngine<B> {
    /// Create an engine for 1..=n_max backed by a precomputed bound source.
    ///
    /// The source must cover at least 1..=n_max; the estimator queries it
    /// for every n the pass visits.
    ///
    /// # Panics
    /// Panics if `n_max == 0`.
    pub fn new(n_max: u64, bounds: B) -> Self {
        assert!(n_max >= 1, "engine needs a non-empty range");
        Self { n_max, bounds }
    }

    /// Largest n the pass will resolve.
    pub fn n_max(&self) -> u64 {
        self.n_max
    }

    /// Expose the backing bound source.
    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    /// Run the full pass.
    ///
    /// After return, `table[n]` is the exact integer complexity for every
    /// n in 1..=N: each step only reads fully-resolved entries below n and
    /// forward product writes from earlier steps.
    pub fn run(&self) -> ComplexityRun {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("complexity_run", n_max = self.n_max);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table =
            ComplexityTable::with_ceiling(self.n_max, complexity_ceiling(self.n_max));
        let mut estimator_improvements = 0u64;

        for n in 2..=self.n_max {
            let predecessor = table.get(n - 1);
            table.improve(n, predecessor + 1);

            let structural = structural_summand_limit(predecessor, n);
            let estimated = summand_limit(n, &self.bounds);
            if estimated < structural {
                estimator_improvements += 1;
            }
            let limit = structural.min(estimated);

            // Splits below 6 never help: those complexities are base cases
            // already folded into the initialization.
            for m in 6..=limit {
                let candidate = table.get(m) + table.get(n - m);
                table.improve(n, candidate);
            }

            let c_n = table.get(n);
            for k in 2..=n.min(self.n_max / n) {
                let candidate = table.get(k) + c_n;
                table.improve(k * n, candidate);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(estimator_improvements, "pass complete");

        ComplexityRun {
            table,
            estimator_improvements,
        }
    }
}
