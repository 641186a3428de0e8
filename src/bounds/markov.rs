//! Markov-chain upper bounds on complexity, plus the oracle merge.
//!
//! The recurrence classifies n by its residue mod 6 and charges a fixed
//! cost to step down to a strictly smaller argument, so a single forward
//! fill over 1..=N resolves every entry. An externally computed oracle
//! table (a greedy algorithm run in an unrelated numeral base) can then
//! tighten individual entries pointwise.

use crate::traits::BoundSource;

/// One externally computed `(n, bound)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleRecord {
    pub n: u64,
    pub bound: u32,
}

impl From<(u64, u64)> for OracleRecord {
    fn from((n, bound): (u64, u64)) -> Self {
        Self {
            n,
            bound: bound as u32,
        }
    }
}

/// Per-n upper bounds from the mod-6 recurrence, indexed 1..=n_max.
///
/// Built once before the main pass; read-only afterwards except through
/// [`absorb_oracle`](MarkovTable::absorb_oracle). Safe to share across
/// threads once merged.
#[derive(Debug, Clone)]
pub struct MarkovTable {
    // bounds[n] for n in 1..=n_max; slot 0 is unused.
    bounds: Vec<u32>,
}

impl MarkovTable {
    /// Build the table over 1..=n_max with a forward fill.
    ///
    /// Every entry for n > 5 depends on an index strictly below n, so the
    /// increasing fill order guarantees each recursive argument is already
    /// resolved. An explicit loop rather than recursion with a cache: at
    /// N in the millions, call depth would be a liability.
    ///
    /// # Panics
    /// Panics if `n_max == 0`.
    pub fn build(n_max: u64) -> Self {
        assert!(n_max >= 1, "table must cover at least n = 1");
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("markov_build", n_max);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut bounds = vec![0u32; n_max as usize + 1];
        for n in 1..=n_max.min(5) {
            bounds[n as usize] = n as u32;
        }
        for n in 6..=n_max {
            let i = n as usize;
            bounds[i] = match n % 6 {
                0 | 3 => 3 + bounds[i / 3],
                1 => 4 + bounds[(i - 1) / 3],
                2 | 4 => 2 + bounds[i / 2],
                5 => 3 + bounds[(i - 1) / 2],
                _ => unreachable!(),
            };
        }
        Self { bounds }
    }

    /// Largest n covered.
    #[inline]
    pub fn n_max(&self) -> u64 {
        self.bounds.len() as u64 - 1
    }

    /// Tighten entries pointwise with externally computed bounds.
    ///
    /// Each record with 5 < n < n_max lowers `bounds[n]` when it improves
    /// on the recurrence; records outside that range are expected and
    /// silently skipped. Taking the pointwise minimum makes the merge
    /// idempotent and order-insensitive.
    pub fn absorb_oracle(&mut self, records: &[OracleRecord]) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("oracle_merge", records = records.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let n_max = self.n_max();
        for record in records {
            if record.n > 5 && record.n < n_max {
                let slot = &mut self.bounds[record.n as usize];
                if *slot > record.bound {
                    *slot = record.bound;
                }
            }
        }
    }
}

impl BoundSource for MarkovTable {
    /// # Panics
    /// Panics if `n` is outside 1..=n_max.
    #[inline]
    fn bound(&self, n: u64) -> u32 {
        debug_assert!(n >= 1, "bound is undefined for n = 0");
        self.bounds[n as usize]
    }
}
