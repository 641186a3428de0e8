use crate::bounds::markov::{MarkovTable, OracleRecord};
use crate::engine::ComplexityEngine;

/// Builds a [`ComplexityEngine`] with its bound table constructed in the
/// required order: Markov recurrence first, oracle merge second.
pub struct ComplexityEngineBuilder {
    n_max: u64,
    oracle: Vec<OracleRecord>,
}

impl ComplexityEngineBuilder {
    pub fn new(n_max: u64) -> Self {
        Self {
            n_max,
            oracle: Vec::new(),
        }
    }

    /// Add externally computed bounds to merge into the Markov table.
    pub fn with_oracle(mut self, records: impl IntoIterator<Item = OracleRecord>) -> Self {
        self.oracle.extend(records);
        self
    }

    pub fn build(self) -> ComplexityEngine<MarkovTable> {
        let mut bounds = MarkovTable::build(self.n_max);
        bounds.absorb_oracle(&self.oracle);
        ComplexityEngine::new(self.n_max, bounds)
    }
}
