//! Upper-bound estimators that prune the main complexity pass.
//!
//! Three independently derived estimates cooperate:
//! - [`growth`]  : the largest value reachable at a given complexity budget,
//!   and the structural summand limit derived from it.
//! - [`markov`]  : a mod-6 recurrence table of per-n upper bounds, optionally
//!   tightened by externally computed oracle records.
//! - [`summand`] : an epsilon-biased exponent converting a [`markov`] bound
//!   into a cap on how many additive splits are worth checking.
//!
//! The engine takes the tighter of the structural and estimated caps on
//! every iteration; neither dominates the other across the whole range.

pub mod growth;
pub mod markov;
pub mod summand;
