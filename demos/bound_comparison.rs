//! Example: compare the two summand caps the engine chooses between.
//!
//! For each sampled n, prints the structural limit (from the inverse
//! growth bound) next to the estimated limit (from the Markov table).
//! Neither dominates across the whole range, which is why the engine
//! takes the minimum per n.
//!
//! Run with:
//! `cargo run --example bound_comparison`

use integer_complexity::bounds::growth::structural_summand_limit;
use integer_complexity::bounds::markov::MarkovTable;
use integer_complexity::bounds::summand::summand_limit;
use integer_complexity::ComplexityEngineBuilder;

fn main() {
    let n_max = 100_000;
    let run = ComplexityEngineBuilder::new(n_max).build().run();
    let markov = MarkovTable::build(n_max);

    println!("{:>8} {:>12} {:>12} {:>10}", "n", "structural", "estimated", "winner");
    for n in (1000..=n_max).step_by(7919) {
        let structural = structural_summand_limit(run.table.get(n - 1), n);
        let estimated = summand_limit(n, &markov);
        let winner = if estimated < structural {
            "estimated"
        } else {
            "structural"
        };
        println!("{n:>8} {structural:>12} {estimated:>12} {winner:>10}");
    }

    println!(
        "\nacross the full pass the estimator won {} of {} iterations",
        run.estimator_improvements,
        n_max - 1
    );
}
