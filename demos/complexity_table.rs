//! Example: compute and print a small complexity table.
//!
//! Run with:
//! `cargo run --example complexity_table`

use integer_complexity::ComplexityEngineBuilder;

fn main() {
    let n_max = 1000;
    let run = ComplexityEngineBuilder::new(n_max).build().run();

    println!("integer complexities for 1..=30:");
    for n in 1..=30 {
        println!("  {n:>3} -> {}", run.table.get(n));
    }

    // Record-setting values: the first n to need each complexity.
    println!("\nfirst n attaining each complexity up to {n_max}:");
    let mut record = 0;
    for (n, c) in run.table.iter() {
        if c > record {
            record = c;
            println!("  complexity {c:>2} first at n = {n}");
        }
    }

    println!(
        "\nestimated summand bound beat the structural one {} times",
        run.estimator_improvements
    );
}
