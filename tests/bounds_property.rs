use integer_complexity::bounds::growth::{max_value_for_complexity, structural_summand_limit};
use integer_complexity::bounds::markov::{MarkovTable, OracleRecord};
use integer_complexity::bounds::summand::summand_limit;
use integer_complexity::{BoundSource, ComplexityEngine, ComplexityEngineBuilder};
use proptest::prelude::*;

/// Unpruned O(n²) reference: every additive split, every divisor pair.
fn reference_table(n_max: u64) -> Vec<u32> {
    let n_max = n_max as usize;
    let mut c = vec![0u32; n_max + 1];
    c[1] = 1;
    for n in 2..=n_max {
        let mut best = c[n - 1] + 1;
        for m in 1..=n / 2 {
            best = best.min(c[m] + c[n - m]);
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                best = best.min(c[d] + c[n / d]);
            }
            d += 1;
        }
        c[n] = best;
    }
    c
}

#[test]
fn growth_bound_inverts_complexity() {
    // max_value_for_complexity(c) is the largest n whose true complexity
    // is at most c: check both directions against the reference table.
    let reference = reference_table(1000);
    for budget in 1..=18u32 {
        let reach = max_value_for_complexity(budget);
        if reach <= 1000 {
            assert!(
                reference[reach as usize] <= budget,
                "claimed reach {reach} not attainable with budget {budget}"
            );
            if reach < 1000 {
                assert!(
                    reference[reach as usize + 1] > budget,
                    "budget {budget} reaches past {reach}"
                );
            }
        }
    }
}

#[test]
fn markov_bounds_dominate_truth() {
    let table = MarkovTable::build(2000);
    let reference = reference_table(2000);
    for n in 1..=2000u64 {
        assert!(
            table.bound(n) >= reference[n as usize],
            "markov bound at {n} dips below the true complexity"
        );
    }
}

#[test]
fn split_cap_stays_inside_the_table() {
    // The engine indexes table[n - m] for every m up to the cap, so the
    // cap must stay strictly below n. (Whether the cap also keeps every
    // *needed* split is covered by the reference-equality tests.)
    let reference = reference_table(2000);
    let markov = MarkovTable::build(2000);
    for n in 6..=2000u64 {
        let cap = summand_limit(n, &markov)
            .min(structural_summand_limit(reference[n as usize - 1], n));
        assert!(cap >= 1, "degenerate cap at {n}");
        assert!(cap < n, "cap at {n} would index out of the table");
    }
}

#[test]
fn true_complexities_as_oracle_change_nothing() {
    // Merging exact values is the strongest admissible oracle; results
    // must stay identical to the plain run.
    let reference = reference_table(600);
    let records: Vec<OracleRecord> = (6..600u64)
        .map(|n| OracleRecord {
            n,
            bound: reference[n as usize],
        })
        .collect();
    let plain = ComplexityEngineBuilder::new(600).build().run();
    let oracled = ComplexityEngineBuilder::new(600)
        .with_oracle(records)
        .build()
        .run();
    for n in 1..=600 {
        assert_eq!(plain.table.get(n), oracled.table.get(n));
        assert_eq!(plain.table.get(n), reference[n as usize]);
    }
}

#[test]
fn oracle_can_only_help_the_estimator() {
    // A tighter bound table can only lower the estimated summand limit,
    // so the improvement counter never decreases when an oracle is added.
    let reference = reference_table(600);
    let records: Vec<OracleRecord> = (6..600u64)
        .map(|n| OracleRecord {
            n,
            bound: reference[n as usize],
        })
        .collect();
    let plain = ComplexityEngineBuilder::new(600).build().run();
    let oracled = ComplexityEngineBuilder::new(600)
        .with_oracle(records)
        .build()
        .run();
    assert!(oracled.estimator_improvements >= plain.estimator_improvements);
}

proptest! {
    #[test]
    fn growth_bound_is_monotone(budget in 0u32..60) {
        prop_assert!(
            max_value_for_complexity(budget + 1) >= max_value_for_complexity(budget)
        );
    }

    #[test]
    fn structural_limit_never_underflows(target in 1u32..40) {
        // For any n the invariant admits, the scan terminates at k >= 0.
        let n = max_value_for_complexity(target) + 1;
        let limit = structural_summand_limit(target, n);
        prop_assert!(limit >= 1);
    }

    #[test]
    fn engine_agrees_with_markov_only_source(n_max in 6u64..250) {
        // The engine must produce the same table whichever admissible
        // bound source backs the estimator.
        let markov = ComplexityEngine::new(n_max, MarkovTable::build(n_max)).run();
        let reference = reference_table(n_max);
        for n in 1..=n_max {
            prop_assert_eq!(markov.table.get(n), reference[n as usize]);
        }
    }
}
