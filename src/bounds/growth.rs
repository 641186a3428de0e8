//! Inverse growth bound: the largest integer reachable at a given
//! complexity budget.
//!
//! Complexity grows by 3 per factor-of-3 step and by 2 per factor-of-2
//! step, so the extremal shape is "as many 3s as possible, then 2s". The
//! derived [`structural_summand_limit`] is one of the two caps on the
//! engine's additive-split scan.

/// Largest n with complexity(n) ≤ `budget`.
///
/// Spends the budget on factor-of-3 steps while at least 5 (or exactly 3)
/// remains, then converts the leftover (0, 1, 2, or 4) into factor-of-2
/// steps. Leftover 1 buys nothing.
///
/// ```
/// use integer_complexity::bounds::growth::max_value_for_complexity;
///
/// assert_eq!(max_value_for_complexity(3), 3);
/// assert_eq!(max_value_for_complexity(5), 6);
/// assert_eq!(max_value_for_complexity(11), 54);
/// ```
#[inline]
pub fn max_value_for_complexity(budget: u32) -> u64 {
    let mut remaining = budget;
    let mut result: u64 = 1;
    while remaining >= 5 || remaining == 3 {
        result *= 3;
        remaining -= 3;
    }
    result << (remaining / 2)
}

/// Cap on the additive splits m = 6..=limit worth checking for n, derived
/// from the complexity of n's predecessor.
///
/// Walks k down from `target / 2` until the two halves of a k/(target-k)
/// budget split can jointly reach n; values above
/// `max_value_for_complexity(k)` at that point cannot participate in any
/// split that beats the predecessor bound. The scan is linear on purpose:
/// its exact stopping point decides which splits are examined.
///
/// `target` must be the current table bound for n-1; that invariant keeps
/// `max_value_for_complexity(target) ≥ n - 1`, so k never underflows. A
/// violated invariant panics in the decrement, which is the desired
/// fail-loud behavior for an ordering bug.
pub fn structural_summand_limit(target: u32, n: u64) -> u64 {
    let mut k = target / 2;
    while max_value_for_complexity(k) + max_value_for_complexity(target - k) < n {
        k -= 1;
    }
    max_value_for_complexity(k)
}
