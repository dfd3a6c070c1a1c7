//! Baseline filters without sparse tables.
//!
//! These exist as correctness oracles and benchmark reference points for
//! the table-backed strategies: two quadratic scans over the output
//! built so far, and a hash-set filter. All three produce exactly the
//! same output as the sparse tables.
//!
//! The callers guarantee a non-empty input; these routines themselves
//! are total over any slice.

use rustc_hash::FxHashSet;

/// Quadratic scan: each value is checked against every value already in
/// the output.
pub(crate) fn brute_force(input: &[i32]) -> Vec<i32> {
    let mut output: Vec<i32> = Vec::with_capacity(input.len());
    for &value in input {
        if !output.contains(&value) {
            output.push(value);
        }
    }
    output
}

/// Quadratic scan with incremental max/min bookkeeping.
///
/// The trackers admit two sound shortcuts: a value beyond the running
/// maximum or minimum cannot have occurred before (append without
/// scanning), and a value equal to either tracker has certainly occurred
/// (suppress without scanning). Everything in between falls back to the
/// full scan, so the output is identical to [`brute_force`] for every
/// input.
pub(crate) fn brute_force_tracked(input: &[i32]) -> Vec<i32> {
    let mut output: Vec<i32> = Vec::with_capacity(input.len());
    let Some((&first, rest)) = input.split_first() else {
        return output;
    };
    output.push(first);
    let mut max_seen = first;
    let mut min_seen = first;
    for &value in rest {
        if value == max_seen || value == min_seen {
            continue;
        }
        if value > max_seen {
            max_seen = value;
            output.push(value);
            continue;
        }
        if value < min_seen {
            min_seen = value;
            output.push(value);
            continue;
        }
        if !output.contains(&value) {
            output.push(value);
        }
    }
    output
}

/// Associative-set filter: the trusted reference the sparse strategies
/// are verified against.
pub(crate) fn hash_set(input: &[i32]) -> Vec<i32> {
    let mut seen = FxHashSet::default();
    let mut output: Vec<i32> = Vec::with_capacity(input.len());
    for &value in input {
        if seen.insert(value) {
            output.push(value);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{brute_force, brute_force_tracked, hash_set};

    const MIXED: [i32; 10] = [16, 17, 2, 17, 4, 2, 97, 4, 17, 56];

    #[test]
    fn baselines_agree_on_a_mixed_sequence() {
        let expected = vec![16, 17, 2, 4, 97, 56];
        assert_eq!(brute_force(&MIXED), expected);
        assert_eq!(brute_force_tracked(&MIXED), expected);
        assert_eq!(hash_set(&MIXED), expected);
    }

    #[test]
    fn tracked_scan_handles_repeated_extremes() {
        // Max and min repeat; the equality shortcut must suppress them.
        let input = [5, -3, 5, -3, 0, 5];
        assert_eq!(brute_force_tracked(&input), vec![5, -3, 0]);
    }

    #[test]
    fn tracked_scan_handles_interior_duplicates() {
        // Values strictly between the trackers take the scan path.
        let input = [10, -10, 3, 3, 7, 3];
        assert_eq!(brute_force_tracked(&input), vec![10, -10, 3, 7]);
    }
}
