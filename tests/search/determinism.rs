//! The same input always gives the same output, order included.
//!
//! Input order must not matter either: the entry point sorts before it
//! searches, so any permutation of the same values yields identical tuples.

use ksum::n_sum;

fn permutations_of(base: &[i64]) -> Vec<Vec<i64>> {
    let mut out = vec![base.to_vec()];
    let mut reversed = base.to_vec();
    reversed.reverse();
    out.push(reversed);
    for shift in 1..base.len() {
        let mut rotated = base.to_vec();
        rotated.rotate_left(shift);
        out.push(rotated);
    }
    out
}

#[test]
fn repeated_runs_are_identical() {
    let nums = vec![4, -2, 0, 7, -5, 3, 3, -1, 2, -6, 1];
    let mut first = nums.clone();
    let baseline = n_sum(&mut first, 4, 2);

    for _ in 0..10 {
        let mut again = nums.clone();
        assert_eq!(n_sum(&mut again, 4, 2), baseline);
    }
}

#[test]
fn input_order_does_not_change_output() {
    let base = [1, 0, -1, 0, -2, 2, 3, -3];
    let mut first = base.to_vec();
    let baseline = n_sum(&mut first, 3, 0);

    for mut perm in permutations_of(&base) {
        assert_eq!(n_sum(&mut perm, 3, 0), baseline, "input {:?}", perm);
    }
}
