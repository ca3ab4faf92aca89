// Integration tests for the bubble sort step builder

use algostep::algorithms::bubble::{build, BubbleStep};

fn sorted_copy(array: &[f64]) -> Vec<f64> {
    let mut sorted = array.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

fn assert_trace_invariants(input: &[f64], steps: &[BubbleStep]) {
    let last = steps.last().unwrap();
    assert!(last.done);
    assert_eq!(last.sorted_upto, 0);
    assert_eq!(last.compared, None);
    assert_eq!(last.array, sorted_copy(input));

    assert!(steps.iter().all(|s| s.array.len() == input.len()));
    assert_eq!(steps.iter().filter(|s| s.done).count(), 1);

    for pair in steps.windows(2) {
        assert!(pair[1].sorted_upto <= pair[0].sorted_upto);
    }
}

#[test]
fn test_first_step_scenario() {
    let steps = build(&[5.0, 1.0, 4.0, 2.0, 8.0]);

    let first = &steps[0];
    assert_eq!(first.compared, Some((0, 1)));
    assert!(first.swapped);
    assert_eq!(first.array, vec![1.0, 5.0, 4.0, 2.0, 8.0]);
    assert_eq!((first.i, first.j), (Some(0), Some(0)));
    assert_eq!(first.sorted_upto, 5);
}

#[test]
fn test_full_trace_of_classic_example() {
    let input = [5.0, 1.0, 4.0, 2.0, 8.0];
    let steps = build(&input);

    // pass 0: 4 comparisons + boundary, pass 1: 3 + boundary,
    // pass 2: 2 + boundary with no swap, then terminal
    assert_eq!(steps.len(), 5 + 4 + 3 + 1);

    let boundaries: Vec<&BubbleStep> = steps.iter().filter(|s| s.j.is_none() && !s.done).collect();
    assert_eq!(boundaries.len(), 3);
    assert_eq!(boundaries[0].array, vec![1.0, 4.0, 2.0, 5.0, 8.0]);
    assert_eq!(boundaries[0].sorted_upto, 5);
    assert_eq!(boundaries[1].sorted_upto, 4);
    assert_eq!(boundaries[2].sorted_upto, 3);

    assert_trace_invariants(&input, &steps);
}

#[test]
fn test_already_sorted_runs_one_pass() {
    let input = [1.0, 2.0, 3.0, 4.0];
    let steps = build(&input);

    // 3 comparisons, boundary, terminal
    assert_eq!(steps.len(), 5);
    assert!(steps.iter().all(|s| !s.swapped));

    // boundary and terminal sit back to back
    let boundary = &steps[3];
    assert_eq!((boundary.j, boundary.compared, boundary.done), (None, None, false));
    assert!(steps[4].done);

    assert_trace_invariants(&input, &steps);
}

#[test]
fn test_equal_neighbours_never_swap() {
    let steps = build(&[2.0, 2.0, 1.0]);

    let first = &steps[0];
    assert_eq!(first.compared, Some((0, 1)));
    assert!(!first.swapped);
    assert_trace_invariants(&[2.0, 2.0, 1.0], &steps);
}

#[test]
fn test_each_step_shows_post_swap_state() {
    let steps = build(&[3.0, 2.0, 1.0]);
    for step in steps.iter().filter(|s| s.compared.is_some()) {
        let (left, right) = step.compared.unwrap();
        assert!(step.array[left] <= step.array[right]);
    }
}

#[test]
fn test_single_element() {
    let steps = build(&[7.0]);
    assert_eq!(steps.len(), 1);
    assert_trace_invariants(&[7.0], &steps);
}

#[test]
fn test_invariants_over_many_inputs() {
    let inputs: [&[f64]; 6] = [
        &[2.0, 1.0],
        &[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0],
        &[1.0, 3.0, 2.0, 3.0, 1.0],
        &[-0.5, 10.0, -20.0, 3.25],
        &[4.0, 4.0, 4.0, 4.0],
        &[1.0, 2.0, 3.0, 5.0, 4.0],
    ];

    for input in inputs {
        assert_trace_invariants(input, &build(input));
    }
}
