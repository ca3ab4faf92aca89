// Integration tests for step navigation

use algostep::algorithms::{binary, bubble, linear, Algorithm, Step};
use algostep::input::validate;
use algostep::navigator::{Simulation, StepNavigator};

#[test]
fn test_backward_at_start_is_idempotent() {
    let mut nav = StepNavigator::new(linear::build(&[1.0, 2.0, 3.0], 3.0)).unwrap();
    for _ in 0..5 {
        assert!(!nav.backward());
        assert_eq!(nav.position(), 0);
        assert!(nav.at_start());
    }
}

#[test]
fn test_forward_at_end_is_idempotent() {
    let mut nav = StepNavigator::new(bubble::build(&[3.0, 1.0, 2.0])).unwrap();
    while nav.forward() {}
    let last = nav.total_steps() - 1;
    for _ in 0..5 {
        assert!(!nav.forward());
        assert_eq!(nav.position(), last);
        assert!(nav.at_end());
    }
    assert!(nav.current().done);
}

#[test]
fn test_round_trip_returns_to_same_step() {
    let mut nav = StepNavigator::new(binary::build(&[1.0, 2.0, 3.0, 4.0, 5.0], 5.0)).unwrap();
    let first = nav.current().clone();
    nav.forward();
    nav.forward();
    nav.backward();
    nav.backward();
    assert_eq!(*nav.current(), first);
}

#[test]
fn test_reset_loads_new_sequence() {
    let mut nav = StepNavigator::new(linear::build(&[1.0, 2.0], 9.0)).unwrap();
    nav.jump_to_end();
    nav.reset(linear::build(&[4.0, 5.0, 6.0], 4.0)).unwrap();

    assert!(nav.at_start());
    assert_eq!(nav.total_steps(), 1);
    assert!(nav.current().found);
}

#[test]
fn test_simulation_dispatches_each_algorithm() {
    let cases = [
        (Algorithm::LinearSearch, "4, 2, 7, 1, 9", Some("7"), 3),
        (Algorithm::BinarySearch, "1, 3, 5, 7, 9, 11, 13", Some("3"), 2),
        (Algorithm::BubbleSort, "1, 2", None, 3),
    ];

    for (algorithm, array, target, expected_steps) in cases {
        let input = validate(algorithm, array, target).unwrap();
        let mut sim = Simulation::start(&input).unwrap();

        assert_eq!(sim.algorithm(), algorithm);
        assert_eq!(sim.total_steps(), expected_steps);
        assert!(sim.at_start());

        sim.jump_to_end();
        assert!(sim.at_end());
        assert!(sim.current().is_done());
        assert!(!sim.forward());

        sim.jump_to_start();
        assert!(!sim.backward());
        assert_eq!(sim.position(), 0);
    }
}

#[test]
fn test_simulation_exposes_explanations_of_current_step() {
    let input = validate(Algorithm::LinearSearch, "4, 2, 7", Some("7")).unwrap();
    let mut sim = Simulation::start(&input).unwrap();

    assert_eq!(
        sim.current().explanation(),
        "Checking element at index 0: 4. Not a match, moving to the next element."
    );
    sim.jump_to_end();
    assert_eq!(
        sim.current().explanation(),
        "Element at index 2 is 7, which matches the target 7. Search complete!"
    );
}
