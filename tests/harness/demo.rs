//! The built-in demo cases.

use mergesort::harness::{demo_cases, run_demo};
use mergesort::{render_listing, Sorter, Strategy};

#[test]
fn demo_has_seven_cases_in_order() {
    let names: Vec<&str> = demo_cases().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Random Array",
            "Already Sorted",
            "Reverse Sorted",
            "Array with Duplicates",
            "Single Element",
            "Empty Array",
            "Larger Array",
        ]
    );
}

#[test]
fn demo_originals_are_untouched_listings() {
    for (case, outcome) in demo_cases().iter().zip(run_demo(&Sorter::new())) {
        assert_eq!(outcome.original, render_listing(&case.values));
    }
}

#[test]
fn demo_bottom_up_stats() {
    let outcomes = run_demo(&Sorter::with_strategy(Strategy::BottomUp));
    let larger = &outcomes[6];
    assert_eq!(larger.sorted, "3 9 10 27 38 43 82");
    assert_eq!(larger.stats.strategy, Strategy::BottomUp);
    assert_eq!(larger.stats.merges, 6);
    assert_eq!(larger.stats.max_depth, 3);
}

#[test]
fn demo_trivial_cases_do_no_work() {
    let outcomes = run_demo(&Sorter::new());
    for outcome in &outcomes[4..6] {
        assert_eq!(outcome.stats.merges, 0, "{}", outcome.name);
        assert_eq!(outcome.stats.elements_copied, 0, "{}", outcome.name);
    }
}
