use bikeshare::core::stats::mode::{mode, mode_lowest, tally, value_counts};

#[test]
fn test_mode_picks_most_frequent() {
    assert_eq!(mode(["a", "b", "b", "c"]), Some("b"));
}

#[test]
fn test_mode_tie_goes_to_first_occurrence() {
    // "y" and "x" both appear twice; "y" is seen first
    assert_eq!(mode(["y", "x", "x", "y", "z"]), Some("y"));
    // same input, same answer
    assert_eq!(mode(["y", "x", "x", "y", "z"]), Some("y"));
    // reversed order flips the winner
    assert_eq!(mode(["z", "y", "x", "x", "y"]), Some("x"));
}

#[test]
fn test_mode_lowest_tie_goes_to_lowest_value() {
    assert_eq!(mode_lowest([5u32, 1, 5, 1, 3]), Some(1));
    assert_eq!(mode_lowest([17u32, 8, 8, 17]), Some(8));
    assert_eq!(mode_lowest([6u32, 6, 2]), Some(6));
}

#[test]
fn test_mode_of_empty_input_is_none() {
    assert_eq!(mode(Vec::<String>::new()), None);
    assert_eq!(mode_lowest(Vec::<u32>::new()), None);
}

#[test]
fn test_tally_keeps_first_occurrence_order() {
    let counts = tally(["b", "a", "b", "c", "a", "b"]);
    assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
}

#[test]
fn test_value_counts_sorted_descending_stable_on_ties() {
    let counts = value_counts(["Customer", "Subscriber", "Subscriber", "Dependent", "Customer", "Subscriber"]);
    assert_eq!(
        counts,
        vec![("Subscriber", 3), ("Customer", 2), ("Dependent", 1)]
    );

    let tied = value_counts(["Male", "Female", "Female", "Male"]);
    assert_eq!(tied, vec![("Male", 2), ("Female", 2)]);
}
