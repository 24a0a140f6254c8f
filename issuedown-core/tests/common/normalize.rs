use issuedown_core::common::normalize::{normalize, PASSES};
use proptest::prelude::*;

#[test]
fn passes_run_in_documented_order() {
    let names: Vec<_> = PASSES.iter().map(|pass| pass.name).collect();
    assert_eq!(
        names,
        vec![
            "strip trailing whitespace",
            "bullet indent 4 → 2",
            "ordered indent 4 → 3",
            "single space after bullet",
            "single space after number",
            "bullets under ordered items",
        ]
    );
}

#[test]
fn rewrites_rule_walk_list_output() {
    let walked = "1.  Item 1\n    -   Nested Item 1\n    -   Nested Item 2\n2.  Item 2";
    assert_eq!(
        normalize(walked),
        "1. Item 1\n   - Nested Item 1\n   - Nested Item 2\n2. Item 2"
    );
}

#[test]
fn bullets_under_bullets_stay_at_two_spaces() {
    assert_eq!(normalize("-   a\n    -   b"), "- a\n  - b");
}

#[test]
fn leaves_prose_alone() {
    let prose = "A sentence - with a dash.\n\n3.14 is not a list item.";
    assert_eq!(normalize(prose), prose);
}

proptest! {
    #[test]
    fn normalize_is_idempotent(input in "[ \t\na-z0-9.*-]{0,80}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn no_line_ends_in_whitespace(input in "[ \t\na-z0-9.*-]{0,80}") {
        let output = normalize(&input);
        prop_assert!(output.lines().all(|line| !line.ends_with(' ') && !line.ends_with('\t')));
    }
}
