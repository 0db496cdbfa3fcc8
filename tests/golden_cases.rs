// Golden-file tests: known chat replies and the exact chunks they must produce
// WHY: Threshold tuning is only safe when every reviewed split stays byte-for-byte stable

mod integration;

use integration::{assert_chunks, split};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenCase {
    name: String,
    input: String,
    expected: Vec<String>,
}

fn load_cases() -> Vec<GoldenCase> {
    serde_json::from_str(include_str!("fixtures/golden.json")).expect("Failed to parse golden cases")
}

#[test]
fn test_golden_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty(), "Golden file should contain cases");

    for case in &cases {
        let actual = split(&case.input);
        assert_chunks(&actual, &case.expected, &case.name);
    }
}

#[test]
fn test_golden_case_names_are_unique() {
    let cases = load_cases();
    let mut names: Vec<&str> = cases.iter().map(|case| case.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), cases.len(), "Duplicate golden case name");
}
