use super::*;
use crate::state::flow::RESULT_P_VALUE;

#[test]
fn significance_note_reports_constant_result_as_significant() {
    assert_eq!(significance_note(RESULT_P_VALUE), "p < 0.05 (Significant Result)");
}

#[test]
fn significance_note_handles_threshold() {
    assert_eq!(significance_note(0.05), "p ≥ 0.05 (Not Significant)");
}

#[test]
fn input_features_are_numbered_in_order() {
    let symbols = INPUT_FEATURES.iter().map(|(symbol, _)| *symbol).collect::<Vec<_>>();
    assert_eq!(symbols, vec!["x₁", "x₂", "x₃"]);
    assert_eq!(INPUT_FEATURES[0].1, "Your cuteness");
}
