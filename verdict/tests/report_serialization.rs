//! The report types are the machine-readable surface of the engine; pin
//! their JSON shapes so downstream consumers can rely on them.

use verdict::{Category, Domain, FactOutcome, Investigation};

#[test]
fn fact_outcome_is_adjacently_tagged() {
    let mut case = Investigation::new(Domain::classic());
    let outcome = case.exclude_item(Category::Weapon, "Piano Wire").unwrap();
    assert!(matches!(outcome, FactOutcome::Added(_)));

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["outcome"], "added");
    assert_eq!(json["fact"]["Not"]["Symbol"], "W_Piano Wire");
}

#[test]
fn status_report_shape() {
    let mut case = Investigation::new(Domain::classic());
    case.exclude_item(Category::Suspect, "Lord Alaric").unwrap();
    case.exclude_item(Category::Suspect, "Lady Morgana").unwrap();

    let json = serde_json::to_value(case.status()).unwrap();
    assert_eq!(json["consistent"], true);
    assert_eq!(json["categories"][0]["category"], "suspect");
    assert_eq!(json["categories"][0]["entries"][0]["item"], "Butler Edwin");
    assert_eq!(
        json["categories"][0]["entries"][0]["classification"],
        "forced_true"
    );
}

#[test]
fn candidate_shape() {
    let case = Investigation::new(Domain::classic());
    let candidates = case.candidates().unwrap();
    let json = serde_json::to_value(&candidates[0]).unwrap();
    assert!(json["suspect"].is_string());
    assert!(json["weapon"].is_string());
    assert!(json["room"].is_string());
}
