use crate::domain::{Category, Domain, MAX_UNIVERSE_SYMBOLS};
use crate::error::VerdictError;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_classic_domain() {
    let domain = Domain::classic();
    assert_eq!(domain.universe_size(), 9);
    assert_eq!(domain.items(Category::Suspect).len(), 3);
    assert!(domain.contains(Category::Weapon, "Piano Wire"));
    assert!(!domain.contains(Category::Room, "Piano Wire"));
}

#[test]
fn test_universe_order_and_tags() {
    let domain = Domain::new(names(&["a", "b"]), names(&["c"]), names(&["d"])).unwrap();
    assert_eq!(domain.universe(), vec!["S_a", "S_b", "W_c", "R_d"]);
}

#[test]
fn test_empty_category_rejected() {
    let err = Domain::new(names(&[]), names(&["c"]), names(&["d"])).unwrap_err();
    assert_eq!(err, VerdictError::EmptyCategory(Category::Suspect));
}

#[test]
fn test_duplicate_within_category_rejected() {
    let err = Domain::new(names(&["a", "a"]), names(&["c"]), names(&["d"])).unwrap_err();
    assert_eq!(err, VerdictError::DuplicateItem("a".to_string()));
}

#[test]
fn test_duplicate_across_categories_rejected() {
    let err = Domain::new(names(&["a"]), names(&["a"]), names(&["d"])).unwrap_err();
    assert_eq!(err, VerdictError::DuplicateItem("a".to_string()));
}

#[test]
fn test_oversized_universe_rejected() {
    let many: Vec<String> = (0..MAX_UNIVERSE_SYMBOLS).map(|i| format!("s{}", i)).collect();
    let err = Domain::new(many, names(&["w"]), names(&["r"])).unwrap_err();
    assert_eq!(
        err,
        VerdictError::UniverseTooLarge {
            size: MAX_UNIVERSE_SYMBOLS + 2,
            max: MAX_UNIVERSE_SYMBOLS,
        }
    );
}

#[test]
fn test_json_round_trip() {
    let domain = Domain::classic();
    let json = serde_json::to_string(&domain).unwrap();
    let back: Domain = serde_json::from_str(&json).unwrap();
    assert_eq!(domain, back);
}

#[test]
fn test_deserialization_validates() {
    let json = r#"{"suspects":["a","a"],"weapons":["w"],"rooms":["r"]}"#;
    assert!(serde_json::from_str::<Domain>(json).is_err());

    let json = r#"{"suspects":["a"],"weapons":[],"rooms":["r"]}"#;
    assert!(serde_json::from_str::<Domain>(json).is_err());
}

#[test]
fn test_deserialization_rejects_unknown_fields() {
    let json = r#"{"suspects":["a"],"weapons":["w"],"rooms":["r"],"motives":["m"]}"#;
    assert!(serde_json::from_str::<Domain>(json).is_err());
}
