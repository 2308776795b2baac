use crate::constraints::exactly_one;
use crate::logic::{Model, Sentence};

fn symbols(n: usize) -> Vec<Sentence> {
    (0..n).map(|i| Sentence::symbol(format!("s{}", i))).collect()
}

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("s{}", i)).collect()
}

/// Count assignments over n symbols satisfying every axiom.
fn satisfying_count(axioms: &[Sentence], n: usize) -> usize {
    let names = names(n);
    (0u32..(1 << n))
        .filter(|bits| {
            let mut model = Model::new();
            for (i, name) in names.iter().enumerate() {
                model.set(name, (bits >> i) & 1 == 1);
            }
            axioms.iter().all(|s| s.evaluate(&model))
        })
        .count()
}

#[test]
fn test_formula_count_is_pairs_plus_one() {
    for n in 1..=6 {
        let axioms = exactly_one(&symbols(n));
        assert_eq!(axioms.len(), n * (n - 1) / 2 + 1);
    }
}

#[test]
fn test_single_symbol() {
    let sym = symbols(1);
    let axioms = exactly_one(&sym);
    assert_eq!(axioms, vec![Sentence::or(vec![Sentence::symbol("s0")])]);
    assert_eq!(satisfying_count(&axioms, 1), 1);
}

#[test]
fn test_exactly_n_of_two_to_the_n_assignments_satisfy() {
    for n in 1..=6 {
        let axioms = exactly_one(&symbols(n));
        assert_eq!(satisfying_count(&axioms, n), n, "n = {}", n);
    }
}

#[test]
fn test_all_false_rejected() {
    let axioms = exactly_one(&symbols(3));
    let model = Model::new();
    assert!(!axioms.iter().all(|s| s.evaluate(&model)));
}

#[test]
fn test_two_true_rejected() {
    let axioms = exactly_one(&symbols(3));
    let mut model = Model::new();
    model.set("s0", true);
    model.set("s2", true);
    assert!(!axioms.iter().all(|s| s.evaluate(&model)));
}

#[test]
fn test_is_pure() {
    let sym = symbols(4);
    assert_eq!(exactly_one(&sym), exactly_one(&sym));
}
