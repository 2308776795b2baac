use proptest::prelude::*;
use verdict::{exactly_one, Category, Domain, Investigation, Model, Sentence};

const NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];

fn arb_sentence() -> impl Strategy<Value = Sentence> {
    let leaf = prop::sample::select(&NAMES[..]).prop_map(Sentence::symbol);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(Sentence::not),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Sentence::and),
            prop::collection::vec(inner, 1..4).prop_map(Sentence::or),
        ]
    })
}

fn arb_model() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), NAMES.len())
}

fn build_model(values: &[bool]) -> Model<'static> {
    let mut model = Model::new();
    for (name, &value) in NAMES.iter().zip(values) {
        model.set(name, value);
    }
    model
}

/// Count assignments over `names` satisfying every sentence.
fn satisfying_count(sentences: &[Sentence], names: &[String]) -> usize {
    let n = names.len();
    (0u32..(1 << n))
        .filter(|bits| {
            let mut model = Model::new();
            for (i, name) in names.iter().enumerate() {
                model.set(name, (bits >> i) & 1 == 1);
            }
            sentences.iter().all(|s| s.evaluate(&model))
        })
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_evaluate_is_deterministic(sentence in arb_sentence(), values in arb_model()) {
        let model = build_model(&values);
        prop_assert_eq!(sentence.evaluate(&model), sentence.evaluate(&model));
    }

    #[test]
    fn prop_structural_equality_survives_clone(sentence in arb_sentence()) {
        prop_assert_eq!(&sentence, &sentence.clone());
    }

    #[test]
    fn prop_double_negation_preserves_truth(sentence in arb_sentence(), values in arb_model()) {
        let model = build_model(&values);
        let doubled = Sentence::not(Sentence::not(sentence.clone()));
        prop_assert_eq!(sentence.evaluate(&model), doubled.evaluate(&model));
    }

    #[test]
    fn prop_exactly_one_holds_in_exactly_n_assignments(n in 1usize..=7) {
        let names: Vec<String> = (0..n).map(|i| format!("s{}", i)).collect();
        let symbols: Vec<Sentence> = names.iter().map(Sentence::symbol).collect();
        let axioms = exactly_one(&symbols);
        prop_assert_eq!(satisfying_count(&axioms, &names), n);
    }

    #[test]
    fn prop_guarded_operations_preserve_consistency_and_monotonicity(
        ops in prop::collection::vec((0usize..3, 0usize..3, any::<bool>()), 0..10)
    ) {
        let mut case = Investigation::new(Domain::classic());
        let mut previous = case.candidates().unwrap();

        for (cat_index, item_index, is_assertion) in ops {
            let category = Category::ALL[cat_index];
            let item = case.domain().items(category)[item_index].clone();

            if is_assertion {
                case.assert_item(category, &item).unwrap();
            } else {
                case.exclude_item(category, &item).unwrap();
            }

            // Guarded mutations can never make the knowledge base
            // unsatisfiable, so candidates stay available and only shrink.
            prop_assert!(case.is_consistent());
            let current = case.candidates().unwrap();
            prop_assert!(current.iter().all(|c| previous.contains(c)));
            previous = current;
        }
    }
}
