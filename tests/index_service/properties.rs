//! Property tests: random operation sequences checked against a model map.

use crate::common::*;
use proptest::prelude::*;
use std::collections::HashMap;

type Parts = (String, String, String, String);

#[derive(Debug, Clone)]
enum Op {
    Create(Parts, String),
    Update(Parts, String),
    Delete(Parts),
    Search(Parts),
}

fn parts() -> impl Strategy<Value = Parts> {
    // Small alphabet so sequences hit the same keys often; no delimiter
    let part = || "[ab]{1,2}";
    (part(), part(), part(), part())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (parts(), "[a-z]{0,4}").prop_map(|(k, v)| Op::Create(k, v)),
        (parts(), "[a-z]{0,4}").prop_map(|(k, v)| Op::Update(k, v)),
        parts().prop_map(Op::Delete),
        parts().prop_map(Op::Search),
    ]
}

fn search(index: &IndexService, k: &Parts) -> Result<String> {
    index.search(&k.0, &k.1, &k.2, &k.3)
}

fn exists(index: &IndexService, k: &Parts) -> bool {
    index.exists(&k.0, &k.1, &k.2, &k.3).unwrap()
}

proptest! {
    #[test]
    fn operations_match_model(ops in prop::collection::vec(op(), 1..60)) {
        let index = IndexService::in_memory();
        let mut model: HashMap<Parts, String> = HashMap::new();

        for op in ops {
            match op {
                Op::Create(k, v) => {
                    index.create(&k.0, &k.1, &k.2, &k.3, &v).unwrap();
                    model.entry(k).or_insert(v);
                }
                Op::Update(k, v) => {
                    let result = index.update(&k.0, &k.1, &k.2, &k.3, &v);
                    if let Some(slot) = model.get_mut(&k) {
                        prop_assert!(result.is_ok());
                        *slot = v;
                    } else {
                        prop_assert!(result.unwrap_err().is_not_found());
                        prop_assert!(!exists(&index, &k));
                    }
                }
                Op::Delete(k) => {
                    index.delete(&k.0, &k.1, &k.2, &k.3).unwrap();
                    model.remove(&k);
                    prop_assert!(search(&index, &k).unwrap_err().is_not_found());
                }
                Op::Search(k) => match model.get(&k) {
                    Some(v) => prop_assert_eq!(&search(&index, &k).unwrap(), v),
                    None => prop_assert!(search(&index, &k).unwrap_err().is_not_found()),
                },
            }
        }
    }

    #[test]
    fn create_twice_keeps_first_value(k in parts(), v1 in "[a-z]{1,6}", v2 in "[a-z]{1,6}") {
        let index = IndexService::in_memory();

        index.create(&k.0, &k.1, &k.2, &k.3, &v1).unwrap();
        index.create(&k.0, &k.1, &k.2, &k.3, &v2).unwrap();

        prop_assert_eq!(search(&index, &k).unwrap(), v1);
    }

    #[test]
    fn exists_agrees_with_search(
        written in prop::collection::vec(parts(), 0..10),
        probe in parts(),
    ) {
        let index = IndexService::in_memory();
        for k in &written {
            index.create(&k.0, &k.1, &k.2, &k.3, "v").unwrap();
        }

        let found = !matches!(search(&index, &probe), Err(ref e) if e.is_not_found());
        prop_assert_eq!(exists(&index, &probe), found);
    }
}
