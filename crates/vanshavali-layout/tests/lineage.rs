use vanshavali_data::{bundled_dataset, Dataset};
use vanshavali_layout::{
    resolve_ancestors, resolve_children, resolve_lineage, GraphIndex, IndexError, LineageError,
};

fn family() -> GraphIndex {
    GraphIndex::build(bundled_dataset().expect("bundled dataset")).expect("index build failed")
}

#[test]
fn decoration_edges_are_not_adjacency() {
    let index = family();
    assert_eq!(index.parent_of("1"), None);
    assert!(index.children_of("veda").is_empty());
    let roots: Vec<_> = index.roots().map(|person| person.id.as_str()).collect();
    assert_eq!(roots, vec!["1"]);
}

#[test]
fn children_follow_edge_order() {
    let index = family();
    assert_eq!(index.children_of("1"), ["2", "3", "4", "5"]);
    assert_eq!(resolve_children(&index, "4"), vec!["6", "7", "8", "9", "10"]);
    assert!(resolve_children(&index, "177").is_empty());
}

#[test]
fn ancestors_run_root_first() {
    let index = family();
    let ancestors = resolve_ancestors(&index, "177").expect("resolve failed");
    assert_eq!(
        ancestors,
        vec!["1", "3", "14", "102", "137", "146", "162", "174"]
    );
    assert_eq!(ancestors.last().map(String::as_str), index.parent_of("177"));
    assert_eq!(index.parent_of(&ancestors[0]), None);
}

#[test]
fn root_has_no_ancestors() {
    let index = family();
    assert!(resolve_ancestors(&index, "1").expect("resolve failed").is_empty());
}

#[test]
fn lineage_of_first_generation() {
    let index = family();
    let lineage = resolve_lineage(&index, "3").expect("resolve failed");
    assert_eq!(lineage.ancestors, vec!["1"]);
    assert_eq!(lineage.target, "3");
    assert_eq!(lineage.children, vec!["11", "12", "13", "14"]);
    assert!(lineage.contains("14"));
    assert!(!lineage.contains("2"));
    assert_eq!(lineage.path().collect::<Vec<_>>(), vec!["1", "3"]);
}

#[test]
fn decoration_and_unknown_ids_are_invalid_targets() {
    let index = family();
    assert_eq!(
        resolve_lineage(&index, "veda").unwrap_err(),
        LineageError::InvalidTarget("veda".to_string())
    );
    assert!(matches!(
        resolve_lineage(&index, "nobody"),
        Err(LineageError::InvalidTarget(_))
    ));
}

#[test]
fn rejects_second_parent_at_build() {
    let mut dataset = Dataset::new();
    dataset
        .add_person("a", "A", 0.0, 0.0)
        .add_person("b", "B", 0.0, 0.0)
        .add_person("c", "C", 0.0, 0.0)
        .add_edge("a", "c")
        .add_edge("b", "c");
    let err = GraphIndex::build(dataset).unwrap_err();
    match err {
        IndexError::MultipleParents { child, first, second } => {
            assert_eq!(child, "c");
            assert_eq!(first, "a");
            assert_eq!(second, "b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn detects_cycles_instead_of_looping() {
    let mut dataset = Dataset::new();
    dataset
        .add_person("a", "A", 0.0, 0.0)
        .add_person("b", "B", 0.0, 0.0)
        .add_person("c", "C", 0.0, 0.0)
        .add_edge("a", "b")
        .add_edge("b", "c")
        .add_edge("c", "a");
    let index = GraphIndex::build(dataset).expect("single parents only");
    let err = resolve_ancestors(&index, "b").unwrap_err();
    assert!(matches!(err, LineageError::Cycle { ref start, .. } if start == "b"));
}

#[test]
fn self_parent_is_a_cycle() {
    let mut dataset = Dataset::new();
    dataset.add_person("a", "A", 0.0, 0.0).add_edge("a", "a");
    let index = GraphIndex::build(dataset).expect("single parent");
    assert!(matches!(
        resolve_lineage(&index, "a"),
        Err(LineageError::Cycle { .. })
    ));
}
