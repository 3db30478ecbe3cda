use super::*;

fn edge(from: &str, to: &str) -> Migration {
    Migration::new(from, to, format!("-- {from} to {to}")).unwrap()
}

fn hops(path: &[Migration]) -> Vec<(&str, &str)> {
    path.iter()
        .map(|m| (m.origin.as_str(), m.destination.as_str()))
        .collect()
}

#[test]
fn test_shortcut_preferred_over_chain() {
    let graph = MigrationGraph::build(vec![
        edge("", "v1"),
        edge("v1", "v2"),
        edge("v2", "v3"),
        edge("v3", "v4"),
        edge("", "v3"),
    ]);

    let path = graph.find_path("", "v4").unwrap();
    assert_eq!(hops(&path), vec![("", "v3"), ("v3", "v4")]);
}

#[test]
fn test_shortcut_preferred_regardless_of_enumeration_order() {
    let graph = MigrationGraph::build(vec![
        edge("", "v3"),
        edge("v3", "v4"),
        edge("v2", "v3"),
        edge("v1", "v2"),
        edge("", "v1"),
    ]);

    let path = graph.find_path("", "v4").unwrap();
    assert_eq!(hops(&path), vec![("", "v3"), ("v3", "v4")]);
}

#[test]
fn test_shortcut_from_intermediate_schema() {
    let graph = MigrationGraph::build(vec![
        edge("ivartj.1", "ivartj.2"),
        edge("ivartj.2", "ivartj.3"),
        edge("ivartj.3", "ivartj.4"),
        edge("ivartj.1", "ivartj.3"),
    ]);

    let path = graph.find_path("ivartj.1", "ivartj.4").unwrap();
    assert_eq!(
        hops(&path),
        vec![("ivartj.1", "ivartj.3"), ("ivartj.3", "ivartj.4")]
    );
}

#[test]
fn test_path_carries_payloads() {
    let graph = MigrationGraph::build(vec![
        Migration::new("", "v1", "CREATE TABLE t (id INTEGER)").unwrap(),
        Migration::new("v1", "v2", "ALTER TABLE t ADD COLUMN name VARCHAR").unwrap(),
    ]);

    let path = graph.find_path("", "v2").unwrap();
    assert_eq!(path[0].payload, "CREATE TABLE t (id INTEGER)");
    assert_eq!(path[1].payload, "ALTER TABLE t ADD COLUMN name VARCHAR");
}

#[test]
fn test_no_path_when_unreachable() {
    let graph = MigrationGraph::build(vec![edge("", "v1"), edge("v2", "v3")]);
    assert!(graph.find_path("v1", "v3").is_none());
    assert!(graph.find_path("", "v9").is_none());
}

#[test]
fn test_no_path_backwards() {
    let graph = MigrationGraph::build(vec![edge("", "v1"), edge("v1", "v2")]);
    assert!(graph.find_path("v2", "v1").is_none());
}

#[test]
fn test_no_path_in_empty_graph() {
    let graph = MigrationGraph::build(vec![]);
    assert!(graph.is_empty());
    assert!(graph.find_path("", "v1").is_none());
}

#[test]
fn test_same_schema_is_empty_path() {
    let graph = MigrationGraph::build(vec![edge("", "v1")]);
    assert_eq!(graph.find_path("v1", "v1"), Some(vec![]));
}

#[test]
fn test_single_hop() {
    let graph = MigrationGraph::build(vec![edge("", "v1"), edge("v1", "v2")]);
    let path = graph.find_path("v1", "v2").unwrap();
    assert_eq!(hops(&path), vec![("v1", "v2")]);
}

#[test]
fn test_diamond_takes_one_of_equal_length_routes() {
    let graph = MigrationGraph::build(vec![
        edge("a", "b1"),
        edge("a", "b2"),
        edge("b1", "c"),
        edge("b2", "c"),
    ]);

    let path = graph.find_path("a", "c").unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].origin, "a");
    assert_eq!(path[0].destination, path[1].origin);
    assert_eq!(path[1].destination, "c");
}

#[test]
fn test_cyclic_graph_terminates() {
    let graph = MigrationGraph::build(vec![
        edge("", "v1"),
        edge("v1", "v2"),
        edge("v2", "v1"),
        edge("v2", "v3"),
    ]);

    let path = graph.find_path("", "v3").unwrap();
    assert_eq!(hops(&path), vec![("", "v1"), ("v1", "v2"), ("v2", "v3")]);
    assert!(graph.find_path("v3", "").is_none());
}

#[test]
fn test_duplicate_pair_later_wins() {
    let graph = MigrationGraph::build(vec![
        Migration::new("", "v1", "old").unwrap(),
        Migration::new("", "v1", "new").unwrap(),
    ]);

    assert_eq!(graph.len(), 1);
    let path = graph.find_path("", "v1").unwrap();
    assert_eq!(path[0].payload, "new");
}

#[test]
fn test_is_cyclic_and_cycles() {
    let acyclic = MigrationGraph::build(vec![edge("", "v1"), edge("v1", "v2"), edge("", "v2")]);
    assert!(!acyclic.is_cyclic());
    assert!(acyclic.cycles().is_empty());

    let cyclic = MigrationGraph::build(vec![
        edge("", "v1"),
        edge("v1", "v2"),
        edge("v2", "v3"),
        edge("v3", "v1"),
    ]);
    assert!(cyclic.is_cyclic());
    assert_eq!(
        cyclic.cycles(),
        vec![vec!["v1".to_string(), "v2".to_string(), "v3".to_string()]]
    );
}

#[test]
fn test_reachable_from() {
    let graph = MigrationGraph::build(vec![
        edge("", "v1"),
        edge("v1", "v2"),
        edge("x", "y"),
    ]);

    assert_eq!(graph.reachable_from(""), vec!["v1", "v2"]);
    assert_eq!(graph.reachable_from("v2"), Vec::<String>::new());
    assert_eq!(graph.reachable_from("unknown"), Vec::<String>::new());
}

#[test]
fn test_schemas_sorted() {
    let graph = MigrationGraph::build(vec![edge("v1", "v2"), edge("", "v1")]);
    assert_eq!(graph.schemas(), vec!["", "v1", "v2"]);
    assert_eq!(graph.migrations().len(), 2);
}
