// tests/data_tests.rs
//! Tests voor de instantielezers: beide tekstformaten, formaatdetectie en
//! de foutpaden bij misvormde invoer.

use vpms::{ProblemData, PROBLEM_TYPE_CNP};

#[test]
fn test_parse_adjacency_list() {
    let input = "4\n0: 1 2\n1: 0\n2: 0\n3:\n";
    let data = ProblemData::parse_adjacency_list(input.as_bytes()).unwrap();

    assert_eq!(data.num_nodes(), 4);
    assert!(data.adj_list()[0].contains(&1));
    assert!(data.adj_list()[0].contains(&2));
    assert!(data.adj_list()[1].contains(&0));
    assert!(data.adj_list()[3].is_empty());
}

#[test]
fn test_parse_adjacency_list_rejects_missing_separator() {
    let input = "2\n0 1\n";
    assert!(ProblemData::parse_adjacency_list(input.as_bytes()).is_err());
}

#[test]
fn test_parse_adjacency_list_rejects_out_of_range() {
    let input = "2\n0: 5\n";
    assert!(ProblemData::parse_adjacency_list(input.as_bytes()).is_err());
}

#[test]
fn test_parse_adjacency_list_rejects_empty() {
    assert!(ProblemData::parse_adjacency_list("".as_bytes()).is_err());
}

#[test]
fn test_parse_edge_list() {
    let input = "c commentaarregel wordt genegeerd\np edge 4 3\ne 0 1\ne 1 2\ne 1 2\ne 2 3\n";
    let data = ProblemData::parse_edge_list(input.as_bytes()).unwrap();

    assert_eq!(data.num_nodes(), 4);
    assert_eq!(data.nodes().len(), 4);
    // Dubbele kanten zijn idempotent.
    assert_eq!(data.adj_list()[1].len(), 2);
    assert!(data.adj_list()[2].contains(&3));
}

#[test]
fn test_parse_edge_list_rejects_edge_before_header() {
    let input = "e 0 1\np edge 2 1\n";
    assert!(ProblemData::parse_edge_list(input.as_bytes()).is_err());
}

#[test]
fn test_parse_edge_list_rejects_out_of_bounds_edge() {
    let input = "p edge 2 1\ne 0 7\n";
    assert!(ProblemData::parse_edge_list(input.as_bytes()).is_err());
}

#[test]
fn test_read_detects_format() {
    let dir = std::env::temp_dir();

    let edge_path = dir.join("vpms_test_edge_list.txt");
    std::fs::write(&edge_path, "p edge 3 2\ne 0 1\ne 1 2\n").unwrap();
    let edge_data = ProblemData::read(&edge_path).unwrap();
    assert_eq!(edge_data.num_nodes(), 3);
    std::fs::remove_file(&edge_path).unwrap();

    let adj_path = dir.join("vpms_test_adjacency_list.txt");
    std::fs::write(&adj_path, "3\n0: 1\n1: 0 2\n2: 1\n").unwrap();
    let adj_data = ProblemData::read(&adj_path).unwrap();
    assert_eq!(adj_data.num_nodes(), 3);
    assert!(adj_data.adj_list()[1].contains(&2));
    std::fs::remove_file(&adj_path).unwrap();
}

#[test]
fn test_add_edge_rejects_out_of_range() {
    let mut data = ProblemData::new(3);
    assert!(data.add_edge(0, 9).is_err());
    assert!(data.add_node(7).is_err());
}

#[test]
fn test_create_graph_rejects_excessive_budget() {
    let mut data = ProblemData::new(3);
    for node in 0..3 {
        data.add_node(node).unwrap();
    }
    assert!(data.create_graph(PROBLEM_TYPE_CNP, 4, 1, 3).is_err());
    assert!(data.create_graph(PROBLEM_TYPE_CNP, 3, 1, 3).is_ok());
}

#[test]
fn test_create_graph_rejects_unknown_type() {
    let mut data = ProblemData::new(2);
    for node in 0..2 {
        data.add_node(node).unwrap();
    }
    assert!(data.create_graph("MAXCUT", 1, 1, 3).is_err());
}
