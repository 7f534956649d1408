// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

mod support;

use std::env;
use std::sync::Arc;

use dense_mst::{compute, AdjacencyMatrix, DistanceMatrix, Edge, MstConfig, MstError};
use dense_mst::common::geometry::{sample_grid, GridParams};
use dense_mst::common::graph_io::*;
use support::scenario;

#[test]
fn parses_a_matrix() {
    let s = "DistanceMatrix\n3\n-1 4 9\n4 -1 1\n9 1 -1\n";
    let m: DistanceMatrix = parse_distance_matrix(s).unwrap();
    assert_eq!(m.n(), 3);
    assert_eq!(m.weight(0, 2), 9);
    assert_eq!(m[(2, 1)], 1);
}

#[test]
fn rejects_bad_matrices() {
    let bad_header = parse_distance_matrix::<i64>("Matrix\n1\n-1\n");
    assert!(matches!(bad_header, Err(MstError::Parse(_))));

    let missing_row = parse_distance_matrix::<i64>("DistanceMatrix\n2\n-1 3\n");
    assert!(matches!(missing_row, Err(MstError::Parse(_))));

    let bad_weight = parse_distance_matrix::<i64>("DistanceMatrix\n2\n-1 x\n3 -1\n");
    assert!(matches!(bad_weight, Err(MstError::Parse(_))));

    let asymmetric = parse_distance_matrix::<i64>("DistanceMatrix\n2\n-1 2\n3 -1\n");
    assert!(matches!(asymmetric, Err(MstError::MalformedGraph(_))));

    let huge_count = parse_distance_matrix::<i64>("DistanceMatrix\n18446744073709551615\n");
    assert!(matches!(huge_count, Err(MstError::Parse(_))));
}

#[test]
fn oversized_node_counts() {
    let t = parse_tree("MinSpanTree\n5000000000\n0 1\n");
    assert!(matches!(t, Err(MstError::Parse(_))));

    let t = parse_tree("MinSpanTree\n18446744073709551615\n");
    assert!(matches!(t, Err(MstError::Parse(_))));

    let m = DistanceMatrix::<i64>::from_fn(usize::MAX, |_, _| 0);
    assert!(matches!(m, Err(MstError::MalformedGraph(_))));
}

#[test]
fn parses_a_tree() {
    let t = parse_tree("MinSpanTree\n4\n0 1\n2 0\n1 3\n").unwrap();
    assert_eq!(t.edges(), vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 3)]);
    assert!(t.is_adjacent(3, 1));

    assert!(parse_tree("MinSpanTree\n2\n0 2\n").is_err());
    assert!(parse_tree("MinSpanTree\n2\n0\n").is_err());
}

#[test]
fn trees_without_loops_or_repeats() {
    let self_loop = parse_tree("MinSpanTree\n3\n0 1\n1 1\n");
    assert!(matches!(self_loop, Err(MstError::Parse(ref s)) if s.contains("self-loop")));

    let repeated = parse_tree("MinSpanTree\n3\n0 1\n0 1\n");
    assert!(matches!(repeated, Err(MstError::Parse(ref s)) if s.contains("duplicate")));

    let reversed = parse_tree("MinSpanTree\n3\n0 1\n1 0\n");
    assert!(matches!(reversed, Err(MstError::Parse(ref s)) if s.contains("duplicate")));
}

#[test]
fn tree_and_matrix_files() {
    let dir = env::temp_dir();
    let mf = dir.join(format!("dense_mst_matrix_{}.txt", std::process::id()));
    let tf = dir.join(format!("dense_mst_tree_{}.txt", std::process::id()));

    let m = scenario();
    write_distance_matrix_to_file(&m, &mf).unwrap();
    let back: DistanceMatrix = read_distance_matrix_from_file(&mf).unwrap();
    assert_eq!(back, *m);

    let t = compute(Arc::new(back), &MstConfig::new(2, 0)).unwrap();
    write_tree_to_file(&t, &tf).unwrap();
    let t2: AdjacencyMatrix = read_tree_from_file(&tf).unwrap();
    assert_eq!(t2, t);

    std::fs::remove_file(mf).ok();
    std::fs::remove_file(tf).ok();
}

#[test]
fn tree_size_must_match_the_matrix() {
    let tf = env::temp_dir().join(format!("dense_mst_sized_tree_{}.txt", std::process::id()));
    std::fs::write(&tf, "MinSpanTree\n3\n0 1\n1 2\n").unwrap();

    assert_eq!(read_tree_with_nodes_from_file(&tf, 3).unwrap().edge_count(), 2);
    let r = read_tree_with_nodes_from_file(&tf, 4);
    assert!(matches!(r, Err(MstError::Parse(ref s)) if s.contains("expected 4")));

    std::fs::remove_file(tf).ok();
}

#[test]
fn point_files() {
    let pf = env::temp_dir().join(format!("dense_mst_points_{}.txt", std::process::id()));
    let ps = sample_grid(&GridParams { width: 64, height: 64, spacing: 8, chance: 0.5 }, 3);

    write_points_to_file(&ps, &pf).unwrap();
    assert_eq!(read_points_from_file(&pf).unwrap(), ps);
    std::fs::remove_file(pf).ok();

    assert!(parse_points("PointSet\n").unwrap().is_empty());
    assert!(matches!(parse_points("PointSet\n1 x\n"), Err(MstError::Parse(_))));
    assert!(matches!(parse_points("Points\n1 2\n"), Err(MstError::Parse(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let r = read_tree_from_file("/nonexistent/dense_mst/tree.txt");
    assert!(matches!(r, Err(MstError::Io(_))));
}
