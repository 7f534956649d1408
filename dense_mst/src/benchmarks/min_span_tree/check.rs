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

use crate::algorithm::union_find::UnionFind;
use crate::common::graph::{AdjacencyMatrix, DistanceMatrix, Weight};
use super::serial_mst::minimum_weight;

/// `Ok` if `tree` is symmetric with a clear diagonal and forms a single
/// acyclic component over all `n` nodes.
pub fn check_spanning_tree(tree: &AdjacencyMatrix) -> Result<(), String> {
    let n = tree.n();
    for u in 0..n {
        if tree.is_adjacent(u, u) {
            return Err(format!("self-edge at node {}", u));
        }
        if let Some(v) = (0..n).find(|&v| tree.is_adjacent(u, v) != tree.is_adjacent(v, u)) {
            return Err(format!("asymmetric entry at ({}, {})", u, v));
        }
    }

    let es = tree.edges();
    if es.len() != n.saturating_sub(1) {
        return Err(format!(
            "wrong edge count: a spanning tree has {} edges but the result has {}",
            n.saturating_sub(1), es.len()));
    }

    //n-1 edges without a cycle connect all n nodes
    let mut uf = UnionFind::new(n);
    match es.iter().find(|e| !uf.union(e.from, e.to)) {
        Some(e) => Err(format!("edge ({}, {}) closes a cycle", e.from, e.to)),
        None => Ok(()),
    }
}

/// Spanning tree check plus total weight against Kruskal.
pub fn check<W: Weight>(m: &DistanceMatrix<W>, tree: &AdjacencyMatrix) -> Result<(), String> {
    if tree.n() != m.n() {
        return Err(format!("tree has {} nodes, graph has {}", tree.n(), m.n()));
    }
    check_spanning_tree(tree)?;

    let (got, want) = (tree.total_weight(m), minimum_weight(m));
    if got != want {
        return Err(format!("tree weight {} is not minimal ({})", got, want));
    }
    Ok(())
}
