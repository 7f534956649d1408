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

use std::cmp::Ordering;

use crate::algorithm::union_find::UnionFind;
use crate::common::graph::{AdjacencyMatrix, DistanceMatrix, Weight, WghEdge};

#[derive(Clone, Copy)]
struct IndexedEdge<W: Weight> { e: WghEdge<W>, id: usize }

#[inline(always)]
fn cmp_idx_edge<W: Weight>(a: &IndexedEdge<W>, b: &IndexedEdge<W>) -> Ordering {
    a.e.w.cmp(&b.e.w).then(a.id.cmp(&b.id))
}

/// Kruskal's algorithm over every off-diagonal pair. Used as the
/// reference the pool-driven Prim is checked against.
pub fn kruskal<W: Weight>(m: &DistanceMatrix<W>) -> Vec<WghEdge<W>> {
    let n = m.n();
    let mut es: Vec<IndexedEdge<W>> = m
        .edges()
        .into_iter()
        .enumerate()
        .map(|(id, e)| IndexedEdge { e, id })
        .collect();
    es.sort_unstable_by(cmp_idx_edge);

    let mut uf = UnionFind::new(n);
    let mut msf = Vec::with_capacity(n.saturating_sub(1));
    for ie in es {
        if msf.len() + 1 >= n { break; }
        if uf.union(ie.e.from, ie.e.to) { msf.push(ie.e); }
    }
    msf
}

pub fn minimum_spanning_tree<W: Weight>(m: &DistanceMatrix<W>) -> AdjacencyMatrix {
    let es: Vec<_> = kruskal(m).iter().map(WghEdge::edge).collect();
    AdjacencyMatrix::from_edges(m.n(), &es)
}

pub fn minimum_weight<W: Weight>(m: &DistanceMatrix<W>) -> W {
    kruskal(m).iter().fold(W::zero(), |acc, e| acc + e.w)
}
