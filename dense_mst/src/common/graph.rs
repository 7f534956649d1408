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

use std::fmt::{Debug, Display};
use std::ops::Index;

use num_traits::{PrimInt, Signed};
use rayon::prelude::*;

use crate::DefWeight;
use crate::error::MstError;

/// Edge weights: signed so the diagonal can hold the `-1` sentinel,
/// totally ordered so ties are decided by index alone.
pub trait Weight: PrimInt + Signed + Send + Sync + Debug + Display + 'static {}

impl<T> Weight for T where T: PrimInt + Signed + Send + Sync + Debug + Display + 'static {}

#[inline(always)]
pub fn no_edge<W: Weight>() -> W { -W::one() }

/// Number of cells in an `n x n` matrix, or an error if it does not fit
/// in a `usize`.
pub fn cell_count(n: usize) -> Result<usize, MstError> {
    n.checked_mul(n).ok_or_else(|| MstError::MalformedGraph(format!(
        "{} nodes do not fit in a dense matrix", n)))
}

// **************************************************************
//    EDGES
// **************************************************************

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self { Self { from, to } }

    /// The same undirected edge with the smaller endpoint first.
    pub fn normalized(self) -> Self {
        if self.from <= self.to { self } else { Self::new(self.to, self.from) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WghEdge<W: Weight = DefWeight> {
    pub from: usize,
    pub to: usize,
    pub w: W,
}

impl<W: Weight> WghEdge<W> {
    pub fn new(from: usize, to: usize, w: W) -> Self { Self { from, to, w } }

    pub fn edge(&self) -> Edge { Edge::new(self.from, self.to) }
}

// **************************************************************
//    DISTANCE MATRIX
// **************************************************************

/// A dense `n x n` symmetric weight matrix stored row-major.
///
/// Every constructor validates the matrix, so a value of this type is
/// always square, symmetric and non-negative off the diagonal. The
/// diagonal is never read by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix<W: Weight = DefWeight> {
    ws: Vec<W>,
    n: usize,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Builds a matrix from its rows.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self, MstError> {
        let n = rows.len();
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(MstError::MalformedGraph(format!(
                "not square: row {} has {} columns, expected {}", i, r.len(), n
            )));
        }
        let m = Self { ws: rows.into_iter().flatten().collect(), n };
        m.validate()?;
        Ok(m)
    }

    /// Builds a matrix by evaluating `f(i, j)` for every `i != j` in
    /// parallel. The diagonal gets the `-1` sentinel.
    pub fn from_fn<F>(n: usize, f: F) -> Result<Self, MstError> where
        F: Fn(usize, usize) -> W + Send + Sync
    {
        let ws = (0..cell_count(n)?)
            .into_par_iter()
            .map(|k| {
                let (i, j) = (k / n, k % n);
                if i == j { no_edge() } else { f(i, j) }
            })
            .collect();
        let m = Self { ws, n };
        m.validate()?;
        Ok(m)
    }

    /// Finds the first offending cell in row-major order, if any.
    pub fn validate(&self) -> Result<(), MstError> {
        let n = self.n;
        if self.ws.len() != n * n {
            return Err(MstError::MalformedGraph(format!(
                "not square: {} cells for {} nodes", self.ws.len(), n
            )));
        }
        let bad = (0..n).into_par_iter().find_map_first(|i| {
            let row = self.row(i);
            (0..n).filter(|&j| j != i).find_map(|j| {
                if row[j] < W::zero() {
                    Some(format!("negative weight {} at ({}, {})", row[j], i, j))
                } else if row[j] != self.ws[j * n + i] {
                    Some(format!(
                        "asymmetric weights at ({}, {}): {} != {}",
                        i, j, row[j], self.ws[j * n + i]
                    ))
                } else { None }
            })
        });
        match bad {
            Some(msg) => Err(MstError::MalformedGraph(msg)),
            None => Ok(()),
        }
    }

    #[inline(always)]
    pub fn n(&self) -> usize { self.n }

    #[inline(always)]
    pub fn row(&self, u: usize) -> &[W] { &self.ws[u * self.n..(u + 1) * self.n] }

    #[inline(always)]
    pub fn weight(&self, u: usize, v: usize) -> W { self.ws[u * self.n + v] }

    /// All undirected edges `(i, j)` with `i < j`, in row-major order.
    pub fn edges(&self) -> Vec<WghEdge<W>> {
        (0..self.n)
            .flat_map(|i| (i + 1..self.n).map(move |j| (i, j)))
            .map(|(i, j)| WghEdge::new(i, j, self.weight(i, j)))
            .collect()
    }
}

impl<W: Weight> Index<(usize, usize)> for DistanceMatrix<W> {
    type Output = W;

    fn index(&self, (u, v): (usize, usize)) -> &Self::Output {
        &self.ws[u * self.n + v]
    }
}

// **************************************************************
//    NODE SETS
// **************************************************************

/// Membership flags over `0..n` with an element count. Used for the
/// frontier and the consumed-source set, and snapshotted once per round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSet {
    flags: Vec<bool>,
    len: usize,
}

impl NodeSet {
    pub fn new(n: usize) -> Self { Self { flags: vec![false; n], len: 0 } }

    /// Returns `false` if `u` was already a member.
    pub fn insert(&mut self, u: usize) -> bool {
        if self.flags[u] { return false; }
        self.flags[u] = true;
        self.len += 1;
        true
    }

    #[inline(always)]
    pub fn contains(&self, u: usize) -> bool { self.flags[u] }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }
}

// **************************************************************
//    ADJACENCY MATRIX (OUTPUT)
// **************************************************************

/// Symmetric boolean `n x n` matrix with a `false` diagonal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    adj: Vec<bool>,
    n: usize,
}

impl AdjacencyMatrix {
    pub fn new(n: usize) -> Self { Self { adj: vec![false; n * n], n } }

    pub fn n(&self) -> usize { self.n }

    /// Sets both `[u][v]` and `[v][u]`. Self-edges are ignored.
    pub fn connect(&mut self, u: usize, v: usize) {
        if u == v { return; }
        self.adj[u * self.n + v] = true;
        self.adj[v * self.n + u] = true;
    }

    #[inline(always)]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adj[u * self.n + v]
    }

    pub fn row(&self, u: usize) -> &[bool] { &self.adj[u * self.n..(u + 1) * self.n] }

    /// Number of neighbours of `u`.
    pub fn degree(&self, u: usize) -> usize {
        self.row(u).iter().filter(|&&b| b).count()
    }

    /// Undirected edges with the smaller endpoint first, sorted.
    pub fn edges(&self) -> Vec<Edge> {
        (0..self.n)
            .flat_map(|i| (i + 1..self.n).map(move |j| Edge::new(i, j)))
            .filter(|e| self.is_adjacent(e.from, e.to))
            .collect()
    }

    /// Counted once per undirected pair.
    pub fn edge_count(&self) -> usize {
        self.adj.par_iter().filter(|&&b| b).count() / 2
    }

    pub fn total_weight<W: Weight>(&self, m: &DistanceMatrix<W>) -> W {
        self.edges()
            .iter()
            .fold(W::zero(), |acc, e| acc + m.weight(e.from, e.to))
    }

    pub fn from_edges(n: usize, es: &[Edge]) -> Self {
        let mut adj = Self::new(n);
        es.iter().for_each(|e| adj.connect(e.from, e.to));
        adj
    }
}
