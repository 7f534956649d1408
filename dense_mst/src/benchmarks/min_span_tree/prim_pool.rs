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

use std::sync::Arc;

use crate::common::graph::{AdjacencyMatrix, DistanceMatrix, NodeSet, Weight, WghEdge};
use crate::config::MstConfig;
use crate::error::MstError;
use crate::parallel::pool::WorkerPool;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowState { Growing, Done, Failed }

/// Prim's algorithm driven one round at a time through a worker pool.
///
/// The frontier holds the tree nodes and starts as `{root}`; the consumed
/// set holds every node that has been the source of an accepted edge and
/// starts empty. Each round accepts the lightest edge `(f, t)` from a
/// non-tree node `f` to a tree node `t` and adds `f` to both sets, so at
/// the start of round `k` the frontier has `k + 1` nodes and the consumed
/// set `k`. The tree is done once every node other than the root has been
/// consumed.
pub struct MstGrower<'p, W: Weight> {
    pool: &'p mut WorkerPool<W>,
    matrix: Arc<DistanceMatrix<W>>,
    frontier: NodeSet,
    consumed: NodeSet,
    tree: AdjacencyMatrix,
    accepted: Vec<WghEdge<W>>,
    state: GrowState,
}

impl<'p, W: Weight> MstGrower<'p, W> {
    pub fn new(
        pool: &'p mut WorkerPool<W>,
        matrix: Arc<DistanceMatrix<W>>,
        root: usize,
    ) -> Result<Self, MstError> {
        let n = matrix.n();
        if n == 0 { return Err(MstError::EmptyGraph); }
        if root >= n { return Err(MstError::InvalidRoot { root, n }); }

        let mut frontier = NodeSet::new(n);
        frontier.insert(root);
        let state = if n == 1 { GrowState::Done } else { GrowState::Growing };
        Ok(Self {
            pool,
            matrix,
            frontier,
            consumed: NodeSet::new(n),
            tree: AdjacencyMatrix::new(n),
            accepted: Vec::with_capacity(n - 1),
            state,
        })
    }

    pub fn state(&self) -> GrowState { self.state }

    pub fn rounds_completed(&self) -> usize { self.consumed.len() }

    pub fn total_rounds(&self) -> usize { self.matrix.n() - 1 }

    pub fn frontier(&self) -> &NodeSet { &self.frontier }

    pub fn consumed(&self) -> &NodeSet { &self.consumed }

    /// Accepted edges in acceptance order, as `(source, tree node, weight)`.
    pub fn accepted(&self) -> &[WghEdge<W>] { &self.accepted }

    /// Runs one round. A round that finds nothing while the tree is
    /// incomplete moves the grower to `Failed` and returns the error;
    /// stepping a finished grower is a no-op.
    pub fn step(&mut self) -> Result<GrowState, MstError> {
        if self.state != GrowState::Growing { return Ok(self.state); }
        debug_assert_eq!(self.frontier.len(), self.consumed.len() + 1);

        let frontier = Arc::new(self.frontier.clone());
        let consumed = Arc::new(self.consumed.clone());
        let found = match self.pool.find_minimum(&self.matrix, &frontier, &consumed) {
            Ok(found) => found,
            Err(e) => {
                self.state = GrowState::Failed;
                return Err(e);
            }
        };

        let Some(e) = found else {
            self.state = GrowState::Failed;
            return Err(MstError::NoEdgeFound {
                accepted: self.consumed.len(),
                n: self.matrix.n(),
            });
        };

        self.tree.connect(e.from, e.to);
        self.frontier.insert(e.from);
        self.consumed.insert(e.from);
        self.accepted.push(e);

        if self.frontier.len() == self.matrix.n() {
            self.state = GrowState::Done;
        }
        Ok(self.state)
    }

    /// Grows the tree to completion, calling `progress(done, total)` after
    /// each accepted edge.
    pub fn run_with_progress<F>(mut self, mut progress: F) -> Result<AdjacencyMatrix, MstError> where
        F: FnMut(usize, usize)
    {
        let total = self.total_rounds();
        while self.state == GrowState::Growing {
            self.step()?;
            progress(self.rounds_completed(), total);
        }
        verbose_println!("grew {} edges over {} nodes", self.accepted.len(), self.matrix.n());
        Ok(self.tree)
    }

    pub fn run(self) -> Result<AdjacencyMatrix, MstError> {
        self.run_with_progress(|_, _| {})
    }
}

/// Grows a minimum spanning tree from `root` on an already running pool.
pub fn minimum_spanning_tree<W: Weight>(
    pool: &mut WorkerPool<W>,
    matrix: Arc<DistanceMatrix<W>>,
    root: usize,
) -> Result<AdjacencyMatrix, MstError> {
    MstGrower::new(pool, matrix, root)?.run()
}

/// Validates `cfg`, starts a pool for this one computation, grows the
/// tree and stops the pool again.
pub fn compute<W: Weight>(
    matrix: Arc<DistanceMatrix<W>>,
    cfg: &MstConfig,
) -> Result<AdjacencyMatrix, MstError> {
    cfg.validate(matrix.n())?;
    let mut pool = WorkerPool::with_config(cfg)?;
    let tree = minimum_spanning_tree(&mut pool, matrix, cfg.root)?;
    pool.stop()?;
    Ok(tree)
}
