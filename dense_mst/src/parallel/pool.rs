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

use std::ops::Range;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use affinity::{get_core_num, set_thread_affinity};
use crossbeam_channel::{bounded, Receiver, Sender};

use crate::DefWeight;
use crate::common::graph::{DistanceMatrix, NodeSet, Weight, WghEdge};
use crate::config::MstConfig;
use crate::error::MstError;
use super::aggregate::aggregate;
use super::partition::partition;

/// One worker's share of a round. Everything it references is shared
/// read-only; the node sets are per-round snapshots.
pub struct Job<W: Weight = DefWeight> {
    /// index of the column range, used for tie-breaking
    pub part: usize,
    pub cols: Range<usize>,
    pub matrix: Arc<DistanceMatrix<W>>,
    pub frontier: Arc<NodeSet>,
    pub consumed: Arc<NodeSet>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobResult<W: Weight = DefWeight> {
    pub part: usize,
    /// `None` when the range held no valid (source, target) pair
    pub best: Option<WghEdge<W>>,
}

enum Task<W: Weight> {
    Run(Job<W>),
    Stop,
}

/// Lightest edge from a node outside the tree to a tree node whose
/// column lies in `job.cols`. Rows are scanned in order and only a
/// strictly lighter edge replaces the current best, so the first
/// minimum in row-major order wins.
///
/// Sources are nodes that are neither consumed nor in the frontier: the
/// root sits in the frontier without ever being consumed.
pub fn search<W: Weight>(job: &Job<W>) -> Option<WghEdge<W>> {
    if job.cols.is_empty() { return None; }
    let m = &job.matrix;
    let mut best: Option<WghEdge<W>> = None;

    for f in 0..m.n() {
        if job.consumed.contains(f) || job.frontier.contains(f) { continue; }
        let row = m.row(f);
        for t in job.cols.clone() {
            if !job.frontier.contains(t) { continue; }
            let w = row[t];
            if best.map_or(true, |b| w < b.w) {
                best = Some(WghEdge::new(f, t, w));
            }
        }
    }
    best
}

fn pin_to_core(id: usize) {
    let cores = get_core_num().max(1);
    if let Err(_e) = set_thread_affinity([id % cores]) {
        verbose_println!("worker {id}: cannot pin to core {}: {:?}", id % cores, _e);
    }
}

fn worker_loop<W: Weight>(
    id: usize,
    tasks: Receiver<Task<W>>,
    results: Sender<JobResult<W>>,
    pin: bool,
) {
    if pin { pin_to_core(id); }
    while let Ok(task) = tasks.recv() {
        match task {
            Task::Run(job) => {
                let best = search(&job);
                if results.send(JobResult { part: job.part, best }).is_err() {
                    break;
                }
            }
            Task::Stop => break,
        }
    }
    verbose_println!("worker {id} stopped");
}

/// A fixed set of long-lived worker threads fed through a bounded job
/// channel and answering on a bounded result channel, both sized to the
/// pool. Workers live until `stop` (or drop), so one pool serves any
/// number of computations.
///
/// Rounds take `&mut self`, so two computations can never interleave
/// their results on the same pool.
pub struct WorkerPool<W: Weight = DefWeight> {
    workers: usize,
    tasks: Option<Sender<Task<W>>>,
    results: Receiver<JobResult<W>>,
    handles: Vec<JoinHandle<()>>,
}

impl<W: Weight> WorkerPool<W> {
    pub fn new(workers: usize) -> Result<Self, MstError> {
        Self::spawn(workers, false)
    }

    pub fn with_config(cfg: &MstConfig) -> Result<Self, MstError> {
        Self::spawn(cfg.workers, cfg.pin_workers)
    }

    fn spawn(workers: usize, pin: bool) -> Result<Self, MstError> {
        if workers == 0 { return Err(MstError::InvalidWorkerCount(workers)); }

        let (task_tx, task_rx) = bounded::<Task<W>>(workers);
        let (res_tx, res_rx) = bounded::<JobResult<W>>(workers);
        let mut pool = Self {
            workers,
            tasks: Some(task_tx),
            results: res_rx,
            handles: Vec::with_capacity(workers),
        };

        for id in 0..workers {
            let (rx, tx) = (task_rx.clone(), res_tx.clone());
            let h = thread::Builder::new()
                .name(format!("mst-worker-{id}"))
                .spawn(move || worker_loop(id, rx, tx, pin))?;
            pool.handles.push(h);
        }
        verbose_println!("spawned {workers} workers");
        Ok(pool)
    }

    pub fn workers(&self) -> usize { self.workers }

    pub fn is_running(&self) -> bool { self.tasks.is_some() }

    /// Runs one round: submits exactly one job per worker, then blocks
    /// until every worker has answered and returns the global minimum
    /// (`None` if no worker found a valid pair).
    pub fn find_minimum(
        &mut self,
        matrix: &Arc<DistanceMatrix<W>>,
        frontier: &Arc<NodeSet>,
        consumed: &Arc<NodeSet>,
    ) -> Result<Option<WghEdge<W>>, MstError> {
        let tasks = self.tasks.as_ref().ok_or(MstError::PoolDisconnected)?;

        for (part, cols) in partition(matrix.n(), self.workers).into_iter().enumerate() {
            let job = Job {
                part,
                cols,
                matrix: Arc::clone(matrix),
                frontier: Arc::clone(frontier),
                consumed: Arc::clone(consumed),
            };
            tasks.send(Task::Run(job)).map_err(|_| MstError::PoolDisconnected)?;
        }
        aggregate(&self.results, self.workers)
    }

    /// Sends every worker its stop signal and joins them. Stopping an
    /// already stopped pool does nothing.
    pub fn stop(&mut self) -> Result<(), MstError> {
        let Some(tasks) = self.tasks.take() else { return Ok(()); };
        // each worker takes exactly one Stop and exits
        for _ in 0..self.workers {
            if tasks.send(Task::Stop).is_err() { break; }
        }
        drop(tasks);

        let mut panicked = false;
        for h in self.handles.drain(..) {
            panicked |= h.join().is_err();
        }
        verbose_println!("stopped {} workers", self.workers);
        if panicked { Err(MstError::PoolDisconnected) } else { Ok(()) }
    }
}

impl<W: Weight> Drop for WorkerPool<W> {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
