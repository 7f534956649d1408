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

use std::sync::Arc;

use dense_mst::{MstError, NodeSet, WghEdge, WorkerPool};
use dense_mst::parallel::aggregate::reduce;
use dense_mst::parallel::pool::{search, Job, JobResult};
use support::scenario;

fn sets(n: usize, frontier: &[usize], consumed: &[usize]) -> (Arc<NodeSet>, Arc<NodeSet>) {
    let (mut f, mut c) = (NodeSet::new(n), NodeSet::new(n));
    frontier.iter().for_each(|&u| { f.insert(u); });
    consumed.iter().for_each(|&u| { c.insert(u); });
    (Arc::new(f), Arc::new(c))
}

#[test]
fn zero_workers_is_rejected() {
    assert!(matches!(WorkerPool::<i64>::new(0), Err(MstError::InvalidWorkerCount(0))));
}

#[test]
fn search_respects_its_columns() {
    let m = scenario();
    let (frontier, consumed) = sets(4, &[0, 1, 2], &[1, 2]);
    let job = |part, cols| Job {
        part,
        cols,
        matrix: Arc::clone(&m),
        frontier: Arc::clone(&frontier),
        consumed: Arc::clone(&consumed),
    };
    // only node 3 can be a source
    assert_eq!(search(&job(0, 0..2)), Some(WghEdge::new(3, 1, 100)));
    assert_eq!(search(&job(1, 2..4)), Some(WghEdge::new(3, 2, 100)));
    assert_eq!(search(&job(2, 3..4)), None);
    assert_eq!(search(&job(3, 4..4)), None);
}

#[test]
fn search_never_uses_the_root_as_a_source() {
    let m = scenario();
    let (frontier, consumed) = sets(4, &[0, 1], &[1]);
    let job = Job {
        part: 0,
        cols: 0..4,
        matrix: m,
        frontier,
        consumed,
    };
    let e = search(&job).unwrap();
    assert!(e.from == 2 || e.from == 3);
    assert_eq!(e.w, 100);
}

#[test]
fn reduce_picks_lightest_then_lowest_part() {
    let rs = vec![
        JobResult { part: 2, best: Some(WghEdge::new(5, 1, 7)) },
        JobResult { part: 0, best: None },
        JobResult { part: 3, best: Some(WghEdge::new(4, 3, 7)) },
        JobResult { part: 1, best: Some(WghEdge::new(6, 0, 9)) },
    ];
    assert_eq!(reduce(rs.clone()), Some(WghEdge::new(5, 1, 7)));

    // arrival order must not matter
    let mut rev = rs;
    rev.reverse();
    assert_eq!(reduce(rev), Some(WghEdge::new(5, 1, 7)));
}

#[test]
fn reduce_keeps_zero_weight_edges() {
    let rs = vec![
        JobResult { part: 0, best: Some(WghEdge::new(1, 0, 3)) },
        JobResult { part: 1, best: Some(WghEdge::new(2, 1, 0)) },
    ];
    assert_eq!(reduce(rs), Some(WghEdge::new(2, 1, 0)));
}

#[test]
fn reduce_of_nothing_is_not_found() {
    let rs: Vec<JobResult<i64>> = (0..4).map(|part| JobResult { part, best: None }).collect();
    assert_eq!(reduce(rs), None);
}

#[test]
fn one_round_on_the_pool() {
    let m = scenario();
    let mut pool = WorkerPool::new(2).unwrap();
    let (frontier, consumed) = sets(4, &[0, 1, 2], &[1, 2]);
    // both halves offer weight 100; the lower column range wins
    let e = pool.find_minimum(&m, &frontier, &consumed).unwrap();
    assert_eq!(e, Some(WghEdge::new(3, 1, 100)));
}

#[test]
fn more_workers_than_nodes() {
    let m = scenario();
    let mut pool = WorkerPool::new(7).unwrap();
    let (frontier, consumed) = sets(4, &[0], &[]);
    let e = pool.find_minimum(&m, &frontier, &consumed).unwrap();
    assert_eq!(e, Some(WghEdge::new(1, 0, 100)));
}

#[test]
fn stop_is_idempotent_and_final() {
    let m = scenario();
    let mut pool = WorkerPool::new(3).unwrap();
    assert!(pool.is_running());
    pool.stop().unwrap();
    pool.stop().unwrap();
    assert!(!pool.is_running());

    let (frontier, consumed) = sets(4, &[0], &[]);
    assert!(matches!(
        pool.find_minimum(&m, &frontier, &consumed),
        Err(MstError::PoolDisconnected)
    ));
}

#[test]
fn pools_come_and_go() {
    let m = scenario();
    let (frontier, consumed) = sets(4, &[0], &[]);
    for w in 1..=8 {
        let mut pool = WorkerPool::new(w).unwrap();
        assert_eq!(pool.workers(), w);
        for _ in 0..3 {
            let e = pool.find_minimum(&m, &frontier, &consumed).unwrap();
            assert_eq!(e, Some(WghEdge::new(1, 0, 100)));
        }
        // dropped without stop
    }
}
