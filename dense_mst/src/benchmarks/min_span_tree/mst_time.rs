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

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use dense_mst::{AdjacencyMatrix, DistanceMatrix, MstConfig, WorkerPool};
use dense_mst::benchmarks::min_span_tree::{prim_pool, serial_mst};
use dense_mst::common::graph_io::{read_distance_matrix_from_file, write_tree_to_file};
use dense_mst::common::timer::{time_loop, Timer};

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Algs {
    /// Prim's algorithm on the worker pool
    POOLPRIM,
    /// Kruskal, single threaded
    SERIAL,
}

impl fmt::Display for Algs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Algs::POOLPRIM => write!(f, "poolprim"),
            Algs::SERIAL => write!(f, "serial"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the algorithm to use
    #[clap(short, long, value_parser, default_value_t = Algs::POOLPRIM)]
    algorithm: Algs,

    /// write the tree here instead of printing its first edges
    #[clap(short, long, required=false, default_value_t = ("").to_string())]
    ofname: String,

    /// the input distance matrix filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the number of timed runs
    #[clap(short, long, value_parser, required=false, default_value_t=1)]
    rounds: usize,

    /// worker threads in the pool
    #[clap(short, long, value_parser, default_value_t = MstConfig::default().workers)]
    workers: usize,

    /// the node the tree is grown from
    #[clap(long, value_parser, default_value_t = 0)]
    root: usize,
}

pub fn run(alg: Algs, rounds: usize, cfg: MstConfig, m: DistanceMatrix) -> (AdjacencyMatrix, Duration) {
    let m = Arc::new(m);
    let mut r = AdjacencyMatrix::new(m.n());

    let mean = match alg {
        Algs::POOLPRIM => {
            cfg.validate(m.n()).expect("invalid configuration");
            let mut pool = WorkerPool::with_config(&cfg).expect("cannot start workers");
            let mean = time_loop(
                "mst",
                rounds,
                Duration::new(1, 0),
                || {},
                || {
                    r = prim_pool::minimum_spanning_tree(&mut pool, Arc::clone(&m), cfg.root)
                        .expect("mst computation failed");
                },
                || {}
            );
            pool.stop().expect("cannot stop workers");
            mean
        }
        Algs::SERIAL => time_loop(
            "mst",
            rounds,
            Duration::new(1, 0),
            || {},
            || { r = serial_mst::minimum_spanning_tree(&m); },
            || {}
        ),
    };
    (r, mean)
}

fn main() {
    let args = Args::parse();

    let mut t = Timer::new("mst_time"); t.start();
    let m: DistanceMatrix = read_distance_matrix_from_file(&args.ifname)
        .expect("cannot read the distance matrix");
    t.next("reading input");
    println!("graph n={} workers={} root={}", m.n(), args.workers, args.root);

    let cfg = MstConfig::new(args.workers, args.root);
    let (r, d) = run(args.algorithm, args.rounds, cfg, m);

    if !args.ofname.is_empty() {
        write_tree_to_file(&r, &args.ofname).expect("cannot write the tree");
    } else {
        let es = r.edges();
        if es.len() < 20 { println!("result:  {:?}", es); }
        else { println!("result:  {:?} ... [Omitted]", &es[..20]); }
    }
    println!("edges: {}  mean:  {:?}", r.edge_count(), d);
}
