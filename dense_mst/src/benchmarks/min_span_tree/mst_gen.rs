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

use clap::Parser;

use dense_mst::common::geometry::{bounding_box, sample_grid, squared_distance_matrix, GridParams};
use dense_mst::common::graph_io::{write_distance_matrix_to_file, write_points_to_file};
use dense_mst::common::timer::Timer;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the output distance matrix filename
    #[clap(value_parser, required=true)]
    ofname: String,

    /// also write the sampled points to this file
    #[clap(short, long, required=false, default_value_t = ("").to_string())]
    points: String,

    #[clap(long, value_parser, default_value_t = GridParams::default().width)]
    width: i64,

    #[clap(long, value_parser, default_value_t = GridParams::default().height)]
    height: i64,

    /// distance between neighbouring grid points
    #[clap(long, value_parser, default_value_t = GridParams::default().spacing)]
    spacing: i64,

    /// probability of keeping a grid point
    #[clap(long, value_parser, default_value_t = GridParams::default().chance)]
    chance: f64,

    #[clap(short, long, value_parser, default_value_t = 1)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let params = GridParams {
        width: args.width,
        height: args.height,
        spacing: args.spacing,
        chance: args.chance,
    };

    let mut t = Timer::new("mst_gen"); t.start();
    let ps = sample_grid(&params, args.seed);
    t.next("sampling");
    if let Some((lo, hi)) = bounding_box(&ps) {
        println!("sampled {} points in [{}] .. [{}]", ps.len(), lo, hi);
    } else {
        println!("sampled no points");
    }

    let m = squared_distance_matrix(&ps).expect("cannot build the distance matrix");
    t.next("distance matrix");

    write_distance_matrix_to_file(&m, &args.ofname).expect("cannot write the matrix");
    if !args.points.is_empty() {
        write_points_to_file(&ps, &args.points).expect("cannot write the points");
    }
    t.next("writing");
    t.total();
}
