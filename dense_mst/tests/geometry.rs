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

use dense_mst::{compute, MstConfig};
use dense_mst::benchmarks::min_span_tree::check::check;
use dense_mst::common::geometry::*;
use dense_mst::common::random::Random;

#[test]
fn full_grid_keeps_every_interior_point() {
    let p = GridParams { width: 64, height: 48, spacing: 16, chance: 1.0 };
    let ps = sample_grid(&p, 0);
    // x in {16, 32, 48}, y in {16, 32}
    assert_eq!(ps.len(), 6);
    assert_eq!(ps[0], Point::new(16, 16));
    assert_eq!(ps[1], Point::new(16, 32));
    assert!(ps.iter().all(|q| q.x < 64 && q.y < 48));
}

#[test]
fn zero_chance_keeps_nothing() {
    let p = GridParams { chance: 0.0, ..GridParams::default() };
    assert!(sample_grid(&p, 42).is_empty());
}

#[test]
fn sampling_is_seeded() {
    let p = GridParams::default();
    assert_eq!(sample_grid(&p, 9), sample_grid(&p, 9));
    assert_ne!(sample_grid(&p, 9), sample_grid(&p, 10));

    // 63 x 63 interior points at 20%
    let k = sample_grid(&p, 9).len();
    assert!(k > 600 && k < 1000, "{k}");
}

#[test]
fn squared_distances() {
    let ps = vec![Point::new(0, 0), Point::new(3, 4), Point::new(6, 0)];
    let m = squared_distance_matrix(&ps).unwrap();
    assert_eq!(m.weight(0, 1), 25);
    assert_eq!(m.weight(1, 2), 25);
    assert_eq!(m.weight(2, 0), 36);
    assert_eq!(m.weight(1, 1), -1);
}

#[test]
fn tree_over_sampled_points() {
    let p = GridParams { width: 256, height: 256, spacing: 16, chance: 0.3 };
    let ps = sample_grid(&p, 1);
    let m = Arc::new(squared_distance_matrix(&ps).unwrap());
    let t = compute(Arc::clone(&m), &MstConfig::new(4, 0)).unwrap();
    check(&m, &t).unwrap();
    // neighbours on the grid are at least one spacing apart
    assert!(t.edges().iter().all(|e| m.weight(e.from, e.to) >= 16 * 16));
}

#[test]
fn bounding_box_of_points() {
    assert_eq!(bounding_box(&[]), None);
    let ps = vec![Point::new(5, -2), Point::new(-1, 7), Point::new(3, 3)];
    assert_eq!(bounding_box(&ps), Some((Point::new(-1, -2), Point::new(5, 7))));
}

#[test]
fn points_parse() {
    assert_eq!("12 -4".parse::<Point>().unwrap(), Point::new(12, -4));
    assert!("12".parse::<Point>().is_err());
    assert_eq!(Point::new(1, 2).to_string(), "1 2");
}

#[test]
fn random_streams() {
    let r = Random::new(3);
    assert_eq!(r.ith_rand(5), Random::new(3).ith_rand(5));
    assert_ne!(r.ith_rand(5), r.ith_rand(6));
    assert_ne!(r.fork(1).ith_rand(0), r.fork(2).ith_rand(0));
    assert!((0..1000).all(|i| (0.0..1.0).contains(&r.ith_f64(i))));
    assert!((0..1000).all(|i| (10..20).contains(&r.ith_range(i, 10, 20))));
}
