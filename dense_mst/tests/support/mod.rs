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

#![allow(dead_code)]

use std::sync::Arc;

use dense_mst::DistanceMatrix;
use dense_mst::common::random::Random;

/// Symmetric matrix with weights in `[0, max_w)`. Small `max_w` forces
/// plenty of equal-weight edges.
pub fn random_matrix(n: usize, max_w: u64, seed: u64) -> Arc<DistanceMatrix> {
    let rng = Random::new(seed);
    let m = DistanceMatrix::from_fn(n, |i, j| {
        let (a, b) = (i.min(j) as u64, i.max(j) as u64);
        rng.ith_range(a * n as u64 + b, 0, max_w) as i64
    }).unwrap();
    Arc::new(m)
}

pub fn scenario() -> Arc<DistanceMatrix> {
    Arc::new(DistanceMatrix::from_rows(vec![
        vec![-1, 100, 100, 200],
        vec![100, -1, 200, 100],
        vec![100, 200, -1, 100],
        vec![200, 100, 100, -1],
    ]).unwrap())
}
