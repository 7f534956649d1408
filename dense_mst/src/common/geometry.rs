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

use std::fmt::{self, Display};
use std::str::FromStr;

use rayon::prelude::*;

use crate::DefWeight;
use crate::error::MstError;
use super::graph::DistanceMatrix;
use super::random::Random;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self { Self { x, y } }

    pub fn squared_distance(&self, o: &Point) -> i64 {
        let (dx, dy) = (o.x - self.x, o.y - self.y);
        dx * dx + dy * dy
    }
}

impl FromStr for Point {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ws: Vec<&str> = s.split_whitespace().collect();
        if ws.len() != 2 {
            return Err(MstError::Parse(format!("expected `x y`, got `{}`", s.trim())));
        }
        let coord = |w: &str| w
            .parse::<i64>()
            .map_err(|e| MstError::Parse(format!("bad coordinate `{}`: {}", w, e)));
        Ok(Self::new(coord(ws[0])?, coord(ws[1])?))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Where candidate points sit and how many of them survive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub width: i64,
    pub height: i64,
    pub spacing: i64,
    /// probability that a grid point is kept
    pub chance: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self { width: 1024, height: 1024, spacing: 16, chance: 0.2 }
    }
}

/// Keeps each interior multiple of `spacing` with probability `chance`.
/// Points come out column by column (x outer, y inner).
pub fn sample_grid(p: &GridParams, seed: u64) -> Vec<Point> {
    if p.spacing <= 0 { return vec![]; }
    let rng = Random::new(seed);
    let xs: Vec<i64> = (1..).map(|k| k * p.spacing).take_while(|&x| x < p.width).collect();
    let ys: Vec<i64> = (1..).map(|k| k * p.spacing).take_while(|&y| y < p.height).collect();

    xs.iter()
        .flat_map(|&x| ys.iter().map(move |&y| Point::new(x, y)))
        .enumerate()
        .filter(|(i, _)| rng.ith_f64(*i as u64) < p.chance)
        .map(|(_, pt)| pt)
        .collect()
}

/// Squared euclidean distances, diagonal `-1`.
pub fn squared_distance_matrix(points: &[Point]) -> Result<DistanceMatrix<DefWeight>, MstError> {
    DistanceMatrix::from_fn(points.len(), |i, j| points[i].squared_distance(&points[j]))
}

/// Smallest axis-aligned box holding every point, as `(min, max)`.
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    if points.is_empty() { return None; }
    let lo = points.par_iter().cloned().reduce(
        || Point::new(i64::MAX, i64::MAX),
        |a, b| Point::new(a.x.min(b.x), a.y.min(b.y)),
    );
    let hi = points.par_iter().cloned().reduce(
        || Point::new(i64::MIN, i64::MIN),
        |a, b| Point::new(a.x.max(b.x), a.y.max(b.y)),
    );
    Some((lo, hi))
}
