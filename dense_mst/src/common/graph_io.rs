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

use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use rayon::prelude::*;

use crate::error::MstError;
use super::geometry::Point;
use super::graph::{cell_count, AdjacencyMatrix, DistanceMatrix, Edge, Weight};
use super::io::{parse_count, read_to_string, split_with_header, write_lines};

pub const MATRIX_HEADER: &str = "DistanceMatrix";
pub const TREE_HEADER: &str = "MinSpanTree";
pub const POINTS_HEADER: &str = "PointSet";

// `DistanceMatrix`, then `n`, then `n` rows of `n` whitespace separated weights.
pub fn parse_distance_matrix<W>(s: &str) -> Result<DistanceMatrix<W>, MstError> where
    W: Weight + FromStr,
    <W as FromStr>::Err: Display,
{
    let lines = split_with_header(s, MATRIX_HEADER)?;
    let n = parse_count(lines.first(), "node count")?;
    let rows = lines.len() - 1;
    if rows != n {
        return Err(MstError::Parse(format!("expected {} rows, found {}", n, rows)));
    }

    verbose_println!("parsing {n} rows...");
    let rows = lines[1..]
        .par_iter()
        .enumerate()
        .map(|(i, l)| l
            .split_whitespace()
            .map(|w| w.parse::<W>().map_err(|e|
                MstError::Parse(format!("row {}: bad weight `{}`: {}", i, w, e))))
            .collect::<Result<Vec<W>, MstError>>())
        .collect::<Result<Vec<_>, MstError>>()?;

    DistanceMatrix::from_rows(rows)
}

pub fn read_distance_matrix_from_file<W, P>(fname: P) -> Result<DistanceMatrix<W>, MstError> where
    W: Weight + FromStr,
    <W as FromStr>::Err: Display,
    P: AsRef<Path>,
{
    verbose_println!("reading {}...", fname.as_ref().display());
    parse_distance_matrix(&read_to_string(fname)?)
}

pub fn write_distance_matrix_to_file<W: Weight, P: AsRef<Path>>(
    m: &DistanceMatrix<W>,
    of: P,
) -> Result<(), MstError> {
    let n = m.n();
    let mut rows: Vec<String> = Vec::with_capacity(n + 1);
    rows.push(n.to_string());
    rows.par_extend((0..n).into_par_iter().map(|i| m
        .row(i)
        .iter()
        .map(W::to_string)
        .collect::<Vec<_>>()
        .join(" ")));
    write_lines(MATRIX_HEADER, &rows, of)
}

// `MinSpanTree`, then `n`, then one `u v` pair per tree edge. Self-loops
// and repeated pairs (in either orientation) are rejected.
pub fn parse_tree(s: &str) -> Result<AdjacencyMatrix, MstError> {
    parse_tree_with_nodes(s, None)
}

fn parse_tree_with_nodes(s: &str, nodes: Option<usize>) -> Result<AdjacencyMatrix, MstError> {
    let lines = split_with_header(s, TREE_HEADER)?;
    let n = parse_count(lines.first(), "node count")?;
    if let Some(want) = nodes {
        if n != want {
            return Err(MstError::Parse(format!("tree has {} nodes, expected {}", n, want)));
        }
    }
    cell_count(n).map_err(|_| MstError::Parse(format!("node count {} is too large", n)))?;

    let mut seen = HashSet::with_capacity(lines.len() - 1);
    let es = lines.iter().skip(1).map(|l| {
        let ws: Vec<&str> = l.split_whitespace().collect();
        let idx = |w: &str| match w.parse::<usize>() {
            Ok(u) if u < n => Ok(u),
            _ => Err(MstError::Parse(format!("bad endpoint `{}` for n={}", w, n))),
        };
        if ws.len() != 2 {
            return Err(MstError::Parse(format!("expected `u v`, got `{}`", l)));
        }
        let e = Edge::new(idx(ws[0])?, idx(ws[1])?);
        if e.from == e.to {
            return Err(MstError::Parse(format!("self-loop at node {}", e.from)));
        }
        if !seen.insert(e.normalized()) {
            return Err(MstError::Parse(format!("duplicate edge ({}, {})", e.from, e.to)));
        }
        Ok(e)
    }).collect::<Result<Vec<_>, MstError>>()?;
    Ok(AdjacencyMatrix::from_edges(n, &es))
}

pub fn read_tree_from_file<P: AsRef<Path>>(fname: P) -> Result<AdjacencyMatrix, MstError> {
    parse_tree(&read_to_string(fname)?)
}

/// Like `read_tree_from_file`, but fails before building the tree unless
/// the file declares exactly `n` nodes.
pub fn read_tree_with_nodes_from_file<P: AsRef<Path>>(
    fname: P,
    n: usize,
) -> Result<AdjacencyMatrix, MstError> {
    parse_tree_with_nodes(&read_to_string(fname)?, Some(n))
}

pub fn write_tree_to_file<P: AsRef<Path>>(t: &AdjacencyMatrix, of: P) -> Result<(), MstError> {
    let mut lines = vec![t.n().to_string()];
    lines.extend(t.edges().iter().map(|e| format!("{} {}", e.from, e.to)));
    write_lines(TREE_HEADER, &lines, of)
}

// `PointSet`, then one `x y` pair per line.
pub fn parse_points(s: &str) -> Result<Vec<Point>, MstError> {
    split_with_header(s, POINTS_HEADER)?
        .par_iter()
        .map(|l| l.parse::<Point>())
        .collect()
}

pub fn read_points_from_file<P: AsRef<Path>>(fname: P) -> Result<Vec<Point>, MstError> {
    parse_points(&read_to_string(fname)?)
}

pub fn write_points_to_file<P: AsRef<Path>>(ps: &[Point], of: P) -> Result<(), MstError> {
    write_lines(POINTS_HEADER, ps, of)
}
