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

//! Error types for MST computation.

use std::{fmt, io};

/// Errors that can occur while validating input or growing the tree.
#[derive(Debug)]
pub enum MstError {
    /// The distance matrix has no nodes.
    EmptyGraph,

    /// The worker pool needs at least one worker.
    InvalidWorkerCount(usize),

    /// The matrix is not square, not symmetric, or holds a negative
    /// off-diagonal weight. The message names the offending cell.
    MalformedGraph(String),

    /// The root index is not a node of the graph.
    InvalidRoot { root: usize, n: usize },

    /// A round produced no candidate edge while the tree was incomplete.
    NoEdgeFound { accepted: usize, n: usize },

    /// The pool was stopped, or its workers went away, mid-computation.
    PoolDisconnected,

    /// A text input could not be parsed.
    Parse(String),

    Io(io::Error),
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstError::EmptyGraph => write!(f, "empty graph: the matrix has no nodes"),
            MstError::InvalidWorkerCount(w) => {
                write!(f, "invalid worker count: need at least 1, got {}", w)
            }
            MstError::MalformedGraph(msg) => write!(f, "malformed graph: {}", msg),
            MstError::InvalidRoot { root, n } => {
                write!(f, "invalid root: {} is not in [0, {})", root, n)
            }
            MstError::NoEdgeFound { accepted, n } => write!(
                f,
                "no edge found after accepting {} of {} edges",
                accepted,
                n.saturating_sub(1)
            ),
            MstError::PoolDisconnected => write!(f, "worker pool disconnected"),
            MstError::Parse(msg) => write!(f, "parse error: {}", msg),
            MstError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for MstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MstError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MstError {
    fn from(e: io::Error) -> Self { MstError::Io(e) }
}
