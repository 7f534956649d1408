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

use crossbeam_channel::Receiver;

use crate::common::graph::{Weight, WghEdge};
use crate::error::MstError;
use super::pool::JobResult;

/// Blocks until `expected` results have arrived, then reduces them.
/// This is the round barrier: no result of the next round can be
/// received before this returns.
pub fn aggregate<W: Weight>(
    results: &Receiver<JobResult<W>>,
    expected: usize,
) -> Result<Option<WghEdge<W>>, MstError> {
    let rs = (0..expected)
        .map(|_| results.recv().map_err(|_| MstError::PoolDisconnected))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reduce(rs))
}

/// Smallest weight wins; equal weights go to the lowest partition index.
/// Arrival order never matters.
pub fn reduce<W, I>(results: I) -> Option<WghEdge<W>> where
    W: Weight,
    I: IntoIterator<Item = JobResult<W>>,
{
    results
        .into_iter()
        .filter_map(|r| r.best.map(|e| (r.part, e)))
        .min_by(|(pa, a), (pb, b)| a.w.cmp(&b.w).then(pa.cmp(pb)))
        .map(|(_, e)| e)
}
