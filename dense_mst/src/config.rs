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

use crate::error::MstError;

/// The knobs the engine consumes. Everything else (grid spacing, file
/// names, ...) belongs to the binaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MstConfig {
    /// number of long-lived workers in the pool
    pub workers: usize,
    /// node the tree is grown from
    pub root: usize,
    /// pin worker `i` to core `i mod cores`
    pub pin_workers: bool,
}

impl MstConfig {
    pub fn new(workers: usize, root: usize) -> Self {
        Self { workers, root, pin_workers: false }
    }

    pub fn with_pinning(mut self, pin: bool) -> Self {
        self.pin_workers = pin;
        self
    }

    /// Checks the configuration against a graph of `n` nodes.
    pub fn validate(&self, n: usize) -> Result<(), MstError> {
        if n == 0 { return Err(MstError::EmptyGraph); }
        if self.workers == 0 {
            return Err(MstError::InvalidWorkerCount(self.workers));
        }
        if self.root >= n {
            return Err(MstError::InvalidRoot { root: self.root, n });
        }
        Ok(())
    }
}

impl Default for MstConfig {
    fn default() -> Self {
        Self::new(rayon::current_num_threads(), 0)
    }
}
