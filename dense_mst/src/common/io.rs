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

use std::{fs, path::Path};

use crate::error::MstError;

/// Splits a text file into its header line and the remaining non-empty
/// lines. Fails if the header is not `header`.
pub(crate) fn split_with_header<'a>(
    s: &'a str,
    header: &str,
) -> Result<Vec<&'a str>, MstError> {
    let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
    match lines.next() {
        Some(h) if h == header => Ok(lines.collect()),
        Some(h) => Err(MstError::Parse(
            format!("expected header `{}`, found `{}`", header, h))),
        None => Err(MstError::Parse(format!("missing header `{}`", header))),
    }
}

pub(crate) fn parse_count(line: Option<&&str>, what: &str) -> Result<usize, MstError> {
    let line = line.ok_or_else(|| MstError::Parse(format!("missing {}", what)))?;
    line.parse()
        .map_err(|e| MstError::Parse(format!("bad {} `{}`: {}", what, line, e)))
}

pub(crate) fn read_to_string<P: AsRef<Path>>(fname: P) -> Result<String, MstError> {
    Ok(fs::read_to_string(fname)?)
}

/// Writes `header` followed by one item per line.
pub(crate) fn write_lines<T, P>(header: &str, items: &[T], of: P) -> Result<(), MstError>
where
    T: ToString,
    P: AsRef<Path>,
{
    let mut s: Vec<String> = Vec::with_capacity(items.len() + 1);
    s.push(header.to_string());
    s.extend(items.iter().map(T::to_string));
    fs::write(of, s.join("\n") + "\n")?;
    Ok(())
}
