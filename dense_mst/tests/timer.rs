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

use std::thread::sleep;
use std::time::Duration;

use dense_mst::common::timer::time_loop;

#[test]
fn mean_of_timed_runs() {
    let (mut setups, mut bodies, mut teardowns) = (0, 0, 0);
    let mean = time_loop(
        "sleep",
        3,
        Duration::ZERO,
        || setups += 1,
        || { bodies += 1; sleep(Duration::from_millis(2)); },
        || teardowns += 1,
    );
    // one warmup run, then three timed ones
    assert_eq!((setups, bodies, teardowns), (4, 4, 4));
    assert!(mean >= Duration::from_millis(2));
    assert!(mean < Duration::from_secs(1));
}

#[test]
fn no_timed_runs() {
    let mut bodies = 0;
    let mean = time_loop("none", 0, Duration::ZERO, || {}, || bodies += 1, || {});
    assert_eq!(bodies, 1);
    assert_eq!(mean, Duration::ZERO);
}
