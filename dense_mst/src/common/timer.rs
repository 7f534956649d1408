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

use std::time::{Duration, Instant};

/// Phase timer. Each `next` reports the time since the previous mark as
/// `name:phase:\tseconds`.
pub struct Timer<'a> {
    name: &'a str,
    elapsed: Duration,
    last: Instant,
    on: bool,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name, elapsed: Duration::ZERO, last: Instant::now(), on: false }
    }

    pub fn report(&self, d: Duration, phase: &str) {
        if phase.is_empty() {
            println!("{}:\t{:.6}", self.name, d.as_secs_f64());
        } else {
            println!("{}:{}:\t{:.6}", self.name, phase, d.as_secs_f64());
        }
    }

    pub fn start(&mut self) {
        self.on = true;
        self.last = Instant::now();
    }

    /// Turns the timer off and returns the time since the last mark.
    pub fn stop(&mut self) -> Duration {
        let d = self.lap();
        self.on = false;
        d
    }

    fn lap(&mut self) -> Duration {
        if !self.on { return Duration::ZERO; }
        let now = Instant::now();
        let d = now - self.last;
        self.elapsed += d;
        self.last = now;
        d
    }

    pub fn next(&mut self, phase: &str) {
        if self.on {
            let d = self.lap();
            self.report(d, phase);
        }
    }

    /// Time spent switched on since `new`.
    pub fn total_time(&self) -> Duration {
        if self.on { self.elapsed + self.last.elapsed() } else { self.elapsed }
    }

    pub fn total(&self) {
        self.report(self.total_time(), "total");
    }
}

/// Runs `body` until `warmup` has passed (at least once), then `rounds`
/// more times with `setup`/`teardown` around each timed run. Returns the
/// mean of the timed runs.
pub fn time_loop<S, B, T>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut setup: S,
    mut body: B,
    mut teardown: T,
) -> Duration where
    S: FnMut(),
    B: FnMut(),
    T: FnMut(),
{
    let start = Instant::now();
    loop {
        setup();
        body();
        teardown();
        if start.elapsed() >= warmup { break; }
    }

    let mut t = Timer::new(name);
    let mut total = Duration::ZERO;
    for _ in 0..rounds {
        setup();
        t.start();
        body();
        let d = t.stop();
        t.report(d, "");
        total += d;
        teardown();
    }
    if rounds == 0 { Duration::ZERO } else { total.div_f64(rounds as f64) }
}
