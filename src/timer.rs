use std::fmt;
use std::time::{Duration, Instant};

/// Named stopwatch recording the time spent between successive splits.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    name: String,
    started: Instant,
    last: Instant,
    splits: Vec<(String, Duration)>,
}

impl Stopwatch {
    pub fn start(name: &str) -> Self {
        let now = Instant::now();
        Self {
            name: name.to_string(),
            started: now,
            last: now,
            splits: Vec::new(),
        }
    }

    /// Records the time elapsed since the previous split (or the start).
    pub fn split(&mut self, label: &str) -> Duration {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.splits.push((label.to_string(), elapsed));
        elapsed
    }

    pub fn total(&self) -> Duration {
        self.last - self.started
    }

    pub fn stats(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for (label, elapsed) in &self.splits {
            write!(f, " {} {:.3} ms,", label, elapsed.as_secs_f64() * 1e3)?;
        }
        write!(f, " total {:.3} ms", self.total().as_secs_f64() * 1e3)
    }
}
