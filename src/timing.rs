use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Number of ticks in one second. A tick is one microsecond.
pub const TICKS_PER_SECOND: u64 = 1_000_000;

/// Measures elapsed wall clock time from the moment it is started.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Stopwatch {
        Stopwatch {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed::from(self.started.elapsed())
    }
}

/// Elapsed time reported both in ticks and in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elapsed {
    ticks: u64,
}

impl Elapsed {
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seconds(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_SECOND as f64
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Elapsed {
            ticks: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        }
    }
}

impl Display for Elapsed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "time: {} clock ticks", self.ticks)?;
        write!(f, "time: {} seconds", self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_and_seconds() {
        let elapsed = Elapsed::from(Duration::from_millis(1500));
        assert_eq!(elapsed.ticks(), 1_500_000);
        assert_eq!(elapsed.seconds(), 1.5);
        assert_eq!(elapsed.to_string(), "time: 1500000 clock ticks\ntime: 1.5 seconds");
    }

    #[test]
    fn test_stopwatch_is_monotonic() {
        let stopwatch = Stopwatch::start();
        let first = stopwatch.elapsed();
        let second = stopwatch.elapsed();
        assert!(second.ticks() >= first.ticks());
    }
}
