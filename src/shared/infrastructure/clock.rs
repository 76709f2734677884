// Clock port used by the auction service to stamp `updated_at`.
//
// Responsibilities
// - SystemClock hands out wall clock time, but never the same or an earlier instant twice, so
//   every write gets a distinct, strictly increasing timestamp.
// - FixedClock lets tests pin time.

use crate::shared::core::primitives::Timestamp;
use chrono::{Duration, Utc};
use std::sync::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Default)]
pub struct SystemClock {
    last: Mutex<Option<Timestamp>>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let wall = Utc::now();
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let next = match *last {
            Some(previous) if wall <= previous => previous + Duration::microseconds(1),
            _ => wall,
        };
        *last = Some(next);
        next
    }
}

/// Returns the pinned instant, advancing by `step` after each call.
pub struct FixedClock {
    current: Mutex<Timestamp>,
    step: Duration,
}

impl FixedClock {
    pub fn new(start: Timestamp) -> Self {
        Self::stepping(start, Duration::zero())
    }

    pub fn stepping(start: Timestamp, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let value = *current;
        *current = value + self.step;
        value
    }
}
