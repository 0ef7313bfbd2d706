//! Wall-clock implementation of the clock port.

use chrono::{DateTime, Utc};

use super::ports::ClockPort;

/// System clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
