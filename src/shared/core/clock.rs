// Source of "now" for everything that buckets by calendar month.
//
// Purpose
// - Keep the analytics engine pure: handlers ask a Clock for the reference instant and pass it in.
//
// Testing guidance
// - Use FixedClock to pin the trailing month windows to a known month.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
