//! Time source and record id allocation

use chrono::{Local, NaiveDate, Utc};
use std::cell::Cell;

pub trait Clock {
    /// Local calendar date
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Clock frozen at a given day and instant; the instant can be moved.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Cell<NaiveDate>,
    millis: Cell<u64>,
}

impl FixedClock {
    pub fn new(today: NaiveDate, millis: u64) -> Self {
        Self {
            today: Cell::new(today),
            millis: Cell::new(millis),
        }
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }

    pub fn advance_millis(&self, by: u64) {
        self.millis.set(self.millis.get() + by);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }

    fn now_millis(&self) -> u64 {
        self.millis.get()
    }
}

/// Hands out strictly increasing ids. Ids follow the clock when it moves
/// forward, so they stay comparable with millisecond ids written by older
/// versions; otherwise they count up from the last one issued.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    /// `floor` is the largest id already in use, if any.
    pub fn starting_after(floor: Option<u64>) -> Self {
        Self { last: floor }
    }

    pub fn next_id(&mut self, now_millis: u64) -> u64 {
        let id = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_the_clock_when_it_advances() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(1_000), 1_000);
        assert_eq!(ids.next_id(5_000), 5_000);
    }

    #[test]
    fn same_instant_bumps_by_one() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(1_000), 1_000);
        assert_eq!(ids.next_id(1_000), 1_001);
        assert_eq!(ids.next_id(1_000), 1_002);
        assert_eq!(ids.next_id(999), 1_003);
    }

    #[test]
    fn never_reissues_an_existing_id() {
        let mut ids = IdGenerator::starting_after(Some(9_000));
        assert_eq!(ids.next_id(1_000), 9_001);
        assert_eq!(ids.next_id(20_000), 20_000);
    }

    #[test]
    fn fixed_clock_moves_only_when_told() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let clock = FixedClock::new(day, 10);
        clock.advance_millis(5);
        assert_eq!(clock.now_millis(), 15);
        assert_eq!(clock.today(), day);
    }
}
