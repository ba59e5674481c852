//! Daily puzzle selection
//!
//! Day `n` after the epoch (counted in whole UTC days) gets catalog entry
//! `n mod len`, so every player sees the same code on the same UTC date and
//! the catalog is cycled one entry per day.

use crate::catalog::Catalog;
use crate::core::Code;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, Utc};
use std::fmt;

/// Midnight UTC of `date`
#[must_use]
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days elapsed between the epoch and `now`, rounded down
///
/// Instants before the epoch yield negative indices.
///
/// # Examples
/// ```
/// use airport_wordle::game::daily::{day_index, midnight_utc};
/// use chrono::NaiveDate;
///
/// let epoch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let later = midnight_utc(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap());
/// assert_eq!(day_index(epoch, later), 10);
/// ```
#[must_use]
pub fn day_index(epoch: NaiveDate, now: DateTime<Utc>) -> i64 {
    // The UTC calendar date already floors the instant to its day
    (now.date_naive() - epoch).num_days()
}

/// Position in a catalog of `len` codes for a given day index
///
/// Negative indices wrap around to the end of the catalog.
///
/// # Panics
/// Panics if `len` is zero; `Catalog` guarantees it never is.
#[must_use]
pub fn catalog_index(day_index: i64, len: usize) -> usize {
    day_index.rem_euclid(len as i64) as usize
}

/// The solution for the UTC day containing `now`
#[must_use]
pub fn solution_for(catalog: &Catalog, epoch: NaiveDate, now: DateTime<Utc>) -> Code {
    let index = catalog_index(day_index(epoch, now), catalog.len());
    catalog.codes()[index]
}

/// The solution for a calendar date
///
/// # Examples
/// ```
/// use airport_wordle::catalog::Catalog;
/// use airport_wordle::game::daily::solution_for_date;
/// use chrono::NaiveDate;
///
/// let catalog = Catalog::parse("AAA\nBBB\nCCC").unwrap();
/// let epoch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
/// assert_eq!(solution_for_date(&catalog, epoch, date).as_str(), "AAA");
/// ```
#[must_use]
pub fn solution_for_date(catalog: &Catalog, epoch: NaiveDate, date: NaiveDate) -> Code {
    solution_for(catalog, epoch, midnight_utc(date))
}

/// ISO `YYYY-MM-DD` form of a date, as stored alongside saved guesses
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Time left until the next UTC midnight, when the next puzzle starts
#[must_use]
pub fn time_until_next_puzzle(now: DateTime<Utc>) -> TimeDelta {
    now.date_naive()
        .checked_add_days(Days::new(1))
        .map_or(TimeDelta::zero(), |tomorrow| midnight_utc(tomorrow) - now)
}

/// Hours, minutes and seconds until the next puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Countdown to the next puzzle, or `None` if it is already due
    #[must_use]
    pub fn until_next_puzzle(now: DateTime<Utc>) -> Option<Self> {
        let diff = time_until_next_puzzle(now).num_milliseconds();
        if diff <= 0 {
            return None;
        }

        Some(Self {
            hours: diff / 3_600_000,
            minutes: (diff % 3_600_000) / 60_000,
            seconds: (diff % 60_000) / 1_000,
        })
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn epoch() -> NaiveDate {
        date(2025, 1, 1)
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        date(y, m, d).and_hms_opt(h, min, s).unwrap().and_utc()
    }

    #[test]
    fn day_index_counts_whole_days() {
        assert_eq!(day_index(epoch(), at(2025, 1, 1, 0, 0, 0)), 0);
        assert_eq!(day_index(epoch(), at(2025, 1, 1, 23, 59, 59)), 0);
        assert_eq!(day_index(epoch(), at(2025, 1, 2, 0, 0, 0)), 1);
        assert_eq!(day_index(epoch(), at(2026, 1, 1, 12, 0, 0)), 365);
    }

    #[test]
    fn day_index_before_epoch_rounds_down() {
        assert_eq!(day_index(epoch(), at(2024, 12, 31, 23, 59, 59)), -1);
        assert_eq!(day_index(epoch(), at(2024, 12, 30, 0, 0, 0)), -2);
    }

    #[test]
    fn day_index_floors_below_millisecond_precision() {
        let epoch_start = midnight_utc(epoch());
        assert_eq!(day_index(epoch(), epoch_start - TimeDelta::nanoseconds(1)), -1);
        assert_eq!(day_index(epoch(), epoch_start - TimeDelta::microseconds(999)), -1);
        assert_eq!(day_index(epoch(), epoch_start + TimeDelta::nanoseconds(1)), 0);

        let next_day = midnight_utc(date(2025, 1, 2));
        assert_eq!(day_index(epoch(), next_day - TimeDelta::nanoseconds(1)), 0);
    }

    #[test]
    fn catalog_index_wraps() {
        assert_eq!(catalog_index(0, 3), 0);
        assert_eq!(catalog_index(3, 3), 0);
        assert_eq!(catalog_index(4, 3), 1);
        assert_eq!(catalog_index(-1, 3), 2);
    }

    #[test]
    fn solution_cycles_through_catalog() {
        let catalog = Catalog::parse("AAA\nBBB\nCCC").unwrap();
        let pick = |d| solution_for_date(&catalog, epoch(), d).to_string();

        assert_eq!(pick(date(2025, 1, 1)), "AAA");
        assert_eq!(pick(date(2025, 1, 2)), "BBB");
        assert_eq!(pick(date(2025, 1, 3)), "CCC");
        assert_eq!(pick(date(2025, 1, 4)), "AAA");
    }

    #[test]
    fn solution_is_stable_within_a_utc_day() {
        let catalog = Catalog::parse("AAA\nBBB\nCCC\nDDD").unwrap();
        let morning = solution_for(&catalog, epoch(), at(2025, 5, 5, 0, 0, 1));
        let evening = solution_for(&catalog, epoch(), at(2025, 5, 5, 23, 59, 59));
        assert_eq!(morning, evening);
    }

    #[test]
    fn solutions_differ_unless_a_full_cycle_apart() {
        let catalog = Catalog::parse("AAA\nBBB\nCCC\nDDD\nEEE\nFFF\nGGG").unwrap();
        let len = catalog.len() as i64;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let d1 = epoch() + TimeDelta::days(rng.random_range(-1_000..5_000));
            let gap = rng.random_range(1..60);
            let d2 = d1 + TimeDelta::days(gap);

            let s1 = solution_for_date(&catalog, epoch(), d1);
            assert_eq!(s1, solution_for_date(&catalog, epoch(), d1));

            let s2 = solution_for_date(&catalog, epoch(), d2);
            assert_eq!(s1 == s2, gap % len == 0, "d1={d1} gap={gap}");
        }
    }

    #[test]
    fn iso_date_format() {
        assert_eq!(iso_date(date(2025, 3, 7)), "2025-03-07");
    }

    #[test]
    fn countdown_to_midnight() {
        let countdown = Countdown::until_next_puzzle(at(2025, 6, 1, 21, 15, 30)).unwrap();
        assert_eq!(
            countdown,
            Countdown {
                hours: 2,
                minutes: 44,
                seconds: 30
            }
        );
        assert_eq!(countdown.to_string(), "2h 44m 30s");
    }

    #[test]
    fn countdown_at_midnight_is_full_day() {
        let countdown = Countdown::until_next_puzzle(at(2025, 6, 1, 0, 0, 0)).unwrap();
        assert_eq!(countdown.to_string(), "24h 0m 0s");
    }

    #[test]
    fn countdown_just_before_midnight() {
        let now = at(2025, 6, 1, 23, 59, 59) + TimeDelta::milliseconds(500);
        let countdown = Countdown::until_next_puzzle(now).unwrap();
        assert_eq!(countdown.to_string(), "0h 0m 0s");
    }
}
