//! Solution schedule command
//!
//! Lists the daily solutions for a range of dates. Meant for catalog
//! maintainers checking how a reordered catalog plays out.

use crate::catalog::Catalog;
use crate::core::Code;
use crate::game::daily::{catalog_index, day_index, midnight_utc};
use chrono::{Days, NaiveDate};

/// One scheduled puzzle day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub day_index: i64,
    pub code: Code,
}

/// Solutions for `days` consecutive dates starting at `from`
///
/// Stops early if the calendar runs out.
#[must_use]
pub fn build_schedule(
    catalog: &Catalog,
    epoch: NaiveDate,
    from: NaiveDate,
    days: usize,
) -> Vec<ScheduleEntry> {
    (0..days as u64)
        .map_while(|offset| from.checked_add_days(Days::new(offset)))
        .map(|date| {
            let day = day_index(epoch, midnight_utc(date));
            ScheduleEntry {
                date,
                day_index: day,
                code: catalog.codes()[catalog_index(day, catalog.len())],
            }
        })
        .collect()
}
