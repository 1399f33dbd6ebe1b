use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::day::Weekday;

/// An available block of hours within one day, on hour boundaries.
///
/// Endpoints are whole hours of the day; `end` may be 24 for a range that
/// runs to midnight. Invariant: `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u8,
    pub end: u8,
}

impl TimeRange {
    /// Builds a range from whole hours. Returns `None` when the hours are
    /// out of bounds or `end <= start`.
    pub fn from_hours(start: u8, end: u8) -> Option<TimeRange> {
        if start >= 24 || end > 24 || end <= start {
            return None;
        }
        Some(TimeRange { start, end })
    }

    fn overlaps(&self, other: &TimeRange) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00 - {:02}:00", self.start, self.end)
    }
}

/// Recurring weekly availability: each of the 7 days maps to an ordered,
/// non-overlapping list of [`TimeRange`]s.
///
/// All mutators are value-in/value-out. Edits that would violate the
/// per-day non-overlap invariant return `None` and leave the caller holding
/// the unchanged schedule; interactive editors treat that as "invalid,
/// ignored" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub days: BTreeMap<Weekday, Vec<TimeRange>>,
}

impl WeeklySchedule {
    pub fn new() -> WeeklySchedule {
        WeeklySchedule::default()
    }

    /// Adds a range to `day`, keeping that day sorted ascending by start.
    ///
    /// Returns `None` when `range.end <= range.start` or when the range
    /// overlaps any existing range on that day.
    pub fn add_range(&self, day: Weekday, range: TimeRange) -> Option<WeeklySchedule> {
        if range.end <= range.start {
            return None;
        }
        if self
            .ranges_for(day)
            .iter()
            .any(|r| r.overlaps(&range))
        {
            return None;
        }

        let mut next = self.clone();
        let ranges = next.days.entry(day).or_default();
        ranges.push(range);
        ranges.sort_by_key(|r| r.start);
        Some(next)
    }

    /// Removes the range at `index` on `day`. Out-of-range indexes are a
    /// no-op; no other day is touched.
    pub fn remove_range(&self, day: Weekday, index: usize) -> WeeklySchedule {
        let mut next = self.clone();
        if let Some(ranges) = next.days.get_mut(&day) {
            if index < ranges.len() {
                ranges.remove(index);
            }
        }
        next
    }

    /// Overwrites every weekday (Mon-Fri, except `source` itself) with a copy
    /// of `source`'s ranges. This replaces, never merges.
    pub fn copy_to_weekdays(&self, source: Weekday) -> WeeklySchedule {
        let template = self.ranges_for(source).to_vec();
        let mut next = self.clone();
        for day in Weekday::WEEKDAYS {
            if day != source {
                next.days.insert(day, template.clone());
            }
        }
        next
    }

    /// Overwrites every other day of the week with a copy of `source`'s
    /// ranges.
    pub fn copy_to_all_days(&self, source: Weekday) -> WeeklySchedule {
        let template = self.ranges_for(source).to_vec();
        let mut next = self.clone();
        for day in Weekday::ALL {
            if day != source {
                next.days.insert(day, template.clone());
            }
        }
        next
    }

    pub fn ranges_for(&self, day: Weekday) -> &[TimeRange] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that have at least one range, in Mon..Sun order.
    pub fn active_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| !self.ranges_for(*day).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

/// "HH:00" labels for an editor's hour dropdown, bounded by the asset's
/// operating window (`open..=close`, whole hours).
pub fn hour_options(open: u8, close: u8) -> Vec<String> {
    (open..=close.min(24))
        .map(|h| format!("{:02}:00", h))
        .collect()
}
