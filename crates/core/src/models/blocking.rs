use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One owner-blocked calendar day, independent of any reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDateEntry {
    pub date: NaiveDate,
    pub reason: Option<String>,
}

/// The set of explicitly blocked dates for one asset, kept sorted and
/// deduplicated by date.
///
/// Every operation is idempotent: blocking an already-blocked date or
/// unblocking an unblocked one is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDates {
    pub entries: Vec<BlockedDateEntry>,
}

impl BlockedDates {
    pub fn new() -> BlockedDates {
        BlockedDates::default()
    }

    pub fn block_date(&self, date: NaiveDate, reason: Option<String>) -> BlockedDates {
        if self.is_blocked(date) {
            return self.clone();
        }
        let mut next = self.clone();
        next.entries.push(BlockedDateEntry { date, reason });
        next.entries.sort_by_key(|e| e.date);
        next
    }

    pub fn unblock_date(&self, date: NaiveDate) -> BlockedDates {
        let mut next = self.clone();
        next.entries.retain(|e| e.date != date);
        next
    }

    /// Blocks every day in the inclusive range, one entry per day with the
    /// same reason. A reversed range is normalized first.
    pub fn block_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        reason: Option<String>,
    ) -> BlockedDates {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let mut next = self.clone();
        for date in start.iter_days().take_while(|d| *d <= end) {
            if !next.is_blocked(date) {
                next.entries.push(BlockedDateEntry {
                    date,
                    reason: reason.clone(),
                });
            }
        }
        next.entries.sort_by_key(|e| e.date);
        next
    }

    /// Removes every entry whose date falls in the inclusive range.
    pub fn unblock_range(&self, start: NaiveDate, end: NaiveDate) -> BlockedDates {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let mut next = self.clone();
        next.entries.retain(|e| e.date < start || e.date > end);
        next
    }

    /// Blocks `today` through `until`, inclusive. The caller supplies
    /// `today`; nothing here reads the wall clock.
    pub fn block_until(
        &self,
        today: NaiveDate,
        until: NaiveDate,
        reason: Option<String>,
    ) -> BlockedDates {
        self.block_range(today, until, reason)
    }

    pub fn clear_all(&self) -> BlockedDates {
        BlockedDates::new()
    }

    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.date == date)
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&BlockedDateEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Optional overall bound on bookability; dates outside `[from, to]` are
/// excluded unconditionally. An open end (`None`) is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AvailabilityWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }

    /// A window with neither bound set excludes nothing.
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}
