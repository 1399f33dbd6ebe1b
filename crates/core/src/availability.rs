//! # Availability Resolution
//!
//! This module answers the one question the calendar surface asks: "what is
//! the status of date D for this asset?" It reconciles three owner-edited
//! inputs (blocked dates, an optional availability window) with the external
//! booking collaborator's records and the caller-supplied notion of "today".
//!
//! ## Resolution Algorithm
//!
//! [`AvailabilityResolver::day_status`] evaluates a fixed precedence chain
//! and returns the first rule that matches:
//!
//! 1. `Past` — the date is strictly before today (day granularity)
//! 2. `OutsideWindow` — an availability window is active and the date falls
//!    outside it
//! 3. `Unknown` — booking data has not been loaded, so `Booked`/`Pending`
//!    cannot be ruled out and no weaker answer may be given
//! 4. `Booked` — an approved booking's inclusive date span contains the date
//! 5. `Pending` — a pending booking's span contains the date
//! 6. `Blocked` — the owner blocked the date explicitly
//! 7. `Available` — otherwise
//!
//! The ordering is load-bearing: a booking always outranks a manual block
//! (a block on an already-booked date is informational and never hides the
//! booking), pending outranks block but not booked, and past/outside-window
//! outrank everything. The resolver is a pure query over the values it was
//! built with; it performs no I/O and never reads the wall clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::blocking::{AvailabilityWindow, BlockedDates};
use crate::models::booking::{BookingRecord, BookingStatus};

/// Derived availability classification for a single calendar date. Never
/// persisted; recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Available,
    Blocked,
    Booked,
    Pending,
    Past,
    OutsideWindow,
    /// Booking data is still in flight; neither bookable nor not.
    Unknown,
}

/// Pure per-date status query over one asset's configuration.
///
/// `bookings` is `None` while the booking collaborator's data is loading or
/// unavailable; in that state every date that is not already ruled out by
/// `Past`/`OutsideWindow` resolves to [`DayStatus::Unknown`].
#[derive(Debug, Clone)]
pub struct AvailabilityResolver<'a> {
    blocked: &'a BlockedDates,
    window: Option<AvailabilityWindow>,
    bookings: Option<&'a [BookingRecord]>,
    today: NaiveDate,
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(
        blocked: &'a BlockedDates,
        window: Option<AvailabilityWindow>,
        bookings: Option<&'a [BookingRecord]>,
        today: NaiveDate,
    ) -> AvailabilityResolver<'a> {
        AvailabilityResolver {
            blocked,
            window,
            bookings,
            today,
        }
    }

    /// Classifies one date. See the module docs for the precedence chain.
    pub fn day_status(&self, date: NaiveDate) -> DayStatus {
        if date < self.today {
            return DayStatus::Past;
        }

        if let Some(window) = self.window {
            if window.is_active() && !window.contains(date) {
                return DayStatus::OutsideWindow;
            }
        }

        let bookings = match self.bookings {
            Some(bookings) => bookings,
            None => return DayStatus::Unknown,
        };

        if Self::any_with_status(bookings, date, BookingStatus::Approved) {
            return DayStatus::Booked;
        }

        if Self::any_with_status(bookings, date, BookingStatus::Pending) {
            return DayStatus::Pending;
        }

        if self.blocked.is_blocked(date) {
            return DayStatus::Blocked;
        }

        DayStatus::Available
    }

    /// Batch form of [`day_status`](Self::day_status) for calendar grids.
    pub fn statuses_for(
        &self,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Vec<(NaiveDate, DayStatus)> {
        dates
            .into_iter()
            .map(|date| (date, self.day_status(date)))
            .collect()
    }

    fn any_with_status(bookings: &[BookingRecord], date: NaiveDate, status: BookingStatus) -> bool {
        bookings
            .iter()
            .any(|b| b.status == status && b.covers(date))
    }
}
