use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Finalized state of a booking as reported by the booking subsystem.
///
/// This crate never advances a booking through its lifecycle; it only reads
/// the status the external system settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

/// The booked hours within one calendar day of an hourly booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySlotDay {
    pub date: NaiveDate,
    /// "HH:00" labels, one per booked hour.
    pub hours: Vec<String>,
}

/// A booking row owned by the external booking subsystem, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
    pub is_hourly: bool,
    pub hourly_slots: Option<Vec<HourlySlotDay>>,
}

impl BookingRecord {
    /// Whether `date` falls inside the booking's inclusive date span.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
