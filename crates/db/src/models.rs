use chrono::{DateTime, NaiveDate, Utc};
use eyre::eyre;
use rentsync_core::models::blocking::{AvailabilityWindow, BlockedDateEntry};
use rentsync_core::models::booking::{BookingRecord, BookingStatus, HourlySlotDay};
use rentsync_core::models::pricing::HourlyPricingConfig;
use rentsync_core::models::schedule::WeeklySchedule;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// The persisted owner-edited configuration for one asset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAssetCalendar {
    pub asset_id: Uuid,
    pub weekly_schedule: Json<WeeklySchedule>,
    pub pricing: Json<HourlyPricingConfig>,
    pub window_from: Option<NaiveDate>,
    pub window_to: Option<NaiveDate>,
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

impl DbAssetCalendar {
    pub fn window(&self) -> Option<AvailabilityWindow> {
        if self.window_from.is_none() && self.window_to.is_none() {
            return None;
        }
        Some(AvailabilityWindow {
            from: self.window_from,
            to: self.window_to,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBlockedDate {
    pub asset_id: Uuid,
    pub date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbBlockedDate> for BlockedDateEntry {
    fn from(row: DbBlockedDate) -> BlockedDateEntry {
        BlockedDateEntry {
            date: row.date,
            reason: row.reason,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub is_hourly: bool,
    pub hourly_slots: Option<Json<Vec<HourlySlotDay>>>,
    pub created_at: DateTime<Utc>,
}

impl DbBooking {
    /// Converts the raw row into the core's read-only booking record.
    /// Fails on a status value this core does not recognize.
    pub fn into_record(self) -> eyre::Result<BookingRecord> {
        let status = match self.status.as_str() {
            "pending" => BookingStatus::Pending,
            "approved" => BookingStatus::Approved,
            "rejected" => BookingStatus::Rejected,
            "cancelled" => BookingStatus::Cancelled,
            other => return Err(eyre!("Unknown booking status: {}", other)),
        };

        Ok(BookingRecord {
            id: self.id,
            start_date: self.start_date,
            end_date: self.end_date,
            status,
            is_hourly: self.is_hourly,
            hourly_slots: self.hourly_slots.map(|Json(slots)| slots),
        })
    }
}
