use chrono::NaiveDate;
use mockall::mock;
use rentsync_core::models::blocking::AvailabilityWindow;
use rentsync_core::models::booking::BookingRecord;
use rentsync_core::models::pricing::HourlyPricingConfig;
use rentsync_core::models::schedule::WeeklySchedule;
use uuid::Uuid;

use crate::models::{DbAssetCalendar, DbBlockedDate, DbBooking};

// Mock repositories for testing
mock! {
    pub CalendarRepo {
        pub async fn get_calendar(
            &self,
            asset_id: Uuid,
        ) -> eyre::Result<Option<DbAssetCalendar>>;

        pub async fn save_calendar(
            &self,
            asset_id: Uuid,
            weekly_schedule: WeeklySchedule,
            pricing: HourlyPricingConfig,
            window: Option<AvailabilityWindow>,
        ) -> eyre::Result<DbAssetCalendar>;
    }
}

mock! {
    pub BlockedDateRepo {
        pub async fn get_blocked_dates(
            &self,
            asset_id: Uuid,
        ) -> eyre::Result<Vec<DbBlockedDate>>;

        pub async fn block_date(
            &self,
            asset_id: Uuid,
            date: NaiveDate,
            reason: Option<&'static str>,
        ) -> eyre::Result<()>;

        pub async fn unblock_date(
            &self,
            asset_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<()>;

        pub async fn block_range(
            &self,
            asset_id: Uuid,
            start: NaiveDate,
            end: NaiveDate,
            reason: Option<&'static str>,
        ) -> eyre::Result<u64>;

        pub async fn unblock_range(
            &self,
            asset_id: Uuid,
            start: NaiveDate,
            end: NaiveDate,
        ) -> eyre::Result<u64>;

        pub async fn clear_blocked_dates(
            &self,
            asset_id: Uuid,
        ) -> eyre::Result<u64>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn get_bookings_by_asset_id(
            &self,
            asset_id: Uuid,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_active_bookings_by_asset_id(
            &self,
            asset_id: Uuid,
        ) -> eyre::Result<Vec<BookingRecord>>;
    }
}
