use crate::models::DbBooking;
use async_trait::async_trait;
use eyre::Result;
use rentsync_core::models::booking::BookingRecord;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_bookings_by_asset_id(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
) -> Result<Vec<DbBooking>> {
    tracing::debug!("Getting bookings for asset: {}", asset_id);

    let rows = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, asset_id, start_date, end_date, status, is_hourly, hourly_slots, created_at
        FROM bookings
        WHERE asset_id = $1
        ORDER BY start_date ASC
        "#,
    )
    .bind(asset_id)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} bookings for asset {}", rows.len(), asset_id);
    Ok(rows)
}

/// Bookings in the two statuses the availability resolver consumes
/// (approved and pending), converted to core records.
pub async fn get_active_bookings_by_asset_id(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
) -> Result<Vec<BookingRecord>> {
    tracing::debug!("Getting active bookings for asset: {}", asset_id);

    let rows = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, asset_id, start_date, end_date, status, is_hourly, hourly_slots, created_at
        FROM bookings
        WHERE asset_id = $1 AND status IN ('approved', 'pending')
        ORDER BY start_date ASC
        "#,
    )
    .bind(asset_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(DbBooking::into_record).collect()
}

/// Read-only seam over the external booking subsystem, so consumers can
/// resolve availability without depending on Postgres directly.
#[async_trait]
pub trait BookingSource: Send + Sync {
    async fn active_bookings(&self, asset_id: Uuid) -> Result<Vec<BookingRecord>>;
}

pub struct PgBookingSource {
    pool: Pool<Postgres>,
}

impl PgBookingSource {
    pub fn new(pool: Pool<Postgres>) -> PgBookingSource {
        PgBookingSource { pool }
    }
}

#[async_trait]
impl BookingSource for PgBookingSource {
    async fn active_bookings(&self, asset_id: Uuid) -> Result<Vec<BookingRecord>> {
        get_active_bookings_by_asset_id(&self.pool, asset_id).await
    }
}
