use crate::models::DbAssetCalendar;
use eyre::Result;
use rentsync_core::models::blocking::AvailabilityWindow;
use rentsync_core::models::pricing::HourlyPricingConfig;
use rentsync_core::models::schedule::WeeklySchedule;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_calendar(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
) -> Result<Option<DbAssetCalendar>> {
    tracing::debug!("Getting calendar for asset: {}", asset_id);

    let calendar = sqlx::query_as::<_, DbAssetCalendar>(
        r#"
        SELECT asset_id, weekly_schedule, pricing, window_from, window_to, version, updated_at
        FROM asset_calendars
        WHERE asset_id = $1
        "#,
    )
    .bind(asset_id)
    .fetch_optional(pool)
    .await?;

    if let Some(c) = &calendar {
        tracing::debug!("Calendar found: asset_id={}, version={}", c.asset_id, c.version);
    } else {
        tracing::debug!("Calendar not found: asset_id={}", asset_id);
    }

    Ok(calendar)
}

/// Persists the full owner-edited configuration for an asset.
///
/// Last-write-wins: an existing row is overwritten wholesale and its
/// `version` bumped. A caller that loaded version N and gets back a row with
/// version > N + 1 knows another editor wrote in between.
pub async fn save_calendar(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
    weekly_schedule: &WeeklySchedule,
    pricing: &HourlyPricingConfig,
    window: Option<AvailabilityWindow>,
) -> Result<DbAssetCalendar> {
    tracing::debug!("Saving calendar for asset: {}", asset_id);

    let (window_from, window_to) = match window {
        Some(w) => (w.from, w.to),
        None => (None, None),
    };

    let calendar = sqlx::query_as::<_, DbAssetCalendar>(
        r#"
        INSERT INTO asset_calendars (asset_id, weekly_schedule, pricing, window_from, window_to, version, updated_at)
        VALUES ($1, $2, $3, $4, $5, 1, NOW())
        ON CONFLICT (asset_id) DO UPDATE
        SET weekly_schedule = EXCLUDED.weekly_schedule,
            pricing = EXCLUDED.pricing,
            window_from = EXCLUDED.window_from,
            window_to = EXCLUDED.window_to,
            version = asset_calendars.version + 1,
            updated_at = NOW()
        RETURNING asset_id, weekly_schedule, pricing, window_from, window_to, version, updated_at
        "#,
    )
    .bind(asset_id)
    .bind(Json(weekly_schedule))
    .bind(Json(pricing))
    .bind(window_from)
    .bind(window_to)
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Calendar saved: asset_id={}, version={}",
        calendar.asset_id,
        calendar.version
    );
    Ok(calendar)
}
