use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per asset holding the owner-edited configuration. Saves are
    // last-write-wins; `version` is bumped on every write so callers can
    // detect a lost race after the fact.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS asset_calendars (
            asset_id UUID PRIMARY KEY,
            weekly_schedule JSONB NOT NULL,
            pricing JSONB NOT NULL,
            window_from DATE NULL,
            window_to DATE NULL,
            version BIGINT NOT NULL DEFAULT 1,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One row per blocked day; the composite key makes blocking idempotent.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blocked_dates (
            asset_id UUID NOT NULL,
            date DATE NOT NULL,
            reason TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (asset_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Owned by the external booking subsystem; this crate only reads it.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY,
            asset_id UUID NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            status VARCHAR(32) NOT NULL,
            is_hourly BOOLEAN NOT NULL DEFAULT FALSE,
            hourly_slots JSONB NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_date_range CHECK (end_date >= start_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_blocked_dates_asset_id ON blocked_dates(asset_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_asset_id ON bookings(asset_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_status ON bookings(status);
        CREATE INDEX IF NOT EXISTS idx_bookings_start_date ON bookings(start_date);
        CREATE INDEX IF NOT EXISTS idx_bookings_end_date ON bookings(end_date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
