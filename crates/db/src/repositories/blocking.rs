use crate::models::DbBlockedDate;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_blocked_dates(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
) -> Result<Vec<DbBlockedDate>> {
    tracing::debug!("Getting blocked dates for asset: {}", asset_id);

    let rows = sqlx::query_as::<_, DbBlockedDate>(
        r#"
        SELECT asset_id, date, reason, created_at
        FROM blocked_dates
        WHERE asset_id = $1
        ORDER BY date ASC
        "#,
    )
    .bind(asset_id)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} blocked dates for asset {}", rows.len(), asset_id);
    Ok(rows)
}

/// Blocks a single date. Blocking an already-blocked date is a no-op.
pub async fn block_date(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
    date: NaiveDate,
    reason: Option<&str>,
) -> Result<()> {
    tracing::debug!("Blocking date {} for asset {}", date, asset_id);

    sqlx::query(
        r#"
        INSERT INTO blocked_dates (asset_id, date, reason)
        VALUES ($1, $2, $3)
        ON CONFLICT (asset_id, date) DO NOTHING
        "#,
    )
    .bind(asset_id)
    .bind(date)
    .bind(reason)
    .execute(pool)
    .await?;

    Ok(())
}

/// Unblocks a single date. Unblocking an unblocked date is a no-op.
pub async fn unblock_date(pool: &Pool<Postgres>, asset_id: Uuid, date: NaiveDate) -> Result<()> {
    tracing::debug!("Unblocking date {} for asset {}", date, asset_id);

    sqlx::query(
        r#"
        DELETE FROM blocked_dates
        WHERE asset_id = $1 AND date = $2
        "#,
    )
    .bind(asset_id)
    .bind(date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Blocks every day in the inclusive range with the same reason. A reversed
/// range is normalized first.
pub async fn block_range(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    reason: Option<&str>,
) -> Result<u64> {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    tracing::debug!(
        "Blocking range {}..={} for asset {}",
        start,
        end,
        asset_id
    );

    let mut inserted = 0;
    for date in start.iter_days().take_while(|d| *d <= end) {
        let result = sqlx::query(
            r#"
            INSERT INTO blocked_dates (asset_id, date, reason)
            VALUES ($1, $2, $3)
            ON CONFLICT (asset_id, date) DO NOTHING
            "#,
        )
        .bind(asset_id)
        .bind(date)
        .bind(reason)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }

    tracing::debug!("Blocked {} new dates for asset {}", inserted, asset_id);
    Ok(inserted)
}

/// Removes every blocked entry whose date falls in the inclusive range.
pub async fn unblock_range(
    pool: &Pool<Postgres>,
    asset_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<u64> {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    tracing::debug!(
        "Unblocking range {}..={} for asset {}",
        start,
        end,
        asset_id
    );

    let result = sqlx::query(
        r#"
        DELETE FROM blocked_dates
        WHERE asset_id = $1 AND date >= $2 AND date <= $3
        "#,
    )
    .bind(asset_id)
    .bind(start)
    .bind(end)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn clear_blocked_dates(pool: &Pool<Postgres>, asset_id: Uuid) -> Result<u64> {
    tracing::debug!("Clearing all blocked dates for asset {}", asset_id);

    let result = sqlx::query(
        r#"
        DELETE FROM blocked_dates
        WHERE asset_id = $1
        "#,
    )
    .bind(asset_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
