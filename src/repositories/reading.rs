use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{NewReading, Reading, ReadingQueryParams};
use sqlx::Row;

const COLUMNS: &str = "id, ts, device_name, ip_address, power_state, power_w, \
                       energy_today_kwh, kwh_price_cents, cost_today";

#[derive(Clone)]
pub struct ReadingRepository {
    pool: DbPool,
}

impl ReadingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, reading: &NewReading) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO readings \
                 (ts, device_name, ip_address, power_state, power_w, \
                  energy_today_kwh, kwh_price_cents, cost_today) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(reading.ts)
        .bind(&reading.device_name)
        .bind(&reading.ip_address)
        .bind(&reading.power_state)
        .bind(reading.power_w)
        .bind(reading.energy_today_kwh)
        .bind(reading.kwh_price_cents)
        .bind(reading.cost_today)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_all(&self, params: &ReadingQueryParams) -> Result<Vec<Reading>> {
        let mut query = format!("SELECT {COLUMNS} FROM readings");

        if params.ip_address.is_some() {
            query.push_str(" WHERE ip_address = ?");
        }

        query.push_str(" ORDER BY ts DESC, id DESC LIMIT ? OFFSET ?");

        let limit = params.limit.unwrap_or(100);
        let offset = params.offset.unwrap_or(0);

        let mut sql_query = sqlx::query_as::<_, Reading>(&query);

        if let Some(ip_address) = &params.ip_address {
            sql_query = sql_query.bind(ip_address);
        }

        let readings = sql_query
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(readings)
    }

    pub async fn count(&self, params: &ReadingQueryParams) -> Result<i64> {
        let mut query = String::from("SELECT COUNT(*) as count FROM readings");

        if params.ip_address.is_some() {
            query.push_str(" WHERE ip_address = ?");
        }

        let mut sql_query = sqlx::query(&query);

        if let Some(ip_address) = &params.ip_address {
            sql_query = sql_query.bind(ip_address);
        }

        let row = sql_query.fetch_one(&self.pool).await?;
        let count: i64 = row.get("count");

        Ok(count)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Reading> {
        let reading = sqlx::query_as::<_, Reading>(&format!(
            "SELECT {COLUMNS} FROM readings WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        reading.ok_or_else(|| AppError::NotFound(format!("Reading not found for id={id}")))
    }
}
