use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted power/cost snapshot of a device.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reading {
    pub id: i64,
    pub ts: DateTime<Utc>,
    pub device_name: String,
    pub ip_address: String,
    pub power_state: String,
    pub power_w: f64,
    pub energy_today_kwh: f64,
    pub kwh_price_cents: f64,
    pub cost_today: f64,
}

/// A reading about to be appended; `ts` is assigned at write time by the
/// aggregation cycle, not by the device.
#[derive(Debug, Clone)]
pub struct NewReading {
    pub ts: DateTime<Utc>,
    pub device_name: String,
    pub ip_address: String,
    pub power_state: String,
    pub power_w: f64,
    pub energy_today_kwh: f64,
    pub kwh_price_cents: f64,
    pub cost_today: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingQueryParams {
    pub ip_address: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Default for ReadingQueryParams {
    fn default() -> Self {
        Self {
            ip_address: None,
            limit: Some(100),
            offset: Some(0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingListResponse {
    pub data: Vec<Reading>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
