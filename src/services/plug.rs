use crate::error::{AppError, Result};
use crate::gateway::DeviceClient;
use crate::models::{
    DeviceReport, PowerStatusResponse, Reading, ReadingListResponse, ReadingQueryParams,
    StatusMeta, TogglePayload,
};
use crate::repositories::ReadingRepository;
use chrono::Utc;
use futures::future;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Fans status queries out to the configured plugs, derives cost fields,
/// appends the results to the store and serves the historical rows.
#[derive(Clone)]
pub struct PlugService {
    repository: ReadingRepository,
    client: Arc<dyn DeviceClient>,
    devices: Vec<String>,
    kwh_price_cents: f64,
}

impl PlugService {
    pub fn new(
        repository: ReadingRepository,
        client: Arc<dyn DeviceClient>,
        devices: Vec<String>,
        kwh_price_cents: f64,
    ) -> Self {
        Self {
            repository,
            client,
            devices,
            kwh_price_cents,
        }
    }

    /// One poll-aggregate-persist cycle. Devices that fail to answer or
    /// answer without energy telemetry are logged and left out; the cycle
    /// itself only fails on internal errors, never on device errors.
    pub async fn poll_all(&self) -> Result<PowerStatusResponse> {
        let fetches = self.devices.iter().map(|ip| {
            let client = Arc::clone(&self.client);
            async move { (ip.as_str(), client.status(ip).await) }
        });

        let results = future::join_all(fetches).await;

        let mut data = Vec::with_capacity(self.devices.len());
        for (ip, result) in results {
            match result {
                Ok(doc) => match DeviceReport::from_status(&doc, self.kwh_price_cents) {
                    Some(report) => data.push(report),
                    None => warn!(ip, "device reported no energy telemetry, skipping"),
                },
                Err(e) => warn!(ip, error = %e, "device poll failed"),
            }
        }

        info!(
            polled = self.devices.len(),
            answered = data.len(),
            "poll cycle finished"
        );

        let total_cost_today = data.iter().map(|d| d.cost_today).sum();

        // Append one row per successful device. A write failure must not
        // fail the request; the aggregate is still returned.
        let ts = Utc::now();
        for report in &data {
            let reading = report.to_reading(self.kwh_price_cents, ts);
            if let Err(e) = self.repository.insert(&reading).await {
                error!(ip = %report.ip_address, error = %e, "failed to persist reading");
            }
        }

        Ok(PowerStatusResponse {
            data,
            meta: StatusMeta { total_cost_today },
        })
    }

    /// Forwards a `Power TOGGLE` to a configured device.
    pub async fn toggle(&self, ip: &str) -> Result<TogglePayload> {
        if !self.devices.iter().any(|d| d == ip) {
            return Err(AppError::Validation(format!(
                "Unknown device: {ip}"
            )));
        }

        let payload = self.client.toggle(ip).await?;
        info!(ip, power = ?payload.power, "device toggled");
        Ok(payload)
    }

    pub async fn list_readings(&self, params: ReadingQueryParams) -> Result<ReadingListResponse> {
        self.validate_query_params(&params)?;

        let data = self.repository.find_all(&params).await?;
        let total = self.repository.count(&params).await?;

        let limit = params.limit.unwrap_or(100);
        let offset = params.offset.unwrap_or(0);

        Ok(ReadingListResponse {
            data,
            total,
            limit,
            offset,
        })
    }

    pub async fn get_reading(&self, id: i64) -> Result<Reading> {
        self.repository.find_by_id(id).await
    }

    fn validate_query_params(&self, params: &ReadingQueryParams) -> Result<()> {
        if let Some(limit) = params.limit {
            if limit <= 0 || limit > 1000 {
                return Err(AppError::Validation(
                    "Limit must be between 1 and 1000".to_string(),
                ));
            }
        }

        if let Some(offset) = params.offset {
            if offset < 0 {
                return Err(AppError::Validation(
                    "Offset must be non-negative".to_string(),
                ));
            }
        }

        Ok(())
    }
}
