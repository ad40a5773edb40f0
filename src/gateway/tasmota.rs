use crate::error::Result;
use crate::models::tasmota::{StatusDocument, TogglePayload};
use async_trait::async_trait;
use std::time::Duration;

// Tasmota commands, percent-encoded as they appear on the wire.
const STATUS_CMND: &str = "Status%200";
const TOGGLE_CMND: &str = "Power%20TOGGLE";

/// Outbound side of the Tasmota `cm` command protocol. The aggregation
/// service only talks to devices through this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// Full status query (`Status 0`).
    async fn status(&self, ip: &str) -> Result<StatusDocument>;

    /// Flips the relay (`Power TOGGLE`) and returns the new state.
    async fn toggle(&self, ip: &str) -> Result<TogglePayload>;
}

pub struct TasmotaClient {
    http: reqwest::Client,
}

impl TasmotaClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    async fn command(&self, ip: &str, cmnd: &str) -> Result<reqwest::Response> {
        let url = format!("http://{ip}/cm?cmnd={cmnd}");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response)
    }
}

#[async_trait]
impl DeviceClient for TasmotaClient {
    async fn status(&self, ip: &str) -> Result<StatusDocument> {
        let doc = self.command(ip, STATUS_CMND).await?.json().await?;
        Ok(doc)
    }

    async fn toggle(&self, ip: &str) -> Result<TogglePayload> {
        let payload = self.command(ip, TOGGLE_CMND).await?.json().await?;
        Ok(payload)
    }
}
