use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::reading::NewReading;
use crate::models::tasmota::{PowerState, StatusDocument};

/// Aggregated view of one device for the `/api/status/power` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceReport {
    pub device_name: String,
    pub ip_address: String,
    pub power: PowerState,
    pub power_w: f64,
    pub energy_today_kwh: f64,
    pub cost_today: f64,
}

impl DeviceReport {
    /// Builds a report from a raw status document. Returns `None` when the
    /// device carries no energy telemetry, in which case the device is
    /// skipped by the aggregation cycle.
    pub fn from_status(doc: &StatusDocument, kwh_price_cents: f64) -> Option<Self> {
        let energy = doc.energy()?;

        Some(Self {
            device_name: doc.status.device_name.clone(),
            ip_address: doc.network.ip_address.clone(),
            power: doc.state.power,
            power_w: energy.power_w,
            energy_today_kwh: energy.today_kwh,
            cost_today: cost_today(energy.today_kwh, kwh_price_cents),
        })
    }

    pub fn to_reading(&self, kwh_price_cents: f64, ts: DateTime<Utc>) -> NewReading {
        NewReading {
            ts,
            device_name: self.device_name.clone(),
            ip_address: self.ip_address.clone(),
            power_state: match self.power {
                PowerState::On => "ON".to_string(),
                PowerState::Off => "OFF".to_string(),
            },
            power_w: self.power_w,
            energy_today_kwh: self.energy_today_kwh,
            kwh_price_cents,
            cost_today: self.cost_today,
        }
    }
}

/// Running cost since midnight. The unit price is configured in cents per
/// kWh; the result is in whole currency units.
pub fn cost_today(energy_today_kwh: f64, kwh_price_cents: f64) -> f64 {
    energy_today_kwh * kwh_price_cents / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMeta {
    pub total_cost_today: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerStatusResponse {
    pub data: Vec<DeviceReport>,
    pub meta: StatusMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_doc(raw: &str) -> StatusDocument {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_cost_today_formula() {
        // 2.5 kWh at 30 cents/kWh = 0.75 EUR
        assert_eq!(cost_today(2.5, 30.0), 0.75);
        assert_eq!(cost_today(0.0, 30.0), 0.0);
    }

    #[test]
    fn test_report_from_status() {
        let doc = status_doc(
            r#"{
                "Status": {"DeviceName": "Dryer"},
                "StatusNET": {"IPAddress": "192.168.1.12"},
                "StatusSTS": {"POWER": "ON"},
                "StatusSNS": {"ENERGY": {"Power": 1200, "Today": 1.5}}
            }"#,
        );

        let report = DeviceReport::from_status(&doc, 20.0).unwrap();
        assert_eq!(report.device_name, "Dryer");
        assert_eq!(report.ip_address, "192.168.1.12");
        assert_eq!(report.power, PowerState::On);
        assert_eq!(report.power_w, 1200.0);
        assert_eq!(report.cost_today, 0.3);
    }

    #[test]
    fn test_report_skips_device_without_energy() {
        let doc = status_doc(
            r#"{
                "Status": {"DeviceName": "Bare Relay"},
                "StatusNET": {"IPAddress": "192.168.1.20"},
                "StatusSTS": {"POWER": "OFF"}
            }"#,
        );

        assert!(DeviceReport::from_status(&doc, 20.0).is_none());
    }

    #[test]
    fn test_to_reading_carries_cost_and_price() {
        let doc = status_doc(
            r#"{
                "Status": {"DeviceName": "Dryer"},
                "StatusNET": {"IPAddress": "192.168.1.12"},
                "StatusSTS": {"POWER": "OFF"},
                "StatusSNS": {"ENERGY": {"Power": 0, "Today": 0.4}}
            }"#,
        );

        let report = DeviceReport::from_status(&doc, 25.0).unwrap();
        let ts = chrono::Utc::now();
        let reading = report.to_reading(25.0, ts);

        assert_eq!(reading.ts, ts);
        assert_eq!(reading.power_state, "OFF");
        assert_eq!(reading.kwh_price_cents, 25.0);
        assert_eq!(reading.cost_today, 0.1);
    }
}
