//! Wire models for the Tasmota `cm?cmnd=` HTTP protocol.
//!
//! Only the fields this service consumes are modeled; a `Status 0` reply
//! carries far more sections than these.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

/// Reply to `Status 0`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusDocument {
    #[serde(rename = "Status")]
    pub status: DeviceSection,
    #[serde(rename = "StatusNET")]
    pub network: NetworkSection,
    #[serde(rename = "StatusSTS")]
    pub state: StateSection,
    #[serde(rename = "StatusSNS")]
    pub sensors: Option<SensorSection>,
}

impl StatusDocument {
    /// Energy telemetry block, if the device reports one. Plugs without a
    /// power-metering chip omit it.
    pub fn energy(&self) -> Option<&EnergySection> {
        self.sensors.as_ref().and_then(|s| s.energy.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSection {
    #[serde(rename = "DeviceName")]
    pub device_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSection {
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateSection {
    #[serde(rename = "POWER")]
    pub power: PowerState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SensorSection {
    #[serde(rename = "ENERGY")]
    pub energy: Option<EnergySection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnergySection {
    /// Instantaneous active power in watts.
    #[serde(rename = "Power")]
    pub power_w: f64,
    /// Energy consumed since midnight in kWh.
    #[serde(rename = "Today")]
    pub today_kwh: f64,
    #[serde(rename = "Yesterday")]
    pub yesterday_kwh: Option<f64>,
    #[serde(rename = "Total")]
    pub total_kwh: Option<f64>,
    #[serde(rename = "Voltage")]
    pub voltage: Option<f64>,
    #[serde(rename = "Current")]
    pub current: Option<f64>,
}

/// Reply to `Power TOGGLE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TogglePayload {
    #[serde(rename = "POWER")]
    pub power: PowerState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleRequest {
    /// IP address of the plug to toggle.
    pub device: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_0: &str = r#"{
        "Status": {"Module": 1, "DeviceName": "Washing Machine", "FriendlyName": ["Tasmota"], "Topic": "tasmota_AB12CD"},
        "StatusNET": {"Hostname": "tasmota-AB12CD", "IPAddress": "192.168.1.11", "Gateway": "192.168.1.1"},
        "StatusSTS": {"Time": "2024-05-01T10:15:00", "Uptime": "4T01:12:33", "POWER": "ON", "Wifi": {"SSId": "home"}},
        "StatusSNS": {"Time": "2024-05-01T10:15:00", "ENERGY": {
            "TotalStartTime": "2023-11-02T11:12:06",
            "Total": 13.486, "Yesterday": 0.035, "Today": 0.089,
            "Power": 7, "ApparentPower": 18, "ReactivePower": 16,
            "Factor": 0.39, "Voltage": 235, "Current": 0.075
        }}
    }"#;

    #[test]
    fn test_status_document_deserializes() {
        let doc: StatusDocument = serde_json::from_str(STATUS_0).unwrap();

        assert_eq!(doc.status.device_name, "Washing Machine");
        assert_eq!(doc.network.ip_address, "192.168.1.11");
        assert_eq!(doc.state.power, PowerState::On);

        let energy = doc.energy().expect("ENERGY block present");
        assert_eq!(energy.power_w, 7.0);
        assert_eq!(energy.today_kwh, 0.089);
        assert_eq!(energy.voltage, Some(235.0));
    }

    #[test]
    fn test_status_document_without_energy_block() {
        let raw = r#"{
            "Status": {"DeviceName": "Bare Relay"},
            "StatusNET": {"IPAddress": "192.168.1.20"},
            "StatusSTS": {"POWER": "OFF"}
        }"#;

        let doc: StatusDocument = serde_json::from_str(raw).unwrap();
        assert!(doc.energy().is_none());
        assert_eq!(doc.state.power, PowerState::Off);
    }

    #[test]
    fn test_toggle_payload_round_trip() {
        let payload: TogglePayload = serde_json::from_str(r#"{"POWER": "OFF"}"#).unwrap();
        assert_eq!(payload.power, PowerState::Off);

        let json = serde_json::to_string(&TogglePayload {
            power: PowerState::On,
        })
        .unwrap();
        assert_eq!(json, r#"{"POWER":"ON"}"#);
    }

    #[test]
    fn test_unknown_power_state_is_rejected() {
        let result: Result<TogglePayload, _> = serde_json::from_str(r#"{"POWER": "BLINK"}"#);
        assert!(result.is_err());
    }
}
