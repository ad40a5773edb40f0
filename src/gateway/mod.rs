pub mod tasmota;

pub use tasmota::{DeviceClient, TasmotaClient};

#[cfg(test)]
pub use tasmota::MockDeviceClient;
