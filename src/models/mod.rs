pub mod reading;
pub mod report;
pub mod tasmota;

pub use reading::{NewReading, Reading, ReadingListResponse, ReadingQueryParams};
pub use report::{DeviceReport, PowerStatusResponse, StatusMeta};
pub use tasmota::{PowerState, StatusDocument, TogglePayload, ToggleRequest};
