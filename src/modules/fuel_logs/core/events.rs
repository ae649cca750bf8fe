pub mod v1 {
    pub mod fuel_log_recorded;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum FuelLogEvent {
    FuelLogRecordedV1(v1::fuel_log_recorded::FuelLogRecordedV1),
}
