use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;

/// A vehicle's fuel log after folding its stream: the snapshot the engine reads,
/// and the highest odometer the submission rules compare against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuelLogState {
    pub entries: Vec<FuelLogEntry>,
    pub last_odometer: Option<u64>,
}
