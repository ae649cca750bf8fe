pub mod commands {
    pub mod record_fuel_log;
}
pub mod entries;
