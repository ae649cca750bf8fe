pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod format;
    }
    pub mod infrastructure {
        pub mod log_store;
    }
}

pub mod modules {
    pub mod fuel_logs {
        pub mod core {
            pub mod efficiency;
            pub mod events;
            pub mod evolve;
            pub mod fuel_log;
            pub mod insights;
            pub mod series;
            pub mod state;
            pub mod statistics;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod snapshot;
            pub mod record_fuel_log {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod vehicle_insights {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_fuel_logs {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod view;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod vehicle_insights_tests;
    }
}
