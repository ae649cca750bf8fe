use crate::modules::fuel_logs::core::series::SeriesWindow;
use crate::shared::core::clock::FixedClock;
use crate::shared::core::format::{format_currency, format_number, format_percentage};
use crate::shell::state::{AppState, FuelLogStore};
use crate::tests::fixtures::commands::record_fuel_log::RecordFuelLogBuilder;
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[fixture]
fn state() -> AppState {
    AppState::new(
        Arc::new(FuelLogStore::new()),
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 20, 18, 0, 0).unwrap())),
        SeriesWindow::default(),
    )
}

async fn record(state: &AppState, odometer: u64, volume: &str, full: bool, month: u32, day: u32) {
    let command = RecordFuelLogBuilder::new()
        .log_id(format!("log-{odometer}"))
        .vehicle_id("vehicle-e2e")
        .odometer(odometer)
        .volume(volume)
        .unit_price("2")
        .is_full_tank(full)
        .timestamp(Utc.with_ymd_and_hms(2024, month, day, 7, 30, 0).unwrap())
        .build();
    state
        .record_handler
        .handle(command)
        .await
        .expect("record failed");
}

#[rstest]
#[tokio::test]
async fn it_should_derive_the_insights_from_recorded_fuel_logs(state: AppState) {
    record(&state, 10_000, "45", true, 3, 4).await;
    record(&state, 10_300, "12", false, 3, 21).await;
    record(&state, 10_600, "33", true, 4, 9).await;
    record(&state, 11_100, "40", true, 5, 27).await;
    record(&state, 11_500, "25", true, 6, 12).await;

    let insights = state
        .insights_handler
        .insights("vehicle-e2e")
        .await
        .expect("insights failed");

    // Anchored spans: 600 km over 45 L, 500 km over 40 L, 400 km over 25 L
    assert_eq!(insights.efficiency, d("13.64"));
    // Before June: 1100 km over 85 L = 12.94
    assert_eq!(insights.trend, d("5.4"));
    assert_eq!(format_percentage(insights.trend), "+5.4%");

    let spending: Vec<(&str, Decimal, bool)> = insights
        .spending
        .iter()
        .map(|bucket| (bucket.label, bucket.value, bucket.active))
        .collect();
    assert_eq!(
        spending,
        vec![
            ("MAR", d("114"), false),
            ("APR", d("66"), false),
            ("MAY", d("80"), false),
            ("JUN", d("50"), true),
        ]
    );

    let trend: Vec<(&str, Decimal)> = insights
        .efficiency_trend
        .iter()
        .map(|bucket| (bucket.label, bucket.value))
        .collect();
    assert_eq!(
        trend,
        vec![
            ("JAN", d("0")),
            ("FEB", d("0")),
            ("MAR", d("0")),
            ("APR", d("13.33")),
            ("MAY", d("12.94")),
            ("JUN", d("13.64")),
        ]
    );

    assert_eq!(insights.statistics.total_distance, d("1500"));
    assert_eq!(insights.statistics.total_volume, d("155"));
    assert_eq!(format_currency(insights.statistics.total_spent), "$310.00");
    assert_eq!(format_number(insights.statistics.avg_consumption), "967.74");
    assert_eq!(insights.entry_count, 5);

    let history = state
        .history_handler
        .list("vehicle-e2e")
        .await
        .expect("history failed");
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].odometer, 11_500);
    assert_eq!(history[4].odometer, 10_000);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_insights_unchanged_after_a_rejected_submission(state: AppState) {
    record(&state, 10_000, "45", true, 3, 4).await;
    record(&state, 10_600, "45", true, 4, 9).await;
    let before = state.insights_handler.insights("vehicle-e2e").await.unwrap();

    let rejected = RecordFuelLogBuilder::new()
        .vehicle_id("vehicle-e2e")
        .odometer(10_600)
        .build();
    assert!(state.record_handler.handle(rejected).await.is_err());

    let after = state.insights_handler.insights("vehicle-e2e").await.unwrap();
    assert_eq!(before, after);
}
