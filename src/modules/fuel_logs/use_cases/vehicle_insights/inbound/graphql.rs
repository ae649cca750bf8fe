use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use rust_decimal::Decimal;

use crate::modules::fuel_logs::core::insights::VehicleInsights;
use crate::modules::fuel_logs::core::series::MonthlyBucket;
use crate::modules::fuel_logs::core::statistics::LifetimeStatistics;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlMonthlyBucket {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub value: Decimal,
    pub active: bool,
}

impl From<MonthlyBucket> for GqlMonthlyBucket {
    fn from(b: MonthlyBucket) -> Self {
        Self {
            label: b.label.to_string(),
            year: b.year,
            month: b.month,
            value: b.value,
            active: b.active,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlLifetimeStatistics {
    pub total_distance: Decimal,
    pub total_volume: Decimal,
    pub total_spent: Decimal,
    pub avg_consumption: Decimal,
}

impl From<LifetimeStatistics> for GqlLifetimeStatistics {
    fn from(s: LifetimeStatistics) -> Self {
        Self {
            total_distance: s.total_distance,
            total_volume: s.total_volume,
            total_spent: s.total_spent,
            avg_consumption: s.avg_consumption,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlVehicleInsights {
    pub efficiency: Decimal,
    pub trend: Decimal,
    pub statistics: GqlLifetimeStatistics,
    pub spending: Vec<GqlMonthlyBucket>,
    pub efficiency_trend: Vec<GqlMonthlyBucket>,
    pub entry_count: u64,
}

impl From<VehicleInsights> for GqlVehicleInsights {
    fn from(v: VehicleInsights) -> Self {
        Self {
            efficiency: v.efficiency,
            trend: v.trend,
            statistics: v.statistics.into(),
            spending: v.spending.into_iter().map(Into::into).collect(),
            efficiency_trend: v.efficiency_trend.into_iter().map(Into::into).collect(),
            entry_count: v.entry_count as u64,
        }
    }
}

#[derive(Default)]
pub struct VehicleInsightsQuery;

#[Object]
impl VehicleInsightsQuery {
    async fn vehicle_insights(
        &self,
        context: &Context<'_>,
        vehicle_id: String,
    ) -> GqlResult<GqlVehicleInsights> {
        let state = context.data_unchecked::<AppState>();
        let insights = state
            .insights_handler
            .insights(&vehicle_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(insights.into())
    }
}
