//! Stats module - summary metrics and aggregate views

mod calculator;
mod views;

pub use calculator::{MetricsCalculator, SummaryMetrics};
pub use views::{
    CategoryCount, DashboardViews, MonthlyCount, RoomTypeAdr, TablePreview, ViewBuilder,
    PREVIEW_COLUMNS,
};
