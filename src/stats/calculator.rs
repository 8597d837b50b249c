//! Metrics Calculator Module
//! Computes the four headline summaries over the prepared table.

use polars::prelude::*;

/// Headline metrics shown in the dashboard tile row.
#[derive(Debug, Clone)]
pub struct SummaryMetrics {
    pub total_bookings: usize,
    /// Share of canceled bookings in percent. NaN for an empty table.
    pub cancellation_rate: f64,
    pub avg_adr: f64,
    pub avg_stay_nights: f64,
}

/// Computes the summary metrics; pure reductions, no mutation.
pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn compute(df: &DataFrame) -> PolarsResult<SummaryMetrics> {
        let total_bookings = df.height();
        let cancellation_rate = Self::column_mean(df, "is_canceled")? * 100.0;
        let avg_adr = Self::column_mean(df, "adr")?;
        let avg_stay_nights = Self::mean_of(
            df,
            col("stays_in_weekend_nights") + col("stays_in_week_nights"),
        )?;

        Ok(SummaryMetrics {
            total_bookings,
            cancellation_rate,
            avg_adr,
            avg_stay_nights,
        })
    }

    /// Mean of a single column; null rows drop out, no usable values gives NaN.
    fn column_mean(df: &DataFrame, name: &str) -> PolarsResult<f64> {
        let values = df.column(name)?.cast(&DataType::Float64)?;
        Ok(values.f64()?.mean().unwrap_or(f64::NAN))
    }

    /// Mean of an expression evaluated per row.
    fn mean_of(df: &DataFrame, expr: Expr) -> PolarsResult<f64> {
        let out = df
            .clone()
            .lazy()
            .select([expr.mean().alias("mean")])
            .collect()?;
        Ok(out.column("mean")?.f64()?.get(0).unwrap_or(f64::NAN))
    }
}
