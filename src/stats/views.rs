//! Aggregation Views Module
//! Derived aggregate views feeding the dashboard charts and table preview.

use polars::prelude::*;

/// ADR values at or above this cutoff are excluded from the price chart.
pub const ADR_OUTLIER_CUTOFF: f64 = 500.0;

/// Number of origin countries shown in the ranking chart.
pub const TOP_COUNTRY_COUNT: u32 = 10;

/// Number of rows shown in the table preview.
pub const PREVIEW_ROWS: usize = 100;

/// Columns shown in the table preview, in display order.
pub const PREVIEW_COLUMNS: [&str; 9] = [
    "hotel",
    "arrival_date_year",
    "arrival_date_month",
    "is_canceled",
    "lead_time",
    "adr",
    "market_segment",
    "country",
    "total_guests",
];

/// A labeled booking count for the categorical charts.
#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub label: String,
    pub count: u32,
}

/// Bookings per calendar month.
#[derive(Debug, Clone)]
pub struct MonthlyCount {
    pub month_num: i32,
    pub month: String,
    pub bookings: u32,
}

/// ADR samples for one (room type, hotel) pairing of the price box plot.
#[derive(Debug, Clone)]
pub struct RoomTypeAdr {
    pub room_type: String,
    pub hotel: String,
    pub values: Vec<f64>,
}

/// First rows of the table, pre-rendered for display.
#[derive(Debug, Clone, Default)]
pub struct TablePreview {
    pub rows: Vec<Vec<String>>,
}

/// All aggregate views consumed by the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardViews {
    pub hotel_mix: Vec<CategoryCount>,
    pub status_counts: Vec<CategoryCount>,
    pub monthly: Vec<MonthlyCount>,
    pub segment_counts: Vec<CategoryCount>,
    pub top_countries: Vec<CategoryCount>,
    pub adr_by_room: Vec<RoomTypeAdr>,
    pub preview: TablePreview,
}

/// Builds the aggregate views; read-only over the prepared table.
pub struct ViewBuilder;

impl ViewBuilder {
    pub fn build(df: &DataFrame) -> PolarsResult<DashboardViews> {
        let views = DashboardViews {
            hotel_mix: Self::category_counts(df, "hotel")?,
            status_counts: Self::category_counts(df, "status_text")?,
            monthly: Self::monthly_counts(df)?,
            segment_counts: Self::category_counts(df, "market_segment")?,
            top_countries: Self::top_countries(df)?,
            adr_by_room: Self::adr_by_room(df)?,
            preview: Self::table_preview(df)?,
        };
        log::debug!(
            "aggregate views ready: {} months, {} countries, {} room buckets",
            views.monthly.len(),
            views.top_countries.len(),
            views.adr_by_room.len()
        );
        Ok(views)
    }

    /// Booking counts per value of a categorical column, first-occurrence order.
    fn category_counts(df: &DataFrame, column: &str) -> PolarsResult<Vec<CategoryCount>> {
        let counts = df
            .clone()
            .lazy()
            .group_by_stable([col(column)])
            .agg([len().alias("count")])
            .collect()?;
        Self::read_counts(&counts, column, "count")
    }

    /// Bookings per month, grouped on (month_num, month name) and ordered by
    /// calendar number rather than alphabetically. Unmapped months carry a
    /// null `month_num` and form no bucket.
    fn monthly_counts(df: &DataFrame) -> PolarsResult<Vec<MonthlyCount>> {
        let counts = df
            .clone()
            .lazy()
            .filter(col("month_num").is_not_null())
            .group_by_stable([col("month_num"), col("arrival_date_month")])
            .agg([len().alias("bookings")])
            .sort(["month_num"], SortMultipleOptions::default())
            .collect()?;

        let month_nums = counts.column("month_num")?.i32()?;
        let names = counts.column("arrival_date_month")?.str()?;
        let bookings = counts.column("bookings")?.u32()?;

        let mut rows = Vec::with_capacity(counts.height());
        for i in 0..counts.height() {
            let (Some(month_num), Some(month)) = (month_nums.get(i), names.get(i)) else {
                continue;
            };
            rows.push(MonthlyCount {
                month_num,
                month: month.to_string(),
                bookings: bookings.get(i).unwrap_or(0),
            });
        }
        Ok(rows)
    }

    /// Top origin countries by booking count, descending. Stable grouping and
    /// a stable sort break ties by first occurrence in the table.
    fn top_countries(df: &DataFrame) -> PolarsResult<Vec<CategoryCount>> {
        let counts = df
            .clone()
            .lazy()
            .filter(col("country").is_not_null())
            .group_by_stable([col("country")])
            .agg([len().alias("count")])
            .sort(
                ["count"],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .limit(TOP_COUNTRY_COUNT)
            .collect()?;
        Self::read_counts(&counts, "country", "count")
    }

    /// ADR samples per (assigned room type, hotel), with outlier rates at or
    /// above the fixed cutoff excluded. Buckets come back sorted by room type.
    fn adr_by_room(df: &DataFrame) -> PolarsResult<Vec<RoomTypeAdr>> {
        let filtered = df
            .clone()
            .lazy()
            .filter(col("adr").lt(lit(ADR_OUTLIER_CUTOFF)))
            .select([col("assigned_room_type"), col("hotel"), col("adr")])
            .collect()?;

        let rooms = filtered.column("assigned_room_type")?.str()?;
        let hotels = filtered.column("hotel")?.str()?;
        let adr = filtered.column("adr")?.cast(&DataType::Float64)?;
        let adr = adr.f64()?;

        let mut buckets: Vec<RoomTypeAdr> = Vec::new();
        for i in 0..filtered.height() {
            let (Some(room), Some(hotel), Some(value)) = (rooms.get(i), hotels.get(i), adr.get(i))
            else {
                continue;
            };
            match buckets
                .iter_mut()
                .find(|b| b.room_type == room && b.hotel == hotel)
            {
                Some(bucket) => bucket.values.push(value),
                None => buckets.push(RoomTypeAdr {
                    room_type: room.to_string(),
                    hotel: hotel.to_string(),
                    values: vec![value],
                }),
            }
        }

        buckets.sort_by(|a, b| {
            a.room_type
                .cmp(&b.room_type)
                .then_with(|| a.hotel.cmp(&b.hotel))
        });
        Ok(buckets)
    }

    /// First rows of the nine display columns, rendered to strings.
    fn table_preview(df: &DataFrame) -> PolarsResult<TablePreview> {
        let head = df.select(PREVIEW_COLUMNS)?.head(Some(PREVIEW_ROWS));
        let columns = head.get_columns();

        let mut rows = Vec::with_capacity(head.height());
        for i in 0..head.height() {
            rows.push(
                columns
                    .iter()
                    .map(|column| Self::display_value(column, i))
                    .collect(),
            );
        }
        Ok(TablePreview { rows })
    }

    /// Render one cell; floats get two decimals, nulls show empty.
    fn display_value(column: &Column, idx: usize) -> String {
        match column.get(idx) {
            Ok(AnyValue::Null) | Err(_) => String::new(),
            Ok(AnyValue::Float64(v)) => format!("{v:.2}"),
            Ok(AnyValue::Float32(v)) => format!("{v:.2}"),
            Ok(value) => value.to_string().trim_matches('"').to_string(),
        }
    }

    /// Read a (label, count) frame into display structs, skipping null labels.
    fn read_counts(
        counts: &DataFrame,
        label_col: &str,
        count_col: &str,
    ) -> PolarsResult<Vec<CategoryCount>> {
        let labels = counts.column(label_col)?;
        let totals = counts.column(count_col)?.u32()?;

        let mut out = Vec::with_capacity(counts.height());
        for i in 0..counts.height() {
            let label = labels.get(i)?;
            if label.is_null() {
                continue;
            }
            out.push(CategoryCount {
                label: label.to_string().trim_matches('"').to_string(),
                count: totals.get(i).unwrap_or(0),
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_counts_keep_first_occurrence_order() {
        let df = df!("hotel" => ["Resort Hotel", "City Hotel", "City Hotel"]).unwrap();
        let counts = ViewBuilder::category_counts(&df, "hotel").unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].label, "Resort Hotel");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].label, "City Hotel");
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn monthly_view_sorted_by_month_number_regardless_of_row_order() {
        let df = df!(
            "month_num" => [Some(8i32), Some(1), Some(8), Some(3)],
            "arrival_date_month" => ["August", "January", "August", "March"],
        )
        .unwrap();
        let monthly = ViewBuilder::monthly_counts(&df).unwrap();
        let order: Vec<i32> = monthly.iter().map(|m| m.month_num).collect();
        assert_eq!(order, vec![1, 3, 8]);
        assert_eq!(monthly[2].month, "August");
        assert_eq!(monthly[2].bookings, 2);
    }

    #[test]
    fn monthly_view_drops_unmapped_months() {
        let df = df!(
            "month_num" => [Some(7i32), None],
            "arrival_date_month" => ["July", "Juillet"],
        )
        .unwrap();
        let monthly = ViewBuilder::monthly_counts(&df).unwrap();
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].month, "July");
    }

    #[test]
    fn top_countries_break_ties_by_first_occurrence() {
        let df = df!(
            "country" => [Some("PRT"), Some("ESP"), Some("PRT"), Some("ESP"), Some("FRA"), None],
        )
        .unwrap();
        let top = ViewBuilder::top_countries(&df).unwrap();
        let labels: Vec<&str> = top.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["PRT", "ESP", "FRA"]);
        assert_eq!(top[0].count, 2);
        assert_eq!(top[2].count, 1);
    }

    #[test]
    fn top_countries_cap_at_ten() {
        let countries: Vec<String> = (0..12).map(|i| format!("C{i:02}")).collect();
        let df = df!("country" => countries).unwrap();
        let top = ViewBuilder::top_countries(&df).unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].label, "C00");
    }

    #[test]
    fn adr_filter_excludes_rates_at_or_above_cutoff() {
        let df = df!(
            "assigned_room_type" => ["A", "A", "B"],
            "hotel" => ["City Hotel", "City Hotel", "City Hotel"],
            "adr" => [50.0f64, 600.0, 200.0],
        )
        .unwrap();
        let buckets = ViewBuilder::adr_by_room(&df).unwrap();
        let kept: Vec<f64> = buckets.iter().flat_map(|b| b.values.clone()).collect();
        assert_eq!(kept, vec![50.0, 200.0]);
    }

    #[test]
    fn adr_buckets_split_by_room_type_and_hotel() {
        let df = df!(
            "assigned_room_type" => ["A", "A", "B", "A"],
            "hotel" => ["City Hotel", "Resort Hotel", "City Hotel", "City Hotel"],
            "adr" => [80.0f64, 90.0, 110.0, 70.0],
        )
        .unwrap();
        let buckets = ViewBuilder::adr_by_room(&df).unwrap();
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].room_type, "A");
        assert_eq!(buckets[0].hotel, "City Hotel");
        assert_eq!(buckets[0].values, vec![80.0, 70.0]);
        assert_eq!(buckets[1].hotel, "Resort Hotel");
        assert_eq!(buckets[2].room_type, "B");
    }

    #[test]
    fn preview_caps_rows_and_keeps_the_nine_columns() {
        let n = 120usize;
        let years: Vec<i64> = (0..n).map(|i| 2015 + (i % 3) as i64).collect();
        let df = df!(
            "hotel" => vec!["City Hotel"; n],
            "arrival_date_year" => years,
            "arrival_date_month" => vec!["July"; n],
            "is_canceled" => vec![0i64; n],
            "lead_time" => vec![30i64; n],
            "adr" => vec![88.5f64; n],
            "market_segment" => vec!["Direct"; n],
            "country" => vec!["PRT"; n],
            "total_guests" => vec![2i64; n],
        )
        .unwrap();
        let preview = ViewBuilder::table_preview(&df).unwrap();
        assert_eq!(preview.rows.len(), PREVIEW_ROWS);
        assert_eq!(preview.rows[0].len(), PREVIEW_COLUMNS.len());
        assert_eq!(preview.rows[0][0], "City Hotel");
        assert_eq!(preview.rows[0][5], "88.50");
    }
}
