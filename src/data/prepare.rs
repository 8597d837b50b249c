//! Data Preparation Module
//! Cleans the raw booking table and appends the derived columns.

use polars::prelude::*;
use std::sync::OnceLock;

use super::loader::{self, DataError, DATA_FILE};

/// Month names recognized in `arrival_date_month`, in calendar order.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Status labels derived from `is_canceled`.
pub const STATUS_CANCELED: &str = "Canceled";
pub const STATUS_CHECKED_OUT: &str = "Check-Out (Not Canceled)";

/// Map a month name to its 1-based calendar number.
///
/// Anything outside the fixed set maps to `None` so it stays null downstream
/// instead of being defaulted.
pub fn month_number(name: &str) -> Option<i32> {
    MONTH_NAMES
        .iter()
        .position(|month| *month == name)
        .map(|idx| idx as i32 + 1)
}

/// Clean the raw table and append `total_guests`, `status_text` and `month_num`.
///
/// `children` is the only column with a fill policy (nulls become 0, so guest
/// totals stay defined); nulls everywhere else pass through untouched.
pub fn prepare(df: DataFrame) -> Result<DataFrame, DataError> {
    let mut df = df
        .lazy()
        .with_columns([col("children").fill_null(lit(0))])
        .with_columns([
            (col("adults") + col("children") + col("babies")).alias("total_guests"),
            when(col("is_canceled").eq(lit(1)))
                .then(lit(STATUS_CANCELED))
                .otherwise(lit(STATUS_CHECKED_OUT))
                .alias("status_text"),
        ])
        .collect()?;

    let month_num = month_num_column(df.column("arrival_date_month")?)?;
    df.with_column(month_num)?;

    log::debug!("derived columns appended to {} rows", df.height());
    Ok(df)
}

/// Build the `month_num` column from the month-name column.
fn month_num_column(months: &Column) -> Result<Column, DataError> {
    let values: Vec<Option<i32>> = months
        .str()?
        .into_iter()
        .map(|name| name.and_then(month_number))
        .collect();
    Ok(Column::new("month_num".into(), values))
}

/// Process-wide cache of the prepared table.
static DATASET: OnceLock<DataFrame> = OnceLock::new();

/// Memoized accessor for the prepared booking table.
///
/// The first call reads `hotel_booking.csv` and stores the prepared table for
/// the lifetime of the process; later calls return the stored table without
/// touching the file again. There is no invalidation.
pub fn dataset() -> Result<&'static DataFrame, DataError> {
    if let Some(df) = DATASET.get() {
        return Ok(df);
    }
    let df = prepare(loader::load_csv(DATA_FILE)?)?;
    Ok(DATASET.get_or_init(|| df))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_frame() -> DataFrame {
        df!(
            "hotel" => ["Resort Hotel", "City Hotel", "City Hotel"],
            "is_canceled" => [0i64, 1, 0],
            "arrival_date_month" => ["July", "August", "Juillet"],
            "adults" => [2i64, 2, 1],
            "children" => [Some(1i64), None, Some(0)],
            "babies" => [0i64, 1, 0],
        )
        .unwrap()
    }

    #[rstest]
    #[case("January", 1)]
    #[case("February", 2)]
    #[case("March", 3)]
    #[case("April", 4)]
    #[case("May", 5)]
    #[case("June", 6)]
    #[case("July", 7)]
    #[case("August", 8)]
    #[case("September", 9)]
    #[case("October", 10)]
    #[case("November", 11)]
    #[case("December", 12)]
    fn month_lookup_matches_calendar(#[case] name: &str, #[case] expected: i32) {
        assert_eq!(month_number(name), Some(expected));
    }

    #[rstest]
    #[case("january")]
    #[case("Jul")]
    #[case("Juillet")]
    #[case("")]
    fn unknown_month_names_stay_unmapped(#[case] name: &str) {
        assert_eq!(month_number(name), None);
    }

    #[test]
    fn total_guests_treats_missing_children_as_zero() {
        let df = prepare(sample_frame()).unwrap();
        let totals = df
            .column("total_guests")
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap();
        let totals = totals.i64().unwrap();
        assert_eq!(totals.get(0), Some(3));
        assert_eq!(totals.get(1), Some(3));
        assert_eq!(totals.get(2), Some(1));
    }

    #[test]
    fn month_num_is_null_for_unknown_names() {
        let df = prepare(sample_frame()).unwrap();
        let months = df.column("month_num").unwrap().clone();
        let months = months.i32().unwrap();
        assert_eq!(months.get(0), Some(7));
        assert_eq!(months.get(1), Some(8));
        assert_eq!(months.get(2), None);
    }

    #[test]
    fn status_text_uses_fixed_labels() {
        let df = prepare(sample_frame()).unwrap();
        let status = df.column("status_text").unwrap().clone();
        let status = status.str().unwrap();
        assert_eq!(status.get(0), Some(STATUS_CHECKED_OUT));
        assert_eq!(status.get(1), Some(STATUS_CANCELED));
        assert_eq!(status.get(2), Some(STATUS_CHECKED_OUT));
    }

    #[test]
    fn prepare_is_idempotent_over_identical_input() {
        let first = prepare(sample_frame()).unwrap();
        let second = prepare(sample_frame()).unwrap();
        assert!(first.equals_missing(&second));
    }

    #[test]
    fn csv_file_round_trips_through_load_and_prepare() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "hotel,is_canceled,arrival_date_month,adults,children,babies").unwrap();
        writeln!(file, "Resort Hotel,0,July,2,1,0").unwrap();
        writeln!(file, "City Hotel,1,August,2,,1").unwrap();
        drop(file);

        let df = prepare(loader::load_csv(&path).unwrap()).unwrap();
        assert_eq!(df.height(), 2);

        let totals = df
            .column("total_guests")
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap();
        assert_eq!(totals.i64().unwrap().get(1), Some(3));

        let months = df.column("month_num").unwrap().clone();
        assert_eq!(months.i32().unwrap().get(0), Some(7));

        let status = df.column("status_text").unwrap().clone();
        assert_eq!(status.str().unwrap().get(1), Some(STATUS_CANCELED));
    }
}
