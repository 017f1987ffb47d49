//! Season window date logic
//!
//! Broadcast seasons follow calendar quarters. The window starts one quarter
//! before the current one so that entries added late to the catalog still
//! show up in the popular listing.

use chrono::{Datelike, Local, NaiveDate, Utc};
use tracing::debug;

/// Months in a broadcast season
pub const SEASON_LENGTH_MONTHS: i32 = 3;

/// First month of the quarter containing `date`: 1, 4, 7 or 10.
fn quarter_start_month(date: NaiveDate) -> u32 {
    date.month0() / 3 * 3 + 1
}

/// Returns the first day of the previous quarter as `YYYY-MM-01`.
///
/// # Example
/// ```
/// use bangumi_client::bangumi::season_window_start;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
/// assert_eq!(season_window_start(today), "2024-01-01");
/// ```
pub fn season_window_start(today: NaiveDate) -> String {
    let mut year = today.year();
    let mut month = quarter_start_month(today) as i32 - SEASON_LENGTH_MONTHS;
    if month <= 0 {
        month += 12;
        year -= 1;
    }

    let start = format!("{year}-{month:02}-01");
    debug!("Season window for {today}: {start}");
    start
}

/// Today's calendar date in local time.
pub fn today_local() -> NaiveDate {
    // Use UTC internally, convert to local time for the calendar date
    Utc::now().with_timezone(&Local).date_naive()
}

/// Season window start for the current local date.
pub fn current_season_window_start() -> String {
    season_window_start(today_local())
}

/// Inclusive lower bound filter value for `air_date`.
pub fn air_date_lower_bound(today: NaiveDate) -> String {
    format!(">={}", season_window_start(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_quarter_start_month_boundaries() {
        let expected = [1, 1, 1, 4, 4, 4, 7, 7, 7, 10, 10, 10];
        for (month, want) in (1..=12).zip(expected) {
            assert_eq!(quarter_start_month(date(2024, month, 28)), want, "month {month}");
        }
    }

    #[test]
    fn test_window_for_every_month() {
        let expected = [
            "2023-10-01",
            "2023-10-01",
            "2023-10-01",
            "2024-01-01",
            "2024-01-01",
            "2024-01-01",
            "2024-04-01",
            "2024-04-01",
            "2024-04-01",
            "2024-07-01",
            "2024-07-01",
            "2024-07-01",
        ];
        for (month, want) in (1..=12).zip(expected) {
            assert_eq!(season_window_start(date(2024, month, 1)), want, "month {month}");
        }
    }

    #[test]
    fn test_mid_quarter_steps_back_one_quarter() {
        assert_eq!(season_window_start(date(2024, 5, 17)), "2024-01-01");
    }

    #[test]
    fn test_january_rolls_back_a_year() {
        assert_eq!(season_window_start(date(2024, 1, 1)), "2023-10-01");
    }

    #[test]
    fn test_november_stays_in_year() {
        assert_eq!(season_window_start(date(2023, 11, 30)), "2023-07-01");
    }

    #[test]
    fn test_end_of_quarter_and_leap_day() {
        assert_eq!(season_window_start(date(2024, 3, 31)), "2023-10-01");
        assert_eq!(season_window_start(date(2024, 2, 29)), "2023-10-01");
        assert_eq!(season_window_start(date(2024, 12, 31)), "2024-07-01");
    }

    #[test]
    fn test_air_date_lower_bound() {
        assert_eq!(air_date_lower_bound(date(2025, 8, 3)), ">=2025-04-01");
    }

    #[test]
    fn test_current_window_is_well_formed() {
        let start = current_season_window_start();
        let parsed = NaiveDate::parse_from_str(&start, "%Y-%m-%d").unwrap();
        assert_eq!(parsed.day(), 1);
        assert!([1, 4, 7, 10].contains(&parsed.month()));
    }
}
