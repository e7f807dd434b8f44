use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use skydash::domain::calendar::day_of_week;

// 1900-01-01 through 2100-12-31.
const RANGE_DAYS: i64 = 73_413;

proptest! {
    #[test]
    fn congruence_agrees_with_the_calendar_library(offset in 0i64..=RANGE_DAYS) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset);
        let expected = date.format("%A").to_string();
        let actual = day_of_week(&date.format("%Y-%m-%d").to_string()).unwrap();
        prop_assert_eq!(actual, expected.as_str());
    }
}
