use bs_date::{BsConverter, BsDate, ConversionError, WEEKDAY_NAMES, weekday_name};
use chrono::{Datelike, NaiveDate, TimeZone, Utc};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every Gregorian day the built-in table covers: 2081 Baishakh 1 through
/// 2082 Chaitra 30.
fn covered_days() -> impl Iterator<Item = NaiveDate> {
    ymd(2024, 4, 13).iter_days().take_while(|d| *d <= ymd(2026, 4, 13))
}

#[test]
fn test_coverage_has_expected_length() {
    assert_eq!(covered_days().count(), 365 + 366);
}

#[test]
fn test_dates_advance_one_day_at_a_time() {
    let converter = BsConverter::new();
    let table = converter.table();
    let mut previous: Option<BsDate> = None;

    for gregorian in covered_days() {
        let current = converter.gregorian_to_bs(gregorian).unwrap();
        if let Some(prev) = previous {
            assert!(prev < current, "{prev} should precede {current}");

            let prev_len = table
                .month_length(prev.year(), prev.month_typed())
                .unwrap();
            if prev.day() < prev_len {
                assert_eq!(current.year(), prev.year());
                assert_eq!(current.month_index(), prev.month_index());
                assert_eq!(current.day(), prev.day() + 1);
            } else if prev.month_index() < 11 {
                assert_eq!(current.year(), prev.year());
                assert_eq!(current.month_index(), prev.month_index() + 1);
                assert_eq!(current.day(), 1);
            } else {
                assert_eq!(current.year(), prev.year() + 1);
                assert_eq!(current.month_index(), 0);
                assert_eq!(current.day(), 1);
            }
        }
        previous = Some(current);
    }
}

#[test]
fn test_round_trip_through_gregorian() {
    let converter = BsConverter::new();
    for gregorian in covered_days() {
        let bs = converter.gregorian_to_bs(gregorian).unwrap();
        assert_eq!(converter.bs_to_gregorian(bs).unwrap(), gregorian, "{bs}");
    }
}

#[test]
fn test_weekday_cycles_from_anchor() {
    let converter = BsConverter::new();
    let anchor = chrono_tz::Asia::Kathmandu
        .with_ymd_and_hms(2025, 1, 14, 9, 30, 0)
        .single()
        .unwrap()
        .with_timezone(&Utc);

    for i in 0..21 {
        let instant = anchor + chrono::Duration::days(i);
        let result = converter.convert(instant).unwrap();
        // 2025-01-14 is a Tuesday, index 2
        let expected = WEEKDAY_NAMES[((2 + i) % 7) as usize];
        assert_eq!(weekday_name(result.weekday()), expected, "day {i}");
        assert!(result.to_string().contains(expected));
    }
}

#[test]
fn test_instants_are_monotonic_across_the_day() {
    let converter = BsConverter::new();
    let start = Utc.with_ymd_and_hms(2025, 4, 10, 0, 0, 0).unwrap();
    let mut previous = None;
    for step in 0..(24 * 6) {
        let instant = start + chrono::Duration::minutes(45 * step);
        let date = converter.convert(instant).unwrap().date();
        if let Some(prev) = previous {
            assert!(prev <= date);
        }
        previous = Some(date);
    }
}

#[test]
fn test_outside_coverage_is_an_error() {
    let converter = BsConverter::new();
    let after = ymd(2026, 4, 13).succ_opt().unwrap();
    let before = ymd(2024, 4, 13).pred_opt().unwrap();
    assert!(matches!(
        converter.gregorian_to_bs(after),
        Err(ConversionError::OutOfRangeYear { year: 2083 })
    ));
    assert!(matches!(
        converter.gregorian_to_bs(before),
        Err(ConversionError::OutOfRangeYear { year: 2080 })
    ));
    assert_eq!(after.weekday(), chrono::Weekday::Tue);
}
