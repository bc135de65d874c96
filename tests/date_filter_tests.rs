mod common;
use common::{check, clock_at, date_ctx, date_row};
use rowfilter::{FieldValue, FilterKind};

#[test]
fn date_before_instant_granularity_berlin() {
    let row = date_row("2021-08-10T21:59:37.940086Z");
    assert!(check(
        FilterKind::DateBefore,
        &row,
        "Europe/Berlin?2021-08-11",
        &date_ctx(true),
        &clock_at("2021-08-01T00:00:00Z"),
    ));
}

#[test]
fn date_before_instant_granularity_boundary() {
    // 2021-08-11 00:00 Berlin is 2021-08-10T22:00:00Z.
    let ctx = date_ctx(true);
    let clock = clock_at("2021-08-01T00:00:00Z");
    let on_boundary = date_row("2021-08-10T22:00:00Z");
    assert!(!check(
        FilterKind::DateBefore,
        &on_boundary,
        "Europe/Berlin?2021-08-11",
        &ctx,
        &clock
    ));
    assert!(check(
        FilterKind::DateBeforeOrEqual,
        &on_boundary,
        "Europe/Berlin?2021-08-11",
        &ctx,
        &clock
    ));
}

#[test]
fn date_equal_bare_date_row() {
    // A bare calendar date covers the whole day, regardless of include-time.
    let row = date_row("2021-08-11");
    for include_time in [false, true] {
        assert!(check(
            FilterKind::DateEqual,
            &row,
            "CET?2021-08-11",
            &date_ctx(include_time),
            &clock_at("2021-08-01T00:00:00Z"),
        ));
    }
}

#[test]
fn date_equal_instant_granularity_is_exact() {
    let ctx = date_ctx(true);
    let clock = clock_at("2021-08-01T00:00:00Z");
    let midnight = date_row("2021-08-11T00:00:00Z");
    let later = date_row("2021-08-11T00:00:00.5Z");
    assert!(check(
        FilterKind::DateEqual,
        &midnight,
        "UTC?2021-08-11",
        &ctx,
        &clock
    ));
    // Sub-second precision is preserved.
    assert!(!check(
        FilterKind::DateEqual,
        &later,
        "UTC?2021-08-11",
        &ctx,
        &clock
    ));
    assert!(check(
        FilterKind::DateNotEqual,
        &later,
        "UTC?2021-08-11",
        &ctx,
        &clock
    ));
}

#[test]
fn date_compare_truncates_when_time_not_included() {
    // 2021-08-10T23:30Z is already 2021-08-11 in Berlin.
    let row = date_row("2021-08-10T23:30:00Z");
    let ctx = date_ctx(false);
    let clock = clock_at("2021-08-01T00:00:00Z");
    assert!(check(
        FilterKind::DateEqual,
        &row,
        "Europe/Berlin?2021-08-11",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateBefore,
        &row,
        "Europe/Berlin?2021-08-11",
        &ctx,
        &clock
    ));
}

#[test]
fn timezone_equivalence_of_same_instant() {
    let ctx = date_ctx(true);
    let clock = clock_at("2021-08-01T00:00:00Z");
    // The same absolute instant, written in two source zones.
    let utc_form = date_row("2021-08-10T22:59:37Z");
    let offset_form = date_row("2021-08-11T00:59:37+02:00");
    for row in [&utc_form, &offset_form] {
        assert!(check(
            FilterKind::DateBefore,
            row,
            "Europe/London?2021-08-11",
            &ctx,
            &clock
        ));
    }
}

#[test]
fn unknown_timezone_falls_back_to_utc() {
    let row = date_row("2021-08-10");
    assert!(check(
        FilterKind::DateBefore,
        &row,
        "Not/AZone?2021-08-11",
        &date_ctx(false),
        &clock_at("2021-08-01T00:00:00Z"),
    ));
}

#[test]
fn malformed_payload_never_matches() {
    let row = date_row("2021-08-10");
    let ctx = date_ctx(false);
    let clock = clock_at("2021-08-01T00:00:00Z");
    for kind in [
        FilterKind::DateEqual,
        FilterKind::DateNotEqual,
        FilterKind::DateBefore,
        FilterKind::DateBeforeOrEqual,
        FilterKind::DateAfter,
        FilterKind::DateAfterOrEqual,
    ] {
        assert!(!check(kind, &row, "UTC?not-a-date", &ctx, &clock));
    }
}

#[test]
fn empty_payload_compares_against_today() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    assert!(check(
        FilterKind::DateEqual,
        &date_row("2021-08-11"),
        "UTC?",
        &ctx,
        &clock
    ));
    assert!(check(
        FilterKind::DateBefore,
        &date_row("2021-08-10"),
        "UTC?",
        &ctx,
        &clock
    ));
}

#[test]
fn null_row_matches_none_of_the_comparisons() {
    let ctx = date_ctx(false);
    let clock = clock_at("2021-08-01T00:00:00Z");
    for kind in [
        FilterKind::DateEqual,
        FilterKind::DateNotEqual,
        FilterKind::DateBefore,
        FilterKind::DateBeforeOrEqual,
        FilterKind::DateAfter,
        FilterKind::DateAfterOrEqual,
        FilterKind::DateEqualsToday,
        FilterKind::DateBeforeToday,
        FilterKind::DateAfterToday,
        FilterKind::DateWithinCurrentWeek,
        FilterKind::DateWithinDays,
        FilterKind::DateEqualsDaysAgo,
        FilterKind::DateAfterDaysAgo,
    ] {
        assert!(!check(
            kind,
            &FieldValue::Empty,
            "UTC?2021-08-11",
            &ctx,
            &clock
        ));
    }
}

#[test]
fn day_granularity_partitions_exactly() {
    let ctx = date_ctx(false);
    let clock = clock_at("2021-08-01T00:00:00Z");
    let value = "Europe/Berlin?2021-08-11";
    for raw in ["2021-08-09", "2021-08-11", "2021-08-14", "2021-08-10T23:30:00Z"] {
        let row = date_row(raw);
        let hits = [
            FilterKind::DateBefore,
            FilterKind::DateEqual,
            FilterKind::DateAfter,
        ]
        .iter()
        .filter(|k| check(**k, &row, value, &ctx, &clock))
        .count();
        assert_eq!(hits, 1, "row {raw} must hit exactly one of before/equal/after");
    }
}

#[test]
fn before_or_equal_is_before_or_equal() {
    let clock = clock_at("2021-08-01T00:00:00Z");
    let value = "Europe/Berlin?2021-08-11";
    for include_time in [false, true] {
        let ctx = date_ctx(include_time);
        for raw in [
            "2021-08-09",
            "2021-08-11",
            "2021-08-14",
            "2021-08-10T21:59:37Z",
            "2021-08-10T22:00:00Z",
            "2021-08-12T00:00:00Z",
        ] {
            let row = date_row(raw);
            let expected = check(FilterKind::DateBefore, &row, value, &ctx, &clock)
                || check(FilterKind::DateEqual, &row, value, &ctx, &clock);
            assert_eq!(
                check(FilterKind::DateBeforeOrEqual, &row, value, &ctx, &clock),
                expected,
                "row {raw}, include_time {include_time}"
            );
        }
    }
}

#[test]
fn today_filters_respect_the_zone() {
    // 23:30 UTC is already the next day in Berlin.
    let clock = clock_at("2021-08-11T23:30:00Z");
    let ctx = date_ctx(false);
    let row = date_row("2021-08-12");
    assert!(check(
        FilterKind::DateEqualsToday,
        &row,
        "Europe/Berlin",
        &ctx,
        &clock
    ));
    assert!(!check(FilterKind::DateEqualsToday, &row, "UTC", &ctx, &clock));
    assert!(check(FilterKind::DateAfterToday, &row, "UTC", &ctx, &clock));
    assert!(check(
        FilterKind::DateBeforeToday,
        &date_row("2021-08-11"),
        "Europe/Berlin",
        &ctx,
        &clock
    ));
}

#[test]
fn empty_today_zone_defaults_to_utc() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    assert!(check(
        FilterKind::DateEqualsToday,
        &date_row("2021-08-11"),
        "",
        &date_ctx(false),
        &clock
    ));
}

#[test]
fn within_current_week_starts_monday() {
    // 2021-08-11 is a Wednesday; its ISO week is Aug 9 through Aug 15.
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    let cases = [
        ("2021-08-09", true),
        ("2021-08-15", true),
        ("2021-08-08", false),
        ("2021-08-16", false),
    ];
    for (raw, expected) in cases {
        assert_eq!(
            check(
                FilterKind::DateWithinCurrentWeek,
                &date_row(raw),
                "UTC",
                &ctx,
                &clock
            ),
            expected,
            "row {raw}"
        );
    }
}

#[test]
fn within_current_month_and_year() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    assert!(check(
        FilterKind::DateWithinCurrentMonth,
        &date_row("2021-08-01"),
        "UTC",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateWithinCurrentMonth,
        &date_row("2021-09-01"),
        "UTC",
        &ctx,
        &clock
    ));
    assert!(check(
        FilterKind::DateWithinCurrentYear,
        &date_row("2021-12-31"),
        "UTC",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateWithinCurrentYear,
        &date_row("2022-01-01"),
        "UTC",
        &ctx,
        &clock
    ));
}

#[test]
fn within_current_period_instant_boundaries() {
    // With include-time, period bounds are instants in the resolved zone:
    // August in Berlin starts 2021-07-31T22:00Z and ends 2021-08-31T22:00Z.
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(true);
    assert!(check(
        FilterKind::DateWithinCurrentMonth,
        &date_row("2021-07-31T22:00:00Z"),
        "Europe/Berlin",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateWithinCurrentMonth,
        &date_row("2021-08-31T22:00:00Z"),
        "Europe/Berlin",
        &ctx,
        &clock
    ));
}

#[test]
fn within_days_inclusive_range() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    let cases = [
        ("2021-08-12", "Europe/Berlin?1", true),
        ("2021-08-11", "Europe/Berlin?1", true),
        ("2021-08-13", "Europe/Berlin?2", true),
        ("2021-08-13", "Europe/Berlin?1", false),
        ("2021-08-10", "Europe/Berlin?1", false),
        ("1970-08-11T23:30:37Z", "Europe/Berlin?2", false),
    ];
    for (raw, value, expected) in cases {
        assert_eq!(
            check(FilterKind::DateWithinDays, &date_row(raw), value, &ctx, &clock),
            expected,
            "row {raw}, value {value}"
        );
    }
}

#[test]
fn within_days_empty_offset_means_today_only() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    assert!(check(
        FilterKind::DateWithinDays,
        &date_row("2021-08-11"),
        "UTC?",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateWithinDays,
        &date_row("2021-08-12"),
        "UTC?",
        &ctx,
        &clock
    ));
}

#[test]
fn within_weeks_and_months() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    assert!(check(
        FilterKind::DateWithinWeeks,
        &date_row("2021-08-18"),
        "UTC?1",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateWithinWeeks,
        &date_row("2021-08-19"),
        "UTC?1",
        &ctx,
        &clock
    ));
    assert!(check(
        FilterKind::DateWithinMonths,
        &date_row("2021-09-11"),
        "UTC?1",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateWithinMonths,
        &date_row("2021-09-12"),
        "UTC?1",
        &ctx,
        &clock
    ));
}

#[test]
fn equals_days_ago_is_exact_not_a_range() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    assert!(check(
        FilterKind::DateEqualsDaysAgo,
        &date_row("2021-08-09"),
        "UTC?2",
        &ctx,
        &clock
    ));
    for raw in ["2021-08-08", "2021-08-10", "2021-08-11"] {
        assert!(!check(
            FilterKind::DateEqualsDaysAgo,
            &date_row(raw),
            "UTC?2",
            &ctx,
            &clock
        ));
    }
}

#[test]
fn equals_months_ago_matches_the_whole_month() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    assert!(check(
        FilterKind::DateEqualsMonthsAgo,
        &date_row("2021-07-01"),
        "UTC?1",
        &ctx,
        &clock
    ));
    assert!(check(
        FilterKind::DateEqualsMonthsAgo,
        &date_row("2021-07-31"),
        "UTC?1",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateEqualsMonthsAgo,
        &date_row("2021-06-30"),
        "UTC?1",
        &ctx,
        &clock
    ));
}

#[test]
fn equals_years_ago_matches_the_whole_year() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    assert!(check(
        FilterKind::DateEqualsYearsAgo,
        &date_row("2020-01-01"),
        "UTC?1",
        &ctx,
        &clock
    ));
    assert!(!check(
        FilterKind::DateEqualsYearsAgo,
        &date_row("2021-01-01"),
        "UTC?1",
        &ctx,
        &clock
    ));
}

#[test]
fn after_days_ago_inclusive_window() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    let cases = [
        ("2021-08-11", "UTC?3", true),
        ("2021-08-08", "UTC?3", true),
        ("2021-08-07", "UTC?3", false),
        ("2021-08-12", "UTC?3", false),
    ];
    for (raw, value, expected) in cases {
        assert_eq!(
            check(
                FilterKind::DateAfterDaysAgo,
                &date_row(raw),
                value,
                &ctx,
                &clock
            ),
            expected,
            "row {raw}"
        );
    }
}

#[test]
fn after_days_ago_requires_positive_offset() {
    let clock = clock_at("2021-08-11T12:00:00Z");
    let ctx = date_ctx(false);
    let row = date_row("2021-08-11");
    for value in ["UTC?0", "UTC?-1", "UTC?garbage", "UTC?"] {
        assert!(
            !check(FilterKind::DateAfterDaysAgo, &row, value, &ctx, &clock),
            "value {value}"
        );
    }
}

#[test]
fn unparseable_row_date_is_empty() {
    assert!(date_row("not a date").is_empty());
    assert!(!date_row("2021-08-11").is_empty());
}
