use pretty_assertions::assert_eq;
use rentsync_core::models::day::Weekday;
use rentsync_core::models::schedule::{TimeRange, WeeklySchedule};
use rentsync_core::summary::summarize;
use rstest::rstest;

fn range(start: u8, end: u8) -> TimeRange {
    TimeRange::from_hours(start, end).unwrap()
}

fn schedule_for(days: &[Weekday], ranges: &[(u8, u8)]) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::new();
    for day in days {
        for (start, end) in ranges {
            schedule = schedule.add_range(*day, range(*start, *end)).unwrap();
        }
    }
    schedule
}

#[test]
fn test_empty_schedule_has_no_summary() {
    assert_eq!(summarize(&WeeklySchedule::new()), None);
}

#[test]
fn test_weekday_schedule() {
    let schedule = schedule_for(&Weekday::WEEKDAYS, &[(8, 18)]);
    let summary = summarize(&schedule).unwrap();

    assert_eq!(summary.days_text, "Weekdays");
    assert_eq!(summary.hours_text.as_deref(), Some("8am–6pm"));
}

#[test]
fn test_weekend_schedule() {
    let schedule = schedule_for(&Weekday::WEEKEND, &[(10, 16)]);
    let summary = summarize(&schedule).unwrap();

    assert_eq!(summary.days_text, "Weekends");
    assert_eq!(summary.hours_text.as_deref(), Some("10am–4pm"));
}

#[test]
fn test_every_day_schedule() {
    let schedule = schedule_for(&Weekday::ALL, &[(0, 24)]);
    let summary = summarize(&schedule).unwrap();

    assert_eq!(summary.days_text, "Every day");
    assert_eq!(summary.hours_text.as_deref(), Some("12am–12am"));
}

#[test]
fn test_few_days_join_abbreviations() {
    let schedule = schedule_for(&[Weekday::Mon, Weekday::Wed, Weekday::Fri], &[(9, 17)]);
    let summary = summarize(&schedule).unwrap();

    assert_eq!(summary.days_text, "Mon, Wed, Fri");
}

#[test]
fn test_single_day() {
    let schedule = schedule_for(&[Weekday::Sat], &[(11, 15)]);
    let summary = summarize(&schedule).unwrap();

    assert_eq!(summary.days_text, "Sat");
    assert_eq!(summary.hours_text.as_deref(), Some("11am–3pm"));
}

#[rstest]
#[case(&[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu], "4 days")]
#[case(&[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat], "6 days")]
fn test_day_count_fallback(#[case] days: &[Weekday], #[case] expected: &str) {
    let schedule = schedule_for(days, &[(9, 17)]);
    assert_eq!(summarize(&schedule).unwrap().days_text, expected);
}

#[test]
fn test_weekdays_plus_saturday_is_not_weekdays() {
    let schedule = schedule_for(
        &[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ],
        &[(9, 17)],
    );
    assert_eq!(summarize(&schedule).unwrap().days_text, "6 days");
}

#[test]
fn test_hour_window_spans_days() {
    let mut schedule = WeeklySchedule::new();
    schedule = schedule.add_range(Weekday::Mon, range(8, 12)).unwrap();
    schedule = schedule.add_range(Weekday::Tue, range(10, 20)).unwrap();

    // Min start from Monday, max end from Tuesday
    let summary = summarize(&schedule).unwrap();
    assert_eq!(summary.hours_text.as_deref(), Some("8am–8pm"));
}

#[test]
fn test_hour_window_reads_only_first_range_per_day() {
    let mut schedule = WeeklySchedule::new();
    schedule = schedule.add_range(Weekday::Mon, range(8, 12)).unwrap();
    // A second evening range on the same day does not widen the window
    schedule = schedule.add_range(Weekday::Mon, range(18, 22)).unwrap();

    let summary = summarize(&schedule).unwrap();
    assert_eq!(summary.hours_text.as_deref(), Some("8am–12pm"));
}

#[test]
fn test_noon_boundaries() {
    let schedule = schedule_for(&[Weekday::Mon], &[(12, 13)]);
    let summary = summarize(&schedule).unwrap();

    assert_eq!(summary.hours_text.as_deref(), Some("12pm–1pm"));
}
