use attendance_tool::{
    AttendanceRecord, ClassifierConfig, DepartmentTally, Event, Summary, Tally, WeeksNeeded,
    project, summarize,
};
use chrono::{NaiveDate, NaiveTime};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn event(date: NaiveDate, department: &str, topic: &str) -> Event {
    Event {
        date,
        start_time: t(8, 0),
        end_time: t(9, 0),
        department: department.to_string(),
        topic: topic.to_string(),
        batch: vec!["ALL".to_string()],
        instructor: "TBD".to_string(),
        location: "TBD".to_string(),
        is_holiday: false,
        is_generic: false,
    }
}

fn summary_with(total: u32, attended: u32, upcoming: u32) -> Summary {
    let mut summary = Summary::default();
    summary.departments.insert(
        "Internal Medicine".to_string(),
        DepartmentTally {
            theory: Tally { total, attended },
            practical: Tally::default(),
        },
    );
    summary.upcoming = upcoming;
    summary
}

#[test]
fn summarize_partitions_past_and_upcoming_around_now() {
    let classifier = ClassifierConfig::default();
    let mut record = AttendanceRecord::new();
    let past_attended = event(d(2025, 9, 1), "ENT", "ENT Theory");
    let past_missed = event(d(2025, 9, 8), "ENT", "ENT Theory");
    let today = event(d(2025, 9, 15), "ENT", "ENT Theory");
    let future = event(d(2025, 9, 22), "ENT", "ENT Clinic");
    record.mark(past_attended.identity());

    let events = vec![past_attended, past_missed, today, future];
    let summary = summarize(&events, &record, &classifier, d(2025, 9, 15));

    // Today counts as upcoming, not held
    assert_eq!(summary.upcoming, 2);
    let ent = summary.departments.get("ENT").unwrap();
    assert_eq!(ent.theory, Tally { total: 2, attended: 1 });
    assert_eq!(ent.practical, Tally::default());
}

#[test]
fn summarize_splits_theory_and_practical_per_department() {
    let classifier = ClassifierConfig::default();
    let record = AttendanceRecord::new();
    let events = vec![
        event(d(2025, 9, 1), "ENT", "ENT Theory"),
        event(d(2025, 9, 2), "ENT", "ENT Clinic"),
        event(d(2025, 9, 3), "Forensic Medicine", "Autopsy Tutorial"),
    ];
    let summary = summarize(&events, &record, &classifier, d(2025, 10, 1));
    assert_eq!(summary.departments.get("ENT").unwrap().theory.total, 1);
    assert_eq!(summary.departments.get("ENT").unwrap().practical.total, 1);
    assert_eq!(
        summary
            .departments
            .get("Forensic Medicine")
            .unwrap()
            .practical
            .total,
        1
    );
}

#[test]
fn projection_matches_the_worked_example() {
    // held 10, attended 7, upcoming 5, target 75 ->
    // totalForTerm 15, required ceil(11.25) = 12, needed 12 - 7 = 5
    let summary = summary_with(10, 7, 5);
    let projection = project(&summary, Some(75), d(2025, 10, 1), d(2025, 11, 28));
    assert_eq!(projection.target_percent, 75);
    assert_eq!(projection.classes_needed, 5);
    assert!(matches!(projection.weeks_needed, WeeksNeeded::Within(_)));
}

#[test]
fn weeks_needed_uses_the_upcoming_weekly_rate() {
    // 58 days remain -> ~8.29 weeks; 5 upcoming -> ~0.60/week;
    // 5 needed / 0.60 = 8.29 -> 9 weeks
    let summary = summary_with(10, 7, 5);
    let projection = project(&summary, Some(75), d(2025, 10, 1), d(2025, 11, 28));
    assert_eq!(projection.weeks_needed, WeeksNeeded::Within(9));
}

#[test]
fn increasing_the_target_never_lowers_classes_needed() {
    let summary = summary_with(40, 22, 18);
    let mut previous = 0;
    for target in 0..=100 {
        let projection = project(&summary, Some(target), d(2025, 10, 1), d(2025, 11, 28));
        assert!(
            projection.classes_needed >= previous,
            "target {target} lowered classes_needed"
        );
        previous = projection.classes_needed;
    }
}

#[test]
fn met_target_reports_already_met() {
    let summary = summary_with(10, 9, 0);
    let projection = project(&summary, Some(75), d(2025, 10, 1), d(2025, 11, 28));
    assert_eq!(projection.classes_needed, 0);
    assert_eq!(projection.weeks_needed, WeeksNeeded::AlreadyMet);
}

#[test]
fn no_upcoming_classes_with_a_shortfall_is_unattainable() {
    let summary = summary_with(10, 2, 0);
    let projection = project(&summary, Some(75), d(2025, 10, 1), d(2025, 11, 28));
    assert!(projection.classes_needed > 0);
    assert_eq!(projection.weeks_needed, WeeksNeeded::Unattainable);
}

#[test]
fn past_term_end_with_a_shortfall_is_unattainable() {
    let summary = summary_with(10, 2, 4);
    let projection = project(&summary, Some(75), d(2025, 12, 15), d(2025, 11, 28));
    assert_eq!(projection.weeks_needed, WeeksNeeded::Unattainable);
}

#[test]
fn missing_or_absurd_targets_clamp_to_the_default() {
    let summary = summary_with(10, 7, 5);
    let defaulted = project(&summary, None, d(2025, 10, 1), d(2025, 11, 28));
    assert_eq!(defaulted.target_percent, 75);
    let clamped = project(&summary, Some(150), d(2025, 10, 1), d(2025, 11, 28));
    assert_eq!(clamped.target_percent, 75);
    assert_eq!(defaulted.classes_needed, clamped.classes_needed);
}

#[test]
fn record_toggle_flips_membership() {
    let mut record = AttendanceRecord::new();
    let identity = "2025-09-01|08:00|ENT|ENT Theory".to_string();
    assert!(record.toggle(identity.clone()));
    assert!(record.contains(&identity));
    assert!(!record.toggle(identity.clone()));
    assert!(!record.contains(&identity));
    assert!(record.is_empty());
}

#[test]
fn summary_totals_add_across_departments_and_kinds() {
    let classifier = ClassifierConfig::default();
    let mut record = AttendanceRecord::new();
    let first = event(d(2025, 9, 1), "ENT", "ENT Theory");
    let second = event(d(2025, 9, 2), "ENT", "ENT Clinic");
    record.mark(first.identity());
    record.mark(second.identity());
    let events = vec![
        first,
        second,
        event(d(2025, 9, 3), "Community Medicine", "Epidemiology"),
    ];
    let summary = summarize(&events, &record, &classifier, d(2025, 10, 1));
    let totals = summary.totals();
    assert_eq!(totals, Tally { total: 3, attended: 2 });
    assert_eq!(
        summary.to_cli_summary(),
        "held=3, attended=2, upcoming=0, departments=2"
    );
}
