//! Tests for the value types: `TimeOfDay`, `Event` and `SchedulerConfig`.

use slot_engine::{Event, SchedulerConfig, SchedulerError, TimeOfDay};

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// TimeOfDay
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parses_zero_padded_times() {
    assert_eq!(t("00:00").minutes(), 0);
    assert_eq!(t("09:05").minutes(), 9 * 60 + 5);
    assert_eq!(t("23:59").minutes(), 1439);
    assert_eq!(t("14:30").hour(), 14);
    assert_eq!(t("14:30").minute(), 30);
}

#[test]
fn rejects_malformed_times() {
    for input in ["", "9:00", "09:0", "0900", "09-00", "ab:cd", "24:00", "12:60", " 09:00", "09:00:00"] {
        assert!(
            matches!(TimeOfDay::parse(input), Err(SchedulerError::InvalidInput(_))),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn displays_as_zero_padded_hh_mm() {
    assert_eq!(TimeOfDay::from_hm(7, 5).unwrap().to_string(), "07:05");
    assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
    assert_eq!("18:00".parse::<TimeOfDay>().unwrap().to_string(), "18:00");
}

#[test]
fn constructors_enforce_range() {
    assert!(TimeOfDay::from_hm(24, 0).is_none());
    assert!(TimeOfDay::from_hm(23, 60).is_none());
    assert_eq!(TimeOfDay::from_minutes(1439), Some(t("23:59")));
    assert!(TimeOfDay::from_minutes(1440).is_none());
}

#[test]
fn arithmetic_stays_within_the_day() {
    assert_eq!(t("23:30").checked_add_minutes(29), Some(t("23:59")));
    assert_eq!(t("23:30").checked_add_minutes(30), None);
    assert_eq!(t("09:00").minutes_until(t("10:30")), 90);
    assert_eq!(t("10:30").minutes_until(t("09:00")), -90);
}

#[test]
fn ordering_is_chronological() {
    assert!(t("08:59") < t("09:00"));
    assert!(t("09:00") < t("10:00"));
    assert!(t("00:00") < t("23:59"));
}

#[test]
fn serializes_as_string() {
    assert_eq!(serde_json::to_string(&t("09:05")).unwrap(), "\"09:05\"");
    let parsed: TimeOfDay = serde_json::from_str("\"17:45\"").unwrap();
    assert_eq!(parsed, t("17:45"));
    assert!(serde_json::from_str::<TimeOfDay>("\"24:00\"").is_err());
    assert!(serde_json::from_str::<TimeOfDay>("540").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Event
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn duration_is_derived_from_times() {
    let event = Event::parse("Standup", "09:00", "09:15").unwrap();
    assert_eq!(event.duration_minutes(), 15);

    let long = Event::parse("Offsite", "08:00", "18:00").unwrap();
    assert_eq!(long.duration_minutes(), 600);
}

#[test]
fn end_not_after_start_is_invalid_range() {
    assert_eq!(
        Event::parse("A", "10:00", "10:00").unwrap_err(),
        SchedulerError::InvalidRange {
            start: t("10:00"),
            end: t("10:00"),
        }
    );
    assert!(matches!(
        Event::new("A", t("11:00"), t("10:00")),
        Err(SchedulerError::InvalidRange { .. })
    ));
}

#[test]
fn blank_name_is_invalid_input() {
    assert!(matches!(
        Event::parse("", "09:00", "10:00"),
        Err(SchedulerError::InvalidInput(_))
    ));
    assert!(matches!(
        Event::parse(" \t", "09:00", "10:00"),
        Err(SchedulerError::InvalidInput(_))
    ));
}

#[test]
fn names_are_kept_verbatim() {
    let event = Event::parse("  1:1 with Sam ", "09:00", "10:00").unwrap();
    assert_eq!(event.name(), "  1:1 with Sam ");
}

#[test]
fn overlap_is_half_open() {
    let a = Event::parse("A", "09:00", "10:00").unwrap();
    let b = Event::parse("B", "09:30", "10:30").unwrap();
    let c = Event::parse("C", "10:00", "11:00").unwrap();

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c), "back-to-back events do not overlap");
    assert_eq!(a.overlap_minutes(&b), 30);
    assert_eq!(a.overlap_minutes(&c), 0);
}

#[test]
fn event_display_and_json() {
    let event = Event::parse("Review", "13:00", "14:30").unwrap();
    assert_eq!(event.to_string(), "\"Review\" (13:00 - 14:30)");

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Review",
            "start": "13:00",
            "end": "14:30",
            "duration_minutes": 90
        })
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// SchedulerConfig
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_config_is_eight_to_six_in_half_hours() {
    let config = SchedulerConfig::default();
    assert_eq!(config.working_hour_start, t("08:00"));
    assert_eq!(config.working_hour_end, t("18:00"));
    assert_eq!(config.slot_step_minutes, 30);
    assert_eq!(config.working_minutes(), 600);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_config_uses_defaults() {
    let config: SchedulerConfig =
        serde_json::from_str(r#"{"working_hour_end":"17:00"}"#).unwrap();
    assert_eq!(config.working_hour_start, t("08:00"));
    assert_eq!(config.working_hour_end, t("17:00"));
    assert_eq!(config.slot_step_minutes, 30);

    let empty: SchedulerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, SchedulerConfig::default());
}

#[test]
fn config_rejects_empty_window() {
    assert!(matches!(
        SchedulerConfig::new(t("12:00"), t("12:00")),
        Err(SchedulerError::InvalidConfig(_))
    ));
    assert!(SchedulerConfig::new(t("09:00"), t("17:00")).is_ok());
}
