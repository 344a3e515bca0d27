use chrono::NaiveDate;
use gantt_rows::GanttError;
use gantt_rows::api::{DurationPolicy, GenerateConfig};
use gantt_rows::core::RowLabelPolicy;

#[test]
fn default_config_uses_enriched_policies() {
    let config = GenerateConfig::default();
    assert_eq!(config.row_count, 100);
    assert_eq!(config.bar_bounds(), (1, 20));
    assert_eq!(
        config.duration_policy,
        DurationPolicy::CappedLong {
            long_hours: 2,
            chance_one_in: 4,
            max_per_row: 2,
        }
    );
    assert_eq!(config.row_label_policy, RowLabelPolicy::ScriptEpisode);
    assert_eq!(config.day, None);
}

#[test]
fn basic_config_uses_base_policies() {
    let config = GenerateConfig::basic(3, 1, 2);
    assert_eq!(config.duration_policy, DurationPolicy::Fixed);
    assert_eq!(config.row_label_policy, RowLabelPolicy::Sequential);
}

#[test]
fn bar_bounds_normalize_order() {
    assert_eq!(GenerateConfig::new(1, 5, 1).bar_bounds(), (1, 5));
    assert_eq!(GenerateConfig::new(1, 2, 9).bar_bounds(), (2, 9));
    assert_eq!(GenerateConfig::new(1, 4, 4).bar_bounds(), (4, 4));
}

#[test]
fn signed_constructor_rejects_negatives() {
    let err = GenerateConfig::try_from_signed(-1, 1, 5).expect_err("negative rows");
    assert!(matches!(err, GanttError::InvalidConfig(ref msg) if msg.contains("row_count")));

    let err = GenerateConfig::try_from_signed(1, 1, -5).expect_err("negative max");
    assert!(matches!(err, GanttError::InvalidConfig(ref msg) if msg.contains("max_bars")));

    let config = GenerateConfig::try_from_signed(2, 5, 1).expect("valid counts");
    assert_eq!(config.bar_bounds(), (1, 5));
}

#[test]
fn parses_camel_case_widget_config() {
    let config = GenerateConfig::from_json_str(r#"{"rowCount": 10, "minBars": 2, "maxBars": 6}"#)
        .expect("parse");
    assert_eq!(config.row_count, 10);
    assert_eq!(config.bar_bounds(), (2, 6));
    assert_eq!(config.duration_policy, DurationPolicy::default());
}

#[test]
fn parses_policies_and_day() {
    let config = GenerateConfig::from_json_str(
        r#"{
            "row_count": 3,
            "min_bars": 1,
            "max_bars": 4,
            "duration_policy": "fixed",
            "row_label_policy": "sequential",
            "day": "2026-01-02"
        }"#,
    )
    .expect("parse");
    assert_eq!(config.duration_policy, DurationPolicy::Fixed);
    assert_eq!(config.row_label_policy, RowLabelPolicy::Sequential);
    assert_eq!(config.day, NaiveDate::from_ymd_opt(2026, 1, 2));
}

#[test]
fn rejects_negative_and_fractional_counts() {
    let err = GenerateConfig::from_json_str(r#"{"rowCount": -3, "minBars": 1, "maxBars": 2}"#)
        .expect_err("negative");
    assert!(matches!(err, GanttError::InvalidConfig(_)));

    let err = GenerateConfig::from_json_str(r#"{"rowCount": 2.5, "minBars": 1, "maxBars": 2}"#)
        .expect_err("fractional");
    assert!(matches!(err, GanttError::InvalidConfig(_)));
}

#[test]
fn rejects_degenerate_long_policy() {
    let zero_chance = GenerateConfig::new(1, 1, 1).with_duration_policy(DurationPolicy::CappedLong {
        long_hours: 2,
        chance_one_in: 0,
        max_per_row: 2,
    });
    assert!(zero_chance.validate().is_err());

    let zero_hours = GenerateConfig::new(1, 1, 1).with_duration_policy(DurationPolicy::CappedLong {
        long_hours: 0,
        chance_one_in: 4,
        max_per_row: 2,
    });
    assert!(zero_hours.validate().is_err());
}

#[test]
fn json_round_trip_keeps_config() {
    let config = GenerateConfig::basic(7, 3, 2)
        .with_day(NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date"));
    let json = config.to_json_pretty().expect("serialize");
    let restored = GenerateConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}
