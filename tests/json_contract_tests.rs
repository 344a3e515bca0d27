use chrono::NaiveDate;
use gantt_rows::api::{
    GenerateConfig, ROW_SET_JSON_SCHEMA_V1, RowGenerator, rows_from_json_compat_str,
    rows_to_json_contract_v1_pretty, rows_to_json_pretty,
};
use serde_json::Value;

fn sample_rows() -> Vec<gantt_rows::core::GanttRow> {
    let config = GenerateConfig::new(3, 2, 4)
        .with_day(NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date"));
    RowGenerator::seeded(17).generate(&config).expect("generate")
}

#[test]
fn bars_serialize_in_widget_shape() {
    let rows = sample_rows();
    let json = rows_to_json_pretty(&rows).expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    let bar = &value[0]["bars"][0];
    assert!(value[0]["label"].is_string());
    let begin = bar["beginDate"].as_str().expect("beginDate string");
    assert!(begin.starts_with("2026-10-16 "));
    assert_eq!(begin.len(), "2026-10-16 10:30".len());
    assert!(bar["endDate"].is_string());

    let config = &bar["ganttBarConfig"];
    assert_eq!(config["id"], "row-0-bar-0");
    assert_eq!(config["label"], "Task 1");
    assert_eq!(config["immobile"], true);
    assert!(
        config["style"]["background"]
            .as_str()
            .expect("background color")
            .starts_with('#')
    );
}

#[test]
fn contract_v1_round_trip() {
    let rows = sample_rows();
    let json = rows_to_json_contract_v1_pretty(&rows).expect("serialize");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], ROW_SET_JSON_SCHEMA_V1);

    let restored = rows_from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, rows);
}

#[test]
fn bare_array_is_accepted() {
    let rows = sample_rows();
    let json = rows_to_json_pretty(&rows).expect("serialize");
    let restored = rows_from_json_compat_str(&json).expect("parse bare array");
    assert_eq!(restored, rows);
}

#[test]
fn optional_bar_fields_may_be_omitted() {
    let json = r#"[{
        "label": "Row 1",
        "bars": [{
            "beginDate": "2026-10-16 10:00",
            "endDate": "2026-10-16 11:00",
            "ganttBarConfig": { "id": "a" }
        }]
    }]"#;
    let rows = rows_from_json_compat_str(json).expect("parse");
    let bar = &rows[0].bars[0];
    assert_eq!(bar.label(), None);
    assert_eq!(bar.color(), None);
    assert_eq!(bar.gantt_bar_config.immobile, None);
    assert_eq!(bar.duration_minutes(), 60);
}

#[test]
fn rejects_unsupported_schema_version() {
    let json = r#"{ "schema_version": 9, "rows": [] }"#;
    let err = rows_from_json_compat_str(json).expect_err("unsupported version");
    assert!(err.to_string().contains("unsupported row set schema version"));
}

#[test]
fn rejects_bar_ending_before_it_begins() {
    let json = r#"[{
        "label": "Row 1",
        "bars": [{
            "beginDate": "2026-10-16 12:00",
            "endDate": "2026-10-16 11:00",
            "ganttBarConfig": { "id": "a" }
        }]
    }]"#;
    assert!(rows_from_json_compat_str(json).is_err());
}

#[test]
fn rejects_bar_past_cutoff() {
    let json = r#"[{
        "label": "Row 1",
        "bars": [{
            "beginDate": "2026-10-16 18:00",
            "endDate": "2026-10-16 20:00",
            "ganttBarConfig": { "id": "a" }
        }]
    }]"#;
    assert!(rows_from_json_compat_str(json).is_err());
}

#[test]
fn rejects_duplicate_bar_ids() {
    let json = r#"[
        { "label": "Row 1", "bars": [{
            "beginDate": "2026-10-16 10:00", "endDate": "2026-10-16 11:00",
            "ganttBarConfig": { "id": "dup" } }] },
        { "label": "Row 2", "bars": [{
            "beginDate": "2026-10-16 12:00", "endDate": "2026-10-16 13:00",
            "ganttBarConfig": { "id": "dup" } }] }
    ]"#;
    let err = rows_from_json_compat_str(json).expect_err("duplicate ids");
    assert!(err.to_string().contains("duplicate bar id"));
}

#[test]
fn rejects_malformed_timestamp() {
    let json = r#"[{ "label": "Row 1", "bars": [{
        "beginDate": "2026-10-16T10:00:00Z", "endDate": "2026-10-16 11:00",
        "ganttBarConfig": { "id": "a" } }] }]"#;
    assert!(rows_from_json_compat_str(json).is_err());
}
