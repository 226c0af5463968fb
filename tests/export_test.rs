//! Excel/GeoJSON出力の統合テスト

use plot_tracker::cli::ExportFormat;
use plot_tracker::export::{self, excel, geojson};
use plot_tracker::state_file;
use tempfile::tempdir;

const STATE_JSON: &str = r#"{
  "parcels": [
    {"id": "p1", "coords": [[35.0, 139.0], [35.0, 139.01], [35.01, 139.01], [35.01, 139.0]], "meta": {"name": "区画1"}}
  ],
  "lines": [
    {"id": "r1", "coords": [[35.002, 139.002], [35.008, 139.002]],
     "meta": {"species": "トマト", "sowingDate": "2026-03-01", "plantingDate": "", "notes": "", "photo": "", "parcelId": "p1"}},
    {"id": "r2", "coords": [[36.0, 140.0], [36.001, 140.0]],
     "meta": {"species": "", "sowingDate": "", "plantingDate": "", "notes": "", "photo": "", "parcelId": null}}
  ]
}"#;

fn sample_state() -> plot_tracker_common::PlotState {
    state_file::parse_state(STATE_JSON).expect("状態JSONの解析失敗")
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("plots.xlsx");

    let result = excel::generate_excel(&sample_state(), &output_path, "テスト台帳");
    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());

    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_geojson_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("plots.geojson");

    geojson::write_geojson(&sample_state(), &output_path).expect("GeoJSON生成に失敗");

    let content = std::fs::read_to_string(&output_path).expect("読み込み失敗");
    let value: serde_json::Value = serde_json::from_str(&content).expect("JSONとして不正");
    assert_eq!(value["type"], "FeatureCollection");

    let features = value["features"].as_array().expect("featuresがない");
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["geometry"]["type"], "Polygon");
    assert_eq!(features[1]["properties"]["species"], "トマト");
    assert!(features[2]["properties"]["parcelId"].is_null());
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");

    let written = export::export_state(&sample_state(), &ExportFormat::Both, dir.path(), "圃場台帳")
        .expect("出力失敗");

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("圃場台帳.xlsx").exists());
    assert!(dir.path().join("圃場台帳.geojson").exists());
}

#[test]
fn test_export_both_with_file_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("farm.xlsx");

    export::export_state(&sample_state(), &ExportFormat::Both, &output, "圃場台帳").expect("出力失敗");

    assert!(dir.path().join("farm.xlsx").exists());
    assert!(dir.path().join("farm.geojson").exists());
}

#[test]
fn test_export_empty_state() {
    let dir = tempdir().expect("Failed to create temp dir");
    let state = plot_tracker_common::PlotState::default();

    let written = export::export_state(&state, &ExportFormat::GeoJson, dir.path(), "empty").expect("出力失敗");

    let content = std::fs::read_to_string(&written[0]).expect("読み込み失敗");
    let value: serde_json::Value = serde_json::from_str(&content).expect("JSONとして不正");
    assert_eq!(value["features"].as_array().map(|f| f.len()), Some(0));
}
