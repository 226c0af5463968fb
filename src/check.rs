//! 状態データの整合性検査
//!
//! エラー: 読み込み時に描画・関連付けが壊れる問題
//! 情報: 動作には影響しないが確認したほうがよい点（何も書き換えない）

use chrono::NaiveDate;
use plot_tracker_common::reducer::{MIN_PARCEL_POINTS, MIN_ROW_POINTS};
use plot_tracker_common::{find_enclosing_parcel, LatLng, PlotState};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub severity: Severity,
    /// 対象の区画/畝ID
    pub target: String,
    pub message: String,
}

impl Issue {
    fn error(target: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            target: target.to_string(),
            message: message.into(),
        }
    }

    fn info(target: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            target: target.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "エラー",
            Severity::Info => "情報",
        };
        write!(f, "[{}] {}: {}", label, self.target, self.message)
    }
}

pub fn error_count(issues: &[Issue]) -> usize {
    issues.iter().filter(|i| i.severity == Severity::Error).count()
}

fn valid_coord(p: &LatLng) -> bool {
    p.lat.is_finite() && p.lng.is_finite() && p.lat.abs() <= 90.0 && p.lng.abs() <= 180.0
}

fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

pub fn check_state(state: &PlotState) -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut parcel_ids = HashSet::new();
    for parcel in &state.parcels {
        if !parcel_ids.insert(parcel.id.as_str()) {
            issues.push(Issue::error(&parcel.id, "区画IDが重複しています"));
        }
        if parcel.coords.len() < MIN_PARCEL_POINTS {
            issues.push(Issue::error(
                &parcel.id,
                format!("区画の頂点が{}点しかありません", parcel.coords.len()),
            ));
        }
        if !parcel.coords.iter().all(valid_coord) {
            issues.push(Issue::error(&parcel.id, "範囲外の座標があります"));
        }
    }

    let mut row_ids = HashSet::new();
    for row in &state.rows {
        if !row_ids.insert(row.id.as_str()) {
            issues.push(Issue::error(&row.id, "畝IDが重複しています"));
        }
        if row.coords.len() < MIN_ROW_POINTS {
            issues.push(Issue::error(
                &row.id,
                format!("畝の頂点が{}点しかありません", row.coords.len()),
            ));
        }
        if !row.coords.iter().all(valid_coord) {
            issues.push(Issue::error(&row.id, "範囲外の座標があります"));
        }

        match row.meta.parcel_id.as_deref() {
            Some(pid) if !parcel_ids.contains(pid) => {
                issues.push(Issue::error(&row.id, format!("存在しない区画 {} を参照しています", pid)));
            }
            recorded => {
                // 所属は作成時に決まる。現在の区画で判定し直した結果との差は報告のみ
                let current = find_enclosing_parcel(&state.parcels, &row.coords);
                if current.as_deref() != recorded {
                    issues.push(Issue::info(
                        &row.id,
                        format!(
                            "所属区画 {} は現在の判定 {} と異なります",
                            recorded.unwrap_or("なし"),
                            current.as_deref().unwrap_or("なし")
                        ),
                    ));
                }
            }
        }

        for (label, value) in [("播種日", &row.meta.sowing_date), ("定植日", &row.meta.planting_date)] {
            if !value.is_empty() && !is_iso_date(value) {
                issues.push(Issue::info(&row.id, format!("{} \"{}\" はYYYY-MM-DD形式ではありません", label, value)));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_tracker_common::{Parcel, ParcelMeta, Row, RowMeta};

    fn parcel(id: &str, raw: &[(f64, f64)]) -> Parcel {
        Parcel {
            id: id.to_string(),
            coords: raw.iter().map(|&(a, b)| LatLng::new(a, b)).collect(),
            meta: ParcelMeta::default(),
        }
    }

    fn row(id: &str, raw: &[(f64, f64)], parcel_id: Option<&str>) -> Row {
        Row {
            id: id.to_string(),
            coords: raw.iter().map(|&(a, b)| LatLng::new(a, b)).collect(),
            meta: RowMeta {
                parcel_id: parcel_id.map(str::to_string),
                ..Default::default()
            },
        }
    }

    fn unit_parcel() -> Parcel {
        parcel("p1", &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)])
    }

    #[test]
    fn test_clean_state_has_no_issues() {
        let state = PlotState {
            parcels: vec![unit_parcel()],
            rows: vec![row("r1", &[(0.3, 0.3), (0.6, 0.6)], Some("p1"))],
        };
        assert!(check_state(&state).is_empty());
    }

    #[test]
    fn test_dangling_parcel_reference() {
        let state = PlotState {
            parcels: vec![],
            rows: vec![row("r1", &[(0.3, 0.3), (0.6, 0.6)], Some("gone"))],
        };
        let issues = check_state(&state);
        assert_eq!(error_count(&issues), 1);
        assert!(issues[0].message.contains("gone"));
    }

    #[test]
    fn test_too_few_points_and_duplicates() {
        let state = PlotState {
            parcels: vec![parcel("p1", &[(0.0, 0.0), (1.0, 1.0)]), unit_parcel()],
            rows: vec![row("r1", &[(5.0, 5.0)], None)],
        };
        let issues = check_state(&state);
        assert_eq!(error_count(&issues), 3);
    }

    #[test]
    fn test_association_drift_is_info() {
        // 区画より先に描かれた畝は区画外のまま
        let state = PlotState {
            parcels: vec![unit_parcel()],
            rows: vec![row("r1", &[(0.3, 0.3), (0.6, 0.6)], None)],
        };
        let issues = check_state(&state);
        assert_eq!(error_count(&issues), 0);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_non_iso_date_is_info() {
        let mut r = row("r1", &[(5.0, 5.0), (6.0, 6.0)], None);
        r.meta.sowing_date = "4月1日".to_string();
        r.meta.planting_date = "2026-05-10".to_string();
        let state = PlotState { parcels: vec![], rows: vec![r] };

        let issues = check_state(&state);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("播種日"));
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let state = PlotState {
            parcels: vec![parcel("p1", &[(0.0, 0.0), (0.0, 1.0), (91.0, 1.0)])],
            rows: vec![],
        };
        assert_eq!(error_count(&check_state(&state)), 1);
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::error("r1", "テスト");
        assert_eq!(issue.to_string(), "[エラー] r1: テスト");
    }
}
