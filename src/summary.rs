//! 区画・畝の集計

use plot_tracker_common::{Bounds, PlotState};
use std::collections::BTreeMap;
use std::fmt;

const UNSET_SPECIES: &str = "(未設定)";

/// 区画ごとの集計
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelSummary {
    pub id: String,
    pub name: String,
    pub vertex_count: usize,
    pub bounds: Option<Bounds>,
    pub row_count: usize,
    pub species: Vec<String>,
}

/// 状態全体の集計
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotSummary {
    pub parcels: Vec<ParcelSummary>,
    pub total_rows: usize,
    /// どの区画にも属さない畝
    pub unassigned_rows: usize,
    /// 品種 → 畝数
    pub species_counts: BTreeMap<String, usize>,
}

fn species_label(species: &str) -> String {
    if species.trim().is_empty() {
        UNSET_SPECIES.to_string()
    } else {
        species.trim().to_string()
    }
}

pub fn summarize(state: &PlotState) -> PlotSummary {
    let parcels = state
        .parcels
        .iter()
        .map(|parcel| {
            let mut species: Vec<String> = state
                .rows_in_parcel(&parcel.id)
                .map(|r| species_label(&r.meta.species))
                .collect();
            let row_count = species.len();
            species.sort();
            species.dedup();

            ParcelSummary {
                id: parcel.id.clone(),
                name: parcel.meta.name.clone(),
                vertex_count: parcel.coords.len(),
                bounds: Bounds::from_coords(&parcel.coords),
                row_count,
                species,
            }
        })
        .collect();

    let mut species_counts = BTreeMap::new();
    for row in &state.rows {
        *species_counts.entry(species_label(&row.meta.species)).or_insert(0) += 1;
    }

    let unassigned_rows = state
        .rows
        .iter()
        .filter(|r| r.meta.parcel_id.is_none())
        .count();

    PlotSummary {
        parcels,
        total_rows: state.rows.len(),
        unassigned_rows,
        species_counts,
    }
}

impl fmt::Display for PlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "区画: {}件 / 畝: {}本", self.parcels.len(), self.total_rows)?;

        for parcel in &self.parcels {
            writeln!(f)?;
            writeln!(f, "■ {} ({})", parcel.name, parcel.id)?;
            writeln!(f, "  頂点数: {}", parcel.vertex_count)?;
            if let Some(b) = parcel.bounds {
                writeln!(
                    f,
                    "  範囲: ({:.6}, {:.6}) - ({:.6}, {:.6})",
                    b.south, b.west, b.north, b.east
                )?;
            }
            writeln!(f, "  畝: {}本", parcel.row_count)?;
            if !parcel.species.is_empty() {
                writeln!(f, "  品種: {}", parcel.species.join(", "))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "区画外の畝: {}本", self.unassigned_rows)?;

        if !self.species_counts.is_empty() {
            writeln!(f, "品種別:")?;
            for (species, count) in &self.species_counts {
                writeln!(f, "  {}: {}本", species, count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_tracker_common::{LatLng, Parcel, ParcelMeta, Row, RowMeta};

    fn row(id: &str, species: &str, parcel: Option<&str>) -> Row {
        Row {
            id: id.to_string(),
            coords: vec![LatLng::new(0.0, 0.0), LatLng::new(0.1, 0.1)],
            meta: RowMeta {
                species: species.to_string(),
                parcel_id: parcel.map(str::to_string),
                ..Default::default()
            },
        }
    }

    fn sample_state() -> PlotState {
        PlotState {
            parcels: vec![Parcel {
                id: "p1".to_string(),
                coords: vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0), LatLng::new(1.0, 1.0)],
                meta: ParcelMeta { name: "区画1".to_string() },
            }],
            rows: vec![
                row("r1", "トマト", Some("p1")),
                row("r2", "トマト", Some("p1")),
                row("r3", "", Some("p1")),
                row("r4", "ナス", None),
            ],
        }
    }

    #[test]
    fn test_summarize_counts() {
        let summary = summarize(&sample_state());
        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.unassigned_rows, 1);
        assert_eq!(summary.parcels.len(), 1);
        assert_eq!(summary.parcels[0].row_count, 3);
        assert_eq!(summary.parcels[0].species, vec!["(未設定)".to_string(), "トマト".to_string()]);
        assert_eq!(summary.species_counts.get("トマト"), Some(&2));
        assert_eq!(summary.species_counts.get("ナス"), Some(&1));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&PlotState::default());
        assert_eq!(summary, PlotSummary::default());
    }

    #[test]
    fn test_summary_display() {
        let text = summarize(&sample_state()).to_string();
        assert!(text.contains("区画: 1件 / 畝: 4本"));
        assert!(text.contains("■ 区画1 (p1)"));
        assert!(text.contains("区画外の畝: 1本"));
    }
}
