//! 区画・畝の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Parcel: 地図上に描いた多角形の区画
//! - Row: 地図上に描いた折れ線の畝（保存形式では "lines"）
//! - PlotState: localStorageに丸ごと保存される状態

use serde::{Deserialize, Serialize};

/// 緯度経度の組
///
/// 保存形式は `[lat, lng]` の2要素配列（Leafletの座標配列と同じ）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lng]
    }
}

/// 区画のメタデータ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelMeta {
    pub name: String,
}

/// 区画（閉じた多角形、3点以上）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: String,
    pub coords: Vec<LatLng>,
    #[serde(default)]
    pub meta: ParcelMeta,
}

/// 畝のメタデータ
///
/// 日付・品種・写真URLはすべて自由入力の文字列（検証しない）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowMeta {
    pub species: String,       // 品種
    pub sowing_date: String,   // 播種日
    pub planting_date: String, // 定植日
    pub notes: String,         // メモ
    pub photo: String,         // 写真URL

    /// 作成時に判定した所属区画ID（以後再計算しない）
    pub parcel_id: Option<String>,
}

/// 畝メタデータの部分更新
///
/// `Some` のフィールドだけを置き換える。所属区画は編集対象外。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMetaPatch {
    pub species: Option<String>,
    pub sowing_date: Option<String>,
    pub planting_date: Option<String>,
    pub notes: Option<String>,
    pub photo: Option<String>,
}

impl RowMetaPatch {
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.sowing_date.is_none()
            && self.planting_date.is_none()
            && self.notes.is_none()
            && self.photo.is_none()
    }

    /// 指定フィールドだけを上書き
    pub fn apply_to(&self, meta: &mut RowMeta) {
        if let Some(v) = &self.species {
            meta.species = v.clone();
        }
        if let Some(v) = &self.sowing_date {
            meta.sowing_date = v.clone();
        }
        if let Some(v) = &self.planting_date {
            meta.planting_date = v.clone();
        }
        if let Some(v) = &self.notes {
            meta.notes = v.clone();
        }
        if let Some(v) = &self.photo {
            meta.photo = v.clone();
        }
    }
}

/// 畝（折れ線、2点以上）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub coords: Vec<LatLng>,
    #[serde(default)]
    pub meta: RowMeta,
}

/// 保存対象の状態全体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotState {
    pub parcels: Vec<Parcel>,
    #[serde(rename = "lines")]
    pub rows: Vec<Row>,
}

impl PlotState {
    pub fn parcel(&self, id: &str) -> Option<&Parcel> {
        self.parcels.iter().find(|p| p.id == id)
    }

    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// 指定区画に属する畝
    pub fn rows_in_parcel<'a>(&'a self, parcel_id: &'a str) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows
            .iter()
            .filter(move |r| r.meta.parcel_id.as_deref() == Some(parcel_id))
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty() && self.rows.is_empty()
    }
}
