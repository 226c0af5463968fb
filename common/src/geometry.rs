//! 区画と畝の幾何判定
//!
//! 畝の所属区画は「畝の代表点が区画の外接矩形に入るか」で判定する。
//! 多角形の内外判定ではないため、外接矩形内かつ多角形外の点も
//! その区画に所属する（既知の近似）。判定結果が変わるため厳密な
//! 多角形判定には置き換えないこと。

use crate::types::{LatLng, Parcel};
use serde::{Deserialize, Serialize};

/// 緯度経度の外接矩形
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// 座標列から外接矩形を作る（空ならNone）
    pub fn from_coords(coords: &[LatLng]) -> Option<Self> {
        let first = coords.first()?;
        let mut bounds = Bounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        for p in &coords[1..] {
            bounds.south = bounds.south.min(p.lat);
            bounds.north = bounds.north.max(p.lat);
            bounds.west = bounds.west.min(p.lng);
            bounds.east = bounds.east.max(p.lng);
        }
        Some(bounds)
    }

    /// 境界上の点も含む
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

/// 畝の代表点（インデックス floor(n/2) の頂点）
pub fn representative_point(coords: &[LatLng]) -> Option<LatLng> {
    coords.get(coords.len() / 2).copied()
}

/// 代表点を外接矩形に含む最初の区画のIDを返す
pub fn find_enclosing_parcel(parcels: &[Parcel], row_coords: &[LatLng]) -> Option<String> {
    let point = representative_point(row_coords)?;
    parcels
        .iter()
        .find(|parcel| {
            Bounds::from_coords(&parcel.coords)
                .map(|b| b.contains(&point))
                .unwrap_or(false)
        })
        .map(|parcel| parcel.id.clone())
}
