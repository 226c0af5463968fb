//! 状態更新リデューサ
//!
//! アクションごとに新しい `PlotState` を返す純粋関数。
//! 受理されなかったアクション（点数不足、存在しない畝、空のパッチなど）は `None`。
//! 永続化は呼び出し側（`Session`）の責務。

use crate::geometry::find_enclosing_parcel;
use crate::types::{LatLng, Parcel, ParcelMeta, PlotState, Row, RowMeta, RowMetaPatch};

/// 区画の最小頂点数
pub const MIN_PARCEL_POINTS: usize = 3;
/// 畝の最小頂点数
pub const MIN_ROW_POINTS: usize = 2;

/// 状態更新アクション
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddParcel { id: String, coords: Vec<LatLng> },
    AddRow { id: String, coords: Vec<LatLng> },
    PatchRowMeta { id: String, patch: RowMetaPatch },
    DeleteRow { id: String },
}

/// 区画の既定名
pub fn default_parcel_name(index: usize) -> String {
    format!("区画{}", index)
}

/// アクションを適用した新しい状態を返す
pub fn reduce(state: &PlotState, action: &Action) -> Option<PlotState> {
    match action {
        Action::AddParcel { id, coords } => {
            if coords.len() < MIN_PARCEL_POINTS {
                return None;
            }
            let mut next = state.clone();
            next.parcels.push(Parcel {
                id: id.clone(),
                coords: coords.clone(),
                meta: ParcelMeta {
                    name: default_parcel_name(state.parcels.len() + 1),
                },
            });
            Some(next)
        }

        Action::AddRow { id, coords } => {
            if coords.len() < MIN_ROW_POINTS {
                return None;
            }
            let parcel_id = find_enclosing_parcel(&state.parcels, coords);
            let mut next = state.clone();
            next.rows.push(Row {
                id: id.clone(),
                coords: coords.clone(),
                meta: RowMeta {
                    parcel_id,
                    ..Default::default()
                },
            });
            Some(next)
        }

        Action::PatchRowMeta { id, patch } => {
            if patch.is_empty() {
                return None;
            }
            let index = state.rows.iter().position(|r| &r.id == id)?;
            let mut next = state.clone();
            patch.apply_to(&mut next.rows[index].meta);
            Some(next)
        }

        Action::DeleteRow { id } => {
            if !state.rows.iter().any(|r| &r.id == id) {
                return None;
            }
            let mut next = state.clone();
            next.rows.retain(|r| &r.id != id);
            Some(next)
        }
    }
}
