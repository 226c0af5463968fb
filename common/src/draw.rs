//! 描画コントローラ
//!
//! 描画モード中に地図クリック座標を溜め、完了時に区画/畝の下書きを返す。
//! モード・途中の点はどちらも一時状態で保存しない。

use crate::reducer::{Action, MIN_PARCEL_POINTS, MIN_ROW_POINTS};
use crate::types::LatLng;

/// 描画対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Parcel,
    Row,
}

impl DrawKind {
    pub fn min_points(&self) -> usize {
        match self {
            DrawKind::Parcel => MIN_PARCEL_POINTS,
            DrawKind::Row => MIN_ROW_POINTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawKind::Parcel => "parcel",
            DrawKind::Row => "row",
        }
    }
}

/// 確定した描画
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub kind: DrawKind,
    pub coords: Vec<LatLng>,
}

impl Draft {
    pub fn into_action(self, id: String) -> Action {
        match self.kind {
            DrawKind::Parcel => Action::AddParcel { id, coords: self.coords },
            DrawKind::Row => Action::AddRow { id, coords: self.coords },
        }
    }
}

/// 描画モードと途中の点列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawController {
    mode: Option<DrawKind>,
    points: Vec<LatLng>,
}

impl DrawController {
    pub fn mode(&self) -> Option<DrawKind> {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    /// プレビュー用の途中の点列
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// 同じモードならオフ、違うモードなら切り替え。どちらも途中の点は破棄
    pub fn toggle(&mut self, kind: DrawKind) {
        self.mode = if self.mode == Some(kind) { None } else { Some(kind) };
        self.points.clear();
    }

    /// 描画中のみ点を追加
    pub fn push(&mut self, point: LatLng) -> bool {
        if self.mode.is_none() {
            return false;
        }
        self.points.push(point);
        true
    }

    /// 点を破棄（モードは維持）
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// 描画を終了してモードを戻す。点数不足なら黙って破棄
    pub fn finish(&mut self) -> Option<Draft> {
        let kind = self.mode.take()?;
        let coords = std::mem::take(&mut self.points);
        if coords.len() < kind.min_points() {
            return None;
        }
        Some(Draft { kind, coords })
    }
}
