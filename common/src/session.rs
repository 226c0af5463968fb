//! 画面の状態コンテナ
//!
//! 保存対象の `PlotState` に加えて、選択中の畝と描画コントローラを持つ。
//! 受理された更新ごとに保存先へ書き戻す。

use crate::draw::{DrawController, DrawKind};
use crate::ids::new_id;
use crate::reducer::{reduce, Action};
use crate::store::StateStore;
use crate::types::{LatLng, PlotState, Row, RowMetaPatch};

pub struct Session<S: StateStore> {
    state: PlotState,
    selection: Option<String>,
    draw: DrawController,
    store: S,
}

impl<S: StateStore> Session<S> {
    /// 保存先から状態を読み込んで開始
    pub fn new(store: S) -> Self {
        let state = store.load();
        log::info!(
            "区画{}件・畝{}件を読み込みました",
            state.parcels.len(),
            state.rows.len()
        );
        Self {
            state,
            selection: None,
            draw: DrawController::default(),
            store,
        }
    }

    pub fn state(&self) -> &PlotState {
        &self.state
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.selection.as_deref().and_then(|id| self.state.row(id))
    }

    pub fn draw(&self) -> &DrawController {
        &self.draw
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// アクションを適用し、受理されたら保存
    pub fn dispatch(&mut self, action: Action) -> bool {
        let Some(next) = reduce(&self.state, &action) else {
            log::debug!("アクションは適用されませんでした: {:?}", action);
            return false;
        };
        self.state = next;
        if let Err(e) = self.store.save(&self.state) {
            log::warn!("状態の保存に失敗: {}", e);
        }
        true
    }

    pub fn toggle_draw(&mut self, kind: DrawKind) {
        self.draw.toggle(kind);
    }

    pub fn add_point(&mut self, point: LatLng) -> bool {
        self.draw.push(point)
    }

    pub fn clear_points(&mut self) {
        self.draw.clear();
    }

    /// 描画を確定。作成したエンティティのIDを返す
    pub fn finish_draw(&mut self) -> Option<String> {
        let draft = self.draw.finish()?;
        let id = new_id();
        if self.dispatch(draft.into_action(id.clone())) {
            Some(id)
        } else {
            None
        }
    }

    /// 存在する畝のみ選択できる
    pub fn select_row(&mut self, id: Option<&str>) {
        self.selection = match id {
            Some(id) if self.state.row(id).is_some() => Some(id.to_string()),
            _ => None,
        };
    }

    /// 地図上の畝クリック。描画中は点の追加として扱い、選択は変えない
    pub fn click_row(&mut self, id: &str, point: LatLng) {
        if self.draw.is_active() {
            self.add_point(point);
        } else {
            self.select_row(Some(id));
        }
    }

    pub fn patch_row(&mut self, id: &str, patch: RowMetaPatch) -> bool {
        self.dispatch(Action::PatchRowMeta {
            id: id.to_string(),
            patch,
        })
    }

    pub fn patch_selected(&mut self, patch: RowMetaPatch) -> bool {
        match self.selection.clone() {
            Some(id) => self.patch_row(&id, patch),
            None => false,
        }
    }

    /// 畝を削除。選択中の畝なら選択も解除
    pub fn delete_row(&mut self, id: &str) -> bool {
        let deleted = self.dispatch(Action::DeleteRow { id: id.to_string() });
        if deleted && self.selection.as_deref() == Some(id) {
            self.selection = None;
        }
        deleted
    }
}
