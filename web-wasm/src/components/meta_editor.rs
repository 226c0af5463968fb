//! 畝メタデータ編集コンポーネント
//!
//! 入力のたびに変更したフィールドだけを更新する（検証なし）

use leptos::prelude::*;
use plot_tracker_common::{Row, RowMeta, RowMetaPatch};

/// 編集フィールド
#[derive(Clone, Copy, PartialEq)]
enum Field {
    Species,
    SowingDate,
    PlantingDate,
    Photo,
    Notes,
}

impl Field {
    fn value(&self, meta: &RowMeta) -> String {
        match self {
            Field::Species => meta.species.clone(),
            Field::SowingDate => meta.sowing_date.clone(),
            Field::PlantingDate => meta.planting_date.clone(),
            Field::Photo => meta.photo.clone(),
            Field::Notes => meta.notes.clone(),
        }
    }

    fn patch(&self, value: String) -> RowMetaPatch {
        let mut patch = RowMetaPatch::default();
        match self {
            Field::Species => patch.species = Some(value),
            Field::SowingDate => patch.sowing_date = Some(value),
            Field::PlantingDate => patch.planting_date = Some(value),
            Field::Photo => patch.photo = Some(value),
            Field::Notes => patch.notes = Some(value),
        }
        patch
    }
}

#[component]
pub fn MetaEditor<FP>(row: Signal<Option<Row>>, on_patch: FP) -> impl IntoView
where
    FP: Fn(String, RowMetaPatch) + 'static + Clone + Send + Sync,
{
    let value_of = move |field: Field| {
        move || row.with(|r| r.as_ref().map(|r| field.value(&r.meta)).unwrap_or_default())
    };

    // 選択中の畝に対して1フィールド分のパッチを送る
    let send = move |field: Field, value: String| {
        if let Some(id) = row.with_untracked(|r| r.as_ref().map(|r| r.id.clone())) {
            on_patch(id, field.patch(value));
        }
    };

    let photo_url = move || row.with(|r| r.as_ref().map(|r| r.meta.photo.clone()).unwrap_or_default());

    view! {
        <div class="meta-editor">
            <h3>"畝の情報"</h3>
            <div class="form-group">
                <label for="species">"品種"</label>
                <input
                    type="text"
                    id="species"
                    prop:value=value_of(Field::Species)
                    on:input={
                        let send = send.clone();
                        move |ev| send(Field::Species, event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="sowing-date">"播種日"</label>
                <input
                    type="text"
                    id="sowing-date"
                    placeholder="2026-04-01"
                    prop:value=value_of(Field::SowingDate)
                    on:input={
                        let send = send.clone();
                        move |ev| send(Field::SowingDate, event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="planting-date">"定植日"</label>
                <input
                    type="text"
                    id="planting-date"
                    placeholder="2026-05-10"
                    prop:value=value_of(Field::PlantingDate)
                    on:input={
                        let send = send.clone();
                        move |ev| send(Field::PlantingDate, event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="photo">"写真URL"</label>
                <input
                    type="url"
                    id="photo"
                    prop:value=value_of(Field::Photo)
                    on:input={
                        let send = send.clone();
                        move |ev| send(Field::Photo, event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="notes">"メモ"</label>
                <textarea
                    id="notes"
                    rows="3"
                    prop:value=value_of(Field::Notes)
                    on:input={
                        let send = send.clone();
                        move |ev| send(Field::Notes, event_target_value(&ev))
                    }
                />
            </div>

            <Show when=move || !photo_url().is_empty()>
                <img class="row-photo" src=photo_url alt="畝の写真" />
            </Show>
        </div>
    }
}
