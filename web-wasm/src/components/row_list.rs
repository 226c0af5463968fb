//! 畝一覧コンポーネント

use leptos::prelude::*;
use plot_tracker_common::{Parcel, Row};

#[component]
pub fn RowList<FS, FD>(
    rows: Signal<Vec<Row>>,
    parcels: Signal<Vec<Parcel>>,
    selected_id: Signal<Option<String>>,
    on_select: FS,
    on_delete: FD,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="row-list">
            <h3>"畝"</h3>
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=|| view! { <p class="text-muted">"畝はまだありません"</p> }
            >
                <ul>
                    <For
                        each=move || rows.get()
                        // 一覧に出す項目が変わったときだけ描き直す
                        key=|row| (row.id.clone(), row.meta.species.clone())
                        children={
                            let on_select = on_select.clone();
                            let on_delete = on_delete.clone();
                            move |row| {
                                let parcel_name = row.meta.parcel_id.as_deref().and_then(|pid| {
                                    parcels.with_untracked(|p| {
                                        p.iter().find(|parcel| parcel.id == pid).map(|parcel| parcel.meta.name.clone())
                                    })
                                });
                                view! {
                                    <RowItem
                                        row=row
                                        parcel_name=parcel_name
                                        selected_id=selected_id
                                        on_select=on_select.clone()
                                        on_delete=on_delete.clone()
                                    />
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn RowItem<FS, FD>(
    row: Row,
    parcel_name: Option<String>,
    selected_id: Signal<Option<String>>,
    on_select: FS,
    on_delete: FD,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
{
    let is_selected = {
        let row_id = row.id.clone();
        move || selected_id.get().as_deref() == Some(row_id.as_str())
    };

    let species = if row.meta.species.is_empty() {
        "品種未設定".to_string()
    } else {
        row.meta.species.clone()
    };
    let parcel_label = parcel_name.unwrap_or_else(|| "区画外".to_string());

    view! {
        <li
            class="row-item"
            class:selected=is_selected
            on:click={
                let on_select = on_select.clone();
                let row_id = row.id.clone();
                move |_| on_select(row_id.clone())
            }
        >
            <div class="row-info">
                <span class="species-badge">{species}</span>
                <span class="text-muted">{parcel_label}</span>
                <span class="text-muted">{format!("{}点", row.coords.len())}</span>
            </div>
            <button
                class="btn btn-small btn-tertiary"
                on:click={
                    let on_delete = on_delete.clone();
                    let row_id = row.id.clone();
                    move |ev| {
                        ev.stop_propagation();
                        on_delete(row_id.clone())
                    }
                }
            >
                "削除"
            </button>
        </li>
    }
}
