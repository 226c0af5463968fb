//! 区画一覧コンポーネント（閲覧のみ）

use leptos::prelude::*;
use plot_tracker_common::{Parcel, Row};

#[component]
pub fn ParcelList(parcels: Signal<Vec<Parcel>>, rows: Signal<Vec<Row>>) -> impl IntoView {
    view! {
        <section class="parcel-list">
            <h3>"区画"</h3>
            <Show
                when=move || parcels.with(|p| !p.is_empty())
                fallback=|| view! { <p class="text-muted">"区画はまだありません"</p> }
            >
                <ul>
                    <For
                        each=move || parcels.get()
                        key=|parcel| parcel.id.clone()
                        children=move |parcel| {
                            let parcel_id = parcel.id.clone();
                            let row_count = move || {
                                rows.with(|r| {
                                    r.iter()
                                        .filter(|row| row.meta.parcel_id.as_deref() == Some(parcel_id.as_str()))
                                        .count()
                                })
                            };
                            view! {
                                <li class="parcel-item">
                                    <span class="parcel-name">{parcel.meta.name.clone()}</span>
                                    <span class="text-muted">
                                        {format!("{}頂点", parcel.coords.len())}
                                        " / "
                                        {move || format!("畝{}本", row_count())}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
