//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(parcel_count: Signal<usize>, row_count: Signal<usize>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Plot Tracker - 区画・畝管理"</h1>
            <p class="header-counts">
                {move || format!("区画 {} / 畝 {}", parcel_count.get(), row_count.get())}
            </p>
        </header>
    }
}
