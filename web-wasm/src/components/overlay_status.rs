//! オーバーレイ状態表示コンポーネント

use leptos::prelude::*;
use plot_tracker_common::OverlayPhase;

#[component]
pub fn OverlayStatus(status: Signal<(OverlayPhase, bool)>) -> impl IntoView {
    let text = move || match status.get() {
        (_, true) => "航空写真: 読み込み中...",
        (OverlayPhase::Present { .. }, false) => "航空写真: 表示中",
        (OverlayPhase::Absent, false) => "航空写真: なし",
    };

    view! {
        <div class="overlay-status">
            <span class=move || if status.get().1 { "status-dot loading" } else { "status-dot" } />
            {text}
        </div>
    }
}
