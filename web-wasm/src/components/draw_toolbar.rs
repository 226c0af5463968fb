//! 描画ツールバーコンポーネント

use leptos::prelude::*;
use plot_tracker_common::DrawKind;

#[component]
pub fn DrawToolbar<FT, FF, FC>(
    mode: Signal<Option<DrawKind>>,
    point_count: Signal<usize>,
    on_toggle: FT,
    on_finish: FF,
    on_clear: FC,
) -> impl IntoView
where
    FT: Fn(DrawKind) + 'static + Clone,
    FF: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    let is_active = move || mode.get().is_some();
    let enough_points = move || {
        mode.get()
            .map(|kind| point_count.get() >= kind.min_points())
            .unwrap_or(false)
    };

    view! {
        <div class="draw-toolbar">
            <button
                class="btn"
                class:btn-primary=move || mode.get() == Some(DrawKind::Parcel)
                class:btn-secondary=move || mode.get() != Some(DrawKind::Parcel)
                on:click={
                    let on_toggle = on_toggle.clone();
                    move |_| on_toggle(DrawKind::Parcel)
                }
            >
                {move || if mode.get() == Some(DrawKind::Parcel) { "区画描画を終了" } else { "区画を描く" }}
            </button>

            <button
                class="btn"
                class:btn-primary=move || mode.get() == Some(DrawKind::Row)
                class:btn-secondary=move || mode.get() != Some(DrawKind::Row)
                on:click={
                    let on_toggle = on_toggle.clone();
                    move |_| on_toggle(DrawKind::Row)
                }
            >
                {move || if mode.get() == Some(DrawKind::Row) { "畝描画を終了" } else { "畝を描く" }}
            </button>

            <button
                class="btn btn-primary"
                disabled=move || !is_active()
                on:click={
                    let on_finish = on_finish.clone();
                    move |_| on_finish(())
                }
            >
                "確定"
            </button>

            <button
                class="btn btn-tertiary"
                disabled=move || !is_active() || point_count.get() == 0
                on:click={
                    let on_clear = on_clear.clone();
                    move |_| on_clear(())
                }
            >
                "クリア"
            </button>

            <Show when=is_active>
                <span class="draw-hint" class:ready=enough_points>
                    {move || {
                        let need = mode.get().map(|k| k.min_points()).unwrap_or(0);
                        format!("{}点 (最低{}点)", point_count.get(), need)
                    }}
                </span>
            </Show>
        </div>
    }
}
