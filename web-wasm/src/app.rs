//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::overlay::load_overlay;
use crate::components::{
    header::Header,
    draw_toolbar::DrawToolbar,
    parcel_list::ParcelList,
    row_list::RowList,
    meta_editor::MetaEditor,
    overlay_status::OverlayStatus,
};
use crate::local_store::LocalStore;
use crate::map;
use plot_tracker_common::{DrawKind, MapConfig, OverlayLoader, RowMetaPatch, Session};

const MAP_CONTAINER_ID: &str = "plot-map";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = MapConfig::default();

    // アプリケーション状態
    let session = RwSignal::new(Session::new(LocalStore::new(config.storage_key.clone())));
    let overlay = RwSignal::new(OverlayLoader::default());
    let (map_ready, set_map_ready) = signal(false);

    // 画面表示用の派生シグナル
    let parcels = Signal::derive(move || session.with(|s| s.state().parcels.clone()));
    let rows = Signal::derive(move || session.with(|s| s.state().rows.clone()));
    let selected_id = Signal::derive(move || session.with(|s| s.selection().map(str::to_string)));
    let selected_row = Signal::derive(move || session.with(|s| s.selected_row().cloned()));
    let draw_mode = Signal::derive(move || session.with(|s| s.draw().mode()));
    let point_count = Signal::derive(move || session.with(|s| s.draw().points().len()));

    // 地図の作成とオーバーレイ読み込み（1回のみ）
    let mount_config = config.clone();
    Effect::new(move |_| {
        let result = map::mount(
            MAP_CONTAINER_ID,
            &mount_config,
            move |point| {
                session.update(|s| {
                    s.add_point(point);
                });
            },
            move |row_id: String, point| {
                session.update(|s| s.click_row(&row_id, point));
            },
        );
        match result {
            Ok(()) => {
                set_map_ready.set(true);
                if let Some(url) = mount_config.overlay_url.clone() {
                    spawn_local(load_overlay(url, overlay));
                }
            }
            Err(e) => log::error!("{}", e),
        }
    });

    // 状態が変わるたびに地図を描き直す
    Effect::new(move |_| {
        if !map_ready.get() {
            return;
        }
        session.with(|s| {
            map::render_plots(s.state(), s.selection());
            map::render_preview(s.draw().points(), s.draw().mode());
        });
    });

    on_cleanup(move || {
        overlay.try_update(|l| l.cancel());
        map::unmount();
    });

    // 描画モード切替
    let on_toggle = move |kind: DrawKind| {
        session.update(|s| s.toggle_draw(kind));
    };

    // 描画確定
    let on_finish = move |_: ()| {
        session.update(|s| {
            if let Some(id) = s.finish_draw() {
                log::info!("作成しました: {}", id);
            }
        });
    };

    // 描画中の点をクリア
    let on_clear = move |_: ()| {
        session.update(|s| s.clear_points());
    };

    // 畝選択
    let on_select = move |id: String| {
        session.update(|s| s.select_row(Some(id.as_str())));
    };

    // 畝削除
    let on_delete = move |id: String| {
        session.update(|s| {
            s.delete_row(&id);
        });
    };

    // メタデータ更新
    let on_patch = move |id: String, patch: RowMetaPatch| {
        session.update(|s| {
            s.patch_row(&id, patch);
        });
    };

    let parcel_count = Signal::derive(move || parcels.with(|p| p.len()));
    let row_count = Signal::derive(move || rows.with(|r| r.len()));
    let overlay_phase = Signal::derive(move || overlay.with(|l| (l.phase(), l.is_loading())));

    view! {
        <div class="container">
            <Header parcel_count=parcel_count row_count=row_count />

            <DrawToolbar
                mode=draw_mode
                point_count=point_count
                on_toggle=on_toggle
                on_finish=on_finish
                on_clear=on_clear
            />

            <div class="workspace">
                <div id=MAP_CONTAINER_ID class="map-view"></div>

                <aside class="side-panel">
                    <OverlayStatus status=overlay_phase />

                    <ParcelList parcels=parcels rows=rows />

                    <RowList
                        rows=rows
                        parcels=parcels
                        selected_id=selected_id
                        on_select=on_select
                        on_delete=on_delete
                    />

                    <Show
                        when=move || selected_row.with(|r| r.is_some())
                        fallback=|| view! { <p class="text-muted">"畝を選択するとメタデータを編集できます"</p> }
                    >
                        <MetaEditor row=selected_row on_patch=on_patch />
                    </Show>
                </aside>
            </div>
        </div>
    }
}
