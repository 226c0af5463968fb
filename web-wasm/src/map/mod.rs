//! 地図ハンドルの管理
//!
//! 地図はページに1つだけ。破棄後の呼び出しは何もしない。

mod bridge;

use bridge::{
    create_map_js, destroy_map_js, parse_georaster_js, render_plots_js, render_preview_js,
    replace_overlay_js, PlotMap,
};
use plot_tracker_common::{Bounds, DrawKind, LatLng, MapConfig, PlotState};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

struct MountedMap {
    map: PlotMap,
    _on_click: Closure<dyn FnMut(f64, f64)>,
    _on_row_click: Closure<dyn FnMut(String, f64, f64)>,
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedMap>> = const { RefCell::new(None) };
}

/// 地図を作成してクリックハンドラを登録
pub fn mount<FC, FR>(
    container_id: &str,
    config: &MapConfig,
    mut on_click: FC,
    mut on_row_click: FR,
) -> Result<(), String>
where
    FC: FnMut(LatLng) + 'static,
    FR: FnMut(String, LatLng) + 'static,
{
    let config_json = serde_json::to_string(config)
        .map_err(|e| format!("設定のシリアライズに失敗: {}", e))?;

    let on_click = Closure::wrap(Box::new(move |lat: f64, lng: f64| {
        on_click(LatLng::new(lat, lng));
    }) as Box<dyn FnMut(f64, f64)>);
    let on_row_click = Closure::wrap(Box::new(move |id: String, lat: f64, lng: f64| {
        on_row_click(id, LatLng::new(lat, lng));
    }) as Box<dyn FnMut(String, f64, f64)>);

    let map = create_map_js(container_id, &config_json, &on_click, &on_row_click)
        .map_err(|e| format!("地図の作成に失敗: {:?}", e))?;

    MOUNTED.with(|m| {
        if let Some(old) = m.borrow_mut().replace(MountedMap {
            map,
            _on_click: on_click,
            _on_row_click: on_row_click,
        }) {
            destroy_map_js(&old.map);
        }
    });
    Ok(())
}

/// 地図を破棄。以後の描画・オーバーレイ追加は無視される
pub fn unmount() {
    let old = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(old) = old {
        destroy_map_js(&old.map);
        log::debug!("地図を破棄しました");
    }
}

fn with_map<R>(f: impl FnOnce(&PlotMap) -> R) -> Option<R> {
    MOUNTED.with(|m| m.borrow().as_ref().map(|mounted| f(&mounted.map)))
}

pub fn render_plots(state: &PlotState, selected: Option<&str>) {
    let parcels_json = serde_json::to_string(&state.parcels);
    let rows_json = serde_json::to_string(&state.rows);
    let (Ok(parcels_json), Ok(rows_json)) = (parcels_json, rows_json) else {
        log::error!("描画データのシリアライズに失敗");
        return;
    };
    with_map(|map| render_plots_js(map, &parcels_json, &rows_json, selected.map(str::to_string)));
}

pub fn render_preview(points: &[LatLng], kind: Option<DrawKind>) {
    let points_json = match serde_json::to_string(points) {
        Ok(json) => json,
        Err(e) => {
            log::error!("プレビューのシリアライズに失敗: {}", e);
            return;
        }
    };
    let kind = kind.map(|k| k.as_str()).unwrap_or("");
    with_map(|map| render_preview_js(map, &points_json, kind));
}

/// GeoTIFFのバイト列を解析
pub async fn parse_georaster(bytes: &[u8]) -> Result<JsValue, String> {
    let array = js_sys::Uint8Array::from(bytes);
    parse_georaster_js(array)
        .await
        .map_err(|e| format!("GeoTIFFの解析に失敗: {:?}", e))
}

/// オーバーレイを差し替える。地図が破棄済みならNone
pub fn replace_overlay(raster: &JsValue) -> Option<Result<Bounds, String>> {
    with_map(|map| {
        let value = replace_overlay_js(map, raster)
            .map_err(|e| format!("レイヤー追加に失敗: {:?}", e))?;
        let json = value
            .as_string()
            .ok_or_else(|| "レイヤー範囲を文字列に変換できません".to_string())?;
        serde_json::from_str::<Bounds>(&json).map_err(|e| format!("レイヤー範囲が不正: {}", e))
    })
}
