//! ラスタオーバーレイ読み込み
//!
//! 起動時に1回だけGeoTIFFを取得して地図に重ねる。
//! 失敗はログに出すだけで、再試行も代替レイヤーもない。

use crate::map;
use gloo::net::http::Request;
use leptos::prelude::*;
use plot_tracker_common::{OverlayLoader, OverlayOutcome};
use wasm_bindgen::JsValue;

/// GeoTIFFを取得してgeorasterに変換
async fn fetch_raster(url: &str) -> Result<JsValue, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("取得失敗: {}", e))?;

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }

    let bytes = resp
        .binary()
        .await
        .map_err(|e| format!("本文の読み込みに失敗: {}", e))?;
    log::debug!("GeoTIFF {} bytes を取得", bytes.len());

    map::parse_georaster(&bytes).await
}

/// オーバーレイを読み込む
///
/// 画面破棄（シグナル破棄・地図破棄）後やより新しい読み込みの開始後に
/// 完了した場合は地図に触れずに終了する
pub async fn load_overlay(url: String, loader: RwSignal<OverlayLoader>) {
    let Some(ticket) = loader.try_update(|l| l.begin()) else {
        return;
    };
    log::info!("オーバーレイを読み込み中: {}", url);

    let raster = match fetch_raster(&url).await {
        Ok(raster) => raster,
        Err(e) => {
            loader.try_update(|l| l.complete(ticket, Err(e)));
            return;
        }
    };

    let current = loader
        .try_with_untracked(|l| l.is_current(ticket))
        .unwrap_or(false);
    if !current {
        log::debug!("破棄済みの読み込みのため結果を捨てます");
        return;
    }

    let Some(shown) = map::replace_overlay(&raster) else {
        loader.try_update(|l| l.cancel());
        return;
    };

    if let Some(OverlayOutcome::Applied(bounds)) = loader.try_update(|l| l.complete(ticket, shown)) {
        log::info!(
            "オーバーレイを表示しました: ({:.5}, {:.5}) - ({:.5}, {:.5})",
            bounds.south,
            bounds.west,
            bounds.north,
            bounds.east
        );
    }
}
