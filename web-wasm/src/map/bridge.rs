//! JavaScript Bridge バインディング
//!
//! 地図描画（Leaflet）とGeoTIFF解析（georaster）はJavaScript側に委譲する。
//! データはJSON文字列で受け渡す。

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/map-bridge.js")]
extern "C" {
    /// Leaflet地図とレイヤー群をまとめたJSオブジェクト
    pub type PlotMap;

    /// 地図を作成
    ///
    /// # Arguments
    /// * `container_id` - 地図を描画する要素のID
    /// * `config_json` - MapConfigのJSON文字列
    /// * `on_click` - 地図クリック時 (lat, lng)
    /// * `on_row_click` - 畝クリック時 (畝ID, lat, lng)
    #[wasm_bindgen(js_name = "createMap", catch)]
    pub fn create_map_js(
        container_id: &str,
        config_json: &str,
        on_click: &Closure<dyn FnMut(f64, f64)>,
        on_row_click: &Closure<dyn FnMut(String, f64, f64)>,
    ) -> Result<PlotMap, JsValue>;

    /// 区画・畝レイヤーを描き直す
    #[wasm_bindgen(js_name = "renderPlots")]
    pub fn render_plots_js(
        map: &PlotMap,
        parcels_json: &str,
        rows_json: &str,
        selected_id: Option<String>,
    );

    /// 描画中の点列を破線で表示（kindが空なら消す）
    #[wasm_bindgen(js_name = "renderPreview")]
    pub fn render_preview_js(map: &PlotMap, points_json: &str, kind: &str);

    /// GeoTIFFのバイト列をgeorasterオブジェクトに変換
    #[wasm_bindgen(js_name = "parseGeoraster", catch)]
    pub async fn parse_georaster_js(bytes: js_sys::Uint8Array) -> Result<JsValue, JsValue>;

    /// 既存のオーバーレイを外して新しいレイヤーを追加し、表示範囲を合わせる
    ///
    /// # Returns
    /// レイヤー範囲のJSON文字列（south/west/north/east）
    #[wasm_bindgen(js_name = "replaceOverlay", catch)]
    pub fn replace_overlay_js(map: &PlotMap, raster: &JsValue) -> Result<JsValue, JsValue>;

    /// 地図を破棄
    #[wasm_bindgen(js_name = "destroyMap")]
    pub fn destroy_map_js(map: &PlotMap);
}
