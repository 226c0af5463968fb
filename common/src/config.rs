//! 地図・保存先の設定

use serde::{Deserialize, Serialize};

/// 状態を保存するlocalStorageキー
pub const STORAGE_KEY: &str = "farm-plots-v1";

/// オーバーレイ用GeoTIFFのURL
pub const OVERLAY_URL: &str = "https://example.com/farm/orthophoto.tif";

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Web画面の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    pub storage_key: String,
    /// Noneならオーバーレイを読み込まない
    pub overlay_url: Option<String>,
    pub tile_url: String,
    pub tile_attribution: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub max_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            overlay_url: Some(OVERLAY_URL.to_string()),
            tile_url: TILE_URL.to_string(),
            tile_attribution: TILE_ATTRIBUTION.to_string(),
            center: [35.681, 139.767],
            zoom: 17,
            max_zoom: 22,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert_eq!(config.storage_key, "farm-plots-v1");
        assert!(config.overlay_url.is_some());
        assert!(config.tile_url.contains("{z}/{x}/{y}"));
    }

    #[test]
    fn test_config_serialize_for_js() {
        let json = serde_json::to_string(&MapConfig::default()).expect("シリアライズ失敗");
        assert!(json.contains("\"tileUrl\""));
        assert!(json.contains("\"maxZoom\":22"));
    }

    #[test]
    fn test_config_partial_json() {
        let config: MapConfig = serde_json::from_str(r#"{"zoom": 12, "overlayUrl": null}"#).expect("デシリアライズ失敗");
        assert_eq!(config.zoom, 12);
        assert_eq!(config.overlay_url, None);
        assert_eq!(config.storage_key, STORAGE_KEY);
    }
}
