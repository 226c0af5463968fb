//! 状態の永続化
//!
//! 状態全体を1つのJSON文字列として固定キーに保存する。
//! 読み込み時のキー欠落・JSON不正は黙って空状態に戻す。

use crate::error::Result;
use crate::types::PlotState;
use std::cell::RefCell;

/// 状態をJSON文字列に変換
pub fn encode(state: &PlotState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// JSON文字列から状態を復元
pub fn decode(raw: &str) -> Result<PlotState> {
    Ok(serde_json::from_str(raw)?)
}

/// 復元に失敗したら空状態
pub fn decode_or_empty(raw: &str) -> PlotState {
    match decode(raw) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("保存データを読めないため空の状態で開始します: {}", e);
            PlotState::default()
        }
    }
}

/// 保存先の抽象（ブラウザではlocalStorage）
pub trait StateStore {
    /// 保存済み文字列を取得（未保存ならNone）
    fn read(&self) -> Result<Option<String>>;

    /// 文字列を保存
    fn write(&self, blob: &str) -> Result<()>;

    /// 起動時の読み込み。失敗はすべて空状態
    fn load(&self) -> PlotState {
        match self.read() {
            Ok(Some(raw)) => decode_or_empty(&raw),
            Ok(None) => PlotState::default(),
            Err(e) => {
                log::warn!("保存データの取得に失敗: {}", e);
                PlotState::default()
            }
        }
    }

    fn save(&self, state: &PlotState) -> Result<()> {
        let blob = encode(state)?;
        self.write(&blob)
    }
}

/// メモリ上の保存先（テスト・CLI用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, blob: &str) -> Result<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{LatLng, Parcel, ParcelMeta, Row, RowMeta};

    fn sample_state() -> PlotState {
        PlotState {
            parcels: vec![Parcel {
                id: "p1".to_string(),
                coords: vec![
                    LatLng::new(35.681236, 139.767125),
                    LatLng::new(35.6813, 139.7672),
                    LatLng::new(35.0 + 1.0 / 3.0, 139.1),
                ],
                meta: ParcelMeta {
                    name: "区画1".to_string(),
                },
            }],
            rows: vec![Row {
                id: "r1".to_string(),
                coords: vec![LatLng::new(0.1, 0.2), LatLng::new(0.3, 0.4)],
                meta: RowMeta {
                    species: "じゃがいも".to_string(),
                    sowing_date: "2026-04-01".to_string(),
                    planting_date: String::new(),
                    notes: "\"引用\" と改行\nあり".to_string(),
                    photo: "https://example.com/a.jpg".to_string(),
                    parcel_id: Some("p1".to_string()),
                },
            }],
        }
    }

    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn read(&self) -> Result<Option<String>> {
            Err(Error::Storage("disabled".to_string()))
        }

        fn write(&self, _blob: &str) -> Result<()> {
            Err(Error::Storage("disabled".to_string()))
        }
    }

    #[test]
    fn test_encode_decode_identical() {
        let state = sample_state();
        let raw = encode(&state).expect("エンコード失敗");
        let restored = decode(&raw).expect("デコード失敗");
        assert_eq!(restored, state);
    }

    #[test]
    fn test_decode_wire_format() {
        let raw = r#"{
            "parcels": [{"id":"p1","coords":[[0,0],[0,1],[1,1]],"meta":{"name":"畑A"}}],
            "lines": [{"id":"r1","coords":[[0.3,0.3],[0.6,0.6]],
                       "meta":{"species":"","sowingDate":"","plantingDate":"","notes":"","photo":"","parcelId":null}}]
        }"#;
        let state = decode(raw).expect("デコード失敗");
        assert_eq!(state.parcels[0].meta.name, "畑A");
        assert_eq!(state.rows[0].coords[1], LatLng::new(0.6, 0.6));
        assert_eq!(state.rows[0].meta.parcel_id, None);
    }

    #[test]
    fn test_decode_or_empty_malformed() {
        assert_eq!(decode_or_empty("{not json"), PlotState::default());
        assert_eq!(decode_or_empty(""), PlotState::default());
        assert_eq!(decode_or_empty("[1,2,3]"), PlotState::default());
    }

    #[test]
    fn test_decode_or_empty_wrong_shape() {
        // JSONとしては正しいが形が違うもの
        assert_eq!(decode_or_empty(r#"{"parcels": null}"#), PlotState::default());
        assert_eq!(decode_or_empty(r#"{"lines": {"id": "r1"}}"#), PlotState::default());
        assert_eq!(
            decode_or_empty(r#"{"parcels": [{"coords": [[0,0],[0,1],[1,1]]}]}"#),
            PlotState::default()
        );
        assert_eq!(
            decode_or_empty(r#"{"parcels": [{"id": "p1", "coords": [[0,0,0]]}]}"#),
            PlotState::default()
        );
        assert!(MemoryStore::with_blob(r#"{"parcels": null, "lines": []}"#).load().is_empty());
    }

    #[test]
    fn test_memory_store_load_missing_key() {
        let store = MemoryStore::default();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_memory_store_save_then_load() {
        let store = MemoryStore::default();
        store.save(&sample_state()).expect("保存失敗");
        assert!(store.blob().is_some());
        assert_eq!(store.load(), sample_state());
    }

    #[test]
    fn test_load_read_error_falls_back() {
        assert!(BrokenStore.load().is_empty());
        assert!(BrokenStore.save(&sample_state()).is_err());
    }
}
