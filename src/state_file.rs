//! 状態ファイルの読み込み
//!
//! ブラウザ側とは異なり、壊れたファイルは空状態にせずエラーにする。

use crate::error::{PlotError, Result};
use plot_tracker_common::{decode, PlotState};
use std::path::Path;

/// 状態JSONを読み込む
///
/// devtoolsで `localStorage.getItem(...)` をコピーした場合の
/// 文字列として二重にエンコードされたJSONも受け付ける。
pub fn load_state(path: &Path) -> Result<PlotState> {
    if !path.exists() {
        return Err(PlotError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_state(&content).map_err(|e| PlotError::InvalidState(format!("{}: {}", path.display(), e)))
}

pub fn parse_state(content: &str) -> plot_tracker_common::Result<PlotState> {
    let trimmed = content.trim();
    if trimmed.starts_with('"') {
        let inner: String = serde_json::from_str(trimmed)?;
        return decode(&inner);
    }
    decode(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let state = parse_state(r#"{"parcels":[],"lines":[]}"#).expect("解析失敗");
        assert!(state.is_empty());
    }

    #[test]
    fn test_parse_double_encoded_json() {
        let raw = r#""{\"parcels\":[{\"id\":\"p1\",\"coords\":[[0,0],[0,1],[1,1]],\"meta\":{\"name\":\"区画1\"}}],\"lines\":[]}""#;
        let state = parse_state(raw).expect("解析失敗");
        assert_eq!(state.parcels.len(), 1);
        assert_eq!(state.parcels[0].meta.name, "区画1");
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_state("{").is_err());
        assert!(parse_state("\"not json inside\"").is_err());
    }
}
