use crate::cli::ExportFormat;
use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 引数省略時に読む状態ファイル
    pub state_file: Option<PathBuf>,
    pub default_format: String,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PlotError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("plot-tracker").join("config.json"))
    }

    pub fn default_config() -> Self {
        Self {
            state_file: None,
            default_format: "both".into(),
            title: "圃場台帳".into(),
        }
    }

    /// 引数 > 設定ファイル の順で状態ファイルを決める
    pub fn resolve_state_file(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.state_file.clone())
            .ok_or(PlotError::MissingStateFile)
    }

    pub fn export_format(&self) -> ExportFormat {
        self.default_format.parse().unwrap_or_default()
    }

    pub fn set_state_file(&mut self, path: PathBuf) -> Result<()> {
        self.state_file = Some(path);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_argument() {
        let config = Config {
            state_file: Some(PathBuf::from("saved.json")),
            ..Config::default_config()
        };
        let path = config.resolve_state_file(Some(PathBuf::from("arg.json"))).expect("解決失敗");
        assert_eq!(path, PathBuf::from("arg.json"));

        let path = config.resolve_state_file(None).expect("解決失敗");
        assert_eq!(path, PathBuf::from("saved.json"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"state_file": "plots.json"}"#).expect("デシリアライズ失敗");
        assert_eq!(config.state_file, Some(PathBuf::from("plots.json")));
        assert_eq!(config.title, "圃場台帳");
        assert_eq!(config.default_format, "both");
        assert!(matches!(config.export_format(), ExportFormat::Both));
    }

    #[test]
    fn test_resolve_missing() {
        let config = Config::default_config();
        assert!(matches!(config.resolve_state_file(None), Err(PlotError::MissingStateFile)));
    }

    #[test]
    fn test_export_format_fallback() {
        let mut config = Config::default_config();
        config.default_format = "geojson".into();
        assert!(matches!(config.export_format(), ExportFormat::GeoJson));

        config.default_format = "pdf".into();
        assert!(matches!(config.export_format(), ExportFormat::Both));
    }
}
