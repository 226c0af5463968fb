use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plot-tracker")]
#[command(about = "区画・畝データの集計・検査・出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 区画・畝の件数と品種別の内訳を表示
    Summary {
        /// 状態JSONファイル（省略時は設定の state_file）
        input: Option<PathBuf>,
    },

    /// 状態JSONの整合性を検査
    Check {
        /// 状態JSONファイル（省略時は設定の state_file）
        input: Option<PathBuf>,
    },

    /// Excel/GeoJSONを生成
    Export {
        /// 状態JSONファイル（省略時は設定の state_file）
        input: Option<PathBuf>,

        /// 出力形式 (excel/geojson/both)。省略時は設定の default_format
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ドキュメントタイトル（省略時は設定の title）
        #[arg(short, long)]
        title: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の状態JSONファイルを設定
        #[arg(long)]
        set_state_file: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// `config` の表示判定。フラグなしで実行したら表示する
pub fn config_should_show(show: bool, set_state_file: Option<&Path>) -> bool {
    show || set_state_file.is_none()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    GeoJson,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "geojson" | "json" => Ok(ExportFormat::GeoJson),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, geojson, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::GeoJson => write!(f, "geojson"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
