use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("状態ファイルが指定されていません。引数で渡すか `plot-tracker config --set-state-file PATH` で設定してください")]
    MissingStateFile,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("状態ファイルが不正: {0}")]
    InvalidState(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("GeoJSON生成エラー: {0}")]
    GeoJsonGeneration(String),

    #[error("検査でエラーが{0}件見つかりました")]
    CheckFailed(usize),
}

pub type Result<T> = std::result::Result<T, PlotError>;
