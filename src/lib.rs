//! Plot Tracker CLI ライブラリ
//!
//! ブラウザのlocalStorageから書き出した状態JSONを集計・検査・出力する

pub mod cli;
pub mod config;
pub mod error;
pub mod state_file;
pub mod summary;
pub mod check;
pub mod export;
