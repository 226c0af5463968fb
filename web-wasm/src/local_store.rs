//! localStorageへの状態保存

use plot_tracker_common::{Error, Result, StateStore};

/// 固定キー1つに状態全体を保存する
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// 保存済みデータを削除
    pub fn clear(&self) -> Result<()> {
        storage()?
            .remove_item(&self.key)
            .map_err(|e| Error::Storage(format!("削除失敗: {:?}", e)))
    }
}

fn storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| Error::Storage("windowがありません".to_string()))?
        .local_storage()
        .map_err(|e| Error::Storage(format!("{:?}", e)))?
        .ok_or_else(|| Error::Storage("localStorageが使用できません".to_string()))
}

impl StateStore for LocalStore {
    fn read(&self) -> Result<Option<String>> {
        storage()?
            .get_item(&self.key)
            .map_err(|e| Error::Storage(format!("読込失敗: {:?}", e)))
    }

    fn write(&self, blob: &str) -> Result<()> {
        storage()?
            .set_item(&self.key, blob)
            .map_err(|e| Error::Storage(format!("保存失敗: {:?}", e)))
    }
}
