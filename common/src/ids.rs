//! エンティティID生成

use uuid::Uuid;

/// 区画・畝の一意ID（UUID v4）
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
