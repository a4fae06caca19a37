//! エクスポート対象の読み込み
//!
//! - JSONファイル: `PhotoEntry`（または `{fileName, description}`）の配列
//! - フォルダ: 画像をスキャンし、同名の `.txt` を説明文として読む

use crate::error::{PhotoDescribeError, Result};
use crate::scanner;
use photo_describe_common::PhotoEntry;
use std::path::Path;

/// 入力パスからエントリを読み込む
pub fn load_entries(input: &Path) -> Result<Vec<PhotoEntry>> {
    if input.is_dir() {
        return scanner::scan_folder(input);
    }
    if !input.exists() {
        return Err(PhotoDescribeError::FileNotFound(input.display().to_string()));
    }
    load_json(input)
}

pub fn load_json(path: &Path) -> Result<Vec<PhotoEntry>> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<PhotoEntry> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded entries");
    Ok(entries)
}
