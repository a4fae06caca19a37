//! エクスポート対象の型定義
//!
//! - ExportRecord: エンジンに渡す1画像分のレコード（ファイル名 + 有効な説明文）
//! - PhotoEntry: 呼び出し側が保持する画像エントリ（説明文の候補と選択状態）

use serde::{Deserialize, Serialize};

/// エクスポート用レコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub file_name: String,

    /// 現在有効な説明文（未生成なら空文字）
    #[serde(default)]
    pub description: String,
}

impl ExportRecord {
    pub fn new(file_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            description: description.into(),
        }
    }
}

/// 画像エントリ
///
/// AI生成・手動編集・翻訳などで説明文の候補が複数ある場合、
/// `active_index` で選ばれた候補がエクスポートされる。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoEntry {
    pub file_name: String,

    /// 単一の説明文（候補リストを持たない旧形式）
    #[serde(default)]
    pub description: String,

    /// 説明文の候補
    #[serde(default)]
    pub descriptions: Vec<String>,

    /// 選択中の候補インデックス
    #[serde(default)]
    pub active_index: Option<usize>,
}

impl PhotoEntry {
    /// 有効な説明文を返す
    ///
    /// 選択インデックスが範囲外なら `description` にフォールバックする。
    pub fn active_description(&self) -> &str {
        self.active_index
            .and_then(|i| self.descriptions.get(i))
            .map(String::as_str)
            .unwrap_or(self.description.as_str())
    }

    pub fn to_record(&self) -> ExportRecord {
        ExportRecord::new(self.file_name.clone(), self.active_description())
    }
}
