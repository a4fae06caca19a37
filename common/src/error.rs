//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive Builder が失敗した
    #[error("Archive error: {0}")]
    Archive(String),

    /// Document Builder が失敗した
    #[error("Document error: {0}")]
    Document(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
