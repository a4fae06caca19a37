use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoDescribeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("未対応の出力形式です: {0}（`photo-describe formats` で一覧を表示）")]
    UnknownFormat(String),

    #[error("対話入力エラー: {0}")]
    Dialog(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_describe_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoDescribeError>;
