//! Photo Describe Common Library
//!
//! 画像説明文のエクスポートエンジン（CLI と各フロントエンドで共有）

pub mod error;
pub mod escape;
pub mod export;
pub mod sanitize;
pub mod types;

#[cfg(feature = "packaging")]
pub mod archive;
#[cfg(feature = "packaging")]
pub mod ooxml;

pub use error::{Error, Result};
pub use escape::{escape_delimited, to_tei_body, Delimiter};
pub use export::{
    DeliverySink, ExportFormat, ExportOutcome, ExportRequest, ExportSettings, ExportStatus,
    Exporter, FormatOption, MemorySink, PreviousExport, RecordSource, FORMAT_OPTIONS,
};
pub use sanitize::{sanitize_filename, SanitizedFilename};
pub use types::{ExportRecord, PhotoEntry};

#[cfg(feature = "packaging")]
pub use archive::ZipBuilder;
#[cfg(feature = "packaging")]
pub use ooxml::DocxBuilder;
