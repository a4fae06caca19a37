//! エクスポートのオーケストレーション
//!
//! 形式IDからエンコーダを選び、生成したペイロードを Delivery Sink に1回だけ渡す。
//! 直前に使った形式とファイル名を覚えておき、次回ダイアログの初期値に使う。

use super::builder::{ArchiveBuilder, DeliverySink, DocumentBuilder, RecordSource};
use super::format::{EncodeContext, ExportFormat, FormatOption, FORMAT_OPTIONS};
use super::{ExportOutcome, ExportSettings};
use crate::error::Result;
use crate::sanitize::sanitize_filename;

/// ベースファイル名が空のときのフォールバック
pub const DEFAULT_BASE_FILENAME: &str = "image-descriptions";

/// エクスポート要求
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    pub format_id: String,
    pub base_filename: Option<String>,
}

impl ExportRequest {
    pub fn new(format_id: impl Into<String>, base_filename: Option<String>) -> Self {
        Self {
            format_id: format_id.into(),
            base_filename,
        }
    }
}

/// 直前のエクスポート設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousExport {
    pub format_id: String,
    pub base_filename: String,
}

/// エクスポート結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Delivered { filename: String },
    /// 未知の形式IDだったため何もしなかった
    UnknownFormat,
}

pub struct Exporter {
    document_builder: Box<dyn DocumentBuilder>,
    archive_builder: Box<dyn ArchiveBuilder>,
    settings: ExportSettings,
    previous: Option<PreviousExport>,
}

impl Exporter {
    pub fn new(
        document_builder: Box<dyn DocumentBuilder>,
        archive_builder: Box<dyn ArchiveBuilder>,
    ) -> Self {
        Self {
            document_builder,
            archive_builder,
            settings: ExportSettings::default(),
            previous: None,
        }
    }

    /// 標準の docx / zip Builder で初期化
    #[cfg(feature = "packaging")]
    pub fn with_default_builders() -> Self {
        Self::new(
            Box::new(crate::ooxml::DocxBuilder::new()),
            Box::new(crate::archive::ZipBuilder::new()),
        )
    }

    pub fn with_settings(mut self, settings: ExportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 直前に成功したエクスポートの形式とファイル名
    pub fn previous(&self) -> Option<&PreviousExport> {
        self.previous.as_ref()
    }

    /// 選択可能な形式の一覧（表示順）
    pub fn formats(&self) -> &'static [FormatOption] {
        FORMAT_OPTIONS
    }

    /// レコードを指定形式でエクスポートする
    ///
    /// 未知の形式IDはエラーにせず `ExportStatus::UnknownFormat` を返す。
    /// Builder の失敗はそのまま返し、その場合 Sink は呼ばれない。
    pub fn export<S, K>(
        &mut self,
        source: &S,
        request: &ExportRequest,
        sink: &mut K,
    ) -> Result<ExportStatus>
    where
        S: RecordSource + ?Sized,
        K: DeliverySink + ?Sized,
    {
        let base = sanitize_filename(request.base_filename.as_deref(), DEFAULT_BASE_FILENAME);

        let Some(format) = ExportFormat::from_id(&request.format_id) else {
            tracing::debug!(format_id = %request.format_id, "unknown export format, ignoring");
            return Ok(ExportStatus::UnknownFormat);
        };

        let records = source.records();
        let ctx = EncodeContext {
            document: self.document_builder.as_ref(),
            archive: self.archive_builder.as_ref(),
            settings: &self.settings,
        };
        let encoded = format.encode(&records, &ctx)?;

        let filename = format!("{}.{}", base, encoded.file_extension);
        let size = encoded.payload.len();
        sink.deliver(ExportOutcome {
            payload: encoded.payload,
            mime_type: encoded.mime_type,
            filename: filename.clone(),
        })?;

        tracing::info!(
            format = %format,
            records = records.len(),
            bytes = size,
            filename = %filename,
            "export delivered"
        );

        self.previous = Some(PreviousExport {
            format_id: format.id().to_string(),
            base_filename: base.into_string(),
        });

        Ok(ExportStatus::Delivered { filename })
    }
}
