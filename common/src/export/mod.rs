//! Multi-format export engine.
//!
//! Converts an ordered list of (file name, description) records into one of
//! the formats in [`FORMAT_OPTIONS`] and hands the finished payload to a
//! [`DeliverySink`].

pub mod builder;
pub mod format;
pub mod orchestrator;

mod delimited;
mod docx;
mod docx_table;
mod tei;
mod text;
mod text_zip;

pub use builder::{
    ArchiveBuilder, ArchiveMember, Block, Cell, DeliverySink, DocumentBuilder, MemorySink,
    Paragraph, ParagraphStyle, RecordSource, Row, StyledRun, Table,
};
pub use format::{EncodeContext, ExportFormat, FormatOption, FORMAT_OPTIONS};
pub use orchestrator::{ExportRequest, ExportStatus, Exporter, PreviousExport, DEFAULT_BASE_FILENAME};

/// エンコーダの出力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    pub payload: Vec<u8>,
    pub mime_type: &'static str,
    pub file_extension: &'static str,
}

/// Delivery Sink に渡す完成品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub payload: Vec<u8>,
    pub mime_type: &'static str,
    pub filename: String,
}

/// エンコーダのオプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSettings {
    /// XML 出力で説明文の `&` `<` `>` をエスケープする
    pub xml_escape_markup: bool,
}

#[cfg(test)]
pub(crate) mod testing {
    //! エンコーダ単体テスト用のフェイク Builder

    use super::builder::{ArchiveBuilder, ArchiveMember, Block, DocumentBuilder};
    use crate::error::{Error, Result};
    use std::cell::RefCell;

    /// 受け取ったブロックを記録し、ブロック数をペイロードとして返す
    #[derive(Default)]
    pub struct RecordingDocumentBuilder {
        pub blocks: RefCell<Vec<Block>>,
    }

    impl DocumentBuilder for RecordingDocumentBuilder {
        fn build_document(&self, blocks: &[Block]) -> Result<Vec<u8>> {
            *self.blocks.borrow_mut() = blocks.to_vec();
            Ok(format!("doc:{}", blocks.len()).into_bytes())
        }
    }

    /// 受け取ったメンバーを記録し、名前を改行区切りで返す
    #[derive(Default)]
    pub struct RecordingArchiveBuilder {
        pub members: RefCell<Vec<ArchiveMember>>,
    }

    impl ArchiveBuilder for RecordingArchiveBuilder {
        fn build_archive(&self, members: &[ArchiveMember]) -> Result<Vec<u8>> {
            *self.members.borrow_mut() = members.to_vec();
            let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
            Ok(names.join("\n").into_bytes())
        }
    }

    pub struct FailingDocumentBuilder;

    impl DocumentBuilder for FailingDocumentBuilder {
        fn build_document(&self, _blocks: &[Block]) -> Result<Vec<u8>> {
            Err(Error::Document("builder rejected input".to_string()))
        }
    }
}
