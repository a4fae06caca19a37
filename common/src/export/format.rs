//! 出力形式のカタログとディスパッチ

use super::builder::{ArchiveBuilder, DocumentBuilder};
use super::{delimited, docx, docx_table, tei, text, text_zip};
use super::{EncodedPayload, ExportSettings};
use crate::error::Result;
use crate::escape::Delimiter;
use crate::types::ExportRecord;
use std::fmt;

pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TXT: &str = "text/plain;charset=UTF-8";
pub const MIME_CSV: &str = "text/csv;charset=UTF-8";
pub const MIME_TAB: &str = "text/tab-separated-values;charset=UTF-8";
pub const MIME_XML: &str = "application/xml;charset=UTF-8";
pub const MIME_ZIP: &str = "application/zip";

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Word文書（ファイル名/説明文の2列表）
    DocxTable,
    /// Word文書（1レコード1段落）
    Docx,
    Txt,
    /// 1レコード1テキストファイルのZIP
    TxtZip,
    /// TEI 風 XML
    Xml,
    Csv,
    Tab,
}

/// 出力形式の表示情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOption {
    pub format: ExportFormat,
    pub id: &'static str,
    pub label: &'static str,
    pub file_extension: &'static str,
    pub mime_type: &'static str,
}

pub const FORMAT_OPTIONS: &[FormatOption] = &[
    FormatOption {
        format: ExportFormat::DocxTable,
        id: "docx-table",
        label: "Word document (table)",
        file_extension: "docx",
        mime_type: MIME_DOCX,
    },
    FormatOption {
        format: ExportFormat::Docx,
        id: "docx",
        label: "Word document",
        file_extension: "docx",
        mime_type: MIME_DOCX,
    },
    FormatOption {
        format: ExportFormat::Txt,
        id: "txt",
        label: "Plain text",
        file_extension: "txt",
        mime_type: MIME_TXT,
    },
    FormatOption {
        format: ExportFormat::TxtZip,
        id: "txt-zip",
        label: "Text files (ZIP)",
        file_extension: "zip",
        mime_type: MIME_ZIP,
    },
    FormatOption {
        format: ExportFormat::Xml,
        id: "xml",
        label: "TEI XML",
        file_extension: "xml",
        mime_type: MIME_XML,
    },
    FormatOption {
        format: ExportFormat::Csv,
        id: "csv",
        label: "CSV (comma-separated)",
        file_extension: "csv",
        mime_type: MIME_CSV,
    },
    FormatOption {
        format: ExportFormat::Tab,
        id: "tab",
        label: "Tab-separated",
        file_extension: "tab",
        mime_type: MIME_TAB,
    },
];

impl FormatOption {
    /// IDから出力形式を引く（未知のIDは None）
    pub fn find(id: &str) -> Option<&'static FormatOption> {
        FORMAT_OPTIONS.iter().find(|o| o.id == id)
    }
}

/// エンコーダに渡す依存関係
pub struct EncodeContext<'a> {
    pub document: &'a dyn DocumentBuilder,
    pub archive: &'a dyn ArchiveBuilder,
    pub settings: &'a ExportSettings,
}

impl ExportFormat {
    pub fn option(self) -> &'static FormatOption {
        FORMAT_OPTIONS
            .iter()
            .find(|o| o.format == self)
            .unwrap_or(&FORMAT_OPTIONS[0])
    }

    pub fn id(self) -> &'static str {
        self.option().id
    }

    pub fn from_id(id: &str) -> Option<Self> {
        FormatOption::find(id).map(|o| o.format)
    }

    /// レコード列をこの形式のペイロードに変換する
    pub fn encode(self, records: &[ExportRecord], ctx: &EncodeContext<'_>) -> Result<EncodedPayload> {
        let payload = match self {
            ExportFormat::DocxTable => docx_table::encode(records, ctx.document)?,
            ExportFormat::Docx => docx::encode(records, ctx.document)?,
            ExportFormat::Txt => text::encode(records),
            ExportFormat::TxtZip => text_zip::encode(records, ctx.archive)?,
            ExportFormat::Xml => tei::encode(records, ctx.settings.xml_escape_markup),
            ExportFormat::Csv => delimited::encode(records, Delimiter::Comma),
            ExportFormat::Tab => delimited::encode(records, Delimiter::Tab),
        };

        let option = self.option();
        Ok(EncodedPayload {
            payload,
            mime_type: option.mime_type,
            file_extension: option.file_extension,
        })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ExportFormat::from_id(&s.to_lowercase()).ok_or_else(|| {
            let known: Vec<&str> = FORMAT_OPTIONS.iter().map(|o| o.id).collect();
            format!("Unknown format: {}. Use one of {}", s, known.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<&str> = FORMAT_OPTIONS.iter().map(|o| o.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FORMAT_OPTIONS.len());
    }

    #[test]
    fn test_every_variant_round_trips_through_id() {
        for option in FORMAT_OPTIONS {
            assert_eq!(ExportFormat::from_id(option.id), Some(option.format));
            assert_eq!(option.format.option(), option);
        }
    }

    #[test]
    fn test_mime_table() {
        assert_eq!(ExportFormat::Docx.option().mime_type, MIME_DOCX);
        assert_eq!(ExportFormat::DocxTable.option().file_extension, "docx");
        assert_eq!(ExportFormat::Txt.option().mime_type, "text/plain;charset=UTF-8");
        assert_eq!(ExportFormat::Csv.option().mime_type, "text/csv;charset=UTF-8");
        assert_eq!(
            ExportFormat::Tab.option().mime_type,
            "text/tab-separated-values;charset=UTF-8"
        );
        assert_eq!(ExportFormat::Xml.option().mime_type, "application/xml;charset=UTF-8");
        assert_eq!(ExportFormat::TxtZip.option().mime_type, "application/zip");
        assert_eq!(ExportFormat::TxtZip.option().file_extension, "zip");
    }

    #[test]
    fn test_unknown_id() {
        assert!(FormatOption::find("pdf").is_none());
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("Docx-Table".parse::<ExportFormat>(), Ok(ExportFormat::DocxTable));
    }
}
