//! Word文書（段落形式）
//!
//! 1レコード1段落: 太字の `ファイル名:` に続けて空白と説明文。

use super::builder::{Block, DocumentBuilder, Paragraph, StyledRun};
use crate::error::Result;
use crate::types::ExportRecord;

pub(crate) fn build_blocks(records: &[ExportRecord]) -> Vec<Block> {
    records
        .iter()
        .map(|record| {
            Block::Paragraph(Paragraph {
                runs: vec![
                    StyledRun::bold(format!("{}:", record.file_name)),
                    StyledRun::plain(format!(" {}", record.description)),
                ],
            })
        })
        .collect()
}

pub(crate) fn encode(records: &[ExportRecord], builder: &dyn DocumentBuilder) -> Result<Vec<u8>> {
    builder.build_document(&build_blocks(records))
}
