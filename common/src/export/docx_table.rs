//! Word文書（表形式）
//!
//! 1レコード1行、ファイル名セル 25% / 説明文セル 75%。

use super::builder::{Block, Cell, DocumentBuilder, Row, StyledRun, Table};
use crate::error::Result;
use crate::types::ExportRecord;

pub const FILE_NAME_WIDTH_PERCENT: u8 = 25;
pub const DESCRIPTION_WIDTH_PERCENT: u8 = 75;

pub(crate) fn build_blocks(records: &[ExportRecord]) -> Vec<Block> {
    let rows = records
        .iter()
        .map(|record| Row {
            cells: vec![
                Cell {
                    width_percent: FILE_NAME_WIDTH_PERCENT,
                    runs: text_runs(&record.file_name),
                },
                Cell {
                    width_percent: DESCRIPTION_WIDTH_PERCENT,
                    runs: text_runs(&record.description),
                },
            ],
        })
        .collect();

    vec![Block::Table(Table {
        column_widths: vec![FILE_NAME_WIDTH_PERCENT, DESCRIPTION_WIDTH_PERCENT],
        rows,
    })]
}

pub(crate) fn encode(records: &[ExportRecord], builder: &dyn DocumentBuilder) -> Result<Vec<u8>> {
    builder.build_document(&build_blocks(records))
}

fn text_runs(text: &str) -> Vec<StyledRun> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![StyledRun::plain(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::testing::RecordingDocumentBuilder;

    fn table_of(blocks: &[Block]) -> &Table {
        match blocks {
            [Block::Table(table)] => table,
            other => panic!("expected a single table, got {:?}", other),
        }
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let records = vec![
            ExportRecord::new("b.jpg", "second"),
            ExportRecord::new("a.jpg", "first"),
            ExportRecord::new("c.jpg", "third"),
        ];
        let blocks = build_blocks(&records);
        let table = table_of(&blocks);

        assert_eq!(table.rows.len(), 3);
        let names: Vec<&str> = table
            .rows
            .iter()
            .map(|r| r.cells[0].runs[0].text.as_str())
            .collect();
        assert_eq!(names, vec!["b.jpg", "a.jpg", "c.jpg"]);
    }

    #[test]
    fn test_cell_widths() {
        let blocks = build_blocks(&[ExportRecord::new("a.jpg", "desc")]);
        let row = &table_of(&blocks).rows[0];
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[0].width_percent, 25);
        assert_eq!(row.cells[1].width_percent, 75);
        assert_eq!(row.cells[1].runs, vec![StyledRun::plain("desc")]);
    }

    #[test]
    fn test_empty_description_is_empty_cell() {
        let blocks = build_blocks(&[ExportRecord::new("a.jpg", "")]);
        let row = &table_of(&blocks).rows[0];
        assert!(row.cells[1].runs.is_empty());
    }

    #[test]
    fn test_empty_records_give_empty_table() {
        let blocks = build_blocks(&[]);
        let table = table_of(&blocks);
        assert!(table.rows.is_empty());
        assert_eq!(table.column_widths, vec![25, 75]);
    }

    #[test]
    fn test_encode_passes_blocks_to_builder() {
        let builder = RecordingDocumentBuilder::default();
        let payload = encode(&[ExportRecord::new("a.jpg", "x")], &builder).unwrap();
        assert_eq!(payload, b"doc:1");
        assert_eq!(builder.blocks.borrow().len(), 1);
    }
}
