//! Word (.docx) 文書生成
//!
//! 段落と表だけを扱う最小構成の OPC パッケージを書き出す。
//! 本文スタイルは `ParagraphStyle::BODY`（11pt、段落後12pt、行間1.25）。

use crate::archive::{deterministic_options, zip_error};
use crate::error::Result;
use crate::export::{Block, Cell, DocumentBuilder, Paragraph, ParagraphStyle, StyledRun, Table};
use std::io::{Cursor, Write};
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A4 縦、余白 1 インチでの本文幅（twip）
const TEXT_WIDTH_TWIPS: u32 = 9026;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

/// `DocumentBuilder` の docx 実装
#[derive(Debug, Clone)]
pub struct DocxBuilder {
    style: ParagraphStyle,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self { style: ParagraphStyle::BODY }
    }
}

impl Default for DocxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder for DocxBuilder {
    fn build_document(&self, blocks: &[Block]) -> Result<Vec<u8>> {
        let document_xml = document_xml(blocks);
        let styles_xml = styles_xml(&self.style);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = deterministic_options();

        let parts: [(&str, &str); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", PACKAGE_RELS_XML),
            ("word/document.xml", document_xml.as_str()),
            ("word/styles.xml", styles_xml.as_str()),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
        ];
        for (name, content) in parts {
            zip.start_file(name, options).map_err(zip_error)?;
            zip.write_all(content.as_bytes())?;
        }

        let bytes = zip.finish().map_err(zip_error)?.into_inner();
        tracing::debug!(blocks = blocks.len(), bytes = bytes.len(), "docx document built");
        Ok(bytes)
    }
}

fn document_xml(blocks: &[Block]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!("<w:document xmlns:w=\"{}\"><w:body>", W_NS));

    for block in blocks {
        match block {
            Block::Paragraph(paragraph) => push_paragraph(&mut xml, paragraph),
            Block::Table(table) => push_table(&mut xml, table),
        }
    }

    // Word は表で終わる本文を開けないので空段落を足す
    if matches!(blocks.last(), Some(Block::Table(_))) {
        xml.push_str("<w:p/>");
    }

    xml.push_str(concat!(
        r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/>"#,
        r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/>"#,
        "</w:sectPr>"
    ));
    xml.push_str("</w:body></w:document>");
    xml
}

fn styles_xml(style: &ParagraphStyle) -> String {
    // sz は半ポイント、spacing は twip、line は 240 = 1行
    let half_points = (style.font_size_pt * 2.0).round() as u32;
    let after_twips = (style.space_after_pt * 20.0).round() as u32;
    let line = (style.line_height * 240.0).round() as u32;

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "\n<w:styles xmlns:w=\"{ns}\"><w:docDefaults>",
            r#"<w:rPrDefault><w:rPr><w:sz w:val="{sz}"/><w:szCs w:val="{sz}"/></w:rPr></w:rPrDefault>"#,
            r#"<w:pPrDefault><w:pPr><w:spacing w:after="{after}" w:line="{line}" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#,
            "</w:docDefaults>",
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>"#,
            r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/>"#,
            r#"<w:tblPr><w:tblCellMar><w:left w:w="108" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style>"#,
            "</w:styles>"
        ),
        ns = W_NS,
        sz = half_points,
        after = after_twips,
        line = line,
    )
}

fn push_paragraph(xml: &mut String, paragraph: &Paragraph) {
    push_runs_paragraph(xml, &paragraph.runs);
}

fn push_runs_paragraph(xml: &mut String, runs: &[StyledRun]) {
    if runs.is_empty() {
        xml.push_str("<w:p/>");
        return;
    }
    xml.push_str("<w:p>");
    for run in runs {
        push_run(xml, run);
    }
    xml.push_str("</w:p>");
}

fn push_run(xml: &mut String, run: &StyledRun) {
    xml.push_str("<w:r>");
    if run.bold {
        xml.push_str("<w:rPr><w:b/><w:bCs/></w:rPr>");
    }

    let mut segment = String::new();
    for ch in run.text.chars() {
        match ch {
            '\n' => {
                flush_text(xml, &mut segment);
                xml.push_str("<w:br/>");
            }
            '\t' => {
                flush_text(xml, &mut segment);
                xml.push_str("<w:tab/>");
            }
            c if is_xml_char(c) => segment.push(c),
            _ => {}
        }
    }
    flush_text(xml, &mut segment);
    xml.push_str("</w:r>");
}

fn flush_text(xml: &mut String, segment: &mut String) {
    if segment.is_empty() {
        return;
    }
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&quick_xml::escape::escape(segment.as_str()));
    xml.push_str("</w:t>");
    segment.clear();
}

/// XML 1.0 で使える文字か（改行・タブは呼び出し側で処理済み）
fn is_xml_char(c: char) -> bool {
    !matches!(c, '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

fn push_table(xml: &mut String, table: &Table) {
    xml.push_str("<w:tbl><w:tblPr>");
    xml.push_str(r#"<w:tblW w:w="5000" w:type="pct"/>"#);
    xml.push_str("<w:tblBorders>");
    for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        xml.push_str(&format!(
            r#"<w:{} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
            side
        ));
    }
    xml.push_str("</w:tblBorders>");
    xml.push_str(r#"<w:tblLayout w:type="fixed"/>"#);
    xml.push_str("</w:tblPr>");

    xml.push_str("<w:tblGrid>");
    // 行が無い表でも列定義は必要
    for percent in &table.column_widths {
        let twips = TEXT_WIDTH_TWIPS * u32::from(*percent) / 100;
        xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, twips));
    }
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        xml.push_str("<w:tr>");
        for cell in &row.cells {
            push_cell(xml, cell);
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
}

fn push_cell(xml: &mut String, cell: &Cell) {
    // pct 指定は 1/50 パーセント単位
    let fiftieths = u32::from(cell.width_percent) * 50;
    xml.push_str("<w:tc><w:tcPr>");
    xml.push_str(&format!(r#"<w:tcW w:w="{}" w:type="pct"/>"#, fiftieths));
    xml.push_str("</w:tcPr>");
    // セルには段落が最低1つ必要
    push_runs_paragraph(xml, &cell.runs);
    xml.push_str("</w:tc>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Row;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts() {
        let bytes = DocxBuilder::new().build_document(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_body_style_values() {
        let bytes = DocxBuilder::new().build_document(&[]).unwrap();
        let styles = read_part(&bytes, "word/styles.xml");
        assert!(styles.contains(r#"<w:sz w:val="22"/>"#));
        assert!(styles.contains(r#"w:after="240" w:line="300" w:lineRule="auto""#));
    }

    #[test]
    fn test_paragraph_runs_escaped() {
        let blocks = vec![Block::Paragraph(Paragraph {
            runs: vec![StyledRun::bold("a&b.jpg:"), StyledRun::plain(" x < y\nz")],
        })];
        let bytes = DocxBuilder::new().build_document(&blocks).unwrap();
        let doc = read_part(&bytes, "word/document.xml");

        assert!(doc.contains("<w:rPr><w:b/><w:bCs/></w:rPr><w:t xml:space=\"preserve\">a&amp;b.jpg:</w:t>"));
        assert!(doc.contains("x &lt; y</w:t><w:br/><w:t xml:space=\"preserve\">z</w:t>"));
    }

    #[test]
    fn test_table_widths_and_trailing_paragraph() {
        let blocks = vec![Block::Table(Table {
            column_widths: vec![25, 75],
            rows: vec![Row {
                cells: vec![
                    Cell { width_percent: 25, runs: vec![StyledRun::plain("a.jpg")] },
                    Cell { width_percent: 75, runs: vec![] },
                ],
            }],
        })];
        let bytes = DocxBuilder::new().build_document(&blocks).unwrap();
        let doc = read_part(&bytes, "word/document.xml");

        assert!(doc.contains(r#"<w:tcW w:w="1250" w:type="pct"/>"#));
        assert!(doc.contains(r#"<w:tcW w:w="3750" w:type="pct"/>"#));
        assert!(doc.contains(r#"<w:gridCol w:w="2256"/><w:gridCol w:w="6769"/>"#));
        assert!(doc.contains("</w:tbl><w:p/><w:sectPr>"));
        assert_eq!(doc.matches("<w:tr>").count(), 1);
    }

    #[test]
    fn test_rowless_table_keeps_grid() {
        let blocks = vec![Block::Table(Table {
            column_widths: vec![25, 75],
            rows: Vec::new(),
        })];
        let bytes = DocxBuilder::new().build_document(&blocks).unwrap();
        let doc = read_part(&bytes, "word/document.xml");

        assert!(doc.contains(
            r#"<w:tblGrid><w:gridCol w:w="2256"/><w:gridCol w:w="6769"/></w:tblGrid></w:tbl>"#
        ));
        assert!(!doc.contains("<w:tr>"));
    }

    #[test]
    fn test_control_chars_dropped() {
        let blocks = vec![Block::Paragraph(Paragraph {
            runs: vec![StyledRun::plain("a\u{1}b\r")],
        })];
        let bytes = DocxBuilder::new().build_document(&blocks).unwrap();
        let doc = read_part(&bytes, "word/document.xml");
        assert!(doc.contains(">ab</w:t>"));
    }

    #[test]
    fn test_deterministic_output() {
        let blocks = vec![Block::Paragraph(Paragraph { runs: vec![StyledRun::plain("x")] })];
        let first = DocxBuilder::new().build_document(&blocks).unwrap();
        let second = DocxBuilder::new().build_document(&blocks).unwrap();
        assert_eq!(first, second);
    }
}
