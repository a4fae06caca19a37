//! TEI 風 XML
//!
//! レコードごとに `<pb n=".." facs=".."/>`（ページ境界）と `<p>`（説明文）を出力する。

use super::text::ensure_single_trailing_newline;
use crate::escape::{escape_attribute, escape_markup, to_tei_body};
use crate::types::ExportRecord;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const TEI_NAMESPACE: &str = "http://www.tei-c.org/ns/1.0";

pub(crate) fn encode(records: &[ExportRecord], escape_description: bool) -> Vec<u8> {
    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!("<TEI xmlns=\"{}\">\n", TEI_NAMESPACE));
    xml.push_str("<text>\n<body>\n");

    for (index, record) in records.iter().enumerate() {
        let page_num = index + 1;
        xml.push_str(&format!(
            "<pb n=\"{}\" facs=\"{}\"/>\n",
            page_num,
            escape_attribute(&record.file_name)
        ));

        let body = if escape_description {
            to_tei_body(&escape_markup(&record.description))
        } else {
            to_tei_body(&record.description)
        };
        xml.push_str(&format!("<p>{}</p>\n", body));
    }

    xml.push_str("</body>\n</text>\n</TEI>");
    ensure_single_trailing_newline(&mut xml);
    xml.into_bytes()
}
