//! CSV / TSV
//!
//! 1レコード1行: `ファイル名 <区切り> 説明文`。

use super::text::ensure_single_trailing_newline;
use crate::escape::{escape_delimited, normalize_quotes, Delimiter};
use crate::types::ExportRecord;

pub(crate) fn encode(records: &[ExportRecord], delimiter: Delimiter) -> Vec<u8> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut out = String::new();
    for record in records {
        // 説明文中の引用符は二重化せず活字の引用符にする
        let description = normalize_quotes(&record.description);
        out.push_str(&escape_delimited(Some(&record.file_name), delimiter));
        out.push(delimiter.as_char());
        out.push_str(&escape_delimited(Some(&description), delimiter));
        out.push('\n');
    }

    ensure_single_trailing_newline(&mut out);
    out.into_bytes()
}
