//! プレーンテキスト
//!
//! レコードごとに「ファイル名 / 説明文 / 空行 / 区切り線 / 空行」。

use crate::types::ExportRecord;

pub const SEPARATOR_WIDTH: usize = 40;

pub(crate) fn encode(records: &[ExportRecord]) -> Vec<u8> {
    if records.is_empty() {
        return Vec::new();
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    for record in records {
        out.push_str(&record.file_name);
        out.push('\n');
        out.push_str(record.description.trim_end_matches(['\r', '\n']));
        out.push_str("\n\n");
        out.push_str(&separator);
        out.push_str("\n\n");
    }

    ensure_single_trailing_newline(&mut out);
    out.into_bytes()
}

/// 末尾の改行をちょうど1つにする
pub(crate) fn ensure_single_trailing_newline(text: &mut String) {
    let keep = text.trim_end_matches(['\r', '\n']).len();
    text.truncate(keep);
    text.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str(records: &[ExportRecord]) -> String {
        String::from_utf8(encode(records)).unwrap()
    }

    #[test]
    fn test_single_record_layout() {
        let out = encode_str(&[ExportRecord::new("a.jpg", "A cat")]);
        let expected = format!("a.jpg\nA cat\n\n{}\n", "-".repeat(40));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_records_in_order() {
        let out = encode_str(&[
            ExportRecord::new("first.jpg", "one"),
            ExportRecord::new("second.jpg", "two"),
        ]);
        let separator = "-".repeat(40);
        let expected = format!(
            "first.jpg\none\n\n{sep}\n\nsecond.jpg\ntwo\n\n{sep}\n",
            sep = separator
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_trailing_newline_in_description() {
        let out = encode_str(&[ExportRecord::new("a.jpg", "ends with newline\n\n")]);
        assert!(out.ends_with('\n'));
        assert!(!out.ends_with("\n\n"));
        assert!(out.contains("ends with newline\n\n---"));
    }

    #[test]
    fn test_empty_records_zero_bytes() {
        assert!(encode(&[]).is_empty());
    }

    #[test]
    fn test_ensure_single_trailing_newline() {
        let mut text = "abc\r\n\n\n".to_string();
        ensure_single_trailing_newline(&mut text);
        assert_eq!(text, "abc\n");

        let mut text = "abc".to_string();
        ensure_single_trailing_newline(&mut text);
        assert_eq!(text, "abc\n");
    }
}
