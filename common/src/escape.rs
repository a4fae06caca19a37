//! 値のエスケープ
//!
//! 区切り文字テキスト（CSV/TSV）と TEI 風 XML 本文のための変換。

/// 直線の二重引用符の置換先（U+201D RIGHT DOUBLE QUOTATION MARK）
pub const TYPOGRAPHIC_QUOTE: char = '\u{201D}';

/// TEI の行頭マーカー
pub const LINE_BEGIN_MARKER: &str = "<lb/>";

/// 区切り文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// 区切り文字テキスト用に値をエスケープする
///
/// CR は削除し、LF とタブは空白1つに置き換える。カンマ区切りでは、
/// 元の値が区切り文字・`"`・改行を含む場合に全体を `"` で囲み、
/// 内部の `"` を二重化する。タブ区切りでは引用符で囲まない。
pub fn escape_delimited(value: Option<&str>, delimiter: Delimiter) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let needs_quotes = match delimiter {
        Delimiter::Tab => false,
        Delimiter::Comma => value
            .chars()
            .any(|c| c == ',' || c == '"' || c == '\n' || c == '\r'),
    };

    let flattened: String = value
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();

    if needs_quotes {
        format!("\"{}\"", flattened.replace('"', "\"\""))
    } else {
        flattened
    }
}

/// 直線の `"` を活字の閉じ引用符に置き換える
pub fn normalize_quotes(text: &str) -> String {
    text.replace('"', &TYPOGRAPHIC_QUOTE.to_string())
}

/// 説明文を TEI 本文に変換する
///
/// 引用符を置換し、改行を CRLF に統一したうえで、改行の次の行頭に
/// `<lb/>` を挿入する。`<` `&` `>` はエスケープしない。
pub fn to_tei_body(value: &str) -> String {
    let quoted = normalize_quotes(value);
    let unified = quoted.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len() + 16);
    for (i, line) in unified.split('\n').enumerate() {
        if i > 0 {
            out.push_str("\r\n");
            out.push_str(LINE_BEGIN_MARKER);
        }
        out.push_str(line);
    }
    out
}

/// XML テキストノード用に `&` `<` `>` をエスケープする
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// XML 属性値用のエスケープ
pub fn escape_attribute(text: &str) -> String {
    escape_markup(text).replace('"', "&quot;")
}
