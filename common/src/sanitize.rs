//! ファイル名サニタイズ
//!
//! ユーザー入力や画像ファイル名を、Windows/macOS/Linux のどれでも
//! そのまま保存できるベース名に正規化する。失敗はしない。

use regex::Regex;
use std::fmt;

/// ファイル名の最大文字数
pub const MAX_FILENAME_CHARS: usize = 100;

/// フォールバックも空だった場合の最終手段
const LAST_RESORT_NAME: &str = "untitled";

const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

lazy_static::lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    // Windows の予約デバイス名
    static ref RESERVED_NAME: Regex =
        Regex::new(r"(?i)^(con|prn|aux|nul|com[1-9]|lpt[1-9])$").unwrap();
}

/// サニタイズ済みファイル名
///
/// パス区切り・予約デバイス名・制御文字を含まず、1〜100文字。
/// `sanitize_filename` からのみ生成される。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedFilename(String);

impl SanitizedFilename {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// ファイル名をサニタイズする
///
/// 1. 前後の空白を除去（空ならフォールバック）
/// 2. `\ / : * ? " < > |` を `_` に置換
/// 3. 制御文字（0x00-0x1F, 0x7F）を削除
/// 4. 連続する空白を1つにまとめる
/// 5. 末尾のドット・空白を削除
/// 6. 予約デバイス名なら先頭に `_` を付ける
/// 7. 空になったらフォールバック
/// 8. 100文字に切り詰め
///
/// フォールバックも同じ手順で正規化される。それも空なら `untitled`。
pub fn sanitize_filename(raw: Option<&str>, fallback: &str) -> SanitizedFilename {
    let name = clean(raw.unwrap_or(""));
    if !name.is_empty() {
        return SanitizedFilename(name);
    }

    let fallback = clean(fallback);
    if fallback.is_empty() {
        SanitizedFilename(LAST_RESORT_NAME.to_string())
    } else {
        SanitizedFilename(fallback)
    }
}

/// 手順 1〜6 と 8 を適用する。結果が空ならフォールバックが必要
fn clean(source: &str) -> String {
    let replaced: String = source
        .trim()
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .filter(|c| !is_ascii_control(*c))
        .collect();

    let collapsed = WHITESPACE_RUN.replace_all(&replaced, " ");
    let mut name = strip_trailing_dots_and_spaces(&collapsed).to_string();

    if name.chars().count() > MAX_FILENAME_CHARS {
        let truncated: String = name.chars().take(MAX_FILENAME_CHARS).collect();
        // 切り詰めで末尾に出たドット・空白も Windows では使えない
        name = strip_trailing_dots_and_spaces(&truncated).to_string();
    }

    // 切り詰め後に予約名が現れることもあるので最後に判定する
    if RESERVED_NAME.is_match(&name) {
        name.insert(0, '_');
    }

    name
}

/// 最後の拡張子を取り除いたベース名
///
/// 先頭ドットのみのファイル名（`.hidden`）はそのまま返す。
pub fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    }
}

fn is_ascii_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{1F}' | '\u{7F}')
}

fn strip_trailing_dots_and_spaces(name: &str) -> &str {
    name.trim_end_matches(['.', ' '])
}
