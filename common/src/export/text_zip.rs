//! テキストファイルZIP
//!
//! 1レコード1メンバー `{ベース名}.txt`。ベース名が重複した場合は
//! ` (2)` などの連番を付け、どのレコードも落とさない。

use super::builder::{ArchiveBuilder, ArchiveMember};
use crate::error::Result;
use crate::sanitize::{base_name, sanitize_filename};
use crate::types::ExportRecord;
use std::collections::HashSet;

pub(crate) fn build_members(records: &[ExportRecord]) -> Vec<ArchiveMember> {
    let mut used: HashSet<String> = HashSet::new();

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let fallback = format!("image-{}", index + 1);
            let stem = sanitize_filename(Some(base_name(&record.file_name)), &fallback);
            let name = unique_member_name(stem.as_str(), &mut used);

            let mut content = record.description.trim_end_matches(['\r', '\n']).to_string();
            content.push('\n');

            ArchiveMember {
                name,
                content: content.into_bytes(),
            }
        })
        .collect()
}

pub(crate) fn encode(records: &[ExportRecord], builder: &dyn ArchiveBuilder) -> Result<Vec<u8>> {
    builder.build_archive(&build_members(records))
}

/// 大文字小文字を区別しないファイルシステムでも衝突しない名前を返す
fn unique_member_name(stem: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = format!("{}.txt", stem);
    let mut counter = 2;
    while !used.insert(candidate.to_lowercase()) {
        tracing::warn!(member = %candidate, "duplicate archive member name, renaming");
        candidate = format!("{} ({}).txt", stem, counter);
        counter += 1;
    }
    candidate
}
