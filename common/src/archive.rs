//! ZIP アーカイブ生成
//!
//! タイムスタンプを固定しているので、同じ入力からは同じバイト列が得られる。

use crate::error::{Error, Result};
use crate::export::{ArchiveBuilder, ArchiveMember};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// メンバーを入力順に Deflate 圧縮で格納する
#[derive(Debug, Clone, Default)]
pub struct ZipBuilder;

impl ZipBuilder {
    pub fn new() -> Self {
        Self
    }
}

/// 再現性のあるメンバー設定（1980-01-01 固定）
pub(crate) fn deterministic_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

pub(crate) fn zip_error(err: zip::result::ZipError) -> Error {
    Error::Archive(err.to_string())
}

impl ArchiveBuilder for ZipBuilder {
    fn build_archive(&self, members: &[ArchiveMember]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = deterministic_options();

        for member in members {
            zip.start_file(member.name.as_str(), options).map_err(zip_error)?;
            zip.write_all(&member.content)?;
        }

        let cursor = zip.finish().map_err(zip_error)?;
        let bytes = cursor.into_inner();
        tracing::debug!(members = members.len(), bytes = bytes.len(), "zip archive built");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn member(name: &str, content: &str) -> ArchiveMember {
        ArchiveMember {
            name: name.to_string(),
            content: content.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_members_in_input_order() {
        let bytes = ZipBuilder::new()
            .build_archive(&[member("b.txt", "B\n"), member("a.txt", "A\n")])
            .unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "b.txt");

        let mut content = String::new();
        archive.by_index(1).unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "A\n");
    }

    #[test]
    fn test_output_is_deterministic() {
        let members = [member("a.txt", "same\n")];
        let first = ZipBuilder::new().build_archive(&members).unwrap();
        let second = ZipBuilder::new().build_archive(&members).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_archive_is_valid() {
        let bytes = ZipBuilder::new().build_archive(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_duplicate_member_is_error() {
        let result = ZipBuilder::new().build_archive(&[member("a.txt", "1"), member("a.txt", "2")]);
        assert!(matches!(result, Err(Error::Archive(_))));
    }
}
