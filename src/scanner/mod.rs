use crate::error::{PhotoDescribeError, Result};
use photo_describe_common::PhotoEntry;
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "tif", "tiff", "bmp"];

/// 説明文サイドカーの拡張子
const SIDECAR_EXTENSION: &str = "txt";

/// フォルダ直下の画像を列挙し、サイドカーの説明文と組み合わせる
///
/// `photo.jpg` に対して `photo.txt` があればその内容を説明文とし、
/// なければ空の説明文になる。
pub fn scan_folder(folder: &Path) -> Result<Vec<PhotoEntry>> {
    if !folder.exists() {
        return Err(PhotoDescribeError::FolderNotFound(folder.display().to_string()));
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !is_image_path(path) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let sidecar = path.with_extension(SIDECAR_EXTENSION);
        let description = match std::fs::read_to_string(&sidecar) {
            Ok(text) => text.trim_end().to_string(),
            Err(_) => String::new(),
        };

        entries.push(PhotoEntry {
            file_name,
            description,
            ..Default::default()
        });
    }

    // ファイル名でソート
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    tracing::debug!(folder = %folder.display(), images = entries.len(), "scanned folder");
    Ok(entries)
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
