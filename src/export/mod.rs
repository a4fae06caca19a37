//! エクスポート実行（CLI版）
//!
//! 共通ライブラリのエクスポートエンジンを呼び出し、結果をファイルに保存する。

use crate::error::{PhotoDescribeError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use photo_describe_common::{
    export::DEFAULT_BASE_FILENAME, DeliverySink, ExportFormat, ExportOutcome, ExportRequest,
    ExportStatus, Exporter, RecordSource, FORMAT_OPTIONS,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 出力ディレクトリに書き出す Delivery Sink
#[derive(Debug)]
pub struct FileSink {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    /// これまでに書き出したファイル
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DeliverySink for FileSink {
    fn deliver(&mut self, outcome: ExportOutcome) -> photo_describe_common::Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&outcome.filename);
        std::fs::write(&path, &outcome.payload)?;
        tracing::debug!(path = %path.display(), mime = outcome.mime_type, "payload written");
        self.written.push(path);
        Ok(())
    }
}

/// `--format` の値を形式IDのリストに展開する
///
/// `all` は全形式。未知のIDは明示指定なのでエラーにする。
pub fn resolve_format_ids(requested: &[String]) -> Result<Vec<String>> {
    let mut ids: Vec<String> = Vec::new();
    for raw in requested {
        let id = raw.trim().to_lowercase();
        if id == "all" {
            ids.extend(FORMAT_OPTIONS.iter().map(|o| o.id.to_string()));
            continue;
        }
        if ExportFormat::from_id(&id).is_none() {
            return Err(PhotoDescribeError::UnknownFormat(raw.clone()));
        }
        ids.push(id);
    }
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
    Ok(ids)
}

/// 指定形式すべてでエクスポートし、書き出したパスを返す
pub fn export_formats<S>(
    exporter: &mut Exporter,
    source: &S,
    format_ids: &[String],
    output_dir: &Path,
    base_filename: Option<&str>,
) -> Result<Vec<PathBuf>>
where
    S: RecordSource + ?Sized,
{
    let mut sink = FileSink::new(output_dir);
    let colliding = shared_extension_ids(format_ids);

    let progress = if format_ids.len() > 1 {
        let pb = ProgressBar::new(format_ids.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Some(pb)
    } else {
        None
    };

    for id in format_ids {
        if let Some(pb) = &progress {
            pb.set_message(id.clone());
        }

        let base = output_base(base_filename, id, colliding.contains(id.as_str()));
        let request = ExportRequest::new(id.clone(), base);
        match exporter.export(source, &request, &mut sink)? {
            ExportStatus::Delivered { filename } => {
                tracing::debug!(format = %id, filename = %filename, "exported");
            }
            ExportStatus::UnknownFormat => {
                return Err(PhotoDescribeError::UnknownFormat(id.clone()));
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(sink.written().to_vec())
}

/// 形式ごとの出力ベース名
///
/// 拡張子が同じ形式（docx / docx-table）を同時に出すときは形式IDを付けて区別する。
/// 空白だけの名前は既定名として扱う。
fn output_base(base_filename: Option<&str>, id: &str, shares_extension: bool) -> Option<String> {
    let name = base_filename.map(str::trim).filter(|name| !name.is_empty());
    if shares_extension {
        Some(format!("{}-{}", name.unwrap_or(DEFAULT_BASE_FILENAME), id))
    } else {
        name.map(str::to_string)
    }
}

/// 同じ拡張子を持つ形式が複数指定されている場合、その形式IDを返す
fn shared_extension_ids(format_ids: &[String]) -> HashSet<&str> {
    let extensions: Vec<(&str, &str)> = format_ids
        .iter()
        .filter_map(|id| ExportFormat::from_id(id).map(|f| (id.as_str(), f.option().file_extension)))
        .collect();

    extensions
        .iter()
        .filter(|(_, ext)| extensions.iter().filter(|(_, other)| other == ext).count() > 1)
        .map(|(id, _)| *id)
        .collect()
}
