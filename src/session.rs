//! 対話的エクスポート
//!
//! 形式とファイル名を選んで出力し、続けて別の形式で出力できる。
//! 2回目以降は直前の形式とファイル名が初期値になる。

use crate::error::{PhotoDescribeError, Result};
use crate::export::FileSink;
use dialoguer::{Confirm, Input, Select};
use photo_describe_common::{
    ExportRequest, ExportStatus, Exporter, PhotoEntry, PreviousExport, FORMAT_OPTIONS,
};
use std::path::Path;

/// ダイアログの初期値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDefaults {
    pub format_index: usize,
    pub base_filename: String,
}

/// 直前のエクスポート（なければ設定値）から初期値を決める
pub fn dialog_defaults(
    previous: Option<&PreviousExport>,
    config_format: &str,
    config_base: Option<&str>,
) -> DialogDefaults {
    let format_id = previous.map(|p| p.format_id.as_str()).unwrap_or(config_format);
    let format_index = FORMAT_OPTIONS
        .iter()
        .position(|o| o.id == format_id)
        .unwrap_or(0);

    let base_filename = previous
        .map(|p| p.base_filename.clone())
        .or_else(|| config_base.map(str::to_string))
        .unwrap_or_else(|| photo_describe_common::export::DEFAULT_BASE_FILENAME.to_string());

    DialogDefaults {
        format_index,
        base_filename,
    }
}

pub fn run_interactive_export(
    exporter: &mut Exporter,
    entries: &[PhotoEntry],
    output_dir: &Path,
    config_format: &str,
    config_base: Option<&str>,
) -> Result<()> {
    let options = exporter.formats();
    let labels: Vec<String> = options
        .iter()
        .map(|o| format!("{} (.{})", o.label, o.file_extension))
        .collect();
    let mut sink = FileSink::new(output_dir);

    loop {
        let defaults = dialog_defaults(exporter.previous(), config_format, config_base);

        let selection = Select::new()
            .with_prompt("出力形式")
            .items(&labels)
            .default(defaults.format_index)
            .interact()
            .map_err(|e| PhotoDescribeError::Dialog(e.to_string()))?;

        let base: String = Input::new()
            .with_prompt("ファイル名（拡張子なし）")
            .default(defaults.base_filename)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PhotoDescribeError::Dialog(e.to_string()))?;

        let request = ExportRequest::new(options[selection].id, Some(base));
        match exporter.export(entries, &request, &mut sink)? {
            ExportStatus::Delivered { filename } => {
                println!("✔ 出力: {}", output_dir.join(filename).display());
            }
            ExportStatus::UnknownFormat => {
                println!("未対応の出力形式です: {}", request.format_id);
            }
        }

        let again = Confirm::new()
            .with_prompt("別の形式でも出力しますか？")
            .default(false)
            .interact()
            .map_err(|e| PhotoDescribeError::Dialog(e.to_string()))?;
        if !again {
            break;
        }
    }

    Ok(())
}
