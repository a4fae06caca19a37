use crate::error::{PhotoDescribeError, Result};
use photo_describe_common::{ExportFormat, ExportSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_OUTPUT_DIR: &str = "PHOTO_DESCRIBE_OUTPUT_DIR";
const ENV_FORMAT: &str = "PHOTO_DESCRIBE_FORMAT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 出力先ディレクトリ（省略時はカレント）
    pub output_dir: Option<PathBuf>,
    /// `--format` 省略時の出力形式
    pub default_format: String,
    /// `--name` 省略時のベースファイル名
    pub base_filename: Option<String>,
    /// XML出力で説明文の `& < >` をエスケープする
    pub xml_escape_markup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            default_format: ExportFormat::DocxTable.id().to_string(),
            base_filename: None,
            xml_escape_markup: false,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoDescribeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-describe").join("config.json"))
    }

    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            if !dir.trim().is_empty() {
                self.output_dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(format) = std::env::var(ENV_FORMAT) {
            if !format.trim().is_empty() {
                self.default_format = format.trim().to_string();
            }
        }
    }

    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            xml_escape_markup: self.xml_escape_markup,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.default_format, "docx-table");
        assert!(!config.xml_escape_markup);
        assert_eq!(config.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"xml_escape_markup": true}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.xml_escape_markup);
        assert!(config.export_settings().xml_escape_markup);
        assert_eq!(config.default_format, "docx-table");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(PhotoDescribeError::JsonParse(_))
        ));
    }
}
