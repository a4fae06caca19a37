use clap::Parser;
use photo_describe::{cli, config, error, export, logging, session, source};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use photo_describe_common::{Exporter, FORMAT_OPTIONS};

fn main() {
    if let Err(err) = run() {
        eprintln!("エラー: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Export { input, format, output, name } => {
            println!("📄 photo-describe - エクスポート\n");

            let entries = source::load_entries(&input)?;
            if entries.is_empty() && input.is_dir() {
                return Err(error::PhotoDescribeError::NoImagesFound(
                    input.display().to_string()
                ));
            }
            println!("✔ {}件の説明文を読み込み", entries.len());

            let requested = if format.is_empty() {
                vec![config.default_format.clone()]
            } else {
                format
            };
            let format_ids = export::resolve_format_ids(&requested)?;

            let output_dir = output.unwrap_or_else(|| config.output_dir());
            let base = name.or_else(|| config.base_filename.clone());

            let mut exporter = Exporter::with_default_builders().with_settings(config.export_settings());
            let written = export::export_formats(
                &mut exporter,
                &entries,
                &format_ids,
                &output_dir,
                base.as_deref(),
            )?;

            for path in &written {
                println!("✔ 出力: {}", path.display());
            }
            println!("\n✅ エクスポート完了");
        }

        Commands::Formats => {
            println!("対応形式:");
            for option in FORMAT_OPTIONS {
                println!(
                    "  {:<11} {:<24} .{:<5} {}",
                    option.id, option.label, option.file_extension, option.mime_type
                );
            }
        }

        Commands::Interactive { input, output } => {
            println!("📄 photo-describe - 対話エクスポート\n");

            let entries = source::load_entries(&input)?;
            println!("✔ {}件の説明文を読み込み\n", entries.len());

            let output_dir = output.unwrap_or_else(|| config.output_dir());
            let mut exporter = Exporter::with_default_builders().with_settings(config.export_settings());
            session::run_interactive_export(
                &mut exporter,
                &entries,
                &output_dir,
                &config.default_format,
                config.base_filename.as_deref(),
            )?;
        }

        Commands::Config { show, path } => {
            if path {
                println!("{}", Config::config_path()?.display());
            }

            if show || !path {
                println!("設定:");
                println!("  出力先: {}", config.output_dir().display());
                println!("  既定の形式: {}", config.default_format);
                println!(
                    "  既定のファイル名: {}",
                    config.base_filename.as_deref().unwrap_or("(未設定)")
                );
                println!(
                    "  XMLマークアップのエスケープ: {}",
                    if config.xml_escape_markup { "有効" } else { "無効" }
                );
            }
        }
    }

    Ok(())
}
