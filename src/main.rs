use anyhow::Context;
use clap::Parser;
use plot_tracker::{check, cli, config, error, export, state_file, summary};
use cli::{Cli, Commands};
use config::Config;
use tracing::{warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        warn!("設定ファイルを読めないため既定値を使います: {}", e);
        Config::default_config()
    });

    match cli.command {
        Commands::Summary { input } => {
            let path = config.resolve_state_file(input)?;
            let state = state_file::load_state(&path)
                .with_context(|| format!("{} の読み込みに失敗", path.display()))?;

            println!("🌱 plot-tracker - 集計\n");
            print!("{}", summary::summarize(&state));
        }

        Commands::Check { input } => {
            let path = config.resolve_state_file(input)?;
            let state = state_file::load_state(&path)
                .with_context(|| format!("{} の読み込みに失敗", path.display()))?;

            println!("🔍 plot-tracker - 検査\n");
            let issues = check::check_state(&state);
            for issue in &issues {
                println!("{}", issue);
            }

            let errors = check::error_count(&issues);
            if errors > 0 {
                return Err(error::PlotError::CheckFailed(errors).into());
            }
            println!("✔ 問題は見つかりませんでした（情報 {}件）", issues.len());
        }

        Commands::Export { input, format, output, title } => {
            let path = config.resolve_state_file(input)?;
            let state = state_file::load_state(&path)
                .with_context(|| format!("{} の読み込みに失敗", path.display()))?;

            println!("📄 plot-tracker - エクスポート\n");

            let format = format.unwrap_or_else(|| config.export_format());
            let title = title.unwrap_or_else(|| config.title.clone());
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));

            let written = export::export_state(&state, &format, &output_dir, &title)?;
            for file in &written {
                println!("✔ {}", file.display());
            }

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_state_file, show } => {
            let mut config = config;
            let show = cli::config_should_show(show, set_state_file.as_deref());

            if let Some(path) = set_state_file {
                config.set_state_file(path)?;
                println!("✔ 状態ファイルを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  状態ファイル: {}",
                    config
                        .state_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
                println!("  出力形式: {}", config.export_format());
                println!("  タイトル: {}", config.title);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
