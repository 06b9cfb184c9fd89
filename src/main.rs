use clap::Parser;
use rausku_nav::core::config::{CliOverrides, RauskuConfig, load_config, resolve};
use rausku_nav::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rausku", about = "Rausku landing page in the terminal")]
struct Args {
    /// Viewport width in pixels below which the mobile menu is used
    #[arg(long)]
    breakpoint: Option<u32>,

    /// CSS pixels per terminal column
    #[arg(long)]
    px_per_column: Option<u32>,

    /// Read this config file instead of ~/.rausku/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level for rausku.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to rausku.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("rausku.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        RauskuConfig::default()
    });
    let cli = CliOverrides {
        breakpoint: args.breakpoint,
        px_per_column: args.px_per_column,
    };
    let config = resolve(&file_config, &cli);

    log::info!(
        "Rausku starting up with breakpoint {}px, {}px per column",
        config.nav.breakpoint,
        config.px_per_column
    );

    tui::run(config)
}
