use clap::Parser;
use mentalitty::RngSource;
use mentalitty::core::config::{self, CliOverrides};
use mentalitty::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "mentalitty", about = "Terminal reflex and memory mini-games")]
struct Args {
    /// Random source for prompts
    #[arg(long, value_enum)]
    rng: Option<RngSource>,

    /// Seed for the seeded random source
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists so the log file can come
    // from it; a load failure is reported once logging is up.
    let (file_config, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::MentalittyConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            rng: args.rng,
            seed: args.seed,
            log_level: args.log_level,
        },
    );

    // Initialize file logger at the resolved path
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = load_error {
        log::warn!("{}, using defaults", e);
    }
    log::debug!("Resolved config: {:?}", resolved);

    log::info!("MentaliTTY starting up with rng: {:?}", resolved.rng);

    if let Err(e) = tui::run(resolved) {
        log::error!("Exiting with error: {}", e);
        return Err(e);
    }
    log::info!("Clean exit");
    Ok(())
}
