use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use unistyle::cli;
use unistyle::config::Config;

fn main() -> Result<()> {
    // Process CLI arguments first (one-shot subcommands exit before logging init)
    let options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    let mut config = match &options.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    config.apply_overrides(&options);

    // --log-level flag takes highest precedence, then RUST_LOG, then config.
    unistyle::logging::init(options.log_level, config.log_level);

    log::info!("Starting unistyle v{}", unistyle::VERSION);
    match &options.config_path {
        Some(path) => log::info!("Config path: {:?}", path),
        None => log::info!("Config path: {:?}", Config::config_path()),
    }

    let runtime = Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(unistyle::server::run(config))?;

    Ok(())
}
