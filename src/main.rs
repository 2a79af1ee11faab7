use clap::Parser;
use pipeline_inspect::app::{handle_fatal_error, init_logging, AppConfig};
use pipeline_inspect::cli::{execute_command, Cli};
use pipeline_inspect::config::ConfigLoader;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let app_config = match AppConfig::new(verbose) {
        Ok(config) => config.with_config_path(cli.config.clone()),
        Err(e) => handle_fatal_error(e, verbose),
    };

    let loader = ConfigLoader::new(&app_config.working_dir);
    let config_path = app_config.config_path.as_deref();
    let config = match loader.load(config_path) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e.into(), verbose),
    };

    // The subscriber needs the configured level, so config resolution is
    // reported once it is installed.
    init_logging(&app_config, config.get_log_level());
    match loader.config_file(config_path) {
        Some(path) => debug!("Loaded configuration from {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    if let Err(e) = execute_command(cli.command, &config) {
        handle_fatal_error(e, verbose);
    }
}
