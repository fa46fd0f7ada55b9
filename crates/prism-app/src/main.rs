mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use app_state::PrismApp;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so the [logging] section can supply the
    // default filter directive. Failures are reported once the
    // subscriber is up.
    let (config, config_note) = load_config(&args);

    // Initialize logging
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "prism=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("prism v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(note) = config_note {
        tracing::warn!("{note}");
    }

    let mut config = config;
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    if args.print_config {
        println!("{}", prism_config::config_to_json(&config));
        return;
    }

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    let mut app = PrismApp::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("event loop error: {e}");
        std::process::exit(1);
    }
}

/// Load the config from the CLI-specified path or the platform default,
/// falling back to defaults with a deferred warning on failure.
fn load_config(args: &cli::Args) -> (prism_config::PrismConfig, Option<String>) {
    let result = match &args.config {
        Some(path) => prism_config::load_from_path(std::path::Path::new(path)),
        None => prism_config::load_config(),
    };

    match result {
        Ok(config) => (config, None),
        Err(e) => (
            prism_config::PrismConfig::default(),
            Some(format!("config load failed, using defaults: {e}")),
        ),
    }
}
