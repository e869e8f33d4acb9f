//! Storefront - browse a remote product catalog from the terminal
//!
//! Binary entry point: argument parsing, logging, settings and the choice
//! between the TUI and headless mode.

mod headless;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::info;

use storefront_api::ApiClient;
use storefront_app::config::{self, Settings};
use storefront_app::Engine;
use storefront_core::Route;

/// Storefront - browse a remote product catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront", version)]
#[command(about = "Browse a remote product catalog from the terminal", long_about = None)]
struct Args {
    /// Location to open, e.g. "/?search=phone&page=2" or "/product/<slug>"
    #[arg(value_name = "LOCATION")]
    location: Option<String>,

    /// Base URL of the catalog API (overrides STOREFRONT_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Print NDJSON events for the location and exit (no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        return init_config();
    }

    storefront_core::logging::init()?;

    let settings = config::load_settings();
    let api_url = config::resolve_api_url(args.api_url.as_deref(), &settings);
    info!("Using API at {}", api_url);

    let api = build_client(&api_url, &settings)?;

    let location = args.location.as_deref().unwrap_or("/");
    let initial = Route::parse_with(location, &settings.filter_defaults());

    let engine = Engine::new(api, settings, initial);

    if args.headless {
        if headless::runner::run_headless(engine).await?.is_none() {
            headless::HeadlessEvent::error("Interrupted before the location loaded", true).emit();
        }
        return Ok(());
    }

    storefront_tui::run(engine).await?;
    Ok(())
}

fn build_client(api_url: &str, settings: &Settings) -> color_eyre::Result<ApiClient> {
    let mut builder = ApiClient::builder(api_url);
    if let Some(secs) = settings.api.timeout_secs {
        builder = builder.with_timeout(std::time::Duration::from_secs(secs));
    }
    builder
        .build()
        .wrap_err_with(|| format!("Failed to create API client for {api_url}"))
}

fn init_config() -> color_eyre::Result<()> {
    let Some(path) = config::config_path() else {
        color_eyre::eyre::bail!("No config directory on this platform");
    };
    config::init_config_file(&path)?;
    println!("Config file: {}", path.display());
    Ok(())
}
