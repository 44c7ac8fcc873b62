#![allow(non_snake_case)]

mod app;
mod item;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use formkit_core::SchemaConfig;
use tracing_subscriber::EnvFilter;

/// Schema override loaded from `--schema`
static SCHEMA_CONFIG: OnceLock<Option<SchemaConfig>> = OnceLock::new();

/// Window title, shown as the page heading too
static APP_TITLE: OnceLock<String> = OnceLock::new();

const DEFAULT_TITLE: &str = "formkit";

/// Schema override, if one was given on the command line
pub fn schema_config() -> Option<&'static SchemaConfig> {
    SCHEMA_CONFIG.get().and_then(Option::as_ref)
}

pub fn app_title() -> &'static str {
    APP_TITLE.get().map(String::as_str).unwrap_or(DEFAULT_TITLE)
}

/// formkit - schema-driven forms demo
#[derive(Parser, Debug)]
#[command(name = "formkit-desktop")]
#[command(about = "Render an item form from UI metadata")]
struct Args {
    /// JSON file with `field_order` and `ui` replacing the built-in item layout
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Window title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.schema {
        Some(path) => {
            let config = SchemaConfig::load(path)
                .with_context(|| format!("loading schema config {}", path.display()))?;
            for name in config.unmapped_fields() {
                tracing::warn!(field = name, "field has no ui metadata, using a text input");
            }
            Some(config)
        }
        None => None,
    };

    let _ = SCHEMA_CONFIG.set(config);
    let _ = APP_TITLE.set(args.title.clone());

    tracing::info!("Starting '{}' ({}x{})", args.title, args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
