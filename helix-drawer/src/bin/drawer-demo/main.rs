//! Entry point for the drawer-demo binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use helix_drawer::DrawerAppConfig;

fn main() -> Result<()> {
    let args = args::parse_args();

    // Load drawer.toml (or the file given with --config)
    let loaded = match &args.config {
        Some(path) => DrawerAppConfig::load_from(path),
        None => DrawerAppConfig::load_default(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        eprintln!("Warning: failed to load drawer config: {err}");
        eprintln!("Using default configuration");
        DrawerAppConfig::default()
    });

    if let Some(placement) = args.placement {
        config = config.with_placement(placement);
    }
    if args.no_mask {
        config = config.with_mask(false);
    }

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    log::info!("Starting drawer-demo");
    for warning in &args.warnings {
        log::warn!("{warning}");
    }

    helix_drawer::launch(config)
}
