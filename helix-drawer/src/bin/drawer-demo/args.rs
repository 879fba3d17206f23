//! Command-line argument parsing.
//!
//! `drawer-demo [--placement <left|right|top|bottom>] [--no-mask] [--config <path>]`

use std::path::PathBuf;

use helix_drawer::Placement;

/// Options given on the command line.
#[derive(Debug, Clone, Default)]
pub struct DemoArgs {
    pub placement: Option<Placement>,
    pub no_mask: bool,
    pub config: Option<PathBuf>,
    /// Problems found while parsing, logged once logging is up.
    pub warnings: Vec<String>,
}

/// Parse command-line arguments.
pub fn parse_args() -> DemoArgs {
    parse(std::env::args().skip(1))
}

fn parse(args: impl IntoIterator<Item = String>) -> DemoArgs {
    let mut parsed = DemoArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-mask" => parsed.no_mask = true,
            "--placement" => match args.next().map(|value| value.parse::<Placement>()) {
                Some(Ok(placement)) => parsed.placement = Some(placement),
                Some(Err(err)) => parsed.warnings.push(err),
                None => parsed.warnings.push("--placement needs a value".to_string()),
            },
            "--config" => match args.next() {
                Some(path) => parsed.config = Some(PathBuf::from(path)),
                None => parsed.warnings.push("--config needs a path".to_string()),
            },
            other => parsed.warnings.push(format!("ignoring unknown argument: {other}")),
        }
    }

    parsed
}
