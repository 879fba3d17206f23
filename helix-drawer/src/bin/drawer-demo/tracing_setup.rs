//! Tracing configuration for the drawer-demo binary.
//!
//! Sets up the tracing subscriber with a formatter that drops messages
//! matching configured noise patterns (webview chatter such as
//! `SelectionDidChange` or pointer move events).
//!
//! Must be initialized BEFORE Dioxus launch to prevent dioxus-logger from
//! setting its own subscriber.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use helix_drawer::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Event formatter that skips messages containing a suppressed pattern.
struct FilteringFormatter {
    inner: fmt::format::Format,
    suppressed_patterns: Vec<String>,
}

impl FilteringFormatter {
    fn new(suppressed_patterns: Vec<String>) -> Self {
        Self {
            inner: fmt::format::Format::default().with_target(false),
            suppressed_patterns,
        }
    }

    fn is_suppressed(&self, message: &str) -> bool {
        self.suppressed_patterns
            .iter()
            .any(|pattern| message.contains(pattern.as_str()))
    }
}

impl<S, N> FormatEvent<S, N> for FilteringFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut message_buf = String::new();
        self.inner
            .format_event(ctx, Writer::new(&mut message_buf), event)?;

        if self.is_suppressed(&message_buf) {
            return Ok(());
        }
        write!(writer, "{message_buf}")
    }
}

/// Crates whose output is capped at `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: &[&str] = &["dioxus_core", "dioxus_desktop", "wry", "tao"];

/// Default filter: the configured level for the drawer crates, `warn` for the
/// webview stack underneath.
fn default_filter(level: &str) -> EnvFilter {
    let mut directives = vec![format!("warn,helix_drawer={level},drawer_demo={level}")];
    directives.extend(QUIET_TARGETS.iter().map(|target| format!("{target}=warn")));
    EnvFilter::new(directives.join(","))
}

/// Log file writer, or stderr when no file is configured or it cannot be created.
fn make_writer(log_file: Option<&Path>) -> (BoxMakeWriter, bool) {
    match log_file.map(|path| (path, File::create(path))) {
        Some((path, Ok(file))) => {
            eprintln!("Logging to {}", path.display());
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        Some((path, Err(err))) => {
            eprintln!("Cannot create log file {}: {err}", path.display());
            (BoxMakeWriter::new(io::stderr), true)
        }
        None => (BoxMakeWriter::new(io::stderr), true),
    }
}

/// Initialize the tracing subscriber from `LoggingConfig`.
///
/// `RUST_LOG` overrides [`default_filter`]; messages matching a suppressed
/// pattern are dropped by [`FilteringFormatter`].
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.level));
    let (writer, ansi) = make_writer(config.log_file.as_deref());

    let fmt_layer = fmt::layer()
        .with_ansi(ansi)
        .with_writer(writer)
        .event_format(FilteringFormatter::new(config.suppressed_patterns.clone()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
