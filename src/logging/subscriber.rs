//! Tracing subscriber setup: console formatter and initialisation.
use std::io::IsTerminal as _;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits compact,
/// compiler-style diagnostics (`error: ...`, `warning: ...`).
///
/// Debug and trace events are prefixed with their target so parser internals
/// can be told apart from command output.
pub(super) struct CfgFormatter {
    pub(super) color: bool,
}

impl CfgFormatter {
    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for CfgFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match *metadata.level() {
            tracing::Level::ERROR => writeln!(writer, "{}: {msg}", self.paint("1;31", "error")),
            tracing::Level::WARN => writeln!(writer, "{}: {msg}", self.paint("1;33", "warning")),
            tracing::Level::INFO => writeln!(writer, "{msg}"),
            _ => writeln!(
                writer,
                "{}",
                self.paint("2", &format!("{}: {msg}", metadata.target()))
            ),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// All events go to stderr so stdout carries only command output. The
/// console shows `info` and above, or `debug` and above when `verbose` is
/// set; a `RUST_LOG` filter overrides both. Must be called once at program
/// startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{
        EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .event_format(CfgFormatter {
            color: std::io::stderr().is_terminal(),
        })
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
