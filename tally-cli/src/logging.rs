//! Diagnostic logging to stderr
//!
//! Verbosity comes from TALLY_LOG (an `EnvFilter` directive such as `info`
//! or `tally_core=debug`) and defaults to warnings only.

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber; a second call is a no-op
pub fn init() {
    let filter = EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(TallyFormatter)
        .try_init();
}

/// One line per event: level marker, enclosing spans, then fields
struct TallyFormatter;

impl<S, N> FormatEvent<S, N> for TallyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let marker = match *event.metadata().level() {
            Level::TRACE => "trace".dimmed(),
            Level::DEBUG => "debug".blue(),
            Level::INFO => " info".green(),
            Level::WARN => " warn".yellow().bold(),
            Level::ERROR => "error".red().bold(),
        };
        write!(writer, "{} ", marker)?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{} ", format!("{}:", span.name()).dimmed())?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
