use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Prefixes log lines with a colored level marker. Status lines on
/// [`PRINT_TARGET`] are written untouched.
pub struct StatusFormatter {
    /// Name the emitting module too, for `-vv` and up.
    show_origin: bool,
}

impl<S, N> FormatEvent<S, N> for StatusFormatter
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
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            write!(writer, "{} ", level_marker(meta.level()))?;
            if self.show_origin {
                write!(writer, "{} ", format!("{}:", meta.target()).bright_black())?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_marker(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        Level::DEBUG => "[?]".blue(),
        Level::TRACE => "[ ]".dimmed(),
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `-v` unless `silent` is set, which only lets errors through.
pub fn init_logging(verbose: u8, silent: bool) {
    let filter: EnvFilter = if silent {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbose)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(StatusFormatter {
            show_origin: verbose >= 2,
        })
        .init();
}

fn directive(verbose: u8) -> String {
    match verbose {
        0 => format!("warn,{PRINT_TARGET}=info"),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
