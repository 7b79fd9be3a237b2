mod commands;
mod terminal;

use std::process::ExitCode;
use std::time::Instant;

use commands::CommandLine;
use isonline_common::config::{Options, OutputMode};
use isonline_common::error::CheckError;
use isonline_common::report::{self, ResultMap};
use terminal::{logging, print, reporter::TerminalReporter, spinner::Spinner};
use tracing::error;

const EXIT_OFFLINE: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.silent);
    terminal::detect_colors();

    let opts: Options = commands.options();
    let mode: OutputMode = match opts.output_mode() {
        Ok(mode) => mode,
        Err(e) => return Ok(ExitCode::from(usage_error(e))),
    };

    let targets: Vec<String> = commands.targets();
    let spinner: Option<Spinner> = (mode == OutputMode::Pretty)
        .then(|| Spinner::start(format!("Checking {} target(s)...", targets.len())));
    let reporter = TerminalReporter::new(spinner);

    let start_time: Instant = Instant::now();
    let outcome = isonline_core::check(targets, &opts, &reporter).await;
    reporter.finish();

    let results = match outcome {
        Ok(results) => results,
        Err(e) if e.is_usage() => return Ok(ExitCode::from(usage_error(e))),
        Err(e) => return Err(e.into()),
    };

    if mode == OutputMode::Pretty {
        let online: usize = report::online_count(&results);
        print::summary(online, results.len(), start_time.elapsed());
    }

    Ok(ExitCode::from(exit_status(&results)))
}

/// 0 when every target answered, otherwise [`EXIT_OFFLINE`].
fn exit_status(results: &ResultMap) -> u8 {
    if report::online_count(results) == results.len() {
        0
    } else {
        EXIT_OFFLINE
    }
}

fn usage_error(e: CheckError) -> u8 {
    error!("{e}");
    EXIT_USAGE
}
