//! Fans out one probe per target and collects the verdicts.
//!
//! Validation happens up front: bad options or unusable targets fail the
//! whole check before anything touches the network. After that the check
//! cannot fail, a target that does not answer is simply `false`.

use colored::*;
use futures::future::join_all;
use isonline_common::{
    config::{Options, OutputMode},
    error::CheckError,
    report::{Reporter, ResultMap},
    target::{TargetInput, TargetSet},
};
use tracing::{Instrument, debug, info_span};

use crate::probe::{HttpProbe, Probe};

/// Runs reachability checks with a given [`Probe`].
pub struct Checker<P: Probe> {
    probe: P,
}

impl Checker<HttpProbe> {
    /// Builds a checker that probes over HTTP(S) using `opts.timeout` and `opts.method`.
    pub fn http(opts: &Options) -> Result<Self, CheckError> {
        Ok(Self::new(HttpProbe::new(opts)?))
    }
}

impl<P: Probe> Checker<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Checks every target and reports the outcome according to `opts`.
    pub async fn check(
        &self,
        targets: impl Into<TargetInput>,
        opts: &Options,
        reporter: &dyn Reporter,
    ) -> Result<ResultMap, CheckError> {
        let mode: OutputMode = opts.output_mode()?;
        let targets: TargetSet = TargetSet::try_from(targets.into())?;

        let span = info_span!("check", targets = targets.len());
        let results: ResultMap = self.probe_all(&targets).instrument(span).await;

        report(&results, mode, reporter);
        Ok(results)
    }

    async fn probe_all(&self, targets: &TargetSet) -> ResultMap {
        let probes = targets.iter().map(|target| async move {
            let online: bool = self.probe.probe(target.url()).await;
            debug!("{} -> {}", target, online);
            (target.as_str().to_string(), online)
        });

        join_all(probes).await.into_iter().collect()
    }
}

/// Checks `targets` over HTTP(S), reporting to `reporter` as `opts` dictates.
///
/// # Errors
/// Fails only for unusable input ([`CheckError::is_usage`]) or when the HTTP
/// client cannot be set up. Unreachable targets are `false` entries.
pub async fn check(
    targets: impl Into<TargetInput>,
    opts: &Options,
    reporter: &dyn Reporter,
) -> Result<ResultMap, CheckError> {
    // Options first, so a bad flag combination is reported even with bad targets.
    opts.output_mode()?;
    Checker::http(opts)?.check(targets, opts, reporter).await
}

fn report(results: &ResultMap, mode: OutputMode, reporter: &dyn Reporter) {
    match mode {
        OutputMode::Silent => {}
        OutputMode::Json => reporter.print_json(results),
        OutputMode::Pretty => {
            for (target, online) in results {
                reporter.log_status(&status_line(target, *online));
            }
        }
    }
}

/// The human-readable verdict for one target, e.g. `example.org seems to be online`.
pub fn status_line(target: &str, online: bool) -> String {
    let status: ColoredString = if online {
        "online".green().bold()
    } else {
        "offline".red().bold()
    };
    format!("{} seems to be {}", target.bold(), status)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
