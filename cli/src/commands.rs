use std::time::Duration;

use clap::Parser;
use isonline_common::{
    config::{DEFAULT_TIMEOUT, Options, ProbeMethod},
    target::split_commas,
};

#[derive(Parser)]
#[command(name = "isonline")]
#[command(version, about = "Checks whether websites are online.")]
pub struct CommandLine {
    /// URLs or hostnames to check, separated by spaces or commas
    pub targets: Vec<String>,

    /// Print nothing, only set the exit status
    #[arg(short, long, conflicts_with = "json")]
    pub silent: bool,

    /// Print the result as a JSON object
    #[arg(short, long)]
    pub json: bool,

    /// Seconds to wait for each target before calling it offline
    #[arg(
        short,
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Probe with HEAD instead of GET
    #[arg(long)]
    pub head: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn options(&self) -> Options {
        let method = if self.head {
            ProbeMethod::Head
        } else {
            ProbeMethod::Get
        };

        Options {
            silent: self.silent,
            json: self.json,
            ..Options::default()
        }
        .with_timeout(Duration::from_secs(self.timeout))
        .with_method(method)
    }

    /// Flattens comma-separated arguments into single targets.
    ///
    /// An argument with nothing but commas or blanks becomes an empty target,
    /// so it gets rejected rather than silently dropped.
    pub fn targets(&self) -> Vec<String> {
        self.targets
            .iter()
            .flat_map(|arg| {
                let parts = split_commas(arg);
                if parts.is_empty() { vec![String::new()] } else { parts }
            })
            .collect()
    }
}
