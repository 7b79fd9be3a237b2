//! # Check Target Model
//!
//! Defines the possible inputs for a reachability check.
//!
//! A caller hands over either a single target or a sequence of them, each of which can be:
//! * A full URL (e.g., `https://example.org/health`).
//! * A bare hostname, optionally with a port (e.g., `example.org`, `127.0.0.1:8080`),
//!   which is probed over plain `http://`.
//!
//! The raw string is kept as the key of the result map, so callers get back exactly what
//! they passed in.

use std::collections::HashSet;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use reqwest::Url;
use tracing::debug;

use crate::error::CheckError;

const DEFAULT_SCHEME: &str = "http://";

/// A single site to be probed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    raw: String,
    url: Url,
}

impl Target {
    /// The target exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The URL the probe is sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Target {
    type Err = CheckError;

    /// Parses a string into a `Target`.
    ///
    /// Supported formats:
    /// * **URL**: anything with an `http` or `https` scheme.
    /// * **Host**: a hostname or IP, with optional port and path, probed over `http`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CheckError::EmptyTarget);
        }

        let url = parse_probe_url(trimmed).map_err(|reason| CheckError::InvalidTarget {
            target: s.to_string(),
            reason,
        })?;

        Ok(Self {
            raw: s.to_string(),
            url,
        })
    }
}

/// Turns a trimmed target into the URL that gets probed.
///
/// A bare IPv6 address such as `::1` gets its brackets added. With a port it
/// has to be written bracketed (`[::1]:8080`), since `::1:8080` is itself a
/// valid address.
fn parse_probe_url(s: &str) -> Result<Url, String> {
    let candidate = if s.contains("://") {
        s.to_string()
    } else if s.parse::<Ipv6Addr>().is_ok() {
        format!("{DEFAULT_SCHEME}[{s}]")
    } else {
        format!("{DEFAULT_SCHEME}{s}")
    };

    let url = Url::parse(&candidate).map_err(|e| e.to_string())?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{other}'")),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err("missing host".to_string());
    }

    Ok(url)
}

/// What a caller passed as "the targets", before validation.
///
/// Built through the `From` impls so `check("a")`, `check(["a", "b"])` and
/// `check(None::<&str>)` all work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetInput {
    /// Nothing was passed.
    Missing,
    /// A single target.
    Single(String),
    /// An ordered sequence of targets.
    Many(Vec<String>),
}

impl From<&str> for TargetInput {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for TargetInput {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&String> for TargetInput {
    fn from(value: &String) -> Self {
        Self::Single(value.clone())
    }
}

impl<S: Into<String>> From<Vec<S>> for TargetInput {
    fn from(values: Vec<S>) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for TargetInput {
    fn from(values: &[S]) -> Self {
        Self::Many(values.iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for TargetInput {
    fn from(values: [S; N]) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TargetInput>> From<Option<T>> for TargetInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// The validated, de-duplicated targets of one check, in first-seen order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSet {
    targets: Vec<Target>,
}

impl TargetSet {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

impl TryFrom<TargetInput> for TargetSet {
    type Error = CheckError;

    fn try_from(input: TargetInput) -> Result<Self, Self::Error> {
        let raw: Vec<String> = match input {
            TargetInput::Missing => return Err(CheckError::MissingTargets),
            TargetInput::Single(s) => vec![s],
            TargetInput::Many(v) if v.is_empty() => return Err(CheckError::MissingTargets),
            TargetInput::Many(v) => v,
        };

        let mut seen: HashSet<String> = HashSet::new();
        let mut targets: Vec<Target> = Vec::new();

        for s in raw {
            if s.trim().is_empty() {
                debug!("skipping blank target");
                continue;
            }
            if !seen.insert(s.clone()) {
                debug!("skipping duplicate target {s}");
                continue;
            }
            targets.push(s.parse()?);
        }

        if targets.is_empty() {
            return Err(CheckError::EmptyTarget);
        }

        Ok(Self { targets })
    }
}

/// Splits a comma-separated list of targets (e.g., "example.org, http://127.0.0.1:8080").
///
/// Empty parts are dropped; nothing is validated here.
pub fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
