use std::time::Duration;

use crate::error::CheckError;

/// Upper bound for a single probe when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Options controlling a reachability check.
///
/// Built from CLI flags by the binary, or directly by library callers.
/// `silent` and `json` are mutually exclusive; [`Options::output_mode`]
/// enforces that before any probe is sent.
#[derive(Debug, Clone)]
pub struct Options {
    /// Suppresses every kind of output.
    ///
    /// The returned result map is unaffected: offline targets are still
    /// reported as `false`, only nothing is printed or logged for them.
    pub silent: bool,

    /// Emits the result map as a single JSON object instead of one colored
    /// line per target.
    pub json: bool,

    /// Bounds how long one probe may take, connection setup included.
    ///
    /// A probe exceeding it counts as offline.
    pub timeout: Duration,

    /// HTTP method used for the probe request.
    pub method: ProbeMethod,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            silent: false,
            json: false,
            timeout: DEFAULT_TIMEOUT,
            method: ProbeMethod::default(),
        }
    }
}

impl Options {
    pub fn silent() -> Self {
        Self { silent: true, ..Self::default() }
    }

    pub fn json() -> Self {
        Self { json: true, ..Self::default() }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_method(mut self, method: ProbeMethod) -> Self {
        self.method = method;
        self
    }

    /// Validates the flag combination and resolves it into an [`OutputMode`].
    pub fn output_mode(&self) -> Result<OutputMode, CheckError> {
        match (self.silent, self.json) {
            (true, true) => Err(CheckError::IncompatibleOptions),
            (true, false) => Ok(OutputMode::Silent),
            (false, true) => Ok(OutputMode::Json),
            (false, false) => Ok(OutputMode::Pretty),
        }
    }
}

/// How the outcome of a check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Nothing is reported.
    Silent,
    /// The whole result map is printed once as JSON.
    Json,
    /// One colored status line per target goes through the log.
    Pretty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMethod {
    #[default]
    Get,
    Head,
}

impl ProbeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
