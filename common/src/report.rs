use std::collections::BTreeMap;

/// Target, exactly as supplied, mapped to whether it answered.
pub type ResultMap = BTreeMap<String, bool>;

/// Where the outcome of a check is reported.
///
/// Passed into the checker explicitly. Which method gets called depends on
/// the output mode: `log_status` once per target in pretty mode, `print_json`
/// exactly once in JSON mode, neither when silent.
pub trait Reporter: Send + Sync {
    /// Receives one human-readable, possibly colored, status line.
    fn log_status(&self, line: &str);

    /// Receives the full result map as one structured value.
    fn print_json(&self, results: &ResultMap);
}

/// Discards everything.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn log_status(&self, _line: &str) {}

    fn print_json(&self, _results: &ResultMap) {}
}

/// Renders the result map the way JSON mode prints it.
pub fn to_json(results: &ResultMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Counts the targets that answered.
pub fn online_count(results: &ResultMap) -> usize {
    results.values().filter(|online| **online).count()
}
