#![cfg(test)]
use std::time::Duration;

use isonline_common::config::Options;
use isonline_common::report::ResultMap;
use isonline_core::check;

use crate::utils::{self, RecordingReporter};

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn logs_per_default() -> anyhow::Result<()> {
    let live = utils::start_http_server().await?;
    let dead = utils::closed_port_url().await?;
    let reporter = RecordingReporter::default();

    check(
        vec![live.url.clone(), dead.clone()],
        &Options::default().with_timeout(TIMEOUT),
        &reporter,
    )
    .await?;

    let lines = reporter.lines();
    assert_eq!(lines.len(), 2);

    let (offline, online): (Vec<&String>, Vec<&String>) =
        lines.iter().partition(|l| l.contains("offline"));
    assert_eq!(online.len(), 1);
    assert_eq!(offline.len(), 1);

    assert!(online[0].contains(&live.url));
    assert!(online[0].contains("seems to be") && online[0].contains("online"));
    assert!(offline[0].contains(&dead));
    assert!(offline[0].contains("seems to be"));

    assert!(reporter.json().is_empty());
    Ok(())
}

#[tokio::test]
async fn silent_does_not_output() -> anyhow::Result<()> {
    let server = utils::start_http_server().await?;
    let reporter = RecordingReporter::default();

    let result = check(server.url.as_str(), &Options::silent().with_timeout(TIMEOUT), &reporter).await?;

    assert!(reporter.lines().is_empty());
    assert!(reporter.json().is_empty());
    assert_eq!(result, ResultMap::from([(server.url.clone(), true)]));
    Ok(())
}

#[tokio::test]
async fn json_is_printed_once_without_prose() -> anyhow::Result<()> {
    let server = utils::start_http_server().await?;
    let reporter = RecordingReporter::default();

    let result = check(server.url.as_str(), &Options::json().with_timeout(TIMEOUT), &reporter).await?;

    let printed = reporter.json();
    assert_eq!(printed, vec![ResultMap::from([(server.url.clone(), true)])]);
    assert_eq!(printed[0], result);
    assert!(!reporter.lines().iter().any(|l| l.contains("seems to be")));
    Ok(())
}
