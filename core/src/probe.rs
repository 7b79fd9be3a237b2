//! The single outbound request that decides whether a target is online.

use async_trait::async_trait;
use isonline_common::{
    config::{Options, ProbeMethod},
    error::CheckError,
};
use reqwest::{Client, Method, Url, redirect};
use tracing::{debug, trace};

/// Sends one request and reports whether anything answered.
///
/// Implementations never fail: every transport-level problem is a `false`.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &Url) -> bool;
}

/// Probes over HTTP(S) with a shared [`reqwest::Client`].
pub struct HttpProbe {
    client: Client,
    method: Method,
}

impl HttpProbe {
    pub fn new(opts: &Options) -> Result<Self, CheckError> {
        // The target's own response decides, wherever a redirect would lead.
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(opts.timeout)
            .connect_timeout(opts.timeout)
            .build()
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        let method = match opts.method {
            ProbeMethod::Get => Method::GET,
            ProbeMethod::Head => Method::HEAD,
        };

        Ok(Self { client, method })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: &Url) -> bool {
        trace!("{} {}", self.method, url);

        // Any status counts, even 4xx/5xx: the host answered.
        match self.client.request(self.method.clone(), url.clone()).send().await {
            Ok(resp) => {
                debug!("{url} answered with {}", resp.status());
                true
            }
            Err(e) => {
                debug!("{url} unreachable: {}", describe(&e));
                false
            }
        }
    }
}

fn describe(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_request() {
        "request failed"
    } else {
        "transport error"
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
