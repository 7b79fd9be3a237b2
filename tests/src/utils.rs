use std::sync::Mutex;

use axum::Router;
use axum::http::{StatusCode, header};
use isonline_common::report::{Reporter, ResultMap};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A loopback listener that lives until dropped.
pub struct TestServer {
    pub url: String,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serves `router` on a random loopback port.
pub async fn serve(router: Router) -> anyhow::Result<TestServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestServer { url, handle })
}

/// Answers every request with `200 OK`.
pub async fn start_http_server() -> anyhow::Result<TestServer> {
    serve(Router::new().fallback(|| async { "ok" })).await
}

/// Answers every request with `302 Found` pointing at `location`.
pub async fn start_redirect_server(location: String) -> anyhow::Result<TestServer> {
    let router = Router::new().fallback(move || {
        let location = location.clone();
        async move { (StatusCode::FOUND, [(header::LOCATION, location)]) }
    });
    serve(router).await
}

/// Accepts connections and closes them without a response.
pub async fn start_closing_server() -> anyhow::Result<TestServer> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}/socketclose", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            drop(stream);
        }
    });

    Ok(TestServer { url, handle })
}

/// A loopback URL nothing listens on.
pub async fn closed_port_url() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

/// Keeps everything a check reports.
#[derive(Default)]
pub struct RecordingReporter {
    pub lines: Mutex<Vec<String>>,
    pub json: Mutex<Vec<ResultMap>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn json(&self) -> Vec<ResultMap> {
        self.json.lock().map(|j| j.clone()).unwrap_or_default()
    }
}

impl Reporter for RecordingReporter {
    fn log_status(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }

    fn print_json(&self, results: &ResultMap) {
        if let Ok(mut json) = self.json.lock() {
            json.push(results.clone());
        }
    }
}
