//! Fetching the published dataset.
//!
//! One GET, no retry, no timeout. Callers decide what a failure means for the
//! page (see [`crate::session::SummaryState`]).

#[cfg(feature = "api")]
use crate::error::{Result, WastewaterError};
#[cfg(feature = "api")]
use crate::raw::RawDataset;
#[cfg(feature = "api")]
use log::{error, info};
#[cfg(feature = "api")]
use reqwest::Client;

/// Where the generated dataset is published.
pub const DEFAULT_DATA_URL: &str = "https://wastewater-2023.s3.amazonaws.com/output2.json";

/// Fetch and parse the raw dataset at `url`.
#[cfg(feature = "api")]
pub async fn load(client: &Client, url: &str) -> Result<RawDataset> {
    info!("Fetching wastewater dataset from {}", url);
    match fetch(client, url).await {
        Ok(raw) => {
            info!(
                "Loaded {} rows across {} series from {}",
                raw.len(),
                raw.columns().len(),
                url
            );
            Ok(raw)
        }
        Err(e) => {
            error!("Failed to load dataset from {}: {}", url, e);
            Err(e)
        }
    }
}

#[cfg(feature = "api")]
async fn fetch(client: &Client, url: &str) -> Result<RawDataset> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(WastewaterError::Network(format!(
            "bad response status for {}: {}",
            url, status
        )));
    }
    let body = response.text().await?;
    RawDataset::from_json_str(&body)
}

#[cfg(all(test, feature = "api", not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::session::{summary_state, SummaryState};
    use crate::watershed::WatershedRegistry;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP reply on an ephemeral port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![0u8; 4096];
            let _ = socket.read(&mut request).await;
            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/output2.json", addr)
    }

    #[tokio::test]
    async fn test_unreachable_source_is_network_error() {
        let client = Client::new();
        let result = load(&client, "http://127.0.0.1:9/output2.json").await;
        assert!(matches!(result, Err(WastewaterError::Network(_))));
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let client = Client::new();
        let result = load(&client, "not a url").await;
        assert!(matches!(result, Err(WastewaterError::Network(_))));
    }

    #[tokio::test]
    async fn test_not_found_status_is_network_error() {
        let url = serve_once("404 Not Found", "<html>NoSuchKey</html>").await;
        let loaded = load(&Client::new(), &url).await;
        assert!(matches!(loaded, Err(WastewaterError::Network(ref msg)) if msg.contains("404")));

        let state = summary_state(loaded, &WatershedRegistry::nyc().unwrap());
        assert_eq!(state, SummaryState::Loading);
    }

    #[tokio::test]
    async fn test_html_body_with_ok_status_is_parse_error() {
        let url = serve_once("200 OK", "<html>AccessDenied</html>").await;
        let loaded = load(&Client::new(), &url).await;
        assert!(matches!(loaded, Err(WastewaterError::Parse(_))));

        let state = summary_state(loaded, &WatershedRegistry::nyc().unwrap());
        assert!(state.is_loading());
    }
}
