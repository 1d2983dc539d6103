//! HTTP fetcher implementation
//!
//! One page URL in, raw markup out. Failures are classified so the
//! coordinator can attribute them to a single page task. No retry logic
//! lives here.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client shared by all page fetches
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("office-scout/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single result page
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The raw markup payload
/// * `Err(FetchError)` - Non-success status, timeout, or network failure
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();

        let body = fetch_page(&client, &url).await.unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_page_surfaces_http_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/page", server.uri())).unwrap();

        let error = fetch_page(&client, &url).await.unwrap_err();
        assert!(matches!(error, FetchError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_fetch_page_surfaces_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();

        let error = fetch_page(&client, &url).await.unwrap_err();
        assert!(matches!(error, FetchError::Status { status: 404, .. }));
    }
}
