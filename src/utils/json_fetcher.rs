use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, error};

#[derive(Debug, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout).
    Transport(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The body was not JSON, or not the JSON shape the caller asked for.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "Request failed: {}", e),
            FetchError::Status(code) => write!(f, "Unexpected status code: {}", code),
            FetchError::Decode(e) => write!(f, "Failed to decode response body: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Clone)]
pub struct JsonFetcher {
    client: reqwest::Client,
}

impl JsonFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });

        JsonFetcher { client }
    }

    /// GETs `url` and decodes the body as `T`. Every failure is logged before it
    /// is returned.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let safe_url = redact_credentials(url);
        debug!("GET {}", safe_url);

        let resp = self.client.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            error!("Error getting data from {}: {}", safe_url, e);
            FetchError::Transport(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            error!("Error getting data from {}: status {}", safe_url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            error!("Error decoding data from {}: {}", safe_url, e);
            FetchError::Decode(e.to_string())
        })
    }
}

const SECRET_PARAMS: [&str; 3] = ["access_token", "api_key", "APPID"];

/// Replaces the value of any credential query parameter so URLs can be logged.
pub fn redact_credentials(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if SECRET_PARAMS.contains(&key) => format!("{}=REDACTED", key),
            _ => pair.to_string(),
        })
        .collect::<Vec<String>>()
        .join("&");

    format!("{}?{}", base, query)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;

    fn fetcher() -> JsonFetcher {
        JsonFetcher::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn returns_parsed_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data")
            .with_header("content-type", "application/json")
            .with_body(json!({ "hello": ["world"] }).to_string())
            .create_async()
            .await;

        let body = fetcher()
            .get_json::<serde_json::Value>(&format!("{}/data", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body["hello"][0], "world");
    }

    #[tokio::test]
    #[traced_test]
    async fn http_error_is_a_status_failure_not_a_panic() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data")
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let result = fetcher()
            .get_json::<serde_json::Value>(&format!("{}/data", server.url()))
            .await;

        assert_eq!(result, Err(FetchError::Status(500)));
        assert!(logs_contain("status 500"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_failure() {
        // Nothing listens on port 9 on the loopback interface.
        let result = fetcher()
            .get_json::<serde_json::Value>("http://127.0.0.1:9/data")
            .await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn wrong_shape_is_a_decode_failure() {
        #[derive(Deserialize, Debug)]
        struct Expected {
            #[allow(dead_code)]
            data: Vec<String>,
        }

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data")
            .with_body(json!({ "other": 1 }).to_string())
            .create_async()
            .await;

        let result = fetcher()
            .get_json::<Expected>(&format!("{}/data", server.url()))
            .await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    #[traced_test]
    async fn credentials_are_not_logged() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/data")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let _ = fetcher()
            .get_json::<serde_json::Value>(&format!(
                "{}/data?q=Boston&api_key=hunter2",
                server.url()
            ))
            .await;

        assert!(logs_contain("api_key=REDACTED"));
        assert!(!logs_contain("hunter2"));
    }

    #[test]
    fn redacts_only_secret_params() {
        assert_eq!(
            redact_credentials("http://h/p.json?access_token=abc&types=poi"),
            "http://h/p.json?access_token=REDACTED&types=poi"
        );
        assert_eq!(
            redact_credentials("http://h/weather?q=Boston,us&APPID=k&units=imperial"),
            "http://h/weather?q=Boston,us&APPID=REDACTED&units=imperial"
        );
        assert_eq!(redact_credentials("http://h/stops"), "http://h/stops");
    }
}
