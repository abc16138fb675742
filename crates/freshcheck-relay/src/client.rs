//! HTTP client for the analysis webhook.

use std::time::Duration;

use anyhow::{Context, Result};
use base64::Engine;
use serde_json::json;

/// Classified transport failure for a single webhook call.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Upstream answered with a non-200 status; body is kept for diagnosis.
    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// Upstream answered 200 but the body did not parse as JSON.
    #[error("Upstream returned a non-JSON body")]
    InvalidFormat,
}

impl From<RelayError> for freshcheck_core::AppError {
    fn from(err: RelayError) -> Self {
        use freshcheck_core::AppError;
        match err {
            RelayError::Timeout => AppError::UpstreamUnreachable("Request timed out".to_string()),
            RelayError::ConnectionFailed(details) => AppError::UpstreamUnreachable(details),
            RelayError::UpstreamStatus { status, body } => AppError::UpstreamStatus { status, body },
            RelayError::InvalidFormat => AppError::UpstreamFormat,
        }
    }
}

/// Client for the external analysis webhook. One bounded attempt per call;
/// no retries.
pub struct AnalysisClient {
    http_client: reqwest::Client,
    webhook_url: String,
}

impl AnalysisClient {
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client for analysis webhook")?;

        Ok(Self {
            http_client,
            webhook_url: webhook_url.into(),
        })
    }

    /// Deliver a normalized image and return the upstream's raw JSON reply.
    #[tracing::instrument(skip(self, image), fields(size_bytes = image.len()))]
    pub async fn send(
        &self,
        image: &[u8],
        filename: &str,
        content_type: &str,
    ) -> Result<serde_json::Value, RelayError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let payload = json!({
            "image": encoded,
            "filename": filename,
            "contentType": content_type,
        });

        let response = self
            .http_client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Timeout
                } else {
                    RelayError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Failed to read response body"));
            tracing::warn!(status = status.as_u16(), "Analysis webhook returned error status");
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            if e.is_timeout() {
                RelayError::Timeout
            } else {
                tracing::error!(error = %e, "Analysis webhook returned unparseable body");
                RelayError::InvalidFormat
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(url: &str) -> AnalysisClient {
        AnalysisClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_send_returns_parsed_reply_on_200() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"timestamp":"T","output":{"identifiedFood":"Apple"}}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let reply = client
            .send(b"jpegbytes", "abc_food.jpg", "image/jpeg")
            .await
            .unwrap();

        assert_eq!(reply, json!({"timestamp":"T","output":{"identifiedFood":"Apple"}}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_encodes_payload_fields() {
        let mut server = mockito::Server::new_async().await;
        let expected = json!({
            "image": base64::engine::general_purpose::STANDARD.encode(b"jpegbytes"),
            "filename": "abc_food.jpg",
            "contentType": "image/jpeg",
        });
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::Json(expected))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server.url());
        client
            .send(b"jpegbytes", "abc_food.jpg", "image/jpeg")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_classifies_non_200_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.send(b"x", "f.jpg", "image/jpeg").await.unwrap_err();

        match err {
            RelayError::UpstreamStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "oops");
            }
            other => panic!("expected UpstreamStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_classifies_non_json_200_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.send(b"x", "f.jpg", "image/jpeg").await.unwrap_err();
        assert!(matches!(err, RelayError::InvalidFormat));
    }

    #[tokio::test]
    async fn test_send_classifies_connection_failure() {
        // Port 1 is never listening.
        let client = client_for("http://127.0.0.1:1/");
        let err = client.send(b"x", "f.jpg", "image/jpeg").await.unwrap_err();
        assert!(matches!(err, RelayError::ConnectionFailed(_)));
    }

    #[tokio::test]
    async fn test_send_classifies_timeout() {
        // A listener that accepts but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        let client =
            AnalysisClient::new(format!("http://{}/", addr), Duration::from_millis(200)).unwrap();
        let err = client.send(b"x", "f.jpg", "image/jpeg").await.unwrap_err();
        assert!(matches!(err, RelayError::Timeout));
    }
}
