//! OpenAI-compatible chat-completions gateway

use super::types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use relay_application::ports::llm_gateway::{GatewayError, LlmGateway};
use relay_domain::Message;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for [`OpenAiCompatibleGateway`]
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl GatewaySettings {
    /// Build settings, reading the API key from the named environment variable.
    pub fn from_env(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key_env: &str,
        timeout: Duration,
    ) -> Self {
        let api_key = std::env::var(api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!(
                "{} is not set; sending requests without authorization",
                api_key_env
            );
        }

        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            timeout,
        }
    }
}

/// Gateway for any OpenAI-compatible `/chat/completions` endpoint.
///
/// Holds one HTTP client for the session; each call is stateless.
pub struct OpenAiCompatibleGateway {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiCompatibleGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/chat/completions",
                settings.base_url.trim_end_matches('/')
            ),
            model: settings.model,
            api_key: settings.api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        debug!(
            "POST {} ({} messages, model {})",
            self.endpoint,
            messages.len(),
            self.model
        );

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_send_error)?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(GatewayError::RequestFailed(format!("{}: {}", status, detail)));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .into_first_content()
            .ok_or(GatewayError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v1/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        body.len() >= length
    }

    fn gateway(base_url: String, api_key: Option<&str>) -> OpenAiCompatibleGateway {
        OpenAiCompatibleGateway::new(GatewaySettings {
            base_url,
            model: "test-model".to_string(),
            api_key: api_key.map(str::to_string),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gw = gateway("https://api.openai.com/v1/".to_string(), None);
        assert_eq!(gw.endpoint(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(gw.model_name(), "test-model");
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"Hi there"}}]}"#,
        )
        .await;
        let gw = gateway(url, Some("sk-test"));

        let reply = gw
            .complete(&[Message::system("sys"), Message::user("hello")])
            .await
            .unwrap();
        assert_eq!(reply, "Hi there");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains(r#""model":"test-model""#));
        assert!(request.contains(r#""role":"user","content":"hello""#));
    }

    #[tokio::test]
    async fn test_error_status_is_request_failed() {
        let (url, _server) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Invalid API key"}}"#,
        )
        .await;
        let gw = gateway(url, None);

        let err = gw.complete(&[Message::user("hello")]).await.unwrap_err();
        match err {
            GatewayError::RequestFailed(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("Invalid API key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_garbage_body_is_invalid_response() {
        let (url, _server) = serve_once("200 OK", "not json").await;
        let gw = gateway(url, None);

        let err = gw.complete(&[Message::user("hello")]).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_response() {
        let (url, _server) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let gw = gateway(url, None);

        let err = gw.complete(&[Message::user("hello")]).await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gw = gateway(format!("http://{}", addr), None);
        let err = gw.complete(&[Message::user("hello")]).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
