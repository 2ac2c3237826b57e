use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Public endpoint the original tool's provider library scrapes.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Failure classes for a translation call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider is throttling this client (HTTP 429).
    #[error("provider is throttling requests (too many requests)")]
    TooManyRequests,

    /// Any other non-success HTTP response.
    #[error("provider request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// A 200 response that carried no usable translation payload.
    #[error("provider response carried no translation payload")]
    EmptyResponse,

    /// Connection, timeout, or body decoding failure.
    #[error("failed to reach translation endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProviderError {
    /// Whether the failure is the throttling class the batch treats as
    /// recoverable-with-advisory.
    pub const fn is_throttling(&self) -> bool {
        matches!(self, Self::TooManyRequests)
    }
}

/// Client for a google-translate-compatible `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct Translator {
    client: Client,
    endpoint: String,
}

impl Translator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Translates `text` into the target language `to`.
    ///
    /// Source language is auto-detected by the provider. No retries and no
    /// timeout: a hung call hangs the corresponding task.
    pub async fn translate(&self, text: &str, to: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", to),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::TooManyRequests);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let payload: Value = response.json().await?;
        extract_text(&payload).ok_or(ProviderError::EmptyResponse)
    }
}

/// Pulls the translated string out of the provider's nested-array payload.
///
/// The response body looks like `[[["hola ",...],["mundo",...]],...]`: the
/// first element is a list of segments whose first element is the translated
/// chunk.
fn extract_text(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_extract_text_concatenates_segments() {
        let payload = json!([[["hola ", "hello ", null], ["mundo", "world", null]], null, "en"]);
        assert_eq!(extract_text(&payload).unwrap(), "hola mundo");
    }

    #[test]
    fn test_extract_text_empty_payload() {
        assert!(extract_text(&json!([])).is_none());
        assert!(extract_text(&json!([[]])).is_none());
        assert!(extract_text(&json!(null)).is_none());
    }

    #[tokio::test]
    async fn test_translate_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("tl", "es"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([[["hola mundo", "hello world"]]])),
            )
            .mount(&server)
            .await;

        let translator = Translator::new(server.uri());
        let text = translator.translate("hello world", "es").await.unwrap();
        assert_eq!(text, "hola mundo");
    }

    #[tokio::test]
    async fn test_translate_classifies_throttling() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let translator = Translator::new(server.uri());
        let error = translator.translate("hello", "es").await.unwrap_err();
        assert!(error.is_throttling());
    }

    #[tokio::test]
    async fn test_translate_other_api_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let translator = Translator::new(server.uri());
        let error = translator.translate("hello", "es").await.unwrap_err();
        assert!(!error.is_throttling());
        assert!(matches!(error, ProviderError::Api { status, .. } if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_translate_empty_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[]])))
            .mount(&server)
            .await;

        let translator = Translator::new(server.uri());
        let error = translator.translate("hello", "es").await.unwrap_err();
        assert!(matches!(error, ProviderError::EmptyResponse));
    }
}
