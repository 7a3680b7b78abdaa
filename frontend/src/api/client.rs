use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::{
    api::types::{ApiError, ErrorPayload},
    config,
};

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    #[cfg(target_arch = "wasm32")]
    fn stored_token() -> Option<String> {
        crate::utils::storage::session_token()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn stored_token() -> Option<String> {
        None
    }

    /// Attaches the bearer token when one is stored and executes the request.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = match Self::stored_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_transport::find_mock(request.url().as_str()) {
            return responder
                .respond(&request)
                .map(MockResponse::into_response);
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API answered 401; stored token is missing or expired");
        }
    }

    pub(crate) fn map_error_payload_parse_failure(error: reqwest::Error) -> ApiError {
        ApiError::unknown(format!("Failed to parse error: {}", error))
    }
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        let payload: ErrorPayload = response
            .json()
            .await
            .map_err(ApiClient::map_error_payload_parse_failure)?;
        Err(ApiError::from_payload(status.as_u16(), payload))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_transport {
    use crate::api::types::ApiError;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    pub struct MockResponse {
        status: u16,
        body: Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self { status, body }
        }

        pub fn into_response(self) -> reqwest::Response {
            let response = http::Response::builder()
                .status(self.status)
                .header("content-type", "application/json")
                .body(self.body.to_string())
                .expect("mock response");
            reqwest::Response::from(response)
        }
    }

    pub trait TestResponder {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    thread_local! {
        static MOCKS: RefCell<Vec<(String, Arc<dyn TestResponder>)>> = RefCell::new(Vec::new());
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        MOCKS.with(|mocks| mocks.borrow_mut().push((base_url, responder)));
    }

    pub(super) fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
        MOCKS.with(|mocks| {
            mocks
                .borrow()
                .iter()
                .rev()
                .find(|(base, _)| url.starts_with(base.as_str()))
                .map(|(_, responder)| responder.clone())
        })
    }
}
