//! HTTP client for the order server
//!
//! Every JSON route answers with the `ApiResponse` envelope; non-2xx answers
//! and envelopes with a non-zero code become `ClientError::Api`.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use std::time::Duration;

/// HTTP client for making requests to the order server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET and unwrap the envelope
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// GET with query parameters
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// PUT a JSON body
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::handle_response(response).await
    }

    /// GET a binary download (exports)
    pub async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let response = self.request(Method::GET, path).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        response: Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        match envelope.code {
            None | Some(0) => Ok(envelope),
            Some(code) => Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message: envelope.message,
            }),
        }
    }

    /// Read an error envelope; bodies that are not envelopes keep their raw text.
    async fn api_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ClientError::Http(e),
        };

        match serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
            Ok(envelope) => ClientError::Api {
                status,
                code: envelope.code.unwrap_or_default(),
                message: envelope.message,
            },
            Err(_) => ClientError::Api {
                status,
                code: 0,
                message: text,
            },
        }
    }
}

/// Require the `data` field of a success envelope
pub(crate) fn into_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
    response
        .data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}
