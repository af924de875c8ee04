//! HTTP client for the storefront backend.

use std::sync::{Arc, Mutex, PoisonError};

use reqwest::{
    Client, RequestBuilder, Response,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::Serialize;
use tracing::debug;

use crate::{
    api::{ApiConfig, ApiError, ResponseBody},
    auth::AuthToken,
};

/// Thin wrapper over [`reqwest::Client`] that owns the base URL, the request
/// timeout, and bearer-token injection.
///
/// Clones share the underlying connection pool and the auth token cell, so
/// setting a token on one clone applies to all of them.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    http: Client,
    auth_token: Arc<Mutex<Option<AuthToken>>>,
}

impl ApiClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the underlying TLS backend fails
    /// to initialize.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            config: Arc::new(config),
            http,
            auth_token: Arc::new(Mutex::new(None)),
        })
    }

    /// Install a bearer token; subsequent requests carry an
    /// `Authorization: Bearer` header.
    pub fn set_auth_token(&self, token: AuthToken) {
        *self
            .auth_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
        debug!("auth token set");
    }

    /// Remove the bearer token.
    pub fn clear_auth_token(&self) {
        *self
            .auth_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
        debug!("auth token cleared");
    }

    /// Whether a bearer token is currently installed.
    #[must_use]
    pub fn has_auth_token(&self) -> bool {
        self.auth_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Send a GET request with the given query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ResponseBody, ApiError> {
        self.send(self.http.get(self.url(path)).query(query)).await
    }

    /// Send a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    /// Send a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// Send a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody, ApiError> {
        self.send(self.http.patch(self.url(path)).json(body)).await
    }

    /// Send a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<ResponseBody, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn apply_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT, "application/json");

        let token = self
            .auth_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match token.as_ref() {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<ResponseBody, ApiError> {
        let response = self.apply_headers(request).send().await?;

        Self::normalize(response).await
    }

    /// Parse the body according to its content type and map non-2xx statuses
    /// into [`ApiError::Status`], preserving the server's message.
    async fn normalize(response: Response) -> Result<ResponseBody, ApiError> {
        let status = response.status();

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        let body = if is_json {
            match response.json().await {
                Ok(value) => ResponseBody::Json(value),
                Err(error) if status.is_success() => return Err(error.into()),
                // A malformed error body still carries the status; fall back
                // to an empty text body rather than masking the HTTP error.
                Err(_) => ResponseBody::Text(String::new()),
            }
        } else {
            ResponseBody::Text(response.text().await.unwrap_or_default())
        };

        if !status.is_success() {
            let message = body.message().unwrap_or("Request failed").to_string();

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
                body,
            });
        }

        Ok(body)
    }
}
