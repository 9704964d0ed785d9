/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Transport client for the RelateIQ API
//!
//! The client resolves relative paths against the versioned API root, authenticates
//! every request with HTTP Basic auth and decodes JSON responses. It keeps no per-call
//! state, so a single instance can be shared between tasks.
//!
//! # Example
//! ```ignore
//! use relateiq_client::prelude::*;
//!
//! let client = Client::new(None, Credentials::new("key", "secret"));
//! let request = client.build_request::<_, ()>(Method::GET, "accounts", Some(&ListOptions::new(0, 5)), None)?;
//! let (page, response): (ListEnvelope<Account>, ApiResponse) = client.execute(request).await?;
//! ```

use crate::application::config::{Config, Credentials};
use crate::application::services::AccountsService;
use crate::constants::{DEFAULT_BASE_URL, USER_AGENT};
use crate::error::AppError;
use crate::model::http::{ApiResponse, check_response, encode_query};
use reqwest::Client as HttpInternalClient;
use reqwest::header;
use reqwest::{Method, Request, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the RelateIQ HTTP API
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    user_agent: String,
    credentials: Credentials,
    http_client: HttpInternalClient,
}

impl Client {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `http_client` - Transport to use, a default `reqwest::Client` when `None`.
    ///   Timeouts and connection pooling are properties of this transport.
    /// * `credentials` - API key and secret used on every request
    pub fn new(http_client: Option<HttpInternalClient>, credentials: Credentials) -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL must be valid");
        Self {
            base_url,
            user_agent: USER_AGENT.to_string(),
            credentials,
            http_client: http_client.unwrap_or_default(),
        }
    }

    /// Creates a client from a [`Config`].
    ///
    /// # Returns
    /// * `Ok(Client)` - Client using the configured base URL, user agent and timeout,
    ///   a timeout of zero means none
    /// * `Err(AppError::Config)` - If credentials are missing or the settings are invalid
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let credentials = config.credentials()?;
        let mut builder = HttpInternalClient::builder();
        // zero leaves the transport without a request timeout
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;

        let mut client = Self::new(Some(http_client), credentials);
        client.set_base_url(&config.rest_api.base_url)?;
        client.set_user_agent(config.rest_api.user_agent.clone());
        Ok(client)
    }

    /// Base URL every request path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replaces the base URL.
    ///
    /// A trailing slash is added when missing so that relative paths resolve below
    /// the given path instead of replacing its last segment.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), AppError> {
        let mut url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "base URL {base_url:?} cannot hold relative paths"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(())
    }

    /// User agent sent with every request
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Replaces the user agent sent with every request
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    /// Accounts endpoints
    pub fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    /// Builds an authenticated API request.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the API root, without a leading slash (e.g. "accounts")
    /// * `query` - Options encoded as the query string, see [`encode_query`]
    /// * `body` - Value sent as the JSON body
    ///
    /// # Returns
    /// * `Ok(Request)` - Request carrying Basic auth and the configured user agent
    /// * `Err(AppError::Encoding)` - If the path, query or body cannot be encoded
    pub fn build_request<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Request, AppError>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        if path.starts_with('/') {
            return Err(AppError::Encoding(format!(
                "request path {path:?} must be relative to the API root"
            )));
        }
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| AppError::Encoding(format!("invalid request path {path:?}: {e}")))?;

        if let Some(query) = query {
            let pairs = encode_query(query)?;
            if pairs.is_empty() {
                url.set_query(None);
            } else {
                url.query_pairs_mut().clear().extend_pairs(pairs.iter());
            }
        }

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| AppError::Encoding(format!("cannot encode request body: {e}")))?;

        let mut request = self
            .http_client
            .request(method, url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .header(header::USER_AGENT, &self.user_agent);

        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        request
            .build()
            .map_err(|e| AppError::Encoding(format!("cannot build request: {e}")))
    }

    /// Sends a request and checks the response status without decoding the body.
    ///
    /// The body is always read to the end before returning.
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Response with a 2xx status
    /// * `Err(AppError::Transport)` - If the request could not be sent
    /// * `Err(AppError::Api)` - If the status is outside 2xx; the response is inside the error
    pub async fn send(&self, request: Request) -> Result<ApiResponse, AppError> {
        let method = request.method().clone();
        debug!("{} {}", method, request.url());

        let response = self.http_client.execute(request).await?;
        debug!("Response status: {}", response.status());

        let response = ApiResponse::read(method, response).await?;
        check_response(response)
    }

    /// Sends a request and decodes the JSON body of a successful response.
    ///
    /// # Returns
    /// * `Ok((T, ApiResponse))` - Decoded body and the response it came from
    /// * `Err(AppError::Decode)` - If a 2xx body does not decode into `T`
    /// * any error of [`Client::send`]
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<(T, ApiResponse), AppError> {
        let response = self.send(request).await?;
        let value = response.json::<T>().map_err(|source| AppError::Decode {
            method: response.method.clone(),
            url: response.url.clone(),
            source,
        })?;
        Ok((value, response))
    }

    /// Makes a GET request and decodes the response
    pub async fn get<Q, T>(&self, path: &str, query: Option<&Q>) -> Result<(T, ApiResponse), AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request::<Q, ()>(Method::GET, path, query, None)?;
        self.execute(request).await
    }
}
