/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::http::ApiResponse;
use reqwest::{Method, StatusCode, Url};
use std::error::Error;
use std::fmt;

/// Result alias used across the library
pub type RiqResult<T> = Result<T, AppError>;

/// Errors returned by the RelateIQ client
#[derive(Debug)]
pub enum AppError {
    /// The request could not be sent or the response could not be read.
    /// No response is available.
    Transport(reqwest::Error),
    /// The API answered with a status outside the 2xx range
    Api(ErrorResponse),
    /// The query options, request body or request path could not be encoded
    Encoding(String),
    /// A 2xx response body could not be decoded into the expected type
    Decode {
        /// Method of the request that produced the body
        method: Method,
        /// URL of the request that produced the body
        url: Url,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// Process configuration is missing or invalid
    Config(String),
}

impl AppError {
    /// Returns the HTTP status code when the error is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api(e) => Some(e.status_code()),
            _ => None,
        }
    }

    /// Returns the raw response when the error is an API error
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            AppError::Api(e) => Some(&e.response),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::Api(e) => write!(f, "{e}"),
            AppError::Encoding(msg) => write!(f, "encoding error: {msg}"),
            AppError::Decode {
                method,
                url,
                source,
            } => write!(
                f,
                "reading response from {} {}: {}",
                method,
                request_uri(url),
                source
            ),
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Api(e) => Some(e),
            AppError::Decode { source, .. } => Some(source),
            AppError::Encoding(_) | AppError::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e)
    }
}

impl From<ErrorResponse> for AppError {
    fn from(e: ErrorResponse) -> Self {
        AppError::Api(e)
    }
}

/// An error reported by the API for a request.
///
/// Only the error mapper ([`check_response`](crate::model::http::check_response))
/// builds these; the response that caused the error stays attached so callers can
/// inspect headers and body without issuing the call again.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// Message from the error body, empty when the body was absent or not JSON
    pub message: String,
    /// HTTP response that caused this error
    pub response: ApiResponse,
}

impl ErrorResponse {
    pub(crate) fn new(response: ApiResponse, message: String) -> Self {
        Self { message, response }
    }

    /// HTTP status of the response
    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    /// Numeric HTTP status code of the response
    pub fn status_code(&self) -> u16 {
        self.response.status.as_u16()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.response.method,
            self.response.url,
            self.status_code(),
            self.message
        )
    }
}

impl Error for ErrorResponse {}

// Path plus query, as sent on the request line.
fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
