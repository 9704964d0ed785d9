/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::{AppError, ErrorResponse};
use reqwest::header::HeaderMap;
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// A fully read HTTP response from the API.
///
/// The body has already been drained from the connection, so holding on to an
/// `ApiResponse` never keeps a connection busy and callers never have to close
/// anything.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Method of the request that produced this response
    pub method: Method,
    /// URL of the request that produced this response
    pub url: Url,
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Reads the whole body of `response` and closes it.
    ///
    /// A body that cannot be read on a non-2xx response is treated as empty so the
    /// status is still reported as an API error.
    pub async fn read(method: Method, response: Response) -> Result<Self, AppError> {
        let status = response.status();
        let url = response.url().clone();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if !status.is_success() => {
                debug!("Discarding unreadable error body: {}", e);
                Vec::new()
            }
            Err(e) => return Err(AppError::Transport(e)),
        };
        Ok(Self {
            method,
            url,
            status,
            headers,
            body,
        })
    }

    /// Returns true when the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "Message", alias = "message", default)]
    message: Option<String>,
}

/// Checks a response for an API error.
///
/// Responses with a 2xx status are handed back unchanged. Any other status becomes
/// [`AppError::Api`]. The error body is expected to be empty or a JSON object with a
/// `Message` field; anything else leaves the message empty but the error is still
/// reported with its status.
pub fn check_response(response: ApiResponse) -> Result<ApiResponse, AppError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_default();
    Err(AppError::Api(ErrorResponse::new(response, message)))
}

/// Encodes an options value into query parameters.
///
/// The value must serialize to a flat object. Every field becomes one parameter,
/// `null` fields are dropped and fields skipped by serde never appear. Parameters
/// come out sorted by name. Nested objects or arrays cannot be expressed in a query
/// string and fail with [`AppError::Encoding`]; list fields are expected to be
/// pre-joined by their serializer.
pub fn encode_query<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>, AppError> {
    let value = serde_json::to_value(query)
        .map_err(|e| AppError::Encoding(format!("cannot encode query options: {e}")))?;
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(AppError::Encoding(format!(
                "query options must encode to an object, got {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(AppError::Encoding(format!(
                    "query parameter `{name}` is not a scalar value"
                )));
            }
        };
        pairs.push((name, value));
    }
    Ok(pairs)
}
