use std::{fmt, marker::PhantomData};

use async_trait::async_trait;
use isahc::{
    http::{Method, StatusCode},
    AsyncReadResponseExt,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::asset::AssetError;

pub struct Request<T> {
    phantom: PhantomData<fn() -> T>,
    pub method: Method,
    pub uri: String,
    pub body: Option<String>,
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("uri", &self.uri)
            .field("body", &self.body)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    // 401 or 403 response, the token is wrong or lacks access
    #[error("request was not authorized")]
    Authorization,

    // connection failure, timeout, tls error
    #[error("network error: {0}")]
    Network(#[source] isahc::Error),

    #[error("could not read response: {0}")]
    Body(#[source] std::io::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(#[source] isahc::http::Error),

    // 429 response, reported as is since every call is sent once
    #[error("rate limited")]
    RateLimited,

    // any other 4xx response
    #[error("client error: {0}")]
    ClientError(StatusCode),

    // 5xx response
    #[error("server error: {0}")]
    ServerError(StatusCode),

    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

pub type Result<T> = ::std::result::Result<T, RequestError>;

impl<T> Request<T> {
    fn new(method: Method, uri: String, body: Option<String>) -> Self {
        Request {
            phantom: PhantomData,
            method,
            uri,
            body,
        }
    }

    pub fn get<S>(uri: S) -> Self
    where
        S: Into<String>,
    {
        Request::new(Method::GET, uri.into(), None)
    }

    pub fn post<S>(uri: S, body: &impl Serialize) -> Result<Self>
    where
        S: Into<String>,
    {
        let body = serde_json::to_string(body).map_err(RequestError::Encode)?;
        Ok(Request::new(Method::POST, uri.into(), Some(body)))
    }

    pub fn patch<S>(uri: S, body: &impl Serialize) -> Result<Self>
    where
        S: Into<String>,
    {
        let body = serde_json::to_string(body).map_err(RequestError::Encode)?;
        Ok(Request::new(Method::PATCH, uri.into(), Some(body)))
    }

    pub fn delete<S>(uri: S) -> Self
    where
        S: Into<String>,
    {
        Request::new(Method::DELETE, uri.into(), None)
    }
}

/// A REST transport.
///
/// Implementors only have to send a single request and hand back the response
/// text; decoding into the expected type happens in [`Client::request`].
#[async_trait]
pub trait Client: Sync {
    /// Sends one request and returns the raw response body. A response without
    /// content is reported as `"null"`.
    async fn execute(&self, method: Method, uri: &str, body: Option<&str>) -> Result<String>;

    async fn request<T>(&self, request: Request<T>) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let text = self
            .execute(request.method, &request.uri, request.body.as_deref())
            .await?;
        serde_json::from_str(&text).map_err(RequestError::Decode)
    }
}

pub const API_BASE: &str = "https://discord.com/api/v10";

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct Bot {
    token: String,
    api_base: String,
}

impl fmt::Debug for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bot")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl Bot {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self::with_api_base(token, API_BASE)
    }

    pub fn with_api_base<S1, S2>(token: S1, api_base: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            token: token.into(),
            api_base: api_base.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Maps a non-success status onto the error reported to the caller.
pub(crate) fn status_error(status: StatusCode) -> Option<RequestError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        Some(RequestError::RateLimited)
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Some(RequestError::Authorization)
    } else if status.is_client_error() {
        Some(RequestError::ClientError(status))
    } else if status.is_server_error() {
        Some(RequestError::ServerError(status))
    } else {
        None
    }
}

#[async_trait]
impl Client for Bot {
    async fn execute(&self, method: Method, uri: &str, body: Option<&str>) -> Result<String> {
        debug!(%method, uri, "sending request");

        let http = isahc::Request::builder()
            .method(method.clone())
            .uri(format!("{}{}", self.api_base, uri))
            .header("User-Agent", format!("DiscordBot ({}, {})", NAME, VERSION))
            .header("Authorization", format!("Bot {}", self.token));

        let request = match body {
            Some(body) => http
                .header("Content-Type", "application/json")
                .body(isahc::AsyncBody::from(body.to_owned())),
            None => http.body(isahc::AsyncBody::empty()),
        }
        .map_err(RequestError::InvalidRequest)?;

        let mut response = isahc::send_async(request)
            .await
            .map_err(RequestError::Network)?;

        let status = response.status();
        if let Some(err) = status_error(status) {
            warn!(%method, uri, %status, "request failed");
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok("null".to_owned());
        }

        let text = response.text().await.map_err(RequestError::Body)?;
        if text.is_empty() {
            Ok("null".to_owned())
        } else {
            Ok(text)
        }
    }
}
