//! # match-table-api
//!
//! The client of the fixtures API. Requests are sent using hyper on native targets and the
//! browser fetch API on wasm targets.
pub mod endpoints;
pub mod fixtures;
pub mod http;

pub use endpoints::Endpoint;
pub use fixtures::FixturesClient;

use ::http::{Method, StatusCode};
use thiserror::Error;

use crate::http::{Request, RequestBuilder, Response};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] http::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ::http::Error),
    #[error("unsupported method: {0}")]
    UnsupportedMethod(Method),
    #[error("bad status code: {0}")]
    BadStatusCode(StatusCode),
    #[error("serde_json: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    inner: http::Client,
}

impl Client {
    /// Creates a new `Client` sending requests to the api at `base_url`.
    pub fn new<T>(base_url: T) -> Self
    where
        T: ToString,
    {
        let mut base_url = base_url.to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            inner: http::Client::new(),
        }
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fixtures(&self) -> FixturesClient<'_> {
        FixturesClient::new(self)
    }

    pub(crate) fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        RequestBuilder::new(format!("{}{}", self.base_url, endpoint.path()))
            .method(endpoint.method())
    }

    /// Sends the request. Responses without a 2xx status code are turned into
    /// [`Error::BadStatusCode`].
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        let resp = self.inner.send(request).await?;

        if !resp.is_success() {
            return Err(Error::BadStatusCode(resp.status()));
        }

        Ok(resp)
    }
}
