use std::fmt::Display;

use http::{header::ACCEPT, Method, StatusCode};
use serde::de::DeserializeOwned;

use thiserror::Error;

/// An error of the underlying transport.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    #[from]
    error: hyper::Error,
    #[cfg(target_family = "wasm")]
    #[from]
    error: reqwasm::Error,
}

#[derive(Clone, Debug, Default)]
pub struct Client {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerClient,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerClient,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send(&self, request: Request) -> crate::Result<Response> {
        log::debug!("{} {}", request.method, request.uri);

        self.inner.send(request).await
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    uri: String,
    method: Method,
    headers: Vec<(&'static str, String)>,
}

impl Request {
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }
}

#[derive(Clone, Debug)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    /// Creates a new `GET` request to `uri` accepting json.
    pub fn new(uri: String) -> Self {
        Self {
            inner: Request {
                uri,
                method: Method::GET,
                headers: vec![(ACCEPT.as_str(), String::from("application/json"))],
            },
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.inner.method = method;
        self
    }

    /// Appends a query parameter to the uri. `value` is percent encoded, `key` is inserted as is.
    pub fn query<T>(mut self, key: &str, value: T) -> Self
    where
        T: Display,
    {
        let sep = if self.inner.uri.contains('?') { '&' } else { '?' };

        self.inner.uri.push(sep);
        self.inner.uri.push_str(key);
        self.inner.uri.push('=');
        self.inner.uri.push_str(&urlencoding::encode(&value.to_string()));
        self
    }

    /// Adds an header to the request.
    pub fn header<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: ToString,
    {
        self.inner.headers.push((key, value.to_string()));
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

impl From<RequestBuilder> for Request {
    fn from(req: RequestBuilder) -> Self {
        req.inner
    }
}

#[derive(Debug)]
pub struct Response {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerResponse,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerResponse,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns `true` if the response contains a 2xx status code.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Reads the complete response body.
    pub async fn bytes(self) -> crate::Result<Vec<u8>> {
        self.inner.bytes().await
    }

    pub async fn json<T>(self) -> crate::Result<T>
    where
        T: DeserializeOwned,
    {
        let buf = self.bytes().await?;

        Ok(serde_json::from_slice(&buf)?)
    }
}

#[cfg(any(target_family = "unix", target_family = "windows"))]
mod unix {
    use super::{Error, Request, Response};
    use crate::Result;

    use http::StatusCode;
    use hyper::{body, client::HttpConnector, Body};
    use hyper_tls::HttpsConnector;

    #[derive(Clone, Debug)]
    pub struct InnerClient {
        inner: hyper::Client<HttpsConnector<HttpConnector>>,
    }

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let req = hyper::Request::try_from(request)?;

            let resp = self.inner.request(req).await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    impl Default for InnerClient {
        fn default() -> Self {
            Self {
                inner: hyper::Client::builder().build(HttpsConnector::new()),
            }
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(hyper::Response<Body>);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            self.0.status()
        }

        pub async fn bytes(self) -> Result<Vec<u8>> {
            let bytes = body::to_bytes(self.0.into_body())
                .await
                .map_err(Error::from)?;

            Ok(bytes.to_vec())
        }
    }

    impl TryFrom<Request> for hyper::Request<Body> {
        type Error = http::Error;

        fn try_from(request: Request) -> std::result::Result<Self, Self::Error> {
            let mut builder = hyper::Request::builder()
                .uri(request.uri)
                .method(request.method);

            for (key, value) in request.headers {
                builder = builder.header(key, value);
            }

            builder.body(Body::empty())
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use super::{Error, Request, Response};
    use crate::Result;

    use http::{Method, StatusCode};

    #[derive(Copy, Clone, Debug, Default)]
    pub struct InnerClient;

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let method = match request.method {
                Method::OPTIONS => reqwasm::http::Method::OPTIONS,
                Method::GET => reqwasm::http::Method::GET,
                Method::POST => reqwasm::http::Method::POST,
                Method::PUT => reqwasm::http::Method::PUT,
                Method::DELETE => reqwasm::http::Method::DELETE,
                Method::PATCH => reqwasm::http::Method::PATCH,
                method => return Err(crate::Error::UnsupportedMethod(method)),
            };

            let mut req = reqwasm::http::Request::new(&request.uri).method(method);

            for (key, value) in &request.headers {
                req = req.header(key, value);
            }

            let resp = req.send().await.map_err(Error::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(reqwasm::http::Response);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }

        pub async fn bytes(self) -> Result<Vec<u8>> {
            Ok(self.0.binary().await.map_err(Error::from)?)
        }
    }
}
