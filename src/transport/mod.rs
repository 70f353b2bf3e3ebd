//! The seam between the client and the HTTP substrate.
//!
//! The client only needs "send this request, give me the response". Anything
//! implementing [`Transport`] can stand in for [`HttpTransport`], which is how
//! tests and non-standard deployments plug in.

mod http;

use std::{fmt, io::Cursor, pin::Pin};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{error::WebHdfsResult, protocol::Method};

pub use http::HttpTransport;

/// Streamed request body
pub type RequestBody = Pin<Box<dyn AsyncRead + Send + Sync>>;
/// Streamed response body
pub type ResponseBody = Pin<Box<dyn AsyncRead + Send>>;

/// A fully formed request
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("body", &self.body.is_some())
            .finish()
    }
}

pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: ResponseBody,
}

impl Response {
    /// Builds a response around an in-memory body.
    pub fn new<B: Into<Vec<u8>>>(status: u16, body: B) -> Self {
        Self {
            status,
            headers: vec![],
            body: Box::pin(Cursor::new(body.into())),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the first header with the given name, compared case-insensitively
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Reads the whole body.
    pub async fn bytes(mut self) -> WebHdfsResult<Vec<u8>> {
        let mut bytes = Vec::new();
        let _ = self.body.read_to_end(&mut bytes).await?;
        Ok(bytes)
    }

    /// Reads the whole body as text, replacing invalid UTF-8.
    pub async fn text(self) -> WebHdfsResult<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Sends a request and returns the response. This is `async_trait`
///
/// Failures to deliver the request are reported as
/// [`Error::Transport`](crate::Error::Transport). A response with any status
/// code, including errors, is a successful send.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> WebHdfsResult<Response>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_response_text() {
        let response = Response::new(200, r#"{"boolean":true}"#);
        assert!(response.is_success());
        assert_eq!(response.text().await.unwrap(), r#"{"boolean":true}"#);
    }

    #[test]
    fn test_response_header() {
        let mut response = Response::new(307, "");
        response
            .headers
            .push(("Location".to_owned(), "http://datanode:9864/".to_owned()));

        assert!(!response.is_success());
        assert_eq!(response.header("location"), Some("http://datanode:9864/"));
        assert_eq!(response.header("content-type"), None);
    }
}
