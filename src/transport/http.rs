use futures_util::TryStreamExt;
use reqwest::{Body, Client};
use std::{io, time::Duration};
use tokio_util::io::{ReaderStream, StreamReader};

use super::{Request, Response, Transport};
use crate::{error::WebHdfsResult, protocol::Method};

/// Default [`Transport`] over a pooled [`reqwest::Client`].
///
/// Redirects, connection reuse and TLS are left to reqwest. Request bodies
/// are streamed, so a redirect on an upload is returned to the caller rather
/// than replayed.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport without a request timeout.
    pub fn new() -> WebHdfsResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }

    /// Creates a transport that fails requests taking longer than `timeout`,
    /// body transfer included.
    pub fn with_timeout(timeout: Duration) -> WebHdfsResult<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
        })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn into_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> WebHdfsResult<Response> {
        let mut builder = self
            .client
            .request(into_reqwest(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(Body::wrap_stream(ReaderStream::new(body)));
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_owned(), value.to_owned()))
            })
            .collect();

        let stream = response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e));

        Ok(Response {
            status,
            headers,
            body: Box::pin(StreamReader::new(stream)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(into_reqwest(Method::Get), reqwest::Method::GET);
        assert_eq!(into_reqwest(Method::Put), reqwest::Method::PUT);
        assert_eq!(into_reqwest(Method::Delete), reqwest::Method::DELETE);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let transport = HttpTransport::with_timeout(Duration::from_secs(2)).unwrap();
        let result = transport
            .send(Request {
                method: Method::Get,
                url: "http://127.0.0.1:1/webhdfs/v1/?user.name=hdfs&op=GETHOMEDIRECTORY"
                    .to_owned(),
                headers: vec![],
                body: None,
            })
            .await;

        assert!(matches!(result, Err(crate::Error::Transport(_))));
    }
}
