use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

use super::ClientConfig;
use crate::{
    protocol::{Method, Operation, PREFIX},
    transport::{Request, RequestBody},
};

/// Everything except unreserved characters and `/` is escaped, in the path
/// and in query values alike.
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

fn escape(value: &str) -> impl fmt::Display + '_ {
    utf8_percent_encode(value, ESCAPED)
}

/// Describes one operation before it is bound to a client's address and
/// user.
///
/// Extra parameters are appended after `op` in the order they were added.
/// A path without a leading `/` is taken as relative to the root.
pub struct OpRequest {
    operation: Operation,
    path: String,
    params: Vec<(&'static str, String)>,
    body: Option<RequestBody>,
}

impl OpRequest {
    pub fn new<P: Into<String>>(operation: Operation, path: P) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }

        Self {
            operation,
            path,
            params: vec![],
            body: None,
        }
    }

    #[must_use]
    pub fn param<V: ToString>(mut self, key: &'static str, value: V) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.operation.method()
    }

    /// `<base><prefix><path>?user.name=<user>&op=<OP>[&key=value...]`, with
    /// the path, user and values percent-encoded.
    #[must_use]
    pub fn url(&self, config: &ClientConfig) -> String {
        let mut url = format!(
            "{}{}{}?user.name={}&op={}",
            config.base_url(),
            PREFIX,
            escape(&self.path),
            escape(config.user_name()),
            self.operation
        );

        for (key, value) in &self.params {
            url.push_str(&format!("&{key}={}", escape(value)));
        }

        url
    }

    pub(crate) fn into_request(self, config: &ClientConfig) -> Request {
        let url = self.url(config);
        let headers = if self.body.is_some() {
            vec![(
                "Content-Type".to_owned(),
                "application/octet-stream".to_owned(),
            )]
        } else {
            vec![]
        };

        Request {
            method: self.method(),
            url,
            headers,
            body: self.body,
        }
    }
}

impl fmt::Debug for OpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpRequest")
            .field("operation", &self.operation)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("body", &self.body.is_some())
            .finish()
    }
}
