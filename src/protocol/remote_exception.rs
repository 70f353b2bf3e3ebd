use serde::{Deserialize, Serialize};

/// Error body returned by the server on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteException {
    pub exception: String,
    #[serde(default)]
    pub java_class_name: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "RemoteException")]
    exception: RemoteException,
}

impl RemoteException {
    /// Parses `{"RemoteException": {...}}`. Returns `None` when the body has
    /// another shape, which happens with proxies and gateways in front of
    /// the service.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<Envelope>(body)
            .ok()
            .map(|e| e.exception)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exception() {
        let body = r#"{"RemoteException":{"exception":"FileNotFoundException","javaClassName":"java.io.FileNotFoundException","message":"File does not exist: /foo/a.patch"}}"#;
        let exception = RemoteException::from_body(body).unwrap();

        assert_eq!(exception.exception, "FileNotFoundException");
        assert_eq!(exception.java_class_name, "java.io.FileNotFoundException");
        assert_eq!(exception.message, "File does not exist: /foo/a.patch");
    }

    #[test]
    fn test_foreign_body() {
        assert!(RemoteException::from_body("<html>502 Bad Gateway</html>").is_none());
        assert!(RemoteException::from_body("{}").is_none());
    }
}
