use serde::Deserialize;

use crate::error::{Error, WebHdfsResult};

/// Fixed address and identity shared by every request of a client.
///
/// Can be embedded in an application's configuration file:
///
/// ```toml
/// base_url = "http://namenode:9870/"
/// user_name = "hdfs"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct ClientConfig {
    base_url: String,
    user_name: String,
}

#[derive(Deserialize)]
struct RawConfig {
    base_url: String,
    user_name: String,
}

impl ClientConfig {
    /// `base_url` must end with `/`.
    pub fn new<B, U>(base_url: B, user_name: U) -> WebHdfsResult<Self>
    where
        B: Into<String>,
        U: Into<String>,
    {
        let base_url = base_url.into();
        let user_name = user_name.into();

        if !base_url.ends_with('/') {
            return Err(Error::Config(format!(
                "base url must end with '/': {base_url}"
            )));
        }

        if user_name.is_empty() {
            return Err(Error::Config("user name is empty".to_owned()));
        }

        Ok(Self {
            base_url,
            user_name,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

impl TryFrom<RawConfig> for ClientConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.base_url, raw.user_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ClientConfig::new("http://test.me/plz/", "hdfs").unwrap();
        assert_eq!(config.base_url(), "http://test.me/plz/");
        assert_eq!(config.user_name(), "hdfs");
    }

    #[test]
    fn test_missing_trailing_slash() {
        let result = ClientConfig::new("http://test.me/plz", "hdfs");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_user() {
        let result = ClientConfig::new("http://test.me/", "");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_deserialize_validates() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://nn:9870/","user_name":"hdfs"}"#).unwrap();
        assert_eq!(config.base_url(), "http://nn:9870/");

        let result =
            serde_json::from_str::<ClientConfig>(r#"{"base_url":"http://nn:9870","user_name":"hdfs"}"#);
        assert!(result.is_err());
    }
}
