use serde::{Deserialize, Serialize};

/// Response of GETHOMEDIRECTORY: `{"Path": "/user/hdfs"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeDirectory {
    #[serde(rename = "Path")]
    pub path: String,
}
