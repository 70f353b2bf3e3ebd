use serde::{Deserialize, Serialize};

/// Checksum of a remote file as reported by GETFILECHECKSUM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChecksum {
    pub algorithm: String,
    /// Hex encoded checksum bytes
    pub bytes: String,
    pub length: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileChecksumEnvelope {
    #[serde(rename = "FileChecksum", default)]
    pub checksum: Option<FileChecksum>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_from_json() {
        let json = r#"{"FileChecksum":{"algorithm":"MD5-of-1MD5-of-512CRC32","bytes":"eadb10de24aa315748930df6e185c0d","length":28}}"#;
        let envelope: FileChecksumEnvelope = serde_json::from_str(json).unwrap();
        let checksum = envelope.checksum.unwrap();

        assert_eq!(checksum.algorithm, "MD5-of-1MD5-of-512CRC32");
        assert_eq!(checksum.length, 28);
    }
}
