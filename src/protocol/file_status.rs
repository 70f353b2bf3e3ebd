use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Permissions;

/// Kind of entry described by a [`FileStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// Attributes of a remote file or directory.
///
/// Times are milliseconds since the unix epoch. `path_suffix` is empty for
/// GETFILESTATUS and holds the entry name for LISTSTATUS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    pub access_time: u64,
    pub block_size: u64,
    #[serde(default)]
    pub children_num: i32,
    #[serde(default)]
    pub file_id: u64,
    pub group: String,
    pub length: u64,
    pub modification_time: u64,
    pub owner: String,
    pub path_suffix: String,
    pub permission: String,
    pub replication: u16,
    #[serde(rename = "type")]
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symlink: Option<String>,
}

fn from_millis(millis: u64) -> Option<DateTime<Utc>> {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

impl FileStatus {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.file_type == FileType::Symlink
    }

    /// Returns the size of the file
    #[must_use]
    pub fn len(&self) -> u64 {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the last access time
    #[must_use]
    pub fn accessed(&self) -> Option<DateTime<Utc>> {
        from_millis(self.access_time)
    }

    /// Returns the last modification time
    #[must_use]
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        from_millis(self.modification_time)
    }

    /// Parsed form of the octal `permission` field
    #[must_use]
    pub fn permissions(&self) -> Option<Permissions> {
        Permissions::from_octal(&self.permission)
    }
}

/// `{"FileStatus": {...}}`
#[derive(Debug, Default, Deserialize)]
pub struct FileStatusEnvelope {
    #[serde(rename = "FileStatus", default)]
    pub status: Option<FileStatus>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileStatuses {
    #[serde(rename = "FileStatus", default)]
    pub statuses: Vec<FileStatus>,
}

/// `{"FileStatuses": {"FileStatus": [...]}}`
#[derive(Debug, Default, Deserialize)]
pub struct FileStatusesEnvelope {
    #[serde(rename = "FileStatuses", default)]
    pub statuses: FileStatuses,
}

impl From<FileStatusesEnvelope> for Vec<FileStatus> {
    fn from(envelope: FileStatusesEnvelope) -> Self {
        envelope.statuses.statuses
    }
}
