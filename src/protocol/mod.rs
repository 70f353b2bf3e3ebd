mod boolean;
mod checksum;
mod content_summary;
mod file_status;
mod home_directory;
mod permissions;
mod remote_exception;

use std::fmt;

pub use self::{
    boolean::BooleanResult,
    checksum::{FileChecksum, FileChecksumEnvelope},
    content_summary::{ContentSummary, ContentSummaryEnvelope},
    file_status::{FileStatus, FileStatusEnvelope, FileStatuses, FileStatusesEnvelope, FileType},
    home_directory::HomeDirectory,
    permissions::Permissions,
    remote_exception::RemoteException,
};

/// Path segment between the base url and the file path
pub const PREFIX: &str = "webhdfs/v1";

/// HTTP verbs used by the REST interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation codes carried in the `op` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetFileStatus,
    MkDirs,
    Create,
    Delete,
    ListStatus,
    GetContentSummary,
    GetFileChecksum,
    GetHomeDirectory,
    Open,
    Rename,
    SetTimes,
    SetOwner,
    SetPermission,
    SetReplication,
}

impl Operation {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetFileStatus => "GETFILESTATUS",
            Self::MkDirs => "MKDIRS",
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::ListStatus => "LISTSTATUS",
            Self::GetContentSummary => "GETCONTENTSUMMARY",
            Self::GetFileChecksum => "GETFILECHECKSUM",
            Self::GetHomeDirectory => "GETHOMEDIRECTORY",
            Self::Open => "OPEN",
            Self::Rename => "RENAME",
            Self::SetTimes => "SETTIMES",
            Self::SetOwner => "SETOWNER",
            Self::SetPermission => "SETPERMISSION",
            Self::SetReplication => "SETREPLICATION",
        }
    }

    /// The verb each operation is issued with
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::GetFileStatus
            | Self::ListStatus
            | Self::GetContentSummary
            | Self::GetFileChecksum
            | Self::GetHomeDirectory
            | Self::Open => Method::Get,
            Self::Delete => Method::Delete,
            Self::MkDirs
            | Self::Create
            | Self::Rename
            | Self::SetTimes
            | Self::SetOwner
            | Self::SetPermission
            | Self::SetReplication => Method::Put,
        }
    }

    /// Status queries answer "not found" with an empty result instead of an error
    #[must_use]
    pub fn is_status_query(&self) -> bool {
        matches!(
            self,
            Self::GetFileStatus | Self::ListStatus | Self::GetContentSummary | Self::GetFileChecksum
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_methods() {
        assert_eq!(Operation::Delete.method(), Method::Delete);
        assert_eq!(Operation::Rename.method(), Method::Put);
        assert_eq!(Operation::Open.method(), Method::Get);
        assert_eq!(Operation::SetReplication.to_string(), "SETREPLICATION");
    }

    #[test]
    fn test_status_queries() {
        assert!(Operation::GetFileStatus.is_status_query());
        assert!(Operation::ListStatus.is_status_query());
        assert!(!Operation::Open.is_status_query());
        assert!(!Operation::GetHomeDirectory.is_status_query());
    }
}
