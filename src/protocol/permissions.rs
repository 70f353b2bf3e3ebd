use serde::{Deserialize, Serialize};
use std::fmt;

/// POSIX permission bits as exchanged in the `permission` field and
/// query parameter, written in octal (`"755"`, `"1777"`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permissions(u32);

bitflags! {
    impl Permissions: u32 {
        const STICKY = 0o1000;
        const SETGID = 0o2000;
        const SETUID = 0o4000;

        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXEC = 0o100;
        const OWNER_ALL = 0o700;

        const GROUP_READ = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC = 0o010;
        const GROUP_ALL = 0o070;

        const OTHER_READ = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC = 0o001;
        const OTHER_ALL = 0o007;
    }
}

impl Permissions {
    /// Parses an octal mode string. Returns `None` for anything that is not
    /// an octal number of at most four digits.
    #[must_use]
    pub fn from_octal(mode: &str) -> Option<Self> {
        if mode.is_empty() || mode.len() > 4 {
            return None;
        }

        u32::from_str_radix(mode, 8)
            .ok()
            .and_then(Self::from_bits)
    }

    /// Octal form used on the wire, without a leading zero.
    #[must_use]
    pub fn to_octal(&self) -> String {
        format!("{:o}", self.bits())
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:o}", self.bits())
    }
}

impl From<u32> for Permissions {
    fn from(mode: u32) -> Self {
        Self::from_bits_truncate(mode)
    }
}
