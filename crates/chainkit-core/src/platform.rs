use std::fmt;

use serde::{Deserialize, Serialize};

/// Host operating system, detected once at start-up and passed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Darwin,
    FreeBsd,
    OpenBsd,
    Linux,
    Solaris,
    Windows,
    Aix,
    Unknown,
}

impl HostOs {
    /// The OS this binary is running on.
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Map an OS name (`std::env::consts::OS` or a `uname`-style string) to a variant.
    pub fn from_name(name: &str) -> Self {
        let name = name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        if name.starts_with("mac") || name.starts_with("darwin") {
            Self::Darwin
        } else if name.starts_with("linux") {
            Self::Linux
        } else if name.starts_with("sunos")
            || name.starts_with("solaris")
            || name.starts_with("illumos")
        {
            Self::Solaris
        } else if name.starts_with("aix") {
            Self::Aix
        } else if name.starts_with("openbsd") {
            Self::OpenBsd
        } else if name.starts_with("freebsd") {
            Self::FreeBsd
        } else if name.starts_with("windows") {
            Self::Windows
        } else {
            Self::Unknown
        }
    }

    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Darwin => "darwin",
            Self::FreeBsd => "freebsd",
            Self::OpenBsd => "openbsd",
            Self::Linux => "linux",
            Self::Solaris => "solaris",
            Self::Windows => "windows",
            Self::Aix => "aix",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(HostOs::from_name("macos"), HostOs::Darwin);
        assert_eq!(HostOs::from_name("Mac OS X"), HostOs::Darwin);
        assert_eq!(HostOs::from_name("linux"), HostOs::Linux);
        assert_eq!(HostOs::from_name("Windows 10"), HostOs::Windows);
        assert_eq!(HostOs::from_name("SunOS"), HostOs::Solaris);
        assert_eq!(HostOs::from_name("freebsd"), HostOs::FreeBsd);
        assert_eq!(HostOs::from_name(""), HostOs::Unknown);
        assert_eq!(HostOs::from_name("plan9"), HostOs::Unknown);
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(HostOs::Windows.to_string(), "windows");
        assert_eq!(
            serde_json::to_string(&HostOs::OpenBsd).unwrap(),
            "\"openbsd\""
        );
    }
}
