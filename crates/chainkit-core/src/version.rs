//! Version numbers for update checks and toolchain warnings.
//!
//! Two sources feed this module: the version string the services endpoint
//! reports for the latest CLI release, and `java -version` output used to warn
//! about outdated JDKs. Both are reduced to `major.minor.patch`.

use std::fmt;
use std::process::Command;

/// Minimum JDK the generated Gradle build is known to work with.
pub const MIN_JAVA: Version = Version {
    major: 11,
    minor: 0,
    patch: 0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Version of the running CLI.
    pub fn current() -> Self {
        Self::parse(env!("CARGO_PKG_VERSION")).unwrap_or(Self {
            major: 0,
            minor: 0,
            patch: 0,
        })
    }

    /// Parse the first version-looking run in `s`.
    ///
    /// A missing patch component reads as `0`, so `"17.0"` and `"21"` from
    /// JDK banners still parse. Accepts `"v1.4.0"`, `"1.4.0-SNAPSHOT"` and
    /// `openjdk version "17.0.2" 2022-01-18`.
    pub fn parse(s: &str) -> Option<Self> {
        let start = s.find(|c: char| c.is_ascii_digit())?;
        let run: String = s[start..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let mut parts = run.split('.').filter(|p| !p.is_empty());
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next().map_or(Some(0), |p| p.parse().ok())?;
        let patch = parts.next().map_or(Some(0), |p| p.parse().ok())?;
        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// True if `latest` parses and is strictly newer than `installed`.
pub fn is_newer(latest: &str, installed: Version) -> bool {
    Version::parse(latest).is_some_and(|v| v > installed)
}

/// Run `java -version` and parse the reported version.
///
/// The JDK prints its banner to stderr. Returns `None` when java is missing
/// or the banner is unrecognized; callers treat that as "no warning".
pub fn detect_java_version() -> Option<Version> {
    let output = Command::new("java").arg("-version").output().ok()?;
    let banner = String::from_utf8_lossy(&output.stderr);
    let quoted = banner.split('"').nth(1);
    quoted
        .and_then(java_version)
        .or_else(|| Version::parse(&String::from_utf8_lossy(&output.stdout)))
}

/// JDK 8 and older report `1.8.0_292`; map that scheme to major `8`.
fn java_version(raw: &str) -> Option<Version> {
    let parsed = Version::parse(raw)?;
    if parsed.major == 1 {
        Some(Version {
            major: parsed.minor,
            minor: 0,
            patch: 0,
        })
    } else {
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u32, minor: u32, patch: u32) -> Version {
        Version {
            major,
            minor,
            patch,
        }
    }

    #[test]
    fn test_parse_release_strings() {
        assert_eq!(Version::parse("1.4.0"), Some(v(1, 4, 0)));
        assert_eq!(Version::parse("v0.2.11"), Some(v(0, 2, 11)));
        assert_eq!(Version::parse("1.4.0-SNAPSHOT"), Some(v(1, 4, 0)));
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(Version::parse("21"), Some(v(21, 0, 0)));
        assert_eq!(Version::parse("17.0"), Some(v(17, 0, 0)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Version::parse("").is_none());
        assert!(Version::parse("no digits").is_none());
    }

    #[test]
    fn test_java_banner_formats() {
        assert_eq!(java_version("17.0.2"), Some(v(17, 0, 2)));
        assert_eq!(java_version("1.8.0_292"), Some(v(8, 0, 0)));
    }

    #[test]
    fn test_is_newer() {
        let installed = v(1, 0, 0);
        assert!(is_newer("1.0.1", installed));
        assert!(is_newer("v2.0.0", installed));
        assert!(!is_newer("1.0.0", installed));
        assert!(!is_newer("0.9.9", installed));
        assert!(!is_newer("garbage", installed));
    }

    #[test]
    fn test_current_matches_package() {
        assert_eq!(Version::current().to_string(), env!("CARGO_PKG_VERSION"));
    }
}
