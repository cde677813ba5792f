use chainkit_core::config::CliConfig;
use chainkit_core::platform::HostOs;
use serde::Deserialize;

use crate::{http_client, BestEffort};

pub const VERSIONS_PATH: &str = "/api/v1/versioning/versions/";

#[derive(Debug, Deserialize)]
struct VersionsResponse {
    latest: LatestRelease,
}

/// Latest release as reported by the services endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatestRelease {
    pub version: String,
    #[serde(default)]
    pub install_unix: Option<String>,
    #[serde(default)]
    pub install_win: Option<String>,
}

impl LatestRelease {
    /// Install command appropriate for `host_os`.
    pub fn install_prompt(&self, host_os: HostOs) -> Option<&str> {
        if host_os.is_windows() {
            self.install_win.as_deref()
        } else {
            self.install_unix.as_deref()
        }
    }
}

/// Parse a versions response body.
pub fn parse_latest(body: &str) -> Option<LatestRelease> {
    serde_json::from_str::<VersionsResponse>(body)
        .ok()
        .map(|r| r.latest)
}

/// Checks the services endpoint for a newer CLI release.
#[derive(Debug, Clone, Copy)]
pub struct Updater {
    host_os: HostOs,
}

impl Updater {
    pub fn new(host_os: HostOs) -> Self {
        Self { host_os }
    }

    /// The update notice saved by an earlier [`Updater::check`], if any.
    ///
    /// Printing is left to the caller so the notice never lands in piped stdout.
    pub fn update_currently_available(&self, config: &CliConfig) -> Option<String> {
        config.is_update_available().then(|| {
            format!(
                "A new chainkit update is available ({} -> {}): {}",
                config.version, config.latest_version, config.update_prompt
            )
        })
    }

    /// Ask the services endpoint for the latest release and record it in `config`.
    ///
    /// Returns the newer version when one exists. The caller persists `config`.
    pub async fn check(&self, config: &mut CliConfig) -> BestEffort<Option<String>> {
        let latest = match self.fetch_latest(config).await {
            BestEffort::Done(latest) => latest,
            BestEffort::Ignored(reason) => return BestEffort::Ignored(reason),
        };

        if latest.version != config.version {
            config.latest_version = latest.version.clone();
            if let Some(prompt) = latest.install_prompt(self.host_os) {
                config.update_prompt = prompt.to_string();
            }
        }

        if config.is_update_available() {
            tracing::info!(latest = %latest.version, "update available");
            BestEffort::Done(Some(latest.version))
        } else {
            BestEffort::Done(None)
        }
    }

    async fn fetch_latest(&self, config: &CliConfig) -> BestEffort<LatestRelease> {
        let url = format!("{}{VERSIONS_PATH}", config.services_url);
        let client = match http_client() {
            Ok(client) => client,
            Err(e) => return BestEffort::Ignored(e.to_string()),
        };

        let form = reqwest::multipart::Form::new()
            .text("os", self.host_os.as_str())
            .text("clientId", config.client_id.clone());

        let response = match client.post(&url).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => return BestEffort::Ignored(format!("request to {url} failed: {e}")),
        };
        if !response.status().is_success() {
            return BestEffort::Ignored(format!("{url} returned {}", response.status()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return BestEffort::Ignored(e.to_string()),
        };
        match parse_latest(&body) {
            Some(latest) => BestEffort::Done(latest),
            None => BestEffort::Ignored("unrecognized versions response".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "latest": {
            "version": "9.9.9",
            "install_unix": "curl -L get.chainkit.dev | sh",
            "install_win": "iwr get.chainkit.dev/win | iex"
        }
    }"#;

    #[test]
    fn test_parse_latest() {
        let latest = parse_latest(BODY).unwrap();
        assert_eq!(latest.version, "9.9.9");
        assert_eq!(
            latest.install_prompt(HostOs::Linux),
            Some("curl -L get.chainkit.dev | sh")
        );
        assert_eq!(
            latest.install_prompt(HostOs::Windows),
            Some("iwr get.chainkit.dev/win | iex")
        );
    }

    #[test]
    fn test_parse_latest_rejects_other_shapes() {
        assert!(parse_latest("{}").is_none());
        assert!(parse_latest("not json").is_none());
        assert!(parse_latest(r#"{"latest": {}}"#).is_none());
    }

    #[test]
    fn test_no_prompt_without_newer_version() {
        let config = CliConfig::default();
        assert_eq!(Updater::new(HostOs::Linux).update_currently_available(&config), None);
    }

    #[test]
    fn test_saved_prompt_is_returned() {
        let mut config = CliConfig::default();
        config.version = "0.1.0".into();
        config.latest_version = "9.9.9".into();
        config.update_prompt = "curl -L get.chainkit.dev | sh".into();

        let notice = Updater::new(HostOs::Linux)
            .update_currently_available(&config)
            .unwrap();
        assert!(notice.contains("0.1.0 -> 9.9.9"));
        assert!(notice.ends_with("curl -L get.chainkit.dev | sh"));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_ignored() {
        let mut config = CliConfig::default().with_services_url(Some("http://127.0.0.1:9"));
        let before = config.clone();

        let outcome = Updater::new(HostOs::Linux).check(&mut config).await;
        assert!(matches!(outcome, BestEffort::Ignored(_)));
        assert_eq!(config, before);
    }
}
