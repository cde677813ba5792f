use chainkit_core::config::CliConfig;
use chainkit_core::platform::HostOs;

use crate::{http_client, BestEffort};

pub const ANALYTICS_PATH: &str = "/api/analytics";

/// Fields of one anonymous usage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryPayload {
    pub os: String,
    pub client_id: String,
    /// The subcommand that ran.
    pub data: String,
    /// Flag names given on the command line, comma separated. Argument values
    /// are never part of a report.
    pub params: String,
}

impl TelemetryPayload {
    pub fn new(config: &CliConfig, host_os: HostOs, command: &str, flags: &[String]) -> Self {
        Self {
            os: host_os.as_str().to_string(),
            client_id: config.client_id.clone(),
            data: if command.is_empty() {
                "No args".to_string()
            } else {
                command.to_string()
            },
            params: flags.join(", "),
        }
    }

    fn into_form(self) -> reqwest::multipart::Form {
        reqwest::multipart::Form::new()
            .text("os", self.os)
            .text("clientId", self.client_id)
            .text("data", self.data)
            .text("params", self.params)
    }
}

/// Sends a single usage report per invocation.
#[derive(Debug, Clone, Copy)]
pub struct Telemetry {
    host_os: HostOs,
    enabled: bool,
}

impl Telemetry {
    pub fn new(host_os: HostOs, enabled: bool) -> Self {
        Self { host_os, enabled }
    }

    pub async fn upload(
        &self,
        config: &CliConfig,
        command: &str,
        flags: &[String],
    ) -> BestEffort<()> {
        if !self.enabled {
            return BestEffort::Ignored("telemetry disabled".into());
        }

        let url = format!("{}{ANALYTICS_PATH}", config.services_url);
        let payload = TelemetryPayload::new(config, self.host_os, command, flags);
        tracing::debug!(%url, command = %payload.data, "uploading telemetry");

        let client = match http_client() {
            Ok(client) => client,
            Err(e) => return BestEffort::Ignored(e.to_string()),
        };
        match client.post(&url).multipart(payload.into_form()).send().await {
            Ok(response) if response.status().is_success() => BestEffort::Done(()),
            Ok(response) => BestEffort::Ignored(format!("{url} returned {}", response.status())),
            Err(e) => BestEffort::Ignored(format!("request to {url} failed: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_fields() {
        let config = CliConfig::default();
        let flags = vec!["--kotlin".to_string(), "--skip-build".to_string()];
        let payload = TelemetryPayload::new(&config, HostOs::Darwin, "new", &flags);

        assert_eq!(payload.os, "darwin");
        assert_eq!(payload.client_id, config.client_id);
        assert_eq!(payload.data, "new");
        assert_eq!(payload.params, "--kotlin, --skip-build");
    }

    #[test]
    fn test_payload_without_command() {
        let payload = TelemetryPayload::new(&CliConfig::default(), HostOs::Linux, "", &[]);
        assert_eq!(payload.data, "No args");
        assert_eq!(payload.params, "");
    }

    #[tokio::test]
    async fn test_disabled_telemetry_sends_nothing() {
        let config = CliConfig::default();
        let outcome = Telemetry::new(HostOs::Linux, false)
            .upload(&config, "build", &[])
            .await;
        assert_eq!(outcome, BestEffort::Ignored("telemetry disabled".into()));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_ignored() {
        let config = CliConfig::default().with_services_url(Some("http://127.0.0.1:9"));
        let outcome = Telemetry::new(HostOs::Linux, true)
            .upload(&config, "build", &[])
            .await;
        assert!(!outcome.is_done());
    }
}
