use std::path::Path;

use anyhow::Result;

use chainkit_core::config::CliConfig;
use chainkit_services::{BestEffort, Updater};

use crate::output;

/// Ask the services endpoint for the latest release and report it.
///
/// Network failures are reported as a warning; the command still succeeds.
pub async fn run(
    updater: &Updater,
    config: &mut CliConfig,
    config_path: Option<&Path>,
    disabled: bool,
) -> Result<()> {
    output::print_header("chainkit update");
    output::print_key_value("Installed", &config.version);

    if disabled {
        output::print_warning("update checks are disabled (--no-telemetry)");
        return Ok(());
    }

    match updater.check(config).await {
        BestEffort::Done(Some(latest)) => {
            output::print_key_value("Latest", &latest);
            if let Some(notice) = updater.update_currently_available(config) {
                output::print_notice(&notice);
            }
        }
        BestEffort::Done(None) => output::print_success("chainkit is up to date"),
        BestEffort::Ignored(reason) => {
            tracing::debug!(%reason, "update check ignored");
            output::print_warning("could not reach the update service");
        }
    }

    if let Some(path) = config_path {
        if let Err(e) = config.save(path) {
            tracing::warn!(error = %e, "could not save config");
        }
    }
    Ok(())
}
