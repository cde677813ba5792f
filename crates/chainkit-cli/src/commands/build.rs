use std::path::Path;

use anyhow::Result;

use chainkit_core::platform::HostOs;
use chainkit_core::process::BuildTool;
use chainkit_core::project::ensure_project;

use crate::output;

fn tool(directory: &Path, host_os: HostOs) -> Result<BuildTool> {
    ensure_project(directory)?;
    if let Err(missing) = chainkit_core::process::check_prerequisites(host_os) {
        for m in &missing {
            output::print_error(&format!(
                "Missing tool: {}, {}",
                m.tool_name, m.install_instructions
            ));
        }
        anyhow::bail!("missing prerequisites");
    }
    Ok(BuildTool::new(directory, host_os))
}

/// Compile the project and generate its contract wrappers.
pub fn build(directory: &Path, host_os: HostOs) -> Result<()> {
    output::print_header("chainkit build");
    tool(directory, host_os)?.build()?;
    output::print_success("Build finished");
    Ok(())
}

pub fn test(directory: &Path, host_os: HostOs) -> Result<()> {
    output::print_header("chainkit test");
    tool(directory, host_os)?.test()?;
    output::print_success("Tests passed");
    Ok(())
}

/// Run the main class; `network` is forwarded as its first argument.
pub fn run(directory: &Path, network: Option<&str>, host_os: HostOs) -> Result<()> {
    output::print_header("chainkit run");
    let app_args: Vec<String> = network.map(str::to_string).into_iter().collect();
    if let Some(network) = network {
        output::print_key_value("Network", network);
    }
    tool(directory, host_os)?.run(&app_args)?;
    Ok(())
}
