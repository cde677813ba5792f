use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;

use chainkit_core::docker::{self, DockerRun};

use crate::output;
use crate::DockerCommand;

pub fn run(command: DockerCommand) -> Result<()> {
    match command {
        DockerCommand::Build { tag, directory } => build(&directory, &tag),
        DockerCommand::Run {
            node_url,
            wallet_path,
            wallet_password,
            tag,
            directory,
            print,
        } => {
            let run = DockerRun {
                tag,
                node_url,
                wallet_path,
                wallet_password,
                directory,
            };
            if print {
                println!("{}", run.command_line());
                return Ok(());
            }
            start(&run)
        }
    }
}

fn build(directory: &Path, tag: &str) -> Result<()> {
    output::print_header("chainkit docker build");
    if !directory.join("Dockerfile").is_file() {
        anyhow::bail!("no Dockerfile in {}", directory.display());
    }
    output::print_key_value("Tag", tag);
    docker::build_image(directory, tag)?;
    output::print_success(&format!("Built image {tag}"));
    Ok(())
}

/// Run the image, offering to build it first when it does not exist yet.
fn start(run: &DockerRun) -> Result<()> {
    output::print_header("chainkit docker run");
    if !run.wallet_path.is_file() {
        anyhow::bail!("wallet file not found: {}", run.wallet_path.display());
    }

    if !docker::image_exists(&run.tag)? {
        let build_first = Confirm::new()
            .with_prompt(format!("Image '{}' not found. Build it now?", run.tag))
            .default(true)
            .interact()?;
        if !build_first {
            anyhow::bail!("image '{}' does not exist, run `chainkit docker build` first", run.tag);
        }
        build(&run.directory, &run.tag)?;
    }

    output::print_key_value("Node", &run.node_url);
    run.run()?;
    Ok(())
}
