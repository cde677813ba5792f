//! Thin wrapper around the `docker` CLI for packaging generated projects.
//!
//! The generated Dockerfile builds a fat jar and reads its node URL and
//! wallet from `CHAINKIT_*` environment variables, which [`DockerRun`] fills in.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ChainkitError, Result};

pub const DEFAULT_TAG: &str = "web3app";
/// Mount point of the wallet directory inside the container.
pub const WALLET_MOUNT: &str = "/root/key";

fn docker_available() -> Result<()> {
    which::which("docker").map_err(|_| ChainkitError::MissingTool {
        name: "docker".into(),
        install: "https://docs.docker.com/get-docker/".into(),
    })?;
    Ok(())
}

fn run_docker(args: &[String], dir: &Path) -> Result<()> {
    let command = format!("docker {}", args.join(" "));
    tracing::info!(%command, dir = %dir.display(), "running docker");

    let status = Command::new("docker")
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|source| ChainkitError::ProcessSpawn {
            command: command.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ChainkitError::ExternalProcess {
            command,
            code: status.code(),
        })
    }
}

/// Build the image described by `dir/Dockerfile` as `tag`.
pub fn build_image(dir: &Path, tag: &str) -> Result<()> {
    docker_available()?;
    run_docker(&build_args(tag), dir)
}

pub fn build_args(tag: &str) -> Vec<String> {
    vec!["build".into(), "-t".into(), tag.into(), ".".into()]
}

/// Whether a local image tagged `tag` exists.
pub fn image_exists(tag: &str) -> Result<bool> {
    docker_available()?;
    let output = Command::new("docker")
        .args(["images", "-q", tag])
        .output()
        .map_err(|source| ChainkitError::ProcessSpawn {
            command: format!("docker images -q {tag}"),
            source,
        })?;
    Ok(output.status.success() && !output.stdout.iter().all(u8::is_ascii_whitespace))
}

/// Arguments for running a generated project's image against a node.
#[derive(Debug, Clone)]
pub struct DockerRun {
    pub tag: String,
    pub node_url: String,
    pub wallet_path: PathBuf,
    pub wallet_password: String,
    /// Project directory the image is built from.
    pub directory: PathBuf,
}

impl DockerRun {
    /// Directory holding the wallet file; mounted at [`WALLET_MOUNT`].
    fn wallet_dir(&self) -> PathBuf {
        let absolute = std::path::absolute(&self.wallet_path).unwrap_or(self.wallet_path.clone());
        absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn wallet_file(&self) -> String {
        self.wallet_path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "run".into(),
            "--env".into(),
            format!("CHAINKIT_NODE_URL={}", self.node_url),
            "--env".into(),
            format!("CHAINKIT_WALLET_PATH={WALLET_MOUNT}/{}", self.wallet_file()),
            "--env".into(),
            format!("CHAINKIT_WALLET_PASSWORD={}", self.wallet_password),
            "-v".into(),
            format!("{}:{WALLET_MOUNT}", self.wallet_dir().display()),
            self.tag.clone(),
        ]
    }

    /// The full command line, as printed by `docker run --print`.
    pub fn command_line(&self) -> String {
        format!("docker {}", self.args().join(" "))
    }

    pub fn run(&self) -> Result<()> {
        docker_available()?;
        run_docker(&self.args(), &self.directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DockerRun {
        DockerRun {
            tag: DEFAULT_TAG.into(),
            node_url: "http://localhost:8545".into(),
            wallet_path: PathBuf::from("/home/dev/wallets/key.json"),
            wallet_password: "secret".into(),
            directory: PathBuf::from("."),
        }
    }

    #[test]
    fn test_build_args() {
        assert_eq!(build_args("demo"), vec!["build", "-t", "demo", "."]);
    }

    #[test]
    fn test_run_args_mount_wallet_directory() {
        let args = sample().args();
        assert_eq!(args[0], "run");
        assert!(args.contains(&"CHAINKIT_NODE_URL=http://localhost:8545".to_string()));
        assert!(args.contains(&"CHAINKIT_WALLET_PATH=/root/key/key.json".to_string()));
        assert!(args.contains(&"CHAINKIT_WALLET_PASSWORD=secret".to_string()));
        assert!(args.contains(&"/home/dev/wallets:/root/key".to_string()));
        assert_eq!(args.last().unwrap(), "web3app");
    }

    #[test]
    fn test_command_line_starts_with_docker_run() {
        assert!(sample().command_line().starts_with("docker run --env"));
    }
}
