//! Unified error types for the chainkit toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during chainkit operations.
#[derive(Error, Debug)]
pub enum ChainkitError {
    // --- Validation ---

    /// A project name, package name or required argument was rejected.
    #[error("{0}")]
    Validation(String),

    /// The requested template is not available for the requested language.
    #[error("generating {template} {language} projects is currently unsupported")]
    UnsupportedTemplate { template: String, language: String },

    // --- Templates ---

    /// A template fragment could not be located for the selected variant.
    #[error("template resource missing: {0}")]
    ResourceMissing(String),

    // --- Assembly ---

    /// A directory of the project tree could not be created.
    #[error("failed to create directory {path}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The executable bit could not be set on a launcher script.
    #[error("failed to set permissions on {path}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- External processes ---

    /// A required external tool (e.g. `java`, `docker`) is not installed.
    #[error("required tool '{name}' not found, install: {install}")]
    MissingTool { name: String, install: String },

    /// A child process could not be started.
    #[error("failed to start `{command}`")]
    ProcessSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A child process exited with a non-zero status.
    #[error("`{command}` failed (exit code {}), see output above", code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    ExternalProcess { command: String, code: Option<i32> },

    // --- Configuration ---

    /// The CLI configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The directory is not a generated project (no launcher script found).
    #[error("not a chainkit project: {0} (missing gradlew launcher)")]
    NotAProject(PathBuf),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChainkitError {
    /// Whether this error was raised while writing the project tree.
    ///
    /// Assembly errors may leave a partially written tree on disk.
    pub fn is_assembly(&self) -> bool {
        matches!(
            self,
            Self::DirectoryCreate { .. } | Self::Write { .. } | Self::Permissions { .. }
        )
    }

    /// The path involved in an assembly error, if any.
    pub fn failed_path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DirectoryCreate { path, .. }
            | Self::Write { path, .. }
            | Self::Permissions { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Alias for `Result<T, ChainkitError>`.
pub type Result<T> = std::result::Result<T, ChainkitError>;
