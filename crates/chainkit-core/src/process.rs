use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ChainkitError, Result};
use crate::layout::launcher_file;
use crate::platform::HostOs;

/// Gradle tasks the CLI knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradleTask {
    Build,
    Test,
    Run,
    ShadowJar,
    GenerateContractWrappers,
}

impl GradleTask {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Test => "test",
            Self::Run => "run",
            Self::ShadowJar => "shadowJar",
            Self::GenerateContractWrappers => "generateContractWrappers",
        }
    }
}

/// A tool that is required on `PATH` but could not be found.
#[derive(Debug, Clone)]
pub struct PrerequisiteError {
    pub tool_name: String,
    pub install_instructions: String,
}

/// Runs the generated project's Gradle launcher.
///
/// The launcher is invoked through the host shell so that the Unix script
/// does not depend on its executable bit surviving a copy or checkout.
#[derive(Debug, Clone)]
pub struct BuildTool {
    project_root: PathBuf,
    host_os: HostOs,
}

impl BuildTool {
    pub fn new(project_root: impl Into<PathBuf>, host_os: HostOs) -> Self {
        Self {
            project_root: project_root.into(),
            host_os,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Program and arguments for `task` on this host.
    pub fn command_line(&self, task: GradleTask, extra: &[String]) -> (String, Vec<String>) {
        let mut invocation = match self.host_os {
            HostOs::Windows => launcher_file(self.host_os).to_string(),
            _ => format!("./{}", launcher_file(self.host_os)),
        };
        invocation.push(' ');
        invocation.push_str(task.as_str());
        for arg in extra {
            invocation.push(' ');
            invocation.push_str(arg);
        }
        invocation.push_str(" -q");

        match self.host_os {
            HostOs::Windows => ("cmd".into(), vec!["/c".into(), invocation]),
            _ => ("bash".into(), vec!["-c".into(), invocation]),
        }
    }

    /// Run `task` in the project root with inherited stdio, blocking until it exits.
    pub fn run_task(&self, task: GradleTask, extra: &[String]) -> Result<()> {
        let (program, args) = self.command_line(task, extra);
        let display = format!("{program} {}", args.join(" "));
        tracing::info!(task = task.as_str(), root = %self.project_root.display(), "running gradle");

        let status = Command::new(&program)
            .args(&args)
            .current_dir(&self.project_root)
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(ChainkitError::ExternalProcess {
                command: display,
                code: status.code(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ChainkitError::MissingTool {
                name: program,
                install: install_hint(self.host_os, "shell").into(),
            }),
            Err(source) => Err(ChainkitError::ProcessSpawn {
                command: display,
                source,
            }),
        }
    }

    pub fn build(&self) -> Result<()> {
        self.run_task(GradleTask::Build, &[])
    }

    pub fn test(&self) -> Result<()> {
        self.run_task(GradleTask::Test, &[])
    }

    /// Run the application, forwarding `--args` to the main class when given.
    pub fn run(&self, app_args: &[String]) -> Result<()> {
        if app_args.is_empty() {
            return self.run_task(GradleTask::Run, &[]);
        }
        let forwarded = format!("--args=\"{}\"", app_args.join(" "));
        self.run_task(GradleTask::Run, &[forwarded])
    }

    pub fn shadow_jar(&self) -> Result<()> {
        self.run_task(GradleTask::ShadowJar, &[])
    }

    pub fn generate_wrappers(&self) -> Result<()> {
        self.run_task(GradleTask::GenerateContractWrappers, &[])
    }
}

fn install_hint(host_os: HostOs, tool: &str) -> &'static str {
    match (tool, host_os) {
        ("java", HostOs::Darwin) => "brew install openjdk@17",
        ("java", HostOs::Windows) => "https://adoptium.net",
        ("java", _) => "install a JDK (>= 11) from https://adoptium.net or your package manager",
        (_, HostOs::Windows) => "cmd.exe is part of Windows",
        _ => "install bash from your package manager",
    }
}

/// Check that the tools needed to build a generated project are on `PATH`.
pub fn check_prerequisites(host_os: HostOs) -> std::result::Result<(), Vec<PrerequisiteError>> {
    let mut missing = Vec::new();

    if which::which("java").is_err() {
        missing.push(PrerequisiteError {
            tool_name: "java".into(),
            install_instructions: install_hint(host_os, "java").into(),
        });
    }

    if !host_os.is_windows() && which::which("bash").is_err() {
        missing.push(PrerequisiteError {
            tool_name: "bash".into(),
            install_instructions: install_hint(host_os, "bash").into(),
        });
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
