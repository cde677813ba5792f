//! Canonical directory layout of a generated project.
//!
//! All paths are relative to the project root:
//! ```text
//! <project>/
//! ├── build.gradle                      # build descriptor
//! ├── settings.gradle                   # build settings
//! ├── gradlew / gradlew.bat             # launchers (Unix one is executable)
//! ├── README.md, LICENSE, Dockerfile
//! ├── gradle/wrapper/gradle-wrapper.properties
//! └── src/
//!     ├── main/<java|kotlin>/<package/segments>/<ClassName>.<java|kt>
//!     ├── main/solidity/<Contract>.sol
//!     └── test/<java|kotlin>/<package/segments>/
//! ```

use std::path::{Path, PathBuf};

use crate::platform::HostOs;
use crate::project::Language;
use crate::templates::embedded::FragmentName;
use crate::templates::provider::TemplateProvider;
use crate::validate::capitalize_first_letter;

pub const UNIX_LAUNCHER: &str = "gradlew";
pub const WINDOWS_LAUNCHER: &str = "gradlew.bat";

/// Mapping from logical fragment to output path for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    class_name: String,
    package_name: String,
    contract_name: Option<String>,
    language: Language,
    host_os: HostOs,
}

impl ProjectLayout {
    pub fn new(project_name: &str, package_name: &str, language: Language, host_os: HostOs) -> Self {
        Self {
            class_name: capitalize_first_letter(project_name),
            package_name: package_name.to_string(),
            contract_name: None,
            language,
            host_os,
        }
    }

    pub fn with_contract_name(mut self, contract_name: impl Into<String>) -> Self {
        self.contract_name = Some(contract_name.into());
        self
    }

    /// Layout matching everything `provider` renders.
    pub fn for_provider(provider: &TemplateProvider, host_os: HostOs) -> Self {
        let params = provider.params();
        let layout = Self::new(
            &params.project_name,
            &params.package_name,
            provider.language(),
            host_os,
        );
        match provider.contract_name() {
            Some(contract) => layout.with_contract_name(contract),
            None => layout,
        }
    }

    pub fn host_os(&self) -> HostOs {
        self.host_os
    }

    /// Package name with `.` replaced by path separators.
    fn package_path(&self) -> PathBuf {
        self.package_name.split('.').collect()
    }

    pub fn main_source_dir(&self) -> PathBuf {
        Path::new("src")
            .join("main")
            .join(self.language.source_dir())
            .join(self.package_path())
    }

    pub fn test_source_dir(&self) -> PathBuf {
        Path::new("src")
            .join("test")
            .join(self.language.source_dir())
            .join(self.package_path())
    }

    pub fn contract_dir(&self) -> PathBuf {
        Path::new("src").join("main").join("solidity")
    }

    pub fn wrapper_dir(&self) -> PathBuf {
        Path::new("gradle").join("wrapper")
    }

    /// File name of the main class, e.g. `MyApp.java`.
    pub fn main_source_file(&self) -> String {
        format!("{}.{}", self.class_name, self.language.extension())
    }

    /// Relative output path of `name`.
    pub fn path_for(&self, name: FragmentName) -> PathBuf {
        match name {
            FragmentName::MainClass => self.main_source_dir().join(self.main_source_file()),
            FragmentName::BuildDescriptor => PathBuf::from("build.gradle"),
            FragmentName::BuildSettings => PathBuf::from("settings.gradle"),
            FragmentName::WrapperProperties => {
                self.wrapper_dir().join("gradle-wrapper.properties")
            }
            FragmentName::LauncherUnix => PathBuf::from(UNIX_LAUNCHER),
            FragmentName::LauncherWindows => PathBuf::from(WINDOWS_LAUNCHER),
            FragmentName::Readme => PathBuf::from("README.md"),
            FragmentName::License => PathBuf::from("LICENSE"),
            FragmentName::Dockerfile => PathBuf::from("Dockerfile"),
            FragmentName::Contract => {
                let contract = self.contract_name.as_deref().unwrap_or("Contract");
                self.contract_dir().join(format!("{contract}.sol"))
            }
        }
    }

    /// The launcher the build-tool collaborator invokes on this host.
    pub fn launcher(&self) -> FragmentName {
        if self.host_os.is_windows() {
            FragmentName::LauncherWindows
        } else {
            FragmentName::LauncherUnix
        }
    }

    /// Only the Unix launcher gets the executable bit, and only on Unix hosts.
    pub fn is_executable(&self, name: FragmentName) -> bool {
        name == FragmentName::LauncherUnix && !self.host_os.is_windows()
    }

    /// Every directory the assembler creates before writing files.
    pub fn directories(&self) -> Vec<PathBuf> {
        vec![
            self.main_source_dir(),
            self.test_source_dir(),
            self.contract_dir(),
            self.wrapper_dir(),
        ]
    }
}

/// Launcher file name for a host, used by commands run inside an existing project.
pub fn launcher_file(host_os: HostOs) -> &'static str {
    if host_os.is_windows() {
        WINDOWS_LAUNCHER
    } else {
        UNIX_LAUNCHER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_source_path_from_package() {
        let layout = ProjectLayout::new("test", "test.package", Language::Java, HostOs::Linux);
        assert_eq!(
            layout.path_for(FragmentName::MainClass),
            Path::new("src/main/java/test/package/Test.java")
        );
    }

    #[test]
    fn test_kotlin_paths() {
        let layout = ProjectLayout::new("app", "org.demo", Language::Kotlin, HostOs::Darwin);
        assert_eq!(
            layout.path_for(FragmentName::MainClass),
            Path::new("src/main/kotlin/org/demo/App.kt")
        );
        assert_eq!(
            layout.test_source_dir(),
            Path::new("src/test/kotlin/org/demo")
        );
    }

    #[test]
    fn test_single_segment_package() {
        let layout = ProjectLayout::new("App", "demo", Language::Java, HostOs::Linux);
        assert_eq!(layout.main_source_dir(), Path::new("src/main/java/demo"));
    }

    #[test]
    fn test_contract_path() {
        let layout = ProjectLayout::new("App", "demo", Language::Java, HostOs::Linux)
            .with_contract_name("ERC20Token");
        assert_eq!(
            layout.path_for(FragmentName::Contract),
            Path::new("src/main/solidity/ERC20Token.sol")
        );
    }

    #[test]
    fn test_launcher_selection() {
        let unix = ProjectLayout::new("App", "demo", Language::Java, HostOs::Linux);
        assert_eq!(unix.launcher(), FragmentName::LauncherUnix);
        assert!(unix.is_executable(FragmentName::LauncherUnix));
        assert!(!unix.is_executable(FragmentName::LauncherWindows));

        let windows = ProjectLayout::new("App", "demo", Language::Java, HostOs::Windows);
        assert_eq!(windows.launcher(), FragmentName::LauncherWindows);
        assert!(!windows.is_executable(FragmentName::LauncherUnix));
        assert_eq!(launcher_file(HostOs::Windows), "gradlew.bat");
    }

    #[test]
    fn test_directories_cover_file_parents() {
        let layout = ProjectLayout::new("App", "a.b.c", Language::Java, HostOs::Linux)
            .with_contract_name("HelloWorld");
        let dirs = layout.directories();
        for name in FragmentName::ALL {
            let path = layout.path_for(name);
            let parent = path.parent().unwrap();
            assert!(
                parent.as_os_str().is_empty() || dirs.iter().any(|d| d == parent),
                "no directory created for {}",
                path.display()
            );
        }
    }
}
