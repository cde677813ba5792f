//! Compile-time embedded template fragments for project scaffolding.
//!
//! Each constant loads a template file from `templates/project/` via [`include_str!`].
//! The paths are relative to this source file
//! (`crates/chainkit-core/src/templates/embedded.rs`).
//!
//! ## Adding a new fragment
//!
//! 1. Place the template file under the appropriate `templates/project/` subdirectory
//! 2. Add a `pub const` here with `include_str!("../../../../templates/project/<path>")`
//! 3. Map it in [`lookup`] for the template kinds and languages that ship it
//!
//! ## Warning
//!
//! Do NOT modify template files without checking that their `<PLACEHOLDER>` tokens
//! are still produced by [`super::provider`]. A token nobody substitutes ends up
//! verbatim in the generated project.

use std::fmt;

use crate::project::{Language, TemplateKind};

// -------------------------------------------------------
// Main application class
// -------------------------------------------------------

pub const JAVA_HELLO_WORLD: &str = include_str!("../../../../templates/project/java/HelloWorld.java.tmpl");
pub const JAVA_EMPTY: &str = include_str!("../../../../templates/project/java/Empty.java.tmpl");
pub const JAVA_ERC20: &str = include_str!("../../../../templates/project/java/Erc20.java.tmpl");
pub const JAVA_ERC721: &str = include_str!("../../../../templates/project/java/Erc721.java.tmpl");
pub const JAVA_ERC777: &str = include_str!("../../../../templates/project/java/Erc777.java.tmpl");

pub const KOTLIN_HELLO_WORLD: &str = include_str!("../../../../templates/project/kotlin/HelloWorld.kt.tmpl");
pub const KOTLIN_EMPTY: &str = include_str!("../../../../templates/project/kotlin/Empty.kt.tmpl");

// -------------------------------------------------------
// Build descriptors and launchers
// -------------------------------------------------------

pub const BUILD_GRADLE_JAVA: &str = include_str!("../../../../templates/project/gradle/build.gradle.java.tmpl");
pub const BUILD_GRADLE_KOTLIN: &str = include_str!("../../../../templates/project/gradle/build.gradle.kotlin.tmpl");
pub const SETTINGS_GRADLE: &str = include_str!("../../../../templates/project/gradle/settings.gradle.tmpl");
pub const WRAPPER_PROPERTIES: &str = include_str!("../../../../templates/project/gradle/gradle-wrapper.properties.tmpl");

pub const GRADLEW: &str = include_str!("../../../../templates/project/launcher/gradlew.tmpl");
pub const GRADLEW_BAT: &str = include_str!("../../../../templates/project/launcher/gradlew.bat.tmpl");

// -------------------------------------------------------
// Docs and container
// -------------------------------------------------------

pub const README: &str = include_str!("../../../../templates/project/docs/README.md.tmpl");
pub const LICENSE: &str = include_str!("../../../../templates/project/docs/LICENSE.tmpl");
pub const DOCKERFILE: &str = include_str!("../../../../templates/project/docker/Dockerfile.tmpl");

// -------------------------------------------------------
// Solidity contracts
// -------------------------------------------------------

pub const HELLO_WORLD_SOL: &str = include_str!("../../../../templates/project/contracts/HelloWorld.sol");
pub const ERC20_SOL: &str = include_str!("../../../../templates/project/contracts/ERC20Token.sol");
pub const ERC721_SOL: &str = include_str!("../../../../templates/project/contracts/ERC721Token.sol");
pub const ERC777_SOL: &str = include_str!("../../../../templates/project/contracts/ERC777Token.sol");

/// Logical name of one generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentName {
    MainClass,
    BuildDescriptor,
    BuildSettings,
    WrapperProperties,
    LauncherUnix,
    LauncherWindows,
    Readme,
    License,
    Dockerfile,
    Contract,
}

impl FragmentName {
    /// Every fragment, in the order the assembler writes them.
    pub const ALL: [FragmentName; 10] = [
        Self::MainClass,
        Self::BuildDescriptor,
        Self::BuildSettings,
        Self::WrapperProperties,
        Self::LauncherUnix,
        Self::LauncherWindows,
        Self::Readme,
        Self::License,
        Self::Dockerfile,
        Self::Contract,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainClass => "main-class",
            Self::BuildDescriptor => "build-descriptor",
            Self::BuildSettings => "build-settings",
            Self::WrapperProperties => "wrapper-properties",
            Self::LauncherUnix => "launcher-unix",
            Self::LauncherWindows => "launcher-windows",
            Self::Readme => "readme",
            Self::License => "license",
            Self::Dockerfile => "dockerfile",
            Self::Contract => "contract",
        }
    }

    pub fn is_launcher(self) -> bool {
        matches!(self, Self::LauncherUnix | Self::LauncherWindows)
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw fragment text for one template family, or `None` if the family does not ship it.
pub fn lookup(name: FragmentName, kind: TemplateKind, language: Language) -> Option<&'static str> {
    use FragmentName::*;
    use TemplateKind::*;

    match (name, language) {
        (MainClass, Language::Java) => Some(match kind {
            HelloWorld => JAVA_HELLO_WORLD,
            Empty => JAVA_EMPTY,
            Erc20 => JAVA_ERC20,
            Erc721 => JAVA_ERC721,
            Erc777 => JAVA_ERC777,
        }),
        (MainClass, Language::Kotlin) => match kind {
            HelloWorld => Some(KOTLIN_HELLO_WORLD),
            Empty => Some(KOTLIN_EMPTY),
            _ => None,
        },
        (BuildDescriptor, Language::Java) => Some(BUILD_GRADLE_JAVA),
        (BuildDescriptor, Language::Kotlin) => Some(BUILD_GRADLE_KOTLIN),
        (BuildSettings, _) => Some(SETTINGS_GRADLE),
        (WrapperProperties, _) => Some(WRAPPER_PROPERTIES),
        (LauncherUnix, _) => Some(GRADLEW),
        (LauncherWindows, _) => Some(GRADLEW_BAT),
        (Readme, _) => Some(README),
        (License, _) => Some(LICENSE),
        (Dockerfile, _) => Some(DOCKERFILE),
        (Contract, _) => match kind {
            HelloWorld => Some(HELLO_WORLD_SOL),
            Empty => None,
            Erc20 => Some(ERC20_SOL),
            Erc721 => Some(ERC721_SOL),
            Erc777 => Some(ERC777_SOL),
        },
    }
}

/// Whether a template family produces `name` at all.
///
/// Only the contract is optional: `Empty` projects get their contracts from `import`.
pub fn is_required(name: FragmentName, kind: TemplateKind) -> bool {
    !(name == FragmentName::Contract && kind == TemplateKind::Empty)
}
