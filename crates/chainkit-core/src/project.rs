//! Project parameters and template selection.
//!
//! A generation run is described by a [`ProjectParameters`] value plus the
//! [`TemplateKind`] and [`Language`] chosen on the command line. Commands that
//! operate on an existing project (`build`, `test`, `run`, `docker`) use
//! [`ensure_project`] to check they were pointed at a generated tree.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChainkitError, Result};

/// Default initial supply offered for fungible token templates.
pub const DEFAULT_INITIAL_SUPPLY: &str = "1000000000";

/// Token parameters for the token-contract template variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenParameters {
    pub name: String,
    pub symbol: String,
    /// Required for ERC-20 and ERC-777, ignored by ERC-721.
    pub initial_supply: Option<String>,
    /// Only read by ERC-777. Empty means "no default operators".
    pub default_operators: Vec<String>,
}

impl TokenParameters {
    /// Defaults used when the user skips the interactive prompts.
    pub fn defaults_for(kind: TemplateKind) -> Self {
        Self {
            name: kind.to_string(),
            symbol: kind.to_string().to_lowercase(),
            initial_supply: kind
                .requires_initial_supply()
                .then(|| DEFAULT_INITIAL_SUPPLY.to_string()),
            default_operators: Vec::new(),
        }
    }
}

/// Everything the template provider needs to substitute one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectParameters {
    pub project_name: String,
    pub package_name: String,
    /// Overrides the contract name of the selected template.
    pub contract_name: Option<String>,
    pub token: Option<TokenParameters>,
}

impl ProjectParameters {
    pub fn new(project_name: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            package_name: package_name.into(),
            contract_name: None,
            token: None,
        }
    }

    pub fn with_contract_name(mut self, contract_name: impl Into<String>) -> Self {
        self.contract_name = Some(contract_name.into());
        self
    }

    pub fn with_token(mut self, token: TokenParameters) -> Self {
        self.token = Some(token);
        self
    }
}

/// Template family ("profile") selecting which fragments and extra placeholders apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKind {
    /// Greeter contract deployed and called from the main class.
    HelloWorld,
    /// Project without a sample contract, used by `import`.
    Empty,
    Erc20,
    Erc721,
    Erc777,
}

impl TemplateKind {
    pub fn is_token(self) -> bool {
        matches!(self, Self::Erc20 | Self::Erc721 | Self::Erc777)
    }

    pub fn requires_initial_supply(self) -> bool {
        matches!(self, Self::Erc20 | Self::Erc777)
    }

    /// Kotlin projects are only generated from the non-token templates.
    pub fn supports(self, language: Language) -> bool {
        match language {
            Language::Java => true,
            Language::Kotlin => !self.is_token(),
        }
    }

    /// Name of the Solidity contract (and generated wrapper class) shipped with the template.
    pub fn default_contract_name(self) -> Option<&'static str> {
        match self {
            Self::HelloWorld => Some("HelloWorld"),
            Self::Empty => None,
            Self::Erc20 => Some("ERC20Token"),
            Self::Erc721 => Some("ERC721Token"),
            Self::Erc777 => Some("ERC777Token"),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HelloWorld => "HelloWorld",
            Self::Empty => "Empty",
            Self::Erc20 => "ERC20",
            Self::Erc721 => "ERC721",
            Self::Erc777 => "ERC777",
        };
        f.write_str(name)
    }
}

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Java,
    Kotlin,
}

impl Language {
    /// Directory under `src/main` / `src/test` holding sources.
    pub fn source_dir(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Java => f.write_str("Java"),
            Self::Kotlin => f.write_str("Kotlin"),
        }
    }
}

/// Check that `project_dir` holds a generated project (a launcher script at its root).
pub fn ensure_project(project_dir: &Path) -> Result<()> {
    let has_launcher = ["gradlew", "gradlew.bat"]
        .iter()
        .any(|name| project_dir.join(name).is_file());
    if !has_launcher {
        return Err(ChainkitError::NotAProject(project_dir.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kotlin_rejects_token_templates() {
        assert!(TemplateKind::HelloWorld.supports(Language::Kotlin));
        assert!(TemplateKind::Empty.supports(Language::Kotlin));
        assert!(!TemplateKind::Erc20.supports(Language::Kotlin));
        assert!(!TemplateKind::Erc777.supports(Language::Kotlin));
        assert!(TemplateKind::Erc721.supports(Language::Java));
    }

    #[test]
    fn test_token_defaults() {
        let erc20 = TokenParameters::defaults_for(TemplateKind::Erc20);
        assert_eq!(erc20.name, "ERC20");
        assert_eq!(erc20.symbol, "erc20");
        assert_eq!(erc20.initial_supply.as_deref(), Some(DEFAULT_INITIAL_SUPPLY));

        let erc721 = TokenParameters::defaults_for(TemplateKind::Erc721);
        assert!(erc721.initial_supply.is_none());
    }

    #[test]
    fn test_ensure_project() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ensure_project(dir.path()),
            Err(ChainkitError::NotAProject(_))
        ));
        std::fs::write(dir.path().join("gradlew"), "#!/bin/sh\n").unwrap();
        assert!(ensure_project(dir.path()).is_ok());
    }
}
