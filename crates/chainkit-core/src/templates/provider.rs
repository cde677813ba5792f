//! Template provider: one template family plus the parameters to substitute it.
//!
//! Substitution runs as an explicit two-phase pipeline:
//!
//! 1. **Base pass**: applied to every fragment: `<PACKAGE_NAME>`,
//!    `<PROJECT_NAME>`, `<CONTRACT_NAME>` and `<CLASS_NAME>`.
//! 2. **Extension pass**: applied to the main class only, after the base pass
//!    has completed. The steps come from [`TemplateKind::extensions`]; token
//!    templates add `<NAME>`, `<SYMBOL>`, `<INITIAL_SUPPLY>` and
//!    `<DEFAULT_OPERATORS>`.
//!
//! Base placeholders never appear in extension replacement text, so running the
//! passes in the other order would not be equivalent; see
//! [`super::substitute`] for the ordering invariant.

use crate::error::{ChainkitError, Result};
use crate::project::{Language, ProjectParameters, TemplateKind, TokenParameters};
use crate::validate::capitalize_first_letter;

use super::embedded::{self, FragmentName};
use super::substitute::{substitute, unresolved_placeholders};

pub const PACKAGE_NAME: &str = "<PACKAGE_NAME>";
pub const PROJECT_NAME: &str = "<PROJECT_NAME>";
pub const CONTRACT_NAME: &str = "<CONTRACT_NAME>";
pub const CLASS_NAME: &str = "<CLASS_NAME>";
pub const NAME: &str = "<NAME>";
pub const SYMBOL: &str = "<SYMBOL>";
pub const INITIAL_SUPPLY: &str = "<INITIAL_SUPPLY>";
pub const DEFAULT_OPERATORS: &str = "<DEFAULT_OPERATORS>";

/// A capability-tagged substitution step layered on top of the base pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// `<NAME>` and `<SYMBOL>`.
    TokenIdentity,
    /// `<INITIAL_SUPPLY>` as a `BigInteger` literal.
    InitialSupply,
    /// `<DEFAULT_OPERATORS>` as a `List<String>` literal.
    DefaultOperators,
}

impl TemplateKind {
    /// Extension steps applied to the main class, in order.
    pub fn extensions(self) -> &'static [Extension] {
        match self {
            Self::HelloWorld | Self::Empty => &[],
            Self::Erc20 => &[Extension::TokenIdentity, Extension::InitialSupply],
            Self::Erc721 => &[Extension::TokenIdentity],
            Self::Erc777 => &[
                Extension::TokenIdentity,
                Extension::InitialSupply,
                Extension::DefaultOperators,
            ],
        }
    }
}

/// Source literal constructing the initial supply, e.g. `new BigInteger("1000")`.
pub fn initial_supply_literal(supply: &str) -> String {
    format!("new BigInteger(\"{supply}\")")
}

/// Source literal for the default operator list; never empty text.
pub fn default_operators_literal(operators: &[String]) -> String {
    if operators.is_empty() {
        "Collections.emptyList()".to_string()
    } else {
        format!("Arrays.asList(\"{}\")", operators.join("\",\""))
    }
}

fn extension_replacements(
    extension: Extension,
    token: &TokenParameters,
) -> Vec<(&'static str, String)> {
    match extension {
        Extension::TokenIdentity => vec![
            (NAME, token.name.clone()),
            (SYMBOL, token.symbol.clone()),
        ],
        Extension::InitialSupply => vec![(
            INITIAL_SUPPLY,
            initial_supply_literal(token.initial_supply.as_deref().unwrap_or("0")),
        )],
        Extension::DefaultOperators => vec![(
            DEFAULT_OPERATORS,
            default_operators_literal(&token.default_operators),
        )],
    }
}

/// One fully substituted fragment, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFragment {
    pub name: FragmentName,
    pub contents: String,
}

/// The fragment set of one template family together with its parameters.
///
/// Constructed once per generation and consumed by the assembler.
#[derive(Debug, Clone)]
pub struct TemplateProvider {
    kind: TemplateKind,
    language: Language,
    params: ProjectParameters,
}

impl TemplateProvider {
    /// Parameters are expected to have passed [`crate::validate::validate_parameters`].
    pub fn new(kind: TemplateKind, language: Language, params: ProjectParameters) -> Self {
        Self {
            kind,
            language,
            params,
        }
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn params(&self) -> &ProjectParameters {
        &self.params
    }

    /// Capitalized project name, used as the main class name.
    pub fn class_name(&self) -> String {
        capitalize_first_letter(&self.params.project_name)
    }

    /// Contract name after applying the user override, if the family ships a contract.
    pub fn contract_name(&self) -> Option<String> {
        self.params
            .contract_name
            .clone()
            .or_else(|| self.kind.default_contract_name().map(str::to_string))
    }

    fn raw(&self, name: FragmentName) -> Result<&'static str> {
        embedded::lookup(name, self.kind, self.language).ok_or_else(|| {
            ChainkitError::ResourceMissing(format!(
                "{name} template for {} {} projects",
                self.kind, self.language
            ))
        })
    }

    fn base_replacements(&self, name: FragmentName) -> Vec<(&'static str, String)> {
        let class_name = self.class_name();
        let project_name = if name == FragmentName::MainClass {
            class_name.clone()
        } else {
            self.params.project_name.clone()
        };

        let mut pairs = vec![
            (PACKAGE_NAME, self.params.package_name.clone()),
            (PROJECT_NAME, project_name),
        ];
        if let Some(contract) = self.contract_name() {
            pairs.push((CONTRACT_NAME, contract));
        }
        pairs.push((CLASS_NAME, class_name));
        pairs
    }

    fn load(&self, name: FragmentName) -> Result<String> {
        let raw = self.raw(name)?;
        Ok(substitute(raw, &self.base_replacements(name)))
    }

    /// Main class: base pass, then every extension step of the template kind.
    pub fn load_main_source(&self) -> Result<String> {
        let mut source = self.load(FragmentName::MainClass)?;

        let extensions = self.kind.extensions();
        if extensions.is_empty() {
            return Ok(source);
        }

        let token = self.params.token.as_ref().ok_or_else(|| {
            ChainkitError::Validation(format!("{} projects require token parameters", self.kind))
        })?;
        for extension in extensions {
            tracing::debug!(?extension, "applying extension pass");
            source = substitute(&source, &extension_replacements(*extension, token));
        }
        Ok(source)
    }

    /// `build.gradle` with the project and package names filled in.
    pub fn load_build_descriptor(&self) -> Result<String> {
        self.load(FragmentName::BuildDescriptor)
    }

    /// `settings.gradle`.
    pub fn load_build_settings(&self) -> Result<String> {
        self.load(FragmentName::BuildSettings)
    }

    /// Gradle wrapper properties.
    pub fn load_wrapper_properties(&self) -> Result<String> {
        self.load(FragmentName::WrapperProperties)
    }

    /// The `gradlew` shell launcher.
    pub fn load_launcher_unix(&self) -> Result<String> {
        self.load(FragmentName::LauncherUnix)
    }

    /// The `gradlew.bat` launcher.
    pub fn load_launcher_windows(&self) -> Result<String> {
        self.load(FragmentName::LauncherWindows)
    }

    /// Project README.
    pub fn load_readme(&self) -> Result<String> {
        self.load(FragmentName::Readme)
    }

    /// Apache-2.0 license text.
    pub fn load_license(&self) -> Result<String> {
        self.load(FragmentName::License)
    }

    /// Dockerfile that runs the fat jar.
    pub fn load_dockerfile(&self) -> Result<String> {
        self.load(FragmentName::Dockerfile)
    }

    /// Sample Solidity contract for the template.
    pub fn load_contract(&self) -> Result<String> {
        self.load(FragmentName::Contract)
    }

    /// Load a fragment by logical name, dispatching to the matching loader.
    pub fn load_fragment(&self, name: FragmentName) -> Result<String> {
        match name {
            FragmentName::MainClass => self.load_main_source(),
            FragmentName::BuildDescriptor => self.load_build_descriptor(),
            FragmentName::BuildSettings => self.load_build_settings(),
            FragmentName::WrapperProperties => self.load_wrapper_properties(),
            FragmentName::LauncherUnix => self.load_launcher_unix(),
            FragmentName::LauncherWindows => self.load_launcher_windows(),
            FragmentName::Readme => self.load_readme(),
            FragmentName::License => self.load_license(),
            FragmentName::Dockerfile => self.load_dockerfile(),
            FragmentName::Contract => self.load_contract(),
        }
    }

    /// Render every fragment this family produces.
    ///
    /// Everything is loaded before anything is written, so a missing fragment
    /// aborts generation with nothing on disk.
    pub fn render_all(&self) -> Result<Vec<RenderedFragment>> {
        let mut rendered = Vec::with_capacity(FragmentName::ALL.len());
        for name in FragmentName::ALL {
            if !embedded::is_required(name, self.kind) {
                continue;
            }
            let contents = self.load_fragment(name)?;
            let leftover = unresolved_placeholders(&contents);
            if !leftover.is_empty() {
                tracing::warn!(fragment = %name, ?leftover, "unresolved placeholders after substitution");
            }
            rendered.push(RenderedFragment { name, contents });
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(supply: Option<&str>, operators: &[&str]) -> TokenParameters {
        TokenParameters {
            name: "MyToken".into(),
            symbol: "MTK".into(),
            initial_supply: supply.map(str::to_string),
            default_operators: operators.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_main_source_base_pass() {
        let provider = TemplateProvider::new(
            TemplateKind::HelloWorld,
            Language::Java,
            ProjectParameters::new("test", "test.package"),
        );
        let source = provider.load_main_source().unwrap();
        assert!(source.starts_with("package test.package;"));
        assert!(source.contains("public class Test {"));
        assert!(source.contains("import test.package.generated.contracts.HelloWorld;"));
        assert!(unresolved_placeholders(&source).is_empty());
    }

    #[test]
    fn test_contract_name_override() {
        let provider = TemplateProvider::new(
            TemplateKind::HelloWorld,
            Language::Java,
            ProjectParameters::new("Test", "org.demo").with_contract_name("Greeter"),
        );
        assert!(provider.load_main_source().unwrap().contains("Greeter contract = Greeter"));
        assert!(provider.load_contract().unwrap().contains("contract Greeter {"));
    }

    #[test]
    fn test_settings_keep_raw_project_name() {
        let provider = TemplateProvider::new(
            TemplateKind::HelloWorld,
            Language::Java,
            ProjectParameters::new("myApp", "org.demo"),
        );
        let settings = provider.load_build_settings().unwrap();
        assert!(settings.contains("rootProject.name = 'myApp'"));
        let build = provider.load_build_descriptor().unwrap();
        assert!(build.contains("mainClass = 'org.demo.MyApp'"));
    }

    #[test]
    fn test_erc20_extension_pass() {
        let provider = TemplateProvider::new(
            TemplateKind::Erc20,
            Language::Java,
            ProjectParameters::new("Token", "org.token").with_token(token(Some("1000"), &[])),
        );
        let source = provider.load_main_source().unwrap();
        assert!(source.contains("\"MyToken\", \"MTK\", new BigInteger(\"1000\")"));
        assert!(unresolved_placeholders(&source).is_empty());
    }

    #[test]
    fn test_erc777_empty_operators() {
        let provider = TemplateProvider::new(
            TemplateKind::Erc777,
            Language::Java,
            ProjectParameters::new("Token", "org.token").with_token(token(Some("1000"), &[])),
        );
        let source = provider.load_main_source().unwrap();
        assert!(source.contains("List<String> defaultOperators = Collections.emptyList();"));
        assert!(source.contains("new BigInteger(\"1000\")"));
        assert!(unresolved_placeholders(&source).is_empty());
    }

    #[test]
    fn test_erc777_operators_literal() {
        let ops = ["0xabc".to_string(), "0xdef".to_string()];
        assert_eq!(
            default_operators_literal(&ops),
            "Arrays.asList(\"0xabc\",\"0xdef\")"
        );
    }

    #[test]
    fn test_erc721_has_no_supply() {
        let provider = TemplateProvider::new(
            TemplateKind::Erc721,
            Language::Java,
            ProjectParameters::new("Nft", "org.nft").with_token(token(None, &[])),
        );
        let source = provider.load_main_source().unwrap();
        assert!(source.contains("\"MyToken\", \"MTK\")"));
        assert!(!source.contains("BigInteger(\""));
    }

    #[test]
    fn test_token_kind_without_token_fails() {
        let provider = TemplateProvider::new(
            TemplateKind::Erc20,
            Language::Java,
            ProjectParameters::new("Token", "org.token"),
        );
        assert!(matches!(
            provider.load_main_source(),
            Err(ChainkitError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_fragment_is_resource_missing() {
        let provider = TemplateProvider::new(
            TemplateKind::Erc20,
            Language::Kotlin,
            ProjectParameters::new("Token", "org.token").with_token(token(Some("1"), &[])),
        );
        assert!(matches!(
            provider.render_all(),
            Err(ChainkitError::ResourceMissing(_))
        ));
    }

    #[test]
    fn test_render_all_skips_contract_for_empty() {
        let provider = TemplateProvider::new(
            TemplateKind::Empty,
            Language::Kotlin,
            ProjectParameters::new("Imported", "org.imported"),
        );
        let rendered = provider.render_all().unwrap();
        assert!(rendered.iter().all(|f| f.name != FragmentName::Contract));
        assert_eq!(rendered.len(), FragmentName::ALL.len() - 1);
        for fragment in &rendered {
            assert!(
                unresolved_placeholders(&fragment.contents).is_empty(),
                "{} has unresolved placeholders",
                fragment.name
            );
        }
    }

    #[test]
    fn test_extensions_order() {
        assert_eq!(
            TemplateKind::Erc777.extensions(),
            &[
                Extension::TokenIdentity,
                Extension::InitialSupply,
                Extension::DefaultOperators
            ]
        );
        assert!(TemplateKind::HelloWorld.extensions().is_empty());
    }
}
