//! Validation of user-supplied names before any template is instantiated.
//!
//! The boolean checks never fail; [`validate_parameters`] composes them into
//! a [`ChainkitError::Validation`] carrying a message suitable for the user.

use crate::error::{ChainkitError, Result};
use crate::project::{Language, ProjectParameters, TemplateKind};

/// True iff `candidate` is non-empty, starts with an alphabetic character,
/// and contains only alphanumerics or `_`.
pub fn identifier_is_valid(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_alphabetic() && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Package segments may start with `_` (e.g. `org._2fa`) but never with a digit.
fn package_segment_is_valid(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// True iff every `.`-separated segment of `candidate` is a valid package segment.
///
/// Empty segments (`"org..com"`, `".org"`, `"org."`) are rejected.
pub fn package_name_is_valid(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.split('.').all(package_segment_is_valid)
}

/// True iff `args` is non-empty and no element is blank.
pub fn required_args_not_empty<S: AsRef<str>>(args: &[S]) -> bool {
    !args.is_empty() && args.iter().all(|a| !a.as_ref().trim().is_empty())
}

/// Upper-case the first character of `s`, leaving the rest untouched.
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check everything a generation run needs before touching templates or disk.
/// Characters that would break a string literal or be read as a placeholder
/// by a later substitution step.
const FORBIDDEN_IN_LITERALS: [char; 4] = ['"', '\\', '<', '>'];

pub fn validate_parameters(
    params: &ProjectParameters,
    kind: TemplateKind,
    language: Language,
) -> Result<()> {
    if !required_args_not_empty(&[&params.project_name, &params.package_name]) {
        return Err(ChainkitError::Validation(
            "please make sure the required parameters are not empty".into(),
        ));
    }

    if !identifier_is_valid(&params.project_name) {
        return Err(ChainkitError::Validation(format!(
            "{} is not a valid name, please make sure that your project name complies with the class naming convention",
            params.project_name
        )));
    }

    if !package_name_is_valid(&params.package_name) {
        return Err(ChainkitError::Validation(format!(
            "{} is not a valid package name, please make sure that your package name complies with the package naming convention",
            params.package_name
        )));
    }

    if let Some(contract) = &params.contract_name {
        if !identifier_is_valid(contract) {
            return Err(ChainkitError::Validation(format!(
                "{contract} is not a valid contract name"
            )));
        }
    }

    if !kind.supports(language) {
        return Err(ChainkitError::UnsupportedTemplate {
            template: kind.to_string(),
            language: language.to_string(),
        });
    }

    if kind.is_token() {
        let token = params.token.as_ref().ok_or_else(|| {
            ChainkitError::Validation(format!("{kind} projects require token parameters"))
        })?;
        if !required_args_not_empty(&[&token.name, &token.symbol]) {
            return Err(ChainkitError::Validation(
                "token name and symbol must not be empty".into(),
            ));
        }
        if [&token.name, &token.symbol]
            .iter()
            .any(|v| v.contains(FORBIDDEN_IN_LITERALS))
        {
            return Err(ChainkitError::Validation(
                "token name and symbol must not contain quotes, backslashes or angle brackets"
                    .into(),
            ));
        }
        if kind.requires_initial_supply() {
            let supply = token.initial_supply.as_deref().unwrap_or("");
            if supply.is_empty() || !supply.chars().all(|c| c.is_ascii_digit()) {
                return Err(ChainkitError::Validation(format!(
                    "initial supply must be a non-negative integer, got '{supply}'"
                )));
            }
        }
        for operator in &token.default_operators {
            if operator.trim().is_empty() || operator.contains(FORBIDDEN_IN_LITERALS) {
                return Err(ChainkitError::Validation(format!(
                    "invalid default operator '{operator}'"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::TokenParameters;

    #[test]
    fn test_package_name_valid() {
        assert!(package_name_is_valid("org.com"));
        assert!(package_name_is_valid("io.chainkit.demo_app"));
        assert!(package_name_is_valid("single"));
    }

    #[test]
    fn test_package_name_numeric_segment() {
        assert!(!package_name_is_valid("1.com"));
        assert!(!package_name_is_valid("org.2fa"));
    }

    #[test]
    fn test_package_name_empty_segments() {
        assert!(!package_name_is_valid(""));
        assert!(!package_name_is_valid("org..com"));
        assert!(!package_name_is_valid(".org"));
        assert!(!package_name_is_valid("org."));
    }

    #[test]
    fn test_package_name_allows_lowercase_words() {
        assert!(package_name_is_valid("test.package"));
    }

    #[test]
    fn test_identifier_valid() {
        assert!(identifier_is_valid("ClassName"));
        assert!(identifier_is_valid("class_name2"));
    }

    #[test]
    fn test_identifier_invalid() {
        assert!(!identifier_is_valid("1BadClassName"));
        assert!(!identifier_is_valid("!BadClassName"));
        assert!(!identifier_is_valid("Bad-Name"));
        assert!(!identifier_is_valid(""));
        assert!(!identifier_is_valid("_leading"));
    }

    #[test]
    fn test_required_args() {
        assert!(required_args_not_empty(&["a", "b"]));
        assert!(!required_args_not_empty(&["a", "  "]));
        assert!(!required_args_not_empty::<&str>(&[]));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize_first_letter("className"), "ClassName");
        assert_eq!(capitalize_first_letter("Already"), "Already");
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn test_validate_helloworld() {
        let params = ProjectParameters::new("Test", "test.package");
        assert!(validate_parameters(&params, TemplateKind::HelloWorld, Language::Java).is_ok());
        assert!(validate_parameters(&params, TemplateKind::HelloWorld, Language::Kotlin).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_project_name() {
        let params = ProjectParameters::new("1Test", "test.package");
        let err = validate_parameters(&params, TemplateKind::HelloWorld, Language::Java)
            .unwrap_err();
        assert!(matches!(err, ChainkitError::Validation(_)));
    }

    #[test]
    fn test_validate_token_requires_parameters() {
        let params = ProjectParameters::new("Token", "org.token");
        let err = validate_parameters(&params, TemplateKind::Erc20, Language::Java).unwrap_err();
        assert!(matches!(err, ChainkitError::Validation(_)));
    }

    #[test]
    fn test_validate_token_supply_must_be_numeric() {
        let params = ProjectParameters::new("Token", "org.token").with_token(TokenParameters {
            name: "MyToken".into(),
            symbol: "MTK".into(),
            initial_supply: Some("lots".into()),
            default_operators: vec![],
        });
        assert!(validate_parameters(&params, TemplateKind::Erc20, Language::Java).is_err());
    }

    #[test]
    fn test_validate_erc721_without_supply() {
        let params = ProjectParameters::new("Nft", "org.nft").with_token(TokenParameters {
            name: "MyNft".into(),
            symbol: "NFT".into(),
            initial_supply: None,
            default_operators: vec![],
        });
        assert!(validate_parameters(&params, TemplateKind::Erc721, Language::Java).is_ok());
    }

    #[test]
    fn test_validate_token_kotlin_unsupported() {
        let params = ProjectParameters::new("Token", "org.token").with_token(TokenParameters {
            name: "MyToken".into(),
            symbol: "MTK".into(),
            initial_supply: Some("1000".into()),
            default_operators: vec![],
        });
        let err =
            validate_parameters(&params, TemplateKind::Erc20, Language::Kotlin).unwrap_err();
        assert!(matches!(err, ChainkitError::UnsupportedTemplate { .. }));
    }

    #[test]
    fn test_validate_rejects_placeholder_like_token_values() {
        let token = |name: &str, operators: Vec<String>| TokenParameters {
            name: name.into(),
            symbol: "MTK".into(),
            initial_supply: Some("1000".into()),
            default_operators: operators,
        };

        let params =
            ProjectParameters::new("Token", "org.token").with_token(token("<SYMBOL>", vec![]));
        let err = validate_parameters(&params, TemplateKind::Erc20, Language::Java).unwrap_err();
        assert!(matches!(err, ChainkitError::Validation(_)));

        let params = ProjectParameters::new("Token", "org.token")
            .with_token(token("MyToken", vec!["<INITIAL_SUPPLY>".into()]));
        assert!(validate_parameters(&params, TemplateKind::Erc777, Language::Java).is_err());

        let params = ProjectParameters::new("Token", "org.token")
            .with_token(token("MyToken", vec!["0xabc".into()]));
        assert!(validate_parameters(&params, TemplateKind::Erc777, Language::Java).is_ok());
    }
}
