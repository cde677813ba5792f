//! Literal, order-sensitive placeholder substitution.
//!
//! Placeholders are bracketed literals such as `<PACKAGE_NAME>`. Each
//! replacement is applied to every occurrence in the *current* text, in the
//! order given, so a later replacement also sees text produced by an earlier
//! one:
//!
//! ```
//! use chainkit_core::templates::substitute::substitute;
//!
//! let out = substitute("<A>", &[("<A>", "<B>X"), ("<B>", "Y")]);
//! assert_eq!(out, "YX");
//! ```
//!
//! ## Ordering invariant
//!
//! Matching is literal, so no token may be a substring of a token that is
//! substituted later, and a replacement value must not contain a token that a
//! later step would rewrite unintentionally. The brackets keep the shipped
//! vocabulary disjoint (`<NAME>` never matches inside `<PROJECT_NAME>`), and
//! the provider always runs the base pass before any extension pass. Nothing
//! here checks this automatically.

/// Apply `replacements` to `text` in order, replacing every occurrence of each token.
pub fn substitute<T, V>(text: &str, replacements: &[(T, V)]) -> String
where
    T: AsRef<str>,
    V: AsRef<str>,
{
    replacements
        .iter()
        .fold(text.to_string(), |acc, (token, value)| {
            let token = token.as_ref();
            if token.is_empty() || !acc.contains(token) {
                acc
            } else {
                acc.replace(token, value.as_ref())
            }
        })
}

/// Every `<UPPER_SNAKE>` token still present in `text`, in order of appearance.
///
/// Only upper-case letters, digits and `_` count as token characters, so
/// generics like `List<String>` or comparisons like `a < b` are not reported.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let len = after
            .find(|c: char| !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'))
            .unwrap_or(after.len());
        let body = &after[..len];
        let starts_upper = body.chars().next().is_some_and(|c| c.is_ascii_uppercase());
        if starts_upper && after[len..].starts_with('>') {
            found.push(format!("<{body}>"));
            rest = &after[len + 1..];
        } else {
            rest = after;
        }
    }
    found
}
