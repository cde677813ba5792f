//! Project templates and the substitution engine that instantiates them.
//!
//! Raw fragments are embedded into the binary at compile time via [`include_str!`]
//! in the [`embedded`] module. A [`provider::TemplateProvider`] selects the
//! fragments for one `(TemplateKind, Language)` pair and renders them with
//! [`substitute::substitute`].
//!
//! ## Placeholders
//!
//! Fragments use literal `<UPPER_SNAKE>` tokens, replaced in order:
//! - `<PACKAGE_NAME>`: dotted package, e.g. `io.example.app`
//! - `<PROJECT_NAME>`: project name as typed (capitalized in the main class)
//! - `<CONTRACT_NAME>`: Solidity contract and generated wrapper class name
//! - `<CLASS_NAME>`: capitalized main class name
//!
//! Token templates additionally carry `<NAME>`, `<SYMBOL>`, `<INITIAL_SUPPLY>`
//! and `<DEFAULT_OPERATORS>` in their main class.
//!
//! ## Adding a new template
//!
//! 1. Create the `.tmpl` file under `templates/project/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`] and wire it into [`embedded::lookup`]
//! 3. List any extra placeholders in [`provider::Extension`]

pub mod embedded;
pub mod provider;
pub mod substitute;
