//! Core library for the chainkit toolkit.
//!
//! Turns a handful of user parameters into a buildable Gradle project that
//! talks to an Ethereum node: [`validate`] checks the names, a
//! [`templates::provider::TemplateProvider`] renders the embedded fragments,
//! [`layout::ProjectLayout`] decides where each file goes and
//! [`assembler::assemble`] writes the tree.
//!
//! Collaborators for the generated project's own tooling live alongside:
//! [`process`] drives the Gradle launcher, [`docker`] packages the app, and
//! [`config`] persists the CLI's client id and update state.

pub mod assembler;
pub mod config;
pub mod docker;
pub mod error;
pub mod layout;
pub mod platform;
pub mod process;
pub mod project;
pub mod templates;
pub mod validate;
pub mod version;
