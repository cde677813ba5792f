//! CLI command implementations for chainkit.
//!
//! Each module corresponds to a subcommand (`chainkit <command>`).

pub mod build;
pub mod docker;
pub mod import;
pub mod new;
pub mod update;
