use std::path::PathBuf;

use anyhow::Result;

use chainkit_core::assembler;
use chainkit_core::layout::ProjectLayout;
use chainkit_core::platform::HostOs;
use chainkit_core::project::{ProjectParameters, TemplateKind};

use super::new;
use crate::output;

pub struct ImportOptions {
    pub project_name: String,
    pub package_name: String,
    pub solidity_path: PathBuf,
    pub kotlin: bool,
    pub output_dir: PathBuf,
    pub skip_build: bool,
    pub jar: bool,
    pub host_os: HostOs,
}

/// Create a project without the sample contract and copy the user's
/// Solidity sources into it.
pub fn run(opts: ImportOptions) -> Result<()> {
    output::print_header(&format!("chainkit import: {}", opts.project_name));

    if !assembler::contains_contracts(&opts.solidity_path) {
        anyhow::bail!(
            "no .sol files found at {}",
            opts.solidity_path.display()
        );
    }

    let language = new::language_for(opts.kotlin);
    let params = ProjectParameters::new(&opts.project_name, &opts.package_name);
    let root = new::generate(
        TemplateKind::Empty,
        language,
        params,
        &opts.output_dir,
        opts.host_os,
        4,
    )?;

    output::print_step(3, 4, "Importing Solidity contracts");
    let layout = ProjectLayout::new(
        &opts.project_name,
        &opts.package_name,
        language,
        opts.host_os,
    );
    let copied = assembler::import_contracts(&opts.solidity_path, &layout, &root)?;
    output::print_key_value("Contracts", &copied.to_string());

    new::check_toolchain(opts.host_os);
    new::finish(&root, opts.host_os, opts.skip_build, opts.jar, 4)?;

    output::print_success(&format!(
        "Project '{}' created at {}",
        opts.project_name,
        root.display()
    ));
    new::print_next_steps(&root);
    Ok(())
}
