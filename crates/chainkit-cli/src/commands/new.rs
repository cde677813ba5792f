use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::Input;

use chainkit_core::assembler;
use chainkit_core::layout::ProjectLayout;
use chainkit_core::platform::HostOs;
use chainkit_core::process::{self, BuildTool};
use chainkit_core::project::{Language, ProjectParameters, TemplateKind, TokenParameters};
use chainkit_core::templates::provider::TemplateProvider;
use chainkit_core::validate::validate_parameters;
use chainkit_core::version::{detect_java_version, MIN_JAVA};

use crate::output;

pub struct NewOptions {
    pub project_name: String,
    pub package_name: String,
    pub kind: TemplateKind,
    pub kotlin: bool,
    pub output_dir: PathBuf,
    pub token_name: Option<String>,
    pub token_symbol: Option<String>,
    pub initial_supply: Option<String>,
    pub default_operators: Vec<String>,
    pub skip_build: bool,
    pub jar: bool,
    pub interactive: bool,
    pub host_os: HostOs,
}

/// Create a new project from a template.
///
/// Token parameters missing from the command line are prompted for, or
/// defaulted when prompting is disabled. Unless `--skip-build` is given, the
/// contract wrappers are generated right away so the project opens cleanly in
/// an IDE.
pub fn run(opts: NewOptions) -> Result<()> {
    output::print_header(&format!("chainkit new: {}", opts.project_name));

    let language = language_for(opts.kotlin);
    let mut params = ProjectParameters::new(&opts.project_name, &opts.package_name);
    if opts.kind.is_token() {
        params = params.with_token(token_parameters(&opts)?);
    } else if opts.token_name.is_some() || opts.token_symbol.is_some() {
        output::print_warning(&format!(
            "token options are ignored by the {} template",
            opts.kind
        ));
    }

    output::print_key_value("Template", &opts.kind.to_string());
    output::print_key_value("Language", &language.to_string());

    let root = generate(opts.kind, language, params, &opts.output_dir, opts.host_os, 3)?;
    check_toolchain(opts.host_os);
    finish(&root, opts.host_os, opts.skip_build, opts.jar, 3)?;

    output::print_success(&format!(
        "Project '{}' created at {}",
        opts.project_name,
        root.display()
    ));
    print_next_steps(&root);
    Ok(())
}

pub fn language_for(kotlin: bool) -> Language {
    if kotlin {
        Language::Kotlin
    } else {
        Language::Java
    }
}

/// Fill in token parameters from flags, prompts or defaults.
fn token_parameters(opts: &NewOptions) -> Result<TokenParameters> {
    let defaults = TokenParameters::defaults_for(opts.kind);

    let name = resolve(opts.token_name.clone(), "Token name", &defaults.name, opts.interactive)?;
    let symbol = resolve(
        opts.token_symbol.clone(),
        "Token symbol",
        &defaults.symbol,
        opts.interactive,
    )?;
    let initial_supply = match defaults.initial_supply.as_deref() {
        Some(default) => Some(resolve(
            opts.initial_supply.clone(),
            "Initial supply",
            default,
            opts.interactive,
        )?),
        None => None,
    };

    Ok(TokenParameters {
        name,
        symbol,
        initial_supply,
        default_operators: opts.default_operators.clone(),
    })
}

fn resolve(value: Option<String>, prompt: &str, default: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?),
        None => Ok(default.to_string()),
    }
}

/// Validate, render and write a project into `output_dir/<project_name>`.
pub fn generate(
    kind: TemplateKind,
    language: Language,
    params: ProjectParameters,
    output_dir: &Path,
    host_os: HostOs,
    total_steps: u32,
) -> Result<PathBuf> {
    output::print_step(1, total_steps, "Validating parameters");
    validate_parameters(&params, kind, language)?;

    let destination = output_dir.join(&params.project_name);
    output::print_step(
        2,
        total_steps,
        &format!("Writing project to {}", destination.display()),
    );
    let provider = TemplateProvider::new(kind, language, params);
    let layout = ProjectLayout::for_provider(&provider, host_os);

    assembler::assemble(&provider, &layout, &destination).map_err(|e| {
        if let Some(path) = e.failed_path() {
            output::print_error(&format!(
                "generation stopped at {}; files written so far were left in place",
                path.display()
            ));
        }
        anyhow::Error::new(e)
    })
}

/// Warn about a missing or outdated toolchain. Never fails.
pub fn check_toolchain(host_os: HostOs) {
    if let Err(missing) = process::check_prerequisites(host_os) {
        for m in &missing {
            output::print_warning(&format!(
                "Missing: {}, install: {}",
                m.tool_name, m.install_instructions
            ));
        }
        return;
    }
    if let Some(found) = detect_java_version() {
        if found < MIN_JAVA {
            output::print_warning(&format!(
                "java: found v{found}, minimum v{MIN_JAVA} recommended"
            ));
        }
    }
}

/// Generate contract wrappers (and optionally the fat jar) in a fresh project.
pub fn finish(root: &Path, host_os: HostOs, skip_build: bool, jar: bool, step: u32) -> Result<()> {
    if skip_build {
        output::print_step(step, step, "Skipping wrapper generation (--skip-build)");
        return Ok(());
    }

    output::print_step(step, step, "Generating contract wrappers");
    let tool = BuildTool::new(root, host_os);
    output::with_spinner("Running gradle generateContractWrappers...", || {
        tool.generate_wrappers()
    })
    .context("could not generate contract wrappers; the project was still created")?;

    if jar {
        output::with_spinner("Running gradle shadowJar...", || tool.shadow_jar())
            .context("could not build the executable jar")?;
        output::print_key_value("Jar", &root.join("build").join("libs").display().to_string());
    }
    Ok(())
}

pub fn print_next_steps(root: &Path) {
    println!();
    println!("  Next steps:");
    println!("    cd {}", root.display());
    println!("    chainkit build");
    println!("    chainkit run");
    println!();
}
