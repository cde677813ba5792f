//! chainkit CLI: scaffold, build and package Ethereum client applications.
//!
//! `new` and `import` generate a Gradle project from embedded templates;
//! `build`, `test`, `run` and `docker` drive the generated project's own
//! tooling. An anonymous usage report and an update check are sent
//! best-effort and never affect the exit code.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use chainkit_core::config::CliConfig;
use chainkit_core::docker::DEFAULT_TAG;
use chainkit_core::platform::HostOs;
use chainkit_core::project::TemplateKind;
use chainkit_services::{Telemetry, Updater};

#[derive(Parser)]
#[command(
    name = "chainkit",
    about = "Scaffold, build, test and containerize Ethereum client projects",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable the update check and anonymous usage telemetry
    #[arg(long, global = true, env = "CHAINKIT_NO_TELEMETRY")]
    no_telemetry: bool,

    /// Base URL of the update and telemetry services
    #[arg(long, global = true, env = "CHAINKIT_SERVICES_URL", hide = true)]
    services_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project from a template
    #[command(alias = "generate")]
    New {
        /// Project name, also used as the main class name
        project_name: String,

        /// Package of the generated sources, e.g. io.example.app
        package_name: String,

        /// Project template
        #[arg(long, value_enum, default_value = "helloworld")]
        template: TemplateChoice,

        /// Generate Kotlin sources instead of Java
        #[arg(long)]
        kotlin: bool,

        /// Directory the project directory is created in
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Token name (token templates only)
        #[arg(long)]
        token_name: Option<String>,

        /// Token symbol (token templates only)
        #[arg(long)]
        token_symbol: Option<String>,

        /// Initial supply (ERC20 and ERC777 only)
        #[arg(long)]
        initial_supply: Option<String>,

        /// Default operator addresses (ERC777 only)
        #[arg(long, value_delimiter = ',')]
        default_operators: Vec<String>,

        /// Do not generate contract wrappers after writing the project
        #[arg(long)]
        skip_build: bool,

        /// Also build an executable fat jar
        #[arg(long)]
        jar: bool,

        /// Never prompt; use defaults for missing token parameters
        #[arg(long)]
        no_interactive: bool,
    },

    /// Create a project around existing Solidity contracts
    Import {
        project_name: String,

        package_name: String,

        /// A .sol file or a directory searched recursively for .sol files
        #[arg(short, long)]
        solidity_path: PathBuf,

        /// Generate Kotlin sources instead of Java
        #[arg(long)]
        kotlin: bool,

        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        #[arg(long)]
        skip_build: bool,

        #[arg(long)]
        jar: bool,
    },

    /// Build the project in the given directory
    Build {
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,
    },

    /// Run the project's tests
    Test {
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,
    },

    /// Run the project's main class
    Run {
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Network name passed to the application
        #[arg(long)]
        network: Option<String>,
    },

    /// Package and run the project with Docker
    #[command(subcommand)]
    Docker(DockerCommand),

    /// Check for a newer chainkit release
    Update,
}

impl Commands {
    /// Subcommand path and the names of the flags that were given.
    fn usage_report(&self) -> (&'static str, Vec<String>) {
        match self {
            Commands::New {
                template,
                kotlin,
                token_name,
                token_symbol,
                initial_supply,
                default_operators,
                skip_build,
                jar,
                no_interactive,
                ..
            } => {
                let mut params = vec![format!("--template={}", TemplateKind::from(*template))];
                params.extend(given_flags(&[
                    ("--kotlin", *kotlin),
                    ("--token-name", token_name.is_some()),
                    ("--token-symbol", token_symbol.is_some()),
                    ("--initial-supply", initial_supply.is_some()),
                    ("--default-operators", !default_operators.is_empty()),
                    ("--skip-build", *skip_build),
                    ("--jar", *jar),
                    ("--no-interactive", *no_interactive),
                ]));
                ("new", params)
            }
            Commands::Import {
                kotlin,
                skip_build,
                jar,
                ..
            } => (
                "import",
                given_flags(&[
                    ("--kotlin", *kotlin),
                    ("--skip-build", *skip_build),
                    ("--jar", *jar),
                ]),
            ),
            Commands::Build { .. } => ("build", Vec::new()),
            Commands::Test { .. } => ("test", Vec::new()),
            Commands::Run { network, .. } => {
                ("run", given_flags(&[("--network", network.is_some())]))
            }
            Commands::Docker(DockerCommand::Build { .. }) => ("docker build", Vec::new()),
            Commands::Docker(DockerCommand::Run { print, .. }) => {
                ("docker run", given_flags(&[("--print", *print)]))
            }
            Commands::Update => ("update", Vec::new()),
        }
    }
}

fn given_flags(set: &[(&str, bool)]) -> Vec<String> {
    set.iter()
        .filter(|(_, given)| *given)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[derive(Subcommand)]
pub enum DockerCommand {
    /// Build the project image
    Build {
        #[arg(short, long, default_value = DEFAULT_TAG)]
        tag: String,

        #[arg(short, long, default_value = ".")]
        directory: PathBuf,
    },

    /// Run the project image against a node
    Run {
        /// Ethereum node URL
        node_url: String,

        /// Wallet file mounted into the container
        wallet_path: PathBuf,

        /// Wallet password
        #[arg(default_value = "")]
        wallet_password: String,

        #[arg(short, long, default_value = DEFAULT_TAG)]
        tag: String,

        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Print the docker command instead of running it
        #[arg(long)]
        print: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TemplateChoice {
    Helloworld,
    Erc20,
    Erc721,
    Erc777,
}

impl From<TemplateChoice> for TemplateKind {
    fn from(choice: TemplateChoice) -> Self {
        match choice {
            TemplateChoice::Helloworld => Self::HelloWorld,
            TemplateChoice::Erc20 => Self::Erc20,
            TemplateChoice::Erc721 => Self::Erc721,
            TemplateChoice::Erc777 => Self::Erc777,
        }
    }
}

/// Saved CLI config, or a throwaway one when it cannot be read.
fn load_config(services_url: Option<&str>) -> (CliConfig, Option<PathBuf>) {
    let path = CliConfig::default_path();
    let config = match path.as_deref().map(CliConfig::load_or_default) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "ignoring unreadable config");
            CliConfig::default()
        }
        None => CliConfig::default(),
    };
    (config.with_services_url(services_url), path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let host_os = HostOs::current();
    let (mut config, config_path) = load_config(cli.services_url.as_deref());

    // Only the subcommand and flag names are reported, never argument values.
    let telemetry = (!cli.no_telemetry).then(|| {
        let (command, params) = cli.command.usage_report();
        let config = config.clone();
        let telemetry = Telemetry::new(host_os, true);
        tokio::spawn(async move {
            telemetry
                .upload(&config, command, &params)
                .await
                .log_ignored("telemetry upload");
        })
    });

    let updater = Updater::new(host_os);
    if !cli.no_telemetry && !matches!(cli.command, Commands::Update) {
        if let Some(notice) = updater.update_currently_available(&config) {
            output::print_notice(&notice);
        }
    }

    match cli.command {
        Commands::New {
            project_name,
            package_name,
            template,
            kotlin,
            output_dir,
            token_name,
            token_symbol,
            initial_supply,
            default_operators,
            skip_build,
            jar,
            no_interactive,
        } => {
            commands::new::run(commands::new::NewOptions {
                project_name,
                package_name,
                kind: template.into(),
                kotlin,
                output_dir,
                token_name,
                token_symbol,
                initial_supply,
                default_operators,
                skip_build,
                jar,
                interactive: !no_interactive,
                host_os,
            })?;
        }
        Commands::Import {
            project_name,
            package_name,
            solidity_path,
            kotlin,
            output_dir,
            skip_build,
            jar,
        } => {
            commands::import::run(commands::import::ImportOptions {
                project_name,
                package_name,
                solidity_path,
                kotlin,
                output_dir,
                skip_build,
                jar,
                host_os,
            })?;
        }
        Commands::Build { directory } => commands::build::build(&directory, host_os)?,
        Commands::Test { directory } => commands::build::test(&directory, host_os)?,
        Commands::Run { directory, network } => {
            commands::build::run(&directory, network.as_deref(), host_os)?;
        }
        Commands::Docker(command) => commands::docker::run(command)?,
        Commands::Update => {
            commands::update::run(&updater, &mut config, config_path.as_deref(), cli.no_telemetry)
                .await?;
        }
    }

    if let Some(task) = telemetry {
        if let Err(e) = task.await {
            tracing::debug!(error = %e, "telemetry task did not complete");
        }
    }

    Ok(())
}
