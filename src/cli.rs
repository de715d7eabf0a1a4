use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::constants::{exit_codes, verbosity, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::renderer::render;
use crate::wizard::{WizardController, WizardOutcome};
use crate::writer::ArtifactWriter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Stub shipped with the binary, used unless `--stub` points elsewhere.
const DEFAULT_STUB: &str = include_str!("stubs/acf_group.stub");

/// Command-line arguments structure for acfgen.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect and persist the theme path used by other commands
    Setup(SetupArgs),
    /// Create an ACF field group class
    Create(CreateArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct SetupArgs {
    /// Settings file location
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// Settings file location
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Use a custom stub template instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub stub: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How a command run finished; maps onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Aborted,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed => exit_codes::SUCCESS,
            RunOutcome::Aborted => exit_codes::FAILURE,
        }
    }
}

/// Parse command line arguments with custom handling for missing inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Maps the `-v` count to a log level filter. Warnings stay on without
/// `-v` so a delimiter collision is reported on every run.
pub fn get_log_level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

/// Asks for the theme path and persists it to the settings file.
pub fn run_setup(args: &SetupArgs, prompter: &dyn Prompter) -> Result<RunOutcome> {
    prompter.show_title("Setup ACF config");

    let theme = prompter.ask_text("Enter the absolute path of your WordPress theme")?;

    if !prompter.ask_confirm("Continue with this action?", true)? {
        prompter.show_caution("Roger that! Abort mission!");
        return Ok(RunOutcome::Aborted);
    }

    Settings::new(theme).save(&args.config)?;
    log::info!("Settings written to {}", args.config.display());
    println!("Setup complete. Settings written to {}.", args.config.display());
    Ok(RunOutcome::Completed)
}

/// Runs the full field group wizard, then renders and writes the class.
pub fn run_create(args: &CreateArgs, prompter: &dyn Prompter) -> Result<RunOutcome> {
    // Settings are validated before the first prompt so a missing setup
    // never costs the user a fully answered questionnaire.
    let settings = Settings::load(&args.config)?;

    let stub = match &args.stub {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_STUB.to_string(),
    };

    let group = match WizardController::new(prompter).run()? {
        WizardOutcome::Accepted(group) => group,
        WizardOutcome::Aborted => {
            prompter.show_caution("Roger that! Abort mission!");
            return Ok(RunOutcome::Aborted);
        }
    };

    let contents = render(&group, &stub);

    let writer = ArtifactWriter::new(settings.theme);
    let path = writer.write_group(&group.file_stem(), &contents)?;

    log::info!("Rendered {} fields into {}", group.fields.len(), group.class_name());
    println!("Field group class created in {}.", path.display());
    Ok(RunOutcome::Completed)
}
