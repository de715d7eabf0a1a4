use acfgen::{
    cli::{get_log_level_from_verbose, parse_cli, run_create, run_setup, Commands},
    error::default_error_handler,
    prompt::DialoguerPrompter,
};

fn main() {
    let cli = parse_cli();
    let prompter = DialoguerPrompter::new();

    // Determine verbosity from respective command args
    let result = match &cli.command {
        Commands::Setup(args) => {
            let lvl = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(lvl).init();
            run_setup(args, &prompter)
        }
        Commands::Create(args) => {
            let lvl = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(lvl).init();
            run_create(args, &prompter)
        }
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => default_error_handler(err),
    }
}
