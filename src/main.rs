use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use svcreg::confirm::TerminalConfirmation;
use svcreg::error::RegistrarError;
use svcreg::registrar::Registrar;
use svcreg::unit::ServiceUnit;
use svcreg::{report, systemd};

mod cli;
mod help;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from(
            cli.verbose.clone(),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::error(&err.to_string());
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), RegistrarError> {
    if let Some(Commands::Completions(args)) = cli.command {
        handle_completions(args);
        return Ok(());
    }

    // The capability probe runs before the argument checks.
    systemd::probe()?;

    let script = cli.script.ok_or(RegistrarError::MissingArgument)?;
    let user = ServiceUnit::session_user();

    Registrar::new().register(&script, &user, &TerminalConfirmation)?;
    Ok(())
}

fn handle_completions(args: cli::CompletionsArgs) {
    let mut cmd = Cli::command();

    generate::<clap_complete::Shell, _>(
        args.shell.into(),
        &mut cmd,
        env!("CARGO_PKG_NAME"),
        &mut io::stdout(),
    );
}
