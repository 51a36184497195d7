use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use coordinated::config::Config;
use coordinated::logging::init_tracing;
use coordinated::model::RegionList;
use coordinated::navigation::NavigationStack;
use coordinated::session::{FileSessionStore, MemorySessionStore, SessionStore};
use coordinated::shell::{self, ShellCommand, ShellError, ShellOutcome, HELP};
use coordinated::{ApplicationCoordinator, FlowError};

#[derive(Parser, Debug)]
#[command(
    name = "coordinated",
    version,
    about = "Walk the login, signup and article screens from the terminal"
)]
struct Cli {
    /// Config file (default: <config_dir>/coordinated/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Session file, overrides the config's [session] path
    #[arg(long, global = true, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true, conflicts_with = "session")]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Drive the app from stdin, one action per line (default)
    Run,
    /// Print whether the session flag is set
    Status,
    /// Clear the session flag
    Reset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let command = cli.command.unwrap_or(Command::Run);
    let regions = config.signup.region_list();

    if cli.ephemeral {
        return dispatch(command, MemorySessionStore::new(), regions);
    }

    let path = cli
        .session
        .clone()
        .unwrap_or_else(|| config.session.resolved_path());
    tracing::debug!(path = %path.display(), "Using session file");
    dispatch(command, FileSessionStore::new(path), regions)
}

fn dispatch<S: SessionStore>(
    command: Command,
    mut session: S,
    regions: RegionList,
) -> anyhow::Result<()> {
    match command {
        Command::Run => run(session, regions),
        Command::Status => {
            let logged_in = session
                .is_logged_in()
                .context("Failed to read session")?;
            println!("logged in: {logged_in}");
            Ok(())
        }
        Command::Reset => {
            session.clear().context("Failed to clear session")?;
            println!("session cleared");
            Ok(())
        }
    }
}

fn run<S: SessionStore>(session: S, regions: RegionList) -> anyhow::Result<()> {
    let mut app = ApplicationCoordinator::new(session, NavigationStack::new(), regions);
    app.start().context("Failed to start")?;
    print_stack(&app)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let command = match shell::parse_line(&line) {
            Ok(command) => command,
            Err(ShellError::Empty) => continue,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };

        match &command {
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Status => {
                let logged_in = app.session().is_logged_in().context("Failed to read session")?;
                println!(
                    "mode: {}, gate: {}, logged in: {}",
                    app.mode().as_str(),
                    app.gate_state().as_str(),
                    logged_in
                );
            }
            _ => {}
        }

        match shell::execute(&mut app, command) {
            Ok(ShellOutcome::Quit) => break,
            Ok(ShellOutcome::Continue) => print_stack(&app)?,
            Err(FlowError::Session(e)) => return Err(e).context("Session store failed"),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

fn print_stack<S: SessionStore>(
    app: &ApplicationCoordinator<S, NavigationStack>,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", app.navigator())?;
    stdout.flush()?;
    Ok(())
}
