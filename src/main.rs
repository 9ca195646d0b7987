mod cli;
mod entities;
mod error;
mod session;
mod subcommands;

use crossterm::style::Stylize;
use entities::cards::Deck;
use error::SessionError;
use session::Session;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::exit;
use subcommands::ui::Console;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = cli::build_cli().get_matches_from(known_args(std::env::args_os()));
    init_tracing(matches.occurrences_of("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("{}", format!("flashdeck: {}", e).red());
        exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut session = Session::new(console, Deck::new());

    if let Some(paths) = matches.values_of("import") {
        for path in paths {
            session.import_from(Path::new(path))?;
        }
    }
    if let Some(path) = matches.values_of("export").and_then(|paths| paths.last()) {
        session.export_on_exit(path);
    }

    session.run()?;
    info!("session ended with {} cards", session.deck().len());
    Ok(())
}

/// Keeps only the arguments clap is told about, scanning them in pairs:
/// `-import`/`-export` (single or double dash) take the next argument as their
/// path. Unknown flags and stray values are dropped instead of failing the
/// parse.
fn known_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut known: Vec<OsString> = args.next().into_iter().collect();
    while let Some(arg) = args.next() {
        let flag = arg.to_string_lossy().into_owned();
        match flag.as_str() {
            "-import" | "--import" | "-export" | "--export" => {
                if let Some(path) = args.next() {
                    known.push(OsString::from(format!("--{}", flag.trim_start_matches('-'))));
                    known.push(path);
                }
            }
            "-h" | "--help" | "-V" | "--version" | "--verbose" => known.push(arg),
            f if f.starts_with("--import=") || f.starts_with("--export=") => known.push(arg),
            f if f.len() > 1 && f.starts_with('-') && f[1..].chars().all(|c| c == 'v') => {
                known.push(arg)
            }
            _ => {}
        }
    }
    known
}

fn init_tracing(verbosity: u64) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
