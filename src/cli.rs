use clap::{Arg, Command};

pub fn build_cli() -> Command<'static> {
    Command::new("flashdeck")
        .version("0.1.0")
        .about("Study term/definition flashcards from the terminal")
        .arg(
            Arg::new("import")
                .long("import")
                .value_name("PATH")
                .help("Load cards from PATH before starting (may be repeated)")
                .takes_value(true)
                .allow_hyphen_values(true)
                .multiple_occurrences(true),
        )
        .arg(
            Arg::new("export")
                .long("export")
                .value_name("PATH")
                .help("Save the deck to PATH on exit (the last one wins)")
                .takes_value(true)
                .allow_hyphen_values(true)
                .multiple_occurrences(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print diagnostics to stderr (repeat for more detail)")
                .multiple_occurrences(true),
        )
}
