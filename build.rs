use clap_complete::{generate_to, Shell};
use std::{env, io};

include!("src/cli.rs");

// The installed binary name, which is also the name `build_cli` gives the
// command.
const BIN_NAME: &str = "flashdeck";

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    // Completions are only a by-product; nothing to do outside of cargo.
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        generate_to(shell, &mut cmd, BIN_NAME, &outdir)?;
    }
    Ok(())
}
