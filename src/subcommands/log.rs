use crate::error::SessionError;
use crate::subcommands::ui::Console;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// Writes the console transcript as it stood when `log` was entered; the
/// file name prompt and its answer are not part of the dump.
pub fn log<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), SessionError> {
    let snapshot = console.transcript().clone();
    let path = console.prompt("File name:")?;
    let path = Path::new(&path);
    match snapshot.save(path) {
        Ok(()) => {
            info!(
                "saved {} transcript lines to {}",
                snapshot.len(),
                path.display()
            );
            console.say("The log has been saved.")
        }
        Err(e) => {
            warn!("could not save log to {}: {}", path.display(), e);
            console.say(format!("Could not save the log to \"{}\": {}", path.display(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subcommands::ui::testing::{printed, scripted};
    use std::fs;

    #[test]
    fn saves_the_transcript_up_to_the_log_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut console = scripted(&["log", path.to_str().unwrap()]);
        console.say("Please Enter the Card You Wish to Add").unwrap();
        assert_eq!(console.read_line().unwrap(), "log");
        log(&mut console).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Please Enter the Card You Wish to Add\nlog\n"
        );
        assert!(printed(&console).ends_with("File name:\nThe log has been saved.\n"));
    }

    #[test]
    fn failed_save_is_reported_and_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("log.txt");
        let mut console = scripted(&[path.to_str().unwrap(), "still reading"]);
        log(&mut console).unwrap();

        assert!(!path.exists());
        let printed = printed(&console);
        assert!(printed.starts_with("File name:\nCould not save the log to"));
        assert!(!printed.contains("The log has been saved."));
        assert_eq!(console.read_line().unwrap(), "still reading");
    }
}
