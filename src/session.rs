use crate::entities::cards::Deck;
use crate::error::SessionError;
use crate::subcommands::{self, ui::Console};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
}

impl Action {
    /// Commands are matched exactly, case included.
    pub fn parse(command: &str) -> Option<Action> {
        match command {
            "add" => Some(Action::Add),
            "remove" => Some(Action::Remove),
            "import" => Some(Action::Import),
            "export" => Some(Action::Export),
            "ask" => Some(Action::Ask),
            "log" => Some(Action::Log),
            "hardest card" => Some(Action::HardestCard),
            "reset stats" => Some(Action::ResetStats),
            "exit" => Some(Action::Exit),
            _ => None,
        }
    }
}

/// The interactive loop: owns the deck and the console it talks through.
pub struct Session<R, W> {
    console: Console<R, W>,
    deck: Deck,
    export_path: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, deck: Deck) -> Self {
        Session {
            console,
            deck,
            export_path: None,
        }
    }

    /// Sets the file the deck is saved to on exit.
    pub fn export_on_exit(&mut self, path: impl Into<PathBuf>) {
        self.export_path = Some(path.into());
    }

    pub fn import_from(&mut self, path: &Path) -> Result<(), SessionError> {
        subcommands::import_from(&mut self.console, &mut self.deck, path)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[cfg(test)]
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            let action = match self.console.prompt(MENU) {
                Ok(command) => Action::parse(&command),
                Err(SessionError::InputClosed) => Some(Action::Exit),
                Err(e) => return Err(e),
            };
            let action = match action {
                Some(a) => a,
                None => {
                    debug!("ignoring unknown command");
                    continue;
                }
            };
            debug!(?action, "dispatching");

            if action == Action::Exit {
                return self.exit();
            }
            match self.dispatch(action) {
                Ok(()) => {}
                Err(SessionError::InputClosed) => {
                    debug!("input closed during {:?}", action);
                    return self.exit();
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        let console = &mut self.console;
        let deck = &mut self.deck;
        match action {
            Action::Add => subcommands::add(console, deck),
            Action::Remove => subcommands::remove(console, deck),
            Action::Import => subcommands::import(console, deck),
            Action::Export => subcommands::export(console, deck),
            Action::Ask => subcommands::ask(console, deck),
            Action::Log => subcommands::log(console),
            Action::HardestCard => subcommands::hardest_card(console, deck),
            Action::ResetStats => subcommands::reset_stats(console, deck),
            Action::Exit => Ok(()),
        }
    }

    fn exit(&mut self) -> Result<(), SessionError> {
        if let Some(path) = &self.export_path {
            subcommands::export_to(&mut self.console, &self.deck, path)?;
        }
        self.console.say("Bye bye!")
    }
}
