use crate::entities::cards::Deck;
use crate::entities::deckfile;
use crate::error::SessionError;
use crate::subcommands::ui::Console;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn import<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &mut Deck,
) -> Result<(), SessionError> {
    let path = console.prompt("File name:")?;
    import_from(console, deck, Path::new(&path))
}

/// Loads every card in `path` into the deck. Cards go in without the duplicate
/// checks of `add`; a card already in the deck keeps its mistake count.
pub fn import_from<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &mut Deck,
    path: &Path,
) -> Result<(), SessionError> {
    let cards = match deckfile::read_cards(path) {
        Ok(cards) => cards,
        Err(e) if e.is_unreadable() => {
            warn!("could not open {}: {}", path.display(), e);
            return console.say("File not found.");
        }
        Err(e) => {
            warn!("could not load {}: {}", path.display(), e);
            return console.say(format!("Could not load \"{}\": {}", path.display(), e));
        }
    };

    let loaded = cards.len();
    for card in cards {
        deck.insert(card);
    }
    info!(deck_size = deck.len(), "loaded {} cards from {}", loaded, path.display());
    console.say(format!("{} cards have been loaded.\n", loaded))
}

pub fn export<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &Deck,
) -> Result<(), SessionError> {
    let path = console.prompt("File name:")?;
    export_to(console, deck, Path::new(&path))
}

pub fn export_to<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &Deck,
    path: &Path,
) -> Result<(), SessionError> {
    match deckfile::write_cards(path, deck) {
        Ok(saved) => {
            info!("saved {} cards to {}", saved, path.display());
            console.say(format!("{} cards have been saved.\n", saved))
        }
        Err(e) => {
            warn!("could not save {}: {}", path.display(), e);
            console.say(format!(
                "Could not save cards to \"{}\": {}",
                path.display(),
                e
            ))
        }
    }
}
