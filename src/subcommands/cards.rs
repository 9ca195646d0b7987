use crate::entities::cards::{Deck, Hardest};
use crate::error::SessionError;
use crate::subcommands::ui::Console;
use itertools::Itertools;
use std::io::{BufRead, Write};
use tracing::debug;

pub fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &mut Deck,
) -> Result<(), SessionError> {
    let term = console.prompt("The card:")?;
    if deck.find_by_term(&term).is_some() {
        return console.say(format!("The card \"{}\" already exists.\n", term));
    }

    let definition = console.prompt("The definition of the card:")?;
    if deck.find_by_definition(&definition).is_some() {
        return console.say(format!(
            "The definition \"{}\" already exists.\n",
            definition
        ));
    }

    // Both checks already passed, so this cannot be rejected.
    if deck.add(&term, &definition).is_ok() {
        debug!(deck_size = deck.len(), "added card {:?}", term);
        console.say(format!(
            "The pair (\"{}\":\"{}\") has been added.\n",
            term, definition
        ))?;
    }
    Ok(())
}

pub fn remove<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &mut Deck,
) -> Result<(), SessionError> {
    let term = console.prompt("Which card?")?;
    match deck.remove(&term) {
        Some(_) => {
            debug!(deck_size = deck.len(), "removed card {:?}", term);
            console.say("The card has been removed.\n")
        }
        None => console.say(format!(
            "Can't remove \"{}\": there is no such card.\n",
            term
        )),
    }
}

pub fn hardest_card<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &Deck,
) -> Result<(), SessionError> {
    match deck.hardest() {
        Hardest::NoErrors => console.say("There are no cards with errors.\n"),
        Hardest::Single(card) => console.say(format!(
            "The hardest card is \"{}\". You have {} errors answering it.\n",
            card.term(),
            card.mistakes()
        )),
        Hardest::Tied(cards, mistakes) => console.say(format!(
            "The hardest cards are {}. You have {} errors answering them.\n",
            cards
                .iter()
                .format_with(", ", |card, f| f(&format_args!("\"{}\"", card.term()))),
            mistakes
        )),
    }
}

pub fn reset_stats<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &mut Deck,
) -> Result<(), SessionError> {
    deck.reset_mistakes();
    console.say("Card statistics have been reset.\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::cards::Card;
    use crate::subcommands::ui::testing::{printed, scripted};

    fn cartoon_deck() -> Deck {
        vec![
            Card::new("Scooby-Doo", "Shaggy").with_mistakes(5),
            Card::new("Teen-Titans", "Go").with_mistakes(20),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn add_new_pair() {
        let mut deck = cartoon_deck();
        let mut console = scripted(&["Dexter", "Laboratory"]);
        add(&mut console, &mut deck).unwrap();

        assert_eq!(deck.len(), 3);
        assert_eq!(
            printed(&console),
            "The card:\n\
             The definition of the card:\n\
             The pair (\"Dexter\":\"Laboratory\") has been added.\n\n"
        );
    }

    #[test]
    fn add_duplicate_term_stops_before_definition() {
        let mut deck = cartoon_deck();
        let mut console = scripted(&["Scooby-Doo", "Velma"]);
        add(&mut console, &mut deck).unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(
            printed(&console),
            "The card:\nThe card \"Scooby-Doo\" already exists.\n\n"
        );
        // The definition line was never consumed.
        assert_eq!(console.read_line().unwrap(), "Velma");
    }

    #[test]
    fn add_duplicate_definition() {
        let mut deck = cartoon_deck();
        let mut console = scripted(&["Power-Rangers", "Go"]);
        add(&mut console, &mut deck).unwrap();

        assert_eq!(deck.len(), 2);
        assert!(printed(&console).ends_with("The definition \"Go\" already exists.\n\n"));
    }

    #[test]
    fn remove_existing_and_missing() {
        let mut deck = cartoon_deck();
        let mut console = scripted(&["Teen-Titans", "Teen-Titans"]);
        remove(&mut console, &mut deck).unwrap();
        assert_eq!(deck.len(), 1);
        remove(&mut console, &mut deck).unwrap();
        assert_eq!(deck.len(), 1);

        assert_eq!(
            printed(&console),
            "Which card?\n\
             The card has been removed.\n\n\
             Which card?\n\
             Can't remove \"Teen-Titans\": there is no such card.\n\n"
        );
    }

    #[test]
    fn hardest_single() {
        let deck = cartoon_deck();
        let mut console = scripted(&[]);
        hardest_card(&mut console, &deck).unwrap();
        assert_eq!(
            printed(&console),
            "The hardest card is \"Teen-Titans\". You have 20 errors answering it.\n\n"
        );
    }

    #[test]
    fn hardest_tied() {
        let mut deck = cartoon_deck();
        deck.insert(Card::new("Term2", "Definition3").with_mistakes(20));
        let mut console = scripted(&[]);
        hardest_card(&mut console, &deck).unwrap();
        assert_eq!(
            printed(&console),
            "The hardest cards are \"Teen-Titans\", \"Term2\". \
             You have 20 errors answering them.\n\n"
        );
    }

    #[test]
    fn hardest_three_way_tie_keeps_deck_order() {
        let mut deck = cartoon_deck();
        deck.insert(Card::new("Term2", "Definition3").with_mistakes(20));
        deck.insert(Card::new("Dexter", "Laboratory").with_mistakes(20));
        deck.insert(Card::new("Easy", "Peasy").with_mistakes(1));
        let mut console = scripted(&[]);
        hardest_card(&mut console, &deck).unwrap();
        assert_eq!(
            printed(&console),
            "The hardest cards are \"Teen-Titans\", \"Term2\", \"Dexter\". \
             You have 20 errors answering them.\n\n"
        );
    }

    #[test]
    fn hardest_none_after_reset() {
        let mut deck = cartoon_deck();
        let mut console = scripted(&[]);
        reset_stats(&mut console, &mut deck).unwrap();
        hardest_card(&mut console, &deck).unwrap();

        assert!(deck.iter().all(|c| c.mistakes() == 0));
        assert_eq!(
            printed(&console),
            "Card statistics have been reset.\n\nThere are no cards with errors.\n\n"
        );
    }
}
