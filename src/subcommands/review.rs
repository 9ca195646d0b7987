use crate::entities::cards::{Deck, Verdict};
use crate::error::SessionError;
use crate::subcommands::ui::Console;
use std::io::{BufRead, Write};
use tracing::debug;

/// Quizzes the user on up to as many cards as they ask for, in deck order.
pub fn ask<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    deck: &mut Deck,
) -> Result<(), SessionError> {
    let input = console.prompt("How many times to ask?")?;
    let times = match input.trim().parse::<usize>() {
        Ok(n) => n,
        Err(e) => {
            debug!("rejected quiz count {:?}: {}", input, e);
            return console.say("Please enter a whole number.");
        }
    };

    for index in 0..times.min(deck.len()) {
        let term = match deck.get(index) {
            Some(card) => card.term().to_string(),
            None => break,
        };
        let answer = console.prompt(&format!("Print the definition of \"{}\":", term))?;
        match deck.check_answer(index, &answer) {
            Some(Verdict::Correct) => console.say("Correct!")?,
            Some(Verdict::Wrong {
                expected,
                matches_term: Some(other),
            }) => console.say(format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, other
            ))?,
            Some(Verdict::Wrong {
                expected,
                matches_term: None,
            }) => console.say(format!("Wrong. The right answer is \"{}\".", expected))?,
            None => break,
        }
    }
    Ok(())
}
