use std::hash::{Hash, Hasher};

/// A term/definition pair together with how often its definition was missed.
///
/// Two cards are the same card when their term and definition match; the
/// mistake counter takes no part in equality or hashing.
#[derive(Clone, Debug)]
pub struct Card {
    term: String,
    definition: String,
    mistakes: u32,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Card {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    pub fn with_mistakes(mut self, mistakes: u32) -> Self {
        self.mistakes = mistakes;
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn increase_mistakes(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    pub fn set_mistakes(&mut self, mistakes: u32) {
        self.mistakes = mistakes;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term && self.definition == other.definition
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
        self.definition.hash(state);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddError {
    DuplicateTerm,
    DuplicateDefinition,
}

/// Outcome of checking one quiz answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong {
        expected: String,
        // Term of another card whose definition is exactly what was typed.
        matches_term: Option<String>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Hardest<'a> {
    NoErrors,
    Single(&'a Card),
    Tied(Vec<&'a Card>, u32),
}

/// The cards currently loaded, kept in insertion order.
///
/// Quiz order and the order of tied hardest cards both follow that order.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Deck { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn find_by_term(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.term == term)
    }

    pub fn find_by_definition(&self, definition: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.definition == definition)
    }

    /// Adds a new card with no mistakes, refusing a term or a definition
    /// that is already present on any card.
    pub fn add(&mut self, term: &str, definition: &str) -> Result<(), AddError> {
        if self.find_by_term(term).is_some() {
            return Err(AddError::DuplicateTerm);
        }
        if self.find_by_definition(definition).is_some() {
            return Err(AddError::DuplicateDefinition);
        }
        self.cards.push(Card::new(term, definition));
        Ok(())
    }

    /// Inserts without the duplicate checks of [`Deck::add`].
    ///
    /// Returns `false` and leaves the existing card (and its mistake count)
    /// untouched when an equal card is already present.
    pub fn insert(&mut self, card: Card) -> bool {
        if self.cards.contains(&card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    pub fn remove(&mut self, term: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.term == term)?;
        Some(self.cards.remove(index))
    }

    pub fn reset_mistakes(&mut self) {
        for card in &mut self.cards {
            card.set_mistakes(0);
        }
    }

    pub fn hardest(&self) -> Hardest<'_> {
        let max = self.cards.iter().map(Card::mistakes).max().unwrap_or(0);
        if max == 0 {
            return Hardest::NoErrors;
        }
        let mut hardest: Vec<&Card> = self.cards.iter().filter(|c| c.mistakes == max).collect();
        if hardest.len() == 1 {
            Hardest::Single(hardest.remove(0))
        } else {
            Hardest::Tied(hardest, max)
        }
    }

    /// Checks `answer` against the card at `index`, counting a mistake on that
    /// card when it is wrong. Returns `None` if there is no such card.
    pub fn check_answer(&mut self, index: usize, answer: &str) -> Option<Verdict> {
        let card = self.cards.get_mut(index)?;
        if card.definition == answer {
            return Some(Verdict::Correct);
        }
        card.increase_mistakes();
        let expected = card.definition.clone();
        let matches_term = self.find_by_definition(answer).map(|c| c.term.clone());
        Some(Verdict::Wrong {
            expected,
            matches_term,
        })
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for card in iter {
            deck.insert(card);
        }
        deck
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
