use crate::entities::cards::Card;
use crate::error::DeckFileError;
use std::fs::File;
use std::io::{prelude::*, BufReader, BufWriter};
use std::path::Path;

pub const SEPARATOR: &str = "&&";
const ESCAPE: char = '\\';

// `&` is escaped as well as the escape character itself so that a field can
// never produce the separator, not even at its boundaries.
fn escape(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        if c == ESCAPE || c == '&' {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

pub fn encode_card(card: &Card) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        escape(card.term()),
        escape(card.definition()),
        card.mistakes(),
        sep = SEPARATOR
    )
}

/// Parses one line of a deck file. `line_number` is 1-based and only used for
/// error reporting.
pub fn decode_line(line: &str, line_number: usize) -> Result<Card, DeckFileError> {
    let mut fields = vec![String::new()];
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(escaped) => push_char(&mut fields, escaped),
                None => {
                    return Err(DeckFileError::DanglingEscape { line: line_number });
                }
            },
            '&' if chars.peek() == Some(&'&') => {
                chars.next();
                fields.push(String::new());
            }
            _ => push_char(&mut fields, c),
        }
    }

    if fields.len() != 3 {
        return Err(DeckFileError::MissingField { line: line_number });
    }
    let mistakes_field = fields.pop().unwrap_or_default();
    let mistakes = match mistakes_field.parse::<u32>() {
        Ok(m) => m,
        Err(e) => {
            return Err(DeckFileError::ParseError {
                line: line_number,
                value: mistakes_field,
                source: e,
            })
        }
    };
    let definition = fields.pop().unwrap_or_default();
    let term = fields.pop().unwrap_or_default();
    Ok(Card::new(term, definition).with_mistakes(mistakes))
}

fn push_char(fields: &mut [String], c: char) {
    if let Some(field) = fields.last_mut() {
        field.push(c);
    }
}

/// Reads every card in the file. Blank lines are skipped; any malformed line
/// fails the whole read so that callers never see a partial deck.
pub fn read_cards(path: &Path) -> Result<Vec<Card>, DeckFileError> {
    let reader = BufReader::new(File::open(path)?);
    let mut cards = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        cards.push(decode_line(&line, index + 1)?);
    }
    Ok(cards)
}

/// Writes one line per card, replacing the file. Returns how many cards were
/// written.
pub fn write_cards<'a, I>(path: &Path, cards: I) -> Result<usize, DeckFileError>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0;
    for card in cards {
        writeln!(writer, "{}", encode_card(card))?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
