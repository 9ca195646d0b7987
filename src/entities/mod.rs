pub mod cards;
pub mod deckfile;
pub mod transcript;
