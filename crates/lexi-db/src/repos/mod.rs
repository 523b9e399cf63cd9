//! Repository methods on [`crate::LexiDb`], grouped per table.

mod dictionary;
mod words;

pub use dictionary::DictionaryEntry;
