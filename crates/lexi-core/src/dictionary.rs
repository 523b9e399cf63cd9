//! Aggregation model for cached dictionary payloads.
//!
//! Lookup responses from dictionaryapi.dev are cached verbatim in the
//! dictionary table; this module turns a cached payload into a
//! presentation-ready shape (deduplicated phonetics, filtered meanings).
//! Fetching from the provider is a collaborator concern and lives outside
//! this crate.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Aggregated dictionary data for one word, possibly merged from several
/// provider entries.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Dictionary {
    /// Distinct phonetic transcriptions, in first-seen order.
    pub phonetics: Vec<String>,
    pub meanings: Vec<Meaning>,
    /// Whether any payload has been folded in yet.
    pub loaded: bool,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
}

impl Dictionary {
    /// Parse a cached dictionaryapi payload (a JSON array of entries) and
    /// aggregate it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the payload is not valid JSON
    /// for the provider shape.
    pub fn from_payload(payload: &str) -> Result<Self, CoreError> {
        let entries: Vec<ProviderEntry> = serde_json::from_str(payload)
            .map_err(|e| CoreError::Validation(format!("bad dictionary payload: {e}")))?;
        let mut dictionary = Self::default();
        dictionary.add_entries(&entries);
        Ok(dictionary)
    }

    /// Fold provider entries into the aggregate.
    pub fn add_entries(&mut self, entries: &[ProviderEntry]) {
        for entry in entries {
            if let Some(phonetic) = &entry.phonetic {
                self.add_phonetic(phonetic);
            }
            for phonetic in &entry.phonetics {
                if let Some(text) = &phonetic.text {
                    self.add_phonetic(text);
                }
            }
            for meaning in &entry.meanings {
                let definitions = meaning
                    .definitions
                    .iter()
                    .filter_map(|d| {
                        d.definition.as_ref().map(|text| Definition {
                            definition: text.clone(),
                            example: d.example.clone(),
                        })
                    })
                    .collect::<Vec<_>>();
                self.add_meaning(Meaning {
                    part_of_speech: meaning.part_of_speech.clone(),
                    definitions,
                });
            }
        }
        self.loaded = true;
    }

    fn add_phonetic(&mut self, phonetic: &str) {
        let trimmed = phonetic.trim();
        if trimmed.is_empty() {
            return;
        }
        if !self.phonetics.iter().any(|p| p == trimmed) {
            self.phonetics.push(trimmed.to_string());
        }
    }

    fn add_meaning(&mut self, meaning: Meaning) {
        if !meaning.part_of_speech.is_empty() && !meaning.definitions.is_empty() {
            self.meanings.push(meaning);
        }
    }
}

/// One entry of a dictionaryapi.dev response. Arrays the provider omits
/// deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderEntry {
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<ProviderPhonetic>,
    #[serde(default)]
    pub meanings: Vec<ProviderMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderMeaning {
    #[serde(default, rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<ProviderDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderDefinition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
}
