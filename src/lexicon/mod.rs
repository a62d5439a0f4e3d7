//! Lookup table for dangling ingredient references.
//!
//! CMS ingredient references sometimes point at documents that were never
//! published; without help those entries are invisible to search. The
//! lexicon maps such ids to a canonical display name plus alias spellings,
//! so the matcher and the display-name resolver can both consume it
//! generically. It is data (bundled YAML, or an external file editors
//! maintain), never per-id code.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur when loading a lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse lexicon YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// One lexicon entry: the canonical display name for an id plus the alias
/// spellings users search by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl LexiconEntry {
    /// Iterates over every spelling of the entry, canonical name first.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.yaml");

/// The id → entry table used for dangling-reference matching and display
/// names.
#[derive(Debug, Clone, Default)]
pub struct IngredientLexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl IngredientLexicon {
    /// Returns the table bundled with the crate.
    pub fn builtin() -> &'static IngredientLexicon {
        static BUILTIN: OnceLock<IngredientLexicon> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            IngredientLexicon::from_yaml(BUILTIN_LEXICON).expect("bundled lexicon is valid YAML")
        })
    }

    /// Parses a lexicon from YAML text: a map of id → `{ name, aliases }`.
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let entries: HashMap<String, LexiconEntry> = serde_yaml::from_str(yaml)?;
        Ok(IngredientLexicon { entries })
    }

    /// Loads a lexicon from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError` if the file cannot be read or is not a valid
    /// id → entry map.
    pub fn from_path(path: impl AsRef<Utf8Path>) -> Result<Self, LexiconError> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&yaml)
    }

    /// Returns the entry for an id, if the table knows it.
    pub fn entry(&self, id: &str) -> Option<&LexiconEntry> {
        self.entries.get(id)
    }

    /// Returns the canonical display name for an id.
    pub fn canonical_name(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
