//! Corpus loading functionality.
//!
//! This module provides functions for building the in-memory recipe corpus
//! from a CMS JSON export. It supports single-file exports holding an array
//! of recipes, directories of per-recipe JSON files, and raw JSON strings.

use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use glob::glob;
use std::fs;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a corpus export.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read corpus file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse recipe JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read corpus directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Invalid corpus path: {0}")]
    InvalidPath(Utf8PathBuf),
}

/// Loads a recipe corpus snapshot from a CMS export on disk.
///
/// The export can take either form:
/// - A single JSON file holding an array of recipes
/// - A directory scanned recursively for `.json` files, one recipe per file
///
/// # Arguments
///
/// * `path` - The export file or directory to load
///
/// # Returns
///
/// Returns every recipe found, or a `FetchError` if the path does not exist
/// or any file fails to read or parse.
///
/// # Examples
///
/// ```no_run
/// use larder_search::load_corpus;
/// use camino::Utf8PathBuf;
///
/// let corpus = load_corpus(Utf8PathBuf::from("./export/recipes.json"))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_corpus<P: AsRef<Utf8Path>>(path: P) -> Result<Vec<Recipe>, FetchError> {
    let path = path.as_ref();

    if path.is_file() {
        let json = fs::read_to_string(path)?;
        let recipes = corpus_from_json(&json)?;
        debug!(path = %path, recipes = recipes.len(), "loaded corpus file");
        return Ok(recipes);
    }

    if !path.is_dir() {
        return Err(FetchError::InvalidPath(path.to_path_buf()));
    }

    let pattern = path.join("**/*.json");
    let mut files = Vec::new();
    for entry in glob(pattern.as_str())? {
        files.push(entry?);
    }
    // Corpus order is the near-miss tiebreak, so the scan order must be
    // stable across platforms.
    files.sort();

    let mut recipes = Vec::with_capacity(files.len());
    for file in &files {
        let json = fs::read_to_string(file)?;
        recipes.push(serde_json::from_str(&json)?);
    }

    debug!(path = %path, recipes = recipes.len(), "loaded corpus directory");
    Ok(recipes)
}

/// Parses a corpus snapshot from a raw JSON string.
///
/// The string must hold a JSON array of recipes, matching the body of a
/// single-file CMS export.
pub fn corpus_from_json(json: &str) -> Result<Vec<Recipe>, FetchError> {
    let recipes = serde_json::from_str(json)?;
    Ok(recipes)
}
