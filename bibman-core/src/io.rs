use crate::error::{BibmanError, Result};
use crate::models::BookEntry;
use crate::validation::validate_catalogue;
use std::fs;
use std::path::Path;

/// Load book entries from a JSON file
/// The file must hold a JSON array of book objects and pass catalogue validation
pub fn load_book_file<P: AsRef<Path>>(path: P) -> Result<Vec<BookEntry>> {
    let contents = fs::read_to_string(path)?;
    let entries: Vec<BookEntry> = serde_json::from_str(&contents)?;
    validate_catalogue(&entries).map_err(BibmanError::InvalidBookFile)?;
    Ok(entries)
}
