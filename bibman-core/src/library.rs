use crate::error::{BibmanError, Result};
use crate::io::load_book_file;
use crate::models::BookEntry;
use std::path::Path;

/// In-memory book catalogue and data provider
///
/// `book_data` stays `None` until the first successful load, so callers can
/// tell "nothing ever loaded" apart from "loaded but currently empty".
#[derive(Debug, Default)]
pub struct Library {
    entries: Option<Vec<BookEntry>>,
}

impl Library {
    pub fn new() -> Self {
        Library { entries: None }
    }

    /// Build a library directly from entries, marking it loaded
    pub fn from_entries(entries: Vec<BookEntry>) -> Self {
        Library {
            entries: Some(entries),
        }
    }

    /// Current catalogue contents, or None when no file has been loaded
    pub fn book_data(&self) -> Option<&[BookEntry]> {
        self.entries.as_deref()
    }

    /// Load a book file and append its entries to the catalogue
    /// Returns the number of entries added; the catalogue is unchanged on error
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let new_entries = load_book_file(path)?;
        let added = new_entries.len();
        self.entries.get_or_insert_with(Vec::new).extend(new_entries);
        log::debug!("loaded {} entries from {}", added, path.display());
        Ok(added)
    }

    /// Remove every entry listing the given author exactly; returns the count
    pub fn remove_by_author(&mut self, author: &str) -> Result<usize> {
        let entries = self.entries.as_mut().ok_or(BibmanError::NoBookData)?;
        let before = entries.len();
        entries.retain(|entry| !entry.authors.iter().any(|a| a == author));
        let removed = before - entries.len();
        log::debug!("removed {} entries for author {}", removed, author);
        Ok(removed)
    }

    /// Remove every entry with the given exact title; returns whether any matched
    pub fn remove_by_title(&mut self, title: &str) -> Result<bool> {
        let entries = self.entries.as_mut().ok_or(BibmanError::NoBookData)?;
        let before = entries.len();
        entries.retain(|entry| entry.title != title);
        Ok(entries.len() < before)
    }
}
