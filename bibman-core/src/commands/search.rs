use crate::commands::{Command, CommandOutput};
use crate::error::{BibmanError, Result};
use crate::library::Library;

/// SEARCH: case-insensitive substring search over titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCmd {
    term: String,
}

impl SearchCmd {
    /// Parse and validate the search argument
    /// The term must be a single non-blank token without whitespace
    pub fn new(argument: Option<&str>) -> Result<Self> {
        let term = argument.ok_or(BibmanError::MissingArgument)?;
        if term.trim().is_empty() {
            return Err(BibmanError::InvalidArgument(
                "search term cannot be blank".to_string(),
            ));
        }
        if term.chars().any(char::is_whitespace) {
            return Err(BibmanError::InvalidArgument(
                "search term must be a single word".to_string(),
            ));
        }
        Ok(SearchCmd {
            term: term.to_string(),
        })
    }

    /// Classify an argument the way construction does, without keeping the command
    pub fn validate(argument: Option<&str>) -> Result<bool> {
        match Self::new(argument) {
            Ok(_) => Ok(true),
            Err(BibmanError::InvalidArgument(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Command for SearchCmd {
    fn execute(&self, library: &mut Library) -> Result<CommandOutput> {
        let entries = library.book_data().ok_or(BibmanError::NoBookData)?;

        let needle = self.term.to_lowercase();
        let mut lines = Vec::new();
        for entry in entries {
            if entry.title.to_lowercase().contains(&needle) {
                lines.push(entry.title.clone());
            }
        }

        if lines.is_empty() {
            return Ok(CommandOutput::Text(format!(
                "No hits found for search term: {}",
                self.term
            )));
        }

        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
