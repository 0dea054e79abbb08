use crate::commands::{Command, CommandOutput};
use crate::error::{BibmanError, Result};
use crate::library::Library;

/// RATED: list books rated at or above a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedCmd {
    threshold: f32,
}

impl RatedCmd {
    /// The argument must parse as a rating between 0.0 and 5.0
    pub fn new(argument: Option<&str>) -> Result<Self> {
        let raw = argument.ok_or(BibmanError::MissingArgument)?;
        let threshold: f32 = raw
            .trim()
            .parse()
            .map_err(|_| BibmanError::InvalidArgument(format!("not a rating: '{}'", raw)))?;
        if !(0.0..=5.0).contains(&threshold) {
            return Err(BibmanError::InvalidArgument(format!(
                "rating must be between 0.0 and 5.0, got {}",
                threshold
            )));
        }
        Ok(RatedCmd { threshold })
    }

    pub fn validate(argument: Option<&str>) -> Result<bool> {
        match Self::new(argument) {
            Ok(_) => Ok(true),
            Err(BibmanError::InvalidArgument(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Command for RatedCmd {
    fn execute(&self, library: &mut Library) -> Result<CommandOutput> {
        let entries = library.book_data().ok_or(BibmanError::NoBookData)?;

        let mut lines = Vec::new();
        for entry in entries {
            if entry.rating >= self.threshold {
                lines.push(format!("{:.1} {}", entry.rating, entry.title));
            }
        }

        if lines.is_empty() {
            return Ok(CommandOutput::Text(format!(
                "No books rated {:.1} or higher.",
                self.threshold
            )));
        }

        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
