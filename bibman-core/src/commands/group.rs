use crate::commands::{Command, CommandOutput};
use crate::error::{BibmanError, Result};
use crate::grouping::{group_by_first_letter, group_titles_by_author};
use crate::library::Library;
use crate::models::BookField;

/// GROUP: print catalogue data grouped by a book field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCmd {
    field: BookField,
}

impl GroupCmd {
    /// Parse and validate the group argument
    /// The argument must name a book field exactly (case-sensitive)
    pub fn new(argument: Option<&str>) -> Result<Self> {
        let name = argument.ok_or(BibmanError::MissingArgument)?;
        let field = BookField::from_name(name).ok_or_else(|| {
            BibmanError::InvalidArgument(format!("unknown book field: '{}'", name))
        })?;
        Ok(GroupCmd { field })
    }

    /// Check an argument against the same rules construction applies
    pub fn validate(argument: Option<&str>) -> Result<bool> {
        match Self::new(argument) {
            Ok(_) => Ok(true),
            Err(BibmanError::InvalidArgument(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Command for GroupCmd {
    fn execute(&self, library: &mut Library) -> Result<CommandOutput> {
        let entries = library.book_data().ok_or(BibmanError::NoBookData)?;

        if entries.is_empty() {
            return Ok(CommandOutput::Text(
                "The library has no book entries.".to_string(),
            ));
        }

        let groups = match self.field {
            BookField::Title => {
                group_by_first_letter(entries.iter().map(|entry| entry.title.clone()))?
            }
            BookField::Author => group_titles_by_author(entries),
        };

        let mut lines = vec![format!("Grouped data by {}", self.field.name())];
        for (key, values) in &groups {
            lines.push(format!("## {}", key));
            lines.extend(values.iter().cloned());
        }

        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
