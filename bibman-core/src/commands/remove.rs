use crate::commands::{Command, CommandOutput};
use crate::error::{BibmanError, Result};
use crate::library::Library;
use crate::models::BookField;

/// REMOVE: drop entries matching an exact field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCmd {
    field: BookField,
    value: String,
}

impl RemoveCmd {
    /// The argument is a book field name followed by the exact value to remove
    pub fn new(argument: Option<&str>) -> Result<Self> {
        let raw = argument.ok_or(BibmanError::MissingArgument)?;
        let (field_name, value) = raw.split_once(char::is_whitespace).ok_or_else(|| {
            BibmanError::InvalidArgument("expected a book field followed by a value".to_string())
        })?;
        let field = BookField::from_name(field_name).ok_or_else(|| {
            BibmanError::InvalidArgument(format!("unknown book field: '{}'", field_name))
        })?;
        let value = value.trim();
        if value.is_empty() {
            return Err(BibmanError::InvalidArgument(
                "value cannot be blank".to_string(),
            ));
        }
        Ok(RemoveCmd {
            field,
            value: value.to_string(),
        })
    }

    pub fn validate(argument: Option<&str>) -> Result<bool> {
        match Self::new(argument) {
            Ok(_) => Ok(true),
            Err(BibmanError::InvalidArgument(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Command for RemoveCmd {
    fn execute(&self, library: &mut Library) -> Result<CommandOutput> {
        match self.field {
            BookField::Author => {
                let removed = library.remove_by_author(&self.value)?;
                Ok(CommandOutput::Text(format!(
                    "{} books removed for author: {}",
                    removed, self.value
                )))
            }
            BookField::Title => {
                let found = library.remove_by_title(&self.value)?;
                if found {
                    Ok(CommandOutput::Text(format!(
                        "{}: removed successfully.",
                        self.value
                    )))
                } else {
                    Ok(CommandOutput::Text(format!("{}: not found.", self.value)))
                }
            }
        }
    }
}
