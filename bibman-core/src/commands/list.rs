use crate::commands::{Command, CommandOutput};
use crate::error::{BibmanError, Result};
use crate::library::Library;
use crate::sorting::sort_titles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMode {
    Short,
    Long,
    Sorted,
}

/// LIST: print the catalogue in one of three modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCmd {
    mode: ListMode,
}

impl ListCmd {
    /// An absent or blank argument selects the short listing
    pub fn new(argument: Option<&str>) -> Result<Self> {
        let mode = match argument.map(str::trim) {
            None | Some("") | Some("short") => ListMode::Short,
            Some("long") => ListMode::Long,
            Some("sorted") => ListMode::Sorted,
            Some(other) => {
                return Err(BibmanError::InvalidArgument(format!(
                    "unknown list mode: '{}'",
                    other
                )))
            }
        };
        Ok(ListCmd { mode })
    }

    pub fn validate(argument: Option<&str>) -> Result<bool> {
        match Self::new(argument) {
            Ok(_) => Ok(true),
            Err(BibmanError::InvalidArgument(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Command for ListCmd {
    fn execute(&self, library: &mut Library) -> Result<CommandOutput> {
        let entries = library.book_data().ok_or(BibmanError::NoBookData)?;

        if entries.is_empty() {
            return Ok(CommandOutput::Text(
                "The library has no book entries.".to_string(),
            ));
        }

        let mut lines = vec![format!("{} books in library:", entries.len())];
        match self.mode {
            ListMode::Short => {
                lines.extend(entries.iter().map(|entry| entry.title.clone()));
            }
            ListMode::Long => {
                for entry in entries {
                    lines.push(String::new());
                    lines.push(entry.to_string());
                }
            }
            ListMode::Sorted => {
                let mut titles: Vec<String> =
                    entries.iter().map(|entry| entry.title.clone()).collect();
                sort_titles(&mut titles);
                lines.extend(titles);
            }
        }

        Ok(CommandOutput::Text(lines.join("\n")))
    }
}
