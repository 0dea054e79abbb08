use crate::commands::{Command, CommandOutput};
use crate::error::{BibmanError, Result};
use crate::library::Library;
use std::path::PathBuf;

/// ADD: load a JSON book file into the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCmd {
    path: PathBuf,
}

impl AddCmd {
    /// The argument must be a non-blank path ending in .json
    pub fn new(argument: Option<&str>) -> Result<Self> {
        let raw = argument.ok_or(BibmanError::MissingArgument)?.trim();
        if raw.is_empty() {
            return Err(BibmanError::InvalidArgument(
                "file path cannot be blank".to_string(),
            ));
        }
        if !raw.ends_with(".json") {
            return Err(BibmanError::InvalidArgument(format!(
                "expected a .json file, got '{}'",
                raw
            )));
        }
        Ok(AddCmd {
            path: PathBuf::from(raw),
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

impl Command for AddCmd {
    fn execute(&self, library: &mut Library) -> Result<CommandOutput> {
        let added = library.load_file(&self.path)?;
        Ok(CommandOutput::Text(format!(
            "Loaded {} book entries from {}",
            added,
            self.path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_argument_is_its_own_error() {
        assert!(matches!(
            AddCmd::new(None),
            Err(BibmanError::MissingArgument)
        ));
    }

    #[test]
    fn test_path_must_end_in_json() {
        assert_eq!(AddCmd::validate(Some("books.json")).unwrap(), true);
        assert_eq!(AddCmd::validate(Some("data/books.json")).unwrap(), true);
        assert_eq!(AddCmd::validate(Some("books.txt")).unwrap(), false);
        assert_eq!(AddCmd::validate(Some("  ")).unwrap(), false);
    }

    #[test]
    fn test_path_may_contain_spaces() {
        assert_eq!(AddCmd::validate(Some("my books.json")).unwrap(), true);
    }

    #[test]
    fn test_execute_loads_and_reports_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(
            &path,
            r#"[{"title": "Dune", "authors": ["Frank Herbert"],
                "rating": 4.6, "year": 1965, "language": "English"},
               {"title": "1984", "authors": ["George Orwell"],
                "rating": 4.5, "year": 1949, "language": "English"}]"#,
        )
        .unwrap();

        let mut library = Library::new();
        let command = AddCmd::new(Some(path.to_str().unwrap())).unwrap();
        let output = command.execute(&mut library).unwrap();

        assert_eq!(
            output,
            CommandOutput::Text(format!("Loaded 2 book entries from {}", path.display()))
        );
        assert_eq!(library.book_data().unwrap().len(), 2);
    }

    #[test]
    fn test_execute_missing_file_leaves_library_unloaded() {
        let mut library = Library::new();
        let command = AddCmd::new(Some("nowhere/books.json")).unwrap();
        assert!(command.execute(&mut library).is_err());
        assert!(library.book_data().is_none());
    }
}
