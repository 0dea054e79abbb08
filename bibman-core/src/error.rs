use std::io;

/// Errors produced by the bibman core library.
#[derive(Debug, thiserror::Error)]
pub enum BibmanError {
    /// A command that requires an argument was given none
    #[error("missing required argument")]
    MissingArgument,

    /// An argument was present but failed the command's validation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No catalogue has been loaded into the library yet
    #[error("no book data available")]
    NoBookData,

    /// An empty string reached first-letter grouping
    #[error("cannot group an empty value")]
    EmptyGroupValue,

    /// The input keyword matches no known command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A book file parsed but failed catalogue validation
    #[error("invalid book file: {} problem(s) found", .0.len())]
    InvalidBookFile(Vec<String>),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BibmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let e = BibmanError::InvalidArgument("search term cannot be blank".into());
        assert_eq!(
            format!("{e}"),
            "invalid argument: search term cannot be blank"
        );
    }

    #[test]
    fn test_missing_argument_display() {
        let e = BibmanError::MissingArgument;
        assert_eq!(format!("{e}"), "missing required argument");
    }

    #[test]
    fn test_unknown_command_display() {
        let e = BibmanError::UnknownCommand("FROBNICATE".into());
        assert_eq!(format!("{e}"), "unknown command: FROBNICATE");
    }

    #[test]
    fn test_invalid_book_file_counts_problems() {
        let e = BibmanError::InvalidBookFile(vec!["a".into(), "b".into()]);
        assert_eq!(format!("{e}"), "invalid book file: 2 problem(s) found");
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: BibmanError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: BibmanError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn test_result_alias() {
        let r: Result<i32> = Err(BibmanError::NoBookData);
        assert!(r.is_err());
    }
}
