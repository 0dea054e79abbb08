// Public modules
pub mod commands;
pub mod error;
pub mod grouping;
pub mod io;
pub mod library;
pub mod models;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use commands::{build, dispatch, Command, CommandOutput, CommandType};
pub use error::{BibmanError, Result};
pub use grouping::{append_to_group, group_by_first_letter, group_titles_by_author};
pub use io::load_book_file;
pub use library::Library;
pub use models::{BookEntry, BookField};
pub use sorting::{normalize_for_sorting, sort_titles, strip_leading_articles};
pub use validation::validate_catalogue;
