use serde::Deserialize;
use std::fmt;

/// A single book catalogue entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub authors: Vec<String>,
    pub rating: f32,
    pub year: u16,
    pub language: String,
}

impl BookEntry {
    pub fn new(title: &str, authors: &[&str], rating: f32, year: u16, language: &str) -> Self {
        BookEntry {
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            rating,
            year,
            language: language.to_string(),
        }
    }

    /// Author names joined with commas, in entry order
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "by {}", self.authors_joined())?;
        writeln!(f, "Rating: {:.2}", self.rating)?;
        writeln!(f, "Published: {}", self.year)?;
        write!(f, "Language: {}", self.language)
    }
}

/// The attributes a catalogue can be grouped or pruned by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Title,
    Author,
}

impl BookField {
    pub const ALL: [BookField; 2] = [BookField::Title, BookField::Author];

    /// Symbolic name as it appears in command arguments
    pub fn name(&self) -> &'static str {
        match self {
            BookField::Title => "TITLE",
            BookField::Author => "AUTHOR",
        }
    }

    /// Resolve a field from its exact symbolic name (case-sensitive)
    pub fn from_name(name: &str) -> Option<BookField> {
        BookField::ALL.iter().copied().find(|field| field.name() == name)
    }
}
