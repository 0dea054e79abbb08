use crate::models::BookEntry;

/// Validate a book catalogue
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
pub fn validate_catalogue(entries: &[BookEntry]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        let entry_ref = format!("Entry #{} ('{}')", idx + 1, entry.title);

        if entry.title.trim().is_empty() {
            errors.push(format!("{}: title cannot be empty", entry_ref));
        }

        if entry.authors.is_empty() {
            errors.push(format!("{}: must have at least one author", entry_ref));
        }

        for author in &entry.authors {
            if author.trim().is_empty() {
                errors.push(format!("{}: contains a blank author name", entry_ref));
            }
        }

        if !(0.0..=5.0).contains(&entry.rating) {
            errors.push(format!(
                "{}: rating {} is outside the 0.0 to 5.0 range",
                entry_ref, entry.rating
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
