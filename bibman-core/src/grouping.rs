use crate::error::{BibmanError, Result};
use crate::models::BookEntry;
use std::collections::BTreeMap;

/// Group key shared by every value starting with a decimal digit
pub const DIGIT_GROUP: &str = "[0-9]";

/// Append a value to the group stored under `key`, creating the group on first use
/// Values keep their insertion order within a group; keys iterate in ascending order
pub fn append_to_group(key: String, value: String, groups: &mut BTreeMap<String, Vec<String>>) {
    groups.entry(key).or_default().push(value);
}

/// Group values by their first character, uppercased
/// Values starting with a decimal digit share the "[0-9]" group
pub fn group_by_first_letter<I, S>(values: I) -> Result<BTreeMap<String, Vec<String>>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut groups = BTreeMap::new();

    for value in values {
        let value = value.into();
        let first = value.chars().next().ok_or(BibmanError::EmptyGroupValue)?;
        let key = if first.is_ascii_digit() {
            DIGIT_GROUP.to_string()
        } else {
            first.to_uppercase().to_string()
        };
        append_to_group(key, value, &mut groups);
    }

    Ok(groups)
}

/// File each entry's title under every one of its authors
/// A title with several authors appears in each author's group
pub fn group_titles_by_author(entries: &[BookEntry]) -> BTreeMap<String, Vec<String>> {
    let mut groups = BTreeMap::new();

    for entry in entries {
        for author in &entry.authors {
            append_to_group(author.clone(), entry.title.clone(), &mut groups);
        }
    }

    groups
}
