use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Sort titles following library science conventions
/// Leading articles are ignored and comparison is unicode-normalized and
/// case-insensitive; ties fall back to the raw title
pub fn sort_titles(titles: &mut [String]) {
    titles.sort_by(|a, b| {
        let a_key = normalize_for_sorting(a);
        let b_key = normalize_for_sorting(b);

        match a_key.cmp(&b_key) {
            std::cmp::Ordering::Equal => a.cmp(b),
            other => other,
        }
    });
}

/// Normalize a title for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse internal whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
/// Supports: a, an, the (English) and common articles in other languages
pub fn strip_leading_articles(s: &str) -> String {
    let re = Regex::new(
        r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|i|gli|un|une|een)\s+",
    )
    .unwrap();
    re.replace(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_articles() {
        assert_eq!(strip_leading_articles("The Hobbit"), "Hobbit");
        assert_eq!(strip_leading_articles("A Wizard of Earthsea"), "Wizard of Earthsea");
        assert_eq!(strip_leading_articles("Der Prozess"), "Prozess");
        assert_eq!(strip_leading_articles("Dune"), "Dune");
    }

    #[test]
    fn test_strip_only_one_leading_article() {
        assert_eq!(strip_leading_articles("The A Team"), "A Team");
    }

    #[test]
    fn test_normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize_for_sorting("The  LEFT   Hand "), "left hand");
    }

    #[test]
    fn test_sort_titles_ignores_articles() {
        let mut titles = vec![
            "The Road".to_string(),
            "Dune".to_string(),
            "A Canticle for Leibowitz".to_string(),
        ];
        sort_titles(&mut titles);
        assert_eq!(titles, vec!["A Canticle for Leibowitz", "Dune", "The Road"]);
    }

    #[test]
    fn test_sort_titles_ties_fall_back_to_raw_title() {
        let mut titles = vec!["the road".to_string(), "The Road".to_string()];
        sort_titles(&mut titles);
        assert_eq!(titles, vec!["The Road", "the road"]);
    }
}
