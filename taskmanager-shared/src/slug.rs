//! Slug derivation for usernames and task titles.
//!
//! A slug is the URL-safe form of a name: lowercased, with every run of
//! non-alphanumeric characters collapsed into a single hyphen. Slugs are
//! computed once when a record is created and never recomputed on update.

/// Derives a URL-safe slug from a name or title.
///
/// - Lowercase
/// - Non-alphanumeric → hyphen
/// - Collapse repeated hyphens, trim leading/trailing ones
///
/// # Example
///
/// ```
/// use taskmanager_shared::slug::slugify;
///
/// assert_eq!(slugify("Jane Doe"), "jane-doe");
/// assert_eq!(slugify("Fix the build!!"), "fix-the-build");
/// ```
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("alice"), "alice");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Take out the trash!"), "take-out-the-trash");
        assert_eq!(slugify("a.b.c"), "a-b-c");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("---dashes---"), "dashes");
    }

    #[test]
    fn test_slugify_unicode_lowercases() {
        assert_eq!(slugify("Größe"), "größe");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
