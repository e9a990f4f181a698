use std::collections::HashMap;

/// Turns arbitrary text into a URL-safe slug.
///
/// Lowercases, keeps alphanumerics, and folds every run of other
/// characters into a single hyphen. Leading and trailing hyphens are
/// trimmed. An input with no usable characters yields an empty slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Slug generator that deduplicates repeated slugs with `-n` suffixes.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next unique slug for the given text.
    ///
    /// The first occurrence returns the plain slug; later occurrences get
    /// `-1`, `-2`, … appended in order.
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.counts.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust: 2024 Edition!"), "rust-2024-edition");
    }

    #[test]
    fn folds_separator_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("  trimmed  "), "trimmed");
    }

    #[test]
    fn keeps_unicode_alphanumerics() {
        assert_eq!(slugify("Caffè Latte"), "caffè-latte");
    }

    #[test]
    fn slugger_deduplicates() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.next_slug("My Post"), "my-post");
        assert_eq!(slugger.next_slug("My Post"), "my-post-1");
        assert_eq!(slugger.next_slug("My Post"), "my-post-2");
        assert_eq!(slugger.next_slug("Other"), "other");
    }
}
