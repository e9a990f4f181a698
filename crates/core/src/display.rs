//! Pure functions computing derived display metadata for an article.

use chrono::NaiveDate;

/// Assumed reading speed used by [`read_time`].
const WORDS_PER_MINUTE: usize = 200;

/// Formats a publish date into the single supported human-readable form,
/// e.g. `March 15, 2022`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Estimates reading time for a plain-text rendering of an article.
///
/// Word count divided by the assumed reading speed, rounded up to whole
/// minutes with a floor of one minute — empty text still reads "1 min".
/// Idempotent: identical text always yields an identical label.
pub fn read_time(text: &str) -> String {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// Collapses runs of consecutive path separators in an image URL.
///
/// Guards against double-slash artifacts from concatenated base-path and
/// relative-path construction. The `//` that follows a URL scheme is the
/// one run left alone. Normalizing an already-normalized URL is a no-op.
pub fn normalize_image_url(url: &str) -> String {
    let (scheme, rest) = match url.find("://") {
        Some(pos) => url.split_at(pos + 3),
        None => ("", url),
    };

    let mut out = String::with_capacity(url.len());
    out.push_str(scheme);
    let mut prev_slash = false;
    for c in rest.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date() {
        let date = NaiveDate::from_ymd_opt(2022, 3, 15).unwrap();
        assert_eq!(format_date(date), "March 15, 2022");
    }

    #[test]
    fn single_digit_day_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 2).unwrap();
        assert_eq!(format_date(date), "November 2, 2023");
    }

    #[test]
    fn read_time_rounds_up() {
        let text = "word ".repeat(600);
        assert_eq!(read_time(&text), "3 min read");
        let text = "word ".repeat(201);
        assert_eq!(read_time(&text), "2 min read");
    }

    #[test]
    fn read_time_floors_at_one_minute() {
        assert_eq!(read_time(""), "1 min read");
        assert_eq!(read_time("a few words only"), "1 min read");
    }

    #[test]
    fn read_time_is_idempotent_over_identical_text() {
        let text = "word ".repeat(450);
        assert_eq!(read_time(&text), read_time(&text));
    }

    #[test]
    fn collapses_consecutive_separators() {
        assert_eq!(normalize_image_url("/images//foo.png"), "/images/foo.png");
        assert_eq!(
            normalize_image_url("/a///b////c.png"),
            "/a/b/c.png"
        );
    }

    #[test]
    fn preserves_scheme_separator() {
        assert_eq!(
            normalize_image_url("https://cdn.example.com//posts//img.png"),
            "https://cdn.example.com/posts/img.png"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_image_url("/images//foo//bar.png");
        assert_eq!(normalize_image_url(&once), once);
        assert!(!once.contains("//"));
    }
}
