use serde::de::DeserializeOwned;
use thiserror::Error;

/// Frontmatter extracted from the head of a markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// Raw YAML block between the fences, without the fences themselves.
    /// `None` when the document carries no frontmatter at all.
    pub yaml: Option<String>,
    /// Byte offset inside the original document where the body begins.
    pub body_start: usize,
}

impl Frontmatter {
    /// Deserializes the YAML block into a typed value.
    ///
    /// A document without frontmatter deserializes from an empty mapping,
    /// so targets with only defaulted fields still succeed.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, FrontmatterError> {
        let block = self.yaml.as_deref().unwrap_or("{}");
        let block = if block.trim().is_empty() { "{}" } else { block };
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))
    }
}

/// Errors emitted while locating or parsing frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Unclosed YAML fence (missing terminating `---`).
    #[error("unterminated YAML frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse or did not match the target shape.
    #[error("frontmatter parse error: {0}")]
    Parse(String),
}

/// Locates the YAML frontmatter fence pair at the head of a document.
///
/// Leading blank lines and a UTF-8 BOM are tolerated before the opening
/// fence. A document whose first meaningful line is not `---` has no
/// frontmatter and the body starts at offset zero.
pub fn extract_frontmatter(input: &str) -> Result<Frontmatter, FrontmatterError> {
    let (text, bom_len) = strip_bom(input);

    let mut cursor = 0usize;
    while let Some((line, next)) = next_line(text, cursor) {
        if line.trim().is_empty() {
            cursor = next;
            continue;
        }
        if !is_fence(line) {
            return Ok(Frontmatter {
                yaml: None,
                body_start: 0,
            });
        }

        // Opening fence found; scan for the closing one.
        let block_start = next;
        let mut scan = next;
        while let Some((block_line, after)) = next_line(text, scan) {
            if is_fence(block_line) {
                let raw = text[block_start..scan].trim_end_matches(['\r', '\n']);
                return Ok(Frontmatter {
                    yaml: Some(raw.to_string()),
                    body_start: bom_len + after,
                });
            }
            scan = after;
        }
        return Err(FrontmatterError::Unterminated);
    }

    Ok(Frontmatter {
        yaml: None,
        body_start: 0,
    })
}

fn strip_bom(input: &str) -> (&str, usize) {
    match input.strip_prefix('\u{feff}') {
        Some(stripped) => (stripped, '\u{feff}'.len_utf8()),
        None => (input, 0),
    }
}

fn next_line(input: &str, start: usize) -> Option<(&str, usize)> {
    if start >= input.len() {
        return None;
    }
    match input[start..].find('\n') {
        Some(pos) => Some((&input[start..start + pos], start + pos + 1)),
        None => Some((&input[start..], input.len())),
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Meta {
        title: String,
        #[serde(default)]
        tags: Vec<String>,
    }

    #[test]
    fn no_frontmatter_body_starts_at_zero() {
        let fm = extract_frontmatter("# Title\nBody").unwrap();
        assert_eq!(fm.yaml, None);
        assert_eq!(fm.body_start, 0);
    }

    #[test]
    fn extracts_block_and_body_offset() {
        let input = "---\ntitle: Example\ntags:\n  - rust\n---\n# Content";
        let fm = extract_frontmatter(input).unwrap();
        assert_eq!(fm.body_start, input.find("# Content").unwrap());
        let meta: Meta = fm.deserialize().unwrap();
        assert_eq!(meta.title, "Example");
        assert_eq!(meta.tags, vec!["rust".to_string()]);
    }

    #[test]
    fn tolerates_bom_and_leading_blank_lines() {
        let input = "\u{feff}\n   \n---\ntitle: bom\n---\nBody";
        let fm = extract_frontmatter(input).unwrap();
        assert_eq!(fm.body_start, input.find("Body").unwrap());
        let meta: Meta = fm.deserialize().unwrap();
        assert_eq!(meta.title, "bom");
    }

    #[test]
    fn empty_block_is_an_empty_mapping() {
        let input = "---\n---\nBody";
        let fm = extract_frontmatter(input).unwrap();
        assert_eq!(fm.yaml.as_deref(), Some(""));
        // `title` has no default, so an empty block is a parse error here.
        let err = fm.deserialize::<Meta>().unwrap_err();
        assert!(matches!(err, FrontmatterError::Parse(_)));
    }

    #[test]
    fn errors_on_unterminated_block() {
        let err = extract_frontmatter("---\ntitle: test").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let input = "---\ninvalid: [unterminated\n---\n";
        let fm = extract_frontmatter(input).unwrap();
        let err = fm.deserialize::<Meta>().unwrap_err();
        assert!(matches!(err, FrontmatterError::Parse(_)));
    }
}
