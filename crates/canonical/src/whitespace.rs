//! Whitespace helpers shared by the normalizer and the sentence splitter.

/// Collapses repeated Unicode whitespace into single ASCII spaces and trims
/// both edges.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Bu   metin\n\nkısa.  "), "Bu metin kısa.");
/// assert_eq!(collapse_whitespace(" \t "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Splits text on blank lines: a line holding only whitespace ends a
/// paragraph. Paragraphs are returned trimmed and never empty.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0usize;
    let mut offset = 0usize;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(text[s..end].trim());
            }
        } else {
            if start.is_none() {
                start = Some(line_start);
            }
            end = offset;
        }
    }
    if let Some(s) = start {
        paragraphs.push(text[s..end].trim());
    }

    paragraphs.retain(|p| !p.is_empty());
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_handles_mixed_whitespace() {
        assert_eq!(collapse_whitespace("hello\r\n\tworld\u{00A0}!"), "hello world !");
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "Birinci paragraf.\nDevamı.\n\n  \nİkinci paragraf.\n";
        assert_eq!(
            split_paragraphs(text),
            vec!["Birinci paragraf.\nDevamı.", "İkinci paragraf."]
        );
    }

    #[test]
    fn no_paragraphs_in_blank_text() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n \n\t\n").is_empty());
    }
}
