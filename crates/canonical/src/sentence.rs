//! Sentence segmentation.
//!
//! A single left-to-right scan over the characters of the input. `.`, `!`
//! and `?` are terminator candidates; a dot is first checked against three
//! exceptions (known abbreviation, decimal point, ellipsis) and any candidate
//! is confirmed only at end of text, before whitespace, or directly before an
//! uppercase letter. Sentences keep their original casing and punctuation and
//! come back in source order. No state survives between calls.

use crate::whitespace::split_paragraphs;

/// Lower-cased words that never end a sentence when followed by a dot.
/// Titles, ordinal suffixes, and common English and Turkish abbreviations.
const ABBREVIATIONS: &[&str] = &[
    "al", "apt", "av", "bkz", "blv", "cad", "co", "corp", "dr", "e", "etc", "fig", "g", "inc",
    "jr", "ltd", "mah", "mr", "mrs", "ms", "nd", "no", "nr", "op", "prof", "rd", "sk", "sn",
    "sr", "st", "tel", "th", "vb", "vd", "vol", "vs", "yy", "yrd", "doç", "örn",
];

fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.contains(&word)
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// The alphanumeric run that ends `buffer` (the word right before a dot).
fn trailing_word(buffer: &str) -> &str {
    let start = buffer
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_alphanumeric())
        .last()
        .map_or(buffer.len(), |(idx, _)| idx);
    &buffer[start..]
}

/// Splits `text` into an ordered sequence of trimmed, non-empty sentences.
///
/// ```rust
/// use canonical::split_into_sentences;
///
/// let sentences = split_into_sentences("Dr. Yılmaz geldi. Oran 3.5 oldu! Peki...");
/// assert_eq!(sentences, vec!["Dr. Yılmaz geldi.", "Oran 3.5 oldu!", "Peki..."]);
/// ```
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if !is_terminator(ch) {
            current.push(ch);
            i += 1;
            continue;
        }

        let next = chars.get(i + 1).copied();

        if ch == '.' && next.is_some() {
            let word = trailing_word(&current);

            if !word.is_empty() && is_abbreviation(&word.to_lowercase()) {
                current.push(ch);
                i += 1;
                continue;
            }

            let word_is_number = !word.is_empty() && word.chars().all(|c| c.is_ascii_digit());
            if word_is_number && next.is_some_and(|c| c.is_ascii_digit()) {
                current.push(ch);
                i += 1;
                continue;
            }

            if next == Some('.') && chars.get(i + 2) == Some(&'.') {
                current.push_str("...");
                i += 3;
                continue;
            }
        }

        current.push(ch);
        let confirmed = match next {
            None => true,
            Some(c) => c.is_whitespace() || c.is_uppercase(),
        };
        if confirmed {
            push_sentence(&mut sentences, &current);
            current.clear();
        }
        i += 1;
    }

    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, buffer: &str) {
    let sentence = buffer.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// Splits on blank lines first, then sentence-splits every paragraph.
/// Paragraphs without any sentence are dropped.
pub fn split_into_paragraphs_and_sentences(text: &str) -> Vec<Vec<String>> {
    split_paragraphs(text)
        .into_iter()
        .map(split_into_sentences)
        .filter(|sentences| !sentences.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_basic_terminators() {
        assert_eq!(
            split_into_sentences("Bu önemli bir kaynak metindir. İkinci cümle de önemlidir!"),
            vec!["Bu önemli bir kaynak metindir.", "İkinci cümle de önemlidir!"]
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(split_into_sentences("").is_empty());
        assert!(split_into_sentences("   \n ").is_empty());
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(split_into_sentences("  sonu noktasız  "), vec!["sonu noktasız"]);
    }

    #[test]
    fn abbreviations_do_not_terminate() {
        assert_eq!(
            split_into_sentences("Mr. Smith met Dr. Jones. Atatürk Cad. No. 5 adresinde."),
            vec!["Mr. Smith met Dr. Jones.", "Atatürk Cad. No. 5 adresinde."]
        );
    }

    #[test]
    fn turkish_abbreviations_do_not_terminate() {
        assert_eq!(
            split_into_sentences("Gül Sk. üzerinde, elma, armut vb. satılır. Bitti."),
            vec!["Gül Sk. üzerinde, elma, armut vb. satılır.", "Bitti."]
        );
    }

    #[test]
    fn decimal_numbers_do_not_terminate() {
        assert_eq!(
            split_into_sentences("Büyüme 3.5 oldu. Dünya genelinde 2.5 milyon kişi var."),
            vec!["Büyüme 3.5 oldu.", "Dünya genelinde 2.5 milyon kişi var."]
        );
    }

    #[test]
    fn ellipsis_does_not_terminate() {
        assert_eq!(
            split_into_sentences("Bekle... Sonra gel. Tamam"),
            vec!["Bekle... Sonra gel.", "Tamam"]
        );
    }

    #[test]
    fn trailing_ellipsis_stays_with_sentence() {
        assert_eq!(split_into_sentences("Belki..."), vec!["Belki..."]);
    }

    #[test]
    fn uppercase_after_terminator_splits_without_space() {
        assert_eq!(split_into_sentences("Bitti.Yeni başladı"), vec!["Bitti.", "Yeni başladı"]);
    }

    #[test]
    fn lowercase_after_dot_does_not_split() {
        assert_eq!(split_into_sentences("site.com adresi"), vec!["site.com adresi"]);
    }

    #[test]
    fn repeated_marks_end_once() {
        assert_eq!(
            split_into_sentences("Gerçekten mi?! Evet."),
            vec!["Gerçekten mi?!", "Evet."]
        );
    }

    #[test]
    fn question_and_exclamation_terminate() {
        assert_eq!(
            split_into_sentences("Neden? Çünkü! Tamam."),
            vec!["Neden?", "Çünkü!", "Tamam."]
        );
    }

    #[test]
    fn splitting_is_restartable() {
        let text = "Bir. İki. Üç.";
        assert_eq!(split_into_sentences(text), split_into_sentences(text));
    }

    #[test]
    fn paragraphs_then_sentences() {
        let text = "Birinci. İkinci.\n\n\nÜçüncü!\n\n   \n";
        assert_eq!(
            split_into_paragraphs_and_sentences(text),
            vec![vec!["Birinci.", "İkinci."], vec!["Üçüncü!"]]
        );
    }
}
