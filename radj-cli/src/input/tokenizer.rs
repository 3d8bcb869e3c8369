//! Letter-run tokenizer
//!
//! Splits text into runs of letters, keeping inner hyphens
//! (`сине-зелёный`). Anything else separates words.

/// Split `text` into word-forms, lowercased unless `preserve_case` is set
pub fn tokenize(text: &str, preserve_case: bool) -> Vec<String> {
    text.split(|c: char| !(c.is_alphabetic() || c == '-'))
        .map(|token| token.trim_matches('-'))
        .filter(|token| !token.is_empty())
        .map(|token| {
            if preserve_case {
                token.to_string()
            } else {
                token.to_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_digits_split() {
        assert_eq!(
            tokenize("Синий стол, 2 отцовых дома.", false),
            vec!["синий", "стол", "отцовых", "дома"]
        );
    }

    #[test]
    fn test_hyphenated_words() {
        assert_eq!(
            tokenize("сине-зелёный -- море", false),
            vec!["сине-зелёный", "море"]
        );
    }

    #[test]
    fn test_preserve_case() {
        assert_eq!(tokenize("Каменный Дом", true), vec!["Каменный", "Дом"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("", false).is_empty());
        assert!(tokenize(" ... 123 ", false).is_empty());
    }
}
