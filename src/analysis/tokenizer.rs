use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;
}

/// Splits on every single space character.
///
/// No case folding and no punctuation stripping. Consecutive, leading or
/// trailing spaces produce empty tokens, and an empty text yields one empty
/// token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        for (position, piece) in text.split(' ').enumerate() {
            tokens.push(Token::new(piece.to_string(), position as u32, offset));
            offset += piece.len() + 1;
        }

        tokens
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        WhitespaceTokenizer.tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_on_single_space() {
        assert_eq!(texts("foo bar baz"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_keeps_case_and_punctuation() {
        assert_eq!(texts("Hello, World!"), vec!["Hello,", "World!"]);
    }

    #[test]
    fn test_consecutive_spaces_yield_empty_tokens() {
        assert_eq!(texts("a  b"), vec!["a", "", "b"]);
        assert_eq!(texts(" a "), vec!["", "a", ""]);
    }

    #[test]
    fn test_empty_text_is_one_empty_token() {
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn test_tabs_and_newlines_are_not_separators() {
        assert_eq!(texts("a\tb\nc"), vec!["a\tb\nc"]);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let tokens = WhitespaceTokenizer.tokenize("ab  cd");
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 3);
        assert_eq!(tokens[2].offset, 4);
        assert_eq!(tokens[2].position, 2);
    }
}
