//! Word list loading
//!
//! Word lists are whitespace-separated token streams. A token whose first
//! character is not an ASCII letter is skipped; retained tokens are read as
//! exactly five characters (longer tokens are truncated, shorter ones cannot
//! form a valid word and are dropped).

use crate::core::{Word, WORD_LEN};
use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::load_from_file;
///
/// let words = load_from_file("dictionary.txt").unwrap();
/// println!("loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_tokens(&content))
}

/// Parse a token stream into words
#[must_use]
pub fn parse_tokens(content: &str) -> Vec<Word> {
    content
        .split_whitespace()
        .filter(|token| {
            token
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic())
        })
        .filter_map(|token| {
            let head: String = token.chars().take(WORD_LEN).collect();
            Word::new(head).ok()
        })
        .collect()
}

/// Remove every word of `played` from `base`, preserving order.
///
/// Used to drop already-played answers from the candidate seed before a game.
#[must_use]
pub fn subtract(base: &[Word], played: &[Word]) -> Vec<Word> {
    base.iter()
        .filter(|word| !played.contains(word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn parses_whitespace_separated_tokens() {
        let parsed = parse_tokens("crane slate\ntrace\t grape");
        assert_eq!(parsed, words(&["crane", "slate", "trace", "grape"]));
    }

    #[test]
    fn skips_tokens_not_starting_with_a_letter() {
        let parsed = parse_tokens("# comment\n123ab crane -foo slate");
        assert_eq!(parsed, words(&["crane", "slate"]));
    }

    #[test]
    fn truncates_long_tokens() {
        let parsed = parse_tokens("cranes slates");
        assert_eq!(parsed, words(&["crane", "slate"]));
    }

    #[test]
    fn drops_short_and_mixed_tokens() {
        // short tokens and letter-led tokens with embedded digits fail word
        // validation after truncation
        let parsed = parse_tokens("cat cr4ne slate");
        assert_eq!(parsed, words(&["slate"]));
    }

    #[test]
    fn normalizes_case() {
        let parsed = parse_tokens("CRANE Slate");
        assert_eq!(parsed, words(&["crane", "slate"]));
    }

    #[test]
    fn empty_stream() {
        assert!(parse_tokens("").is_empty());
        assert!(parse_tokens("   \n\t ").is_empty());
    }

    #[test]
    fn subtract_removes_played_words() {
        let base = words(&["crane", "slate", "trace"]);
        let played = words(&["slate"]);

        assert_eq!(subtract(&base, &played), words(&["crane", "trace"]));
        assert_eq!(subtract(&base, &[]), base);
        assert!(subtract(&[], &played).is_empty());
    }
}
