//! Word list loading utilities
//!
//! A list holds one word per line. Surrounding whitespace (including a
//! trailing `\r`) is trimmed and blank lines are skipped. Lines that are not
//! valid words are kept aside as rejected records instead of failing the load.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::Path;

/// A line that could not be turned into a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based line number
    pub line: usize,
    pub error: WordError,
}

/// Words read from a list, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<Word>,
    pub rejected: Vec<Rejected>,
}

/// Parse list contents
///
/// # Examples
/// ```
/// use wordlebot::wordlists::parse_words;
///
/// let list = parse_words("crane\r\n\nslate\nabc\n");
/// assert_eq!(list.words.len(), 2);
/// assert_eq!(list.words[0].to_string(), "CRANE");
/// assert_eq!(list.rejected[0].line, 4);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> WordList {
    let mut list = WordList::default();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => list.words.push(word),
            Err(error) => list.rejected.push(Rejected {
                line: number + 1,
                error,
            }),
        }
    }

    list
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordlebot::wordlists::load_from_file;
///
/// let list = load_from_file("wordlist_solutions.txt").unwrap();
/// println!("Loaded {} words", list.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_uppercases_and_keeps_order() {
        let list = parse_words("crane\nSlate\nirate\n");

        let text: Vec<String> = list.words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["CRANE", "SLATE", "IRATE"]);
        assert!(list.rejected.is_empty());
    }

    #[test]
    fn parse_words_strips_carriage_returns_and_blanks() {
        let list = parse_words("crane\r\n\r\n  \nslate\r\n");
        assert_eq!(list.words.len(), 2);
        assert_eq!(list.words[1].to_string(), "SLATE");
        assert!(list.rejected.is_empty());
    }

    #[test]
    fn parse_words_reports_invalid_lines() {
        let list = parse_words("crane\ntoolong\nabc\nsl4te\nslate\n");

        assert_eq!(list.words.len(), 2);
        assert_eq!(
            list.rejected,
            vec![
                Rejected {
                    line: 2,
                    error: WordError::InvalidLength(7)
                },
                Rejected {
                    line: 3,
                    error: WordError::InvalidLength(3)
                },
                Rejected {
                    line: 4,
                    error: WordError::InvalidCharacter('4')
                },
            ]
        );
    }

    #[test]
    fn parse_words_empty() {
        assert_eq!(parse_words(""), WordList::default());
    }

    #[test]
    fn load_from_file_reads_list() {
        let path = std::env::temp_dir().join(format!("wordlebot-loader-{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n").unwrap();

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(list.words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/wordlebot/list.txt").is_err());
    }
}
