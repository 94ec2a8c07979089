// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// "is this string a word?" as seen by the engine.
pub trait WordPredicate: Sync {
    fn is_valid_word(&self, word: &str) -> bool;
    fn is_loaded(&self) -> bool;
}

// uppercase words of length >= 2.
pub struct WordList {
    words: std::collections::HashSet<String>,
    loaded: bool,
}

impl WordList {
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let words = words
            .iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect::<std::collections::HashSet<_>>();
        Self {
            words,
            loaded: true,
        }
    }

    // a list that was never populated; the move generator produces nothing with it.
    pub fn not_loaded() -> Self {
        Self {
            words: std::collections::HashSet::new(),
            loaded: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .filter_map(normalize)
            .collect::<std::collections::HashSet<_>>();
        Self {
            words,
            loaded: true,
        }
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(x) => x,
            Err(e) => {
                return_error!(format!("cannot read word list {}: {}", path.display(), e));
            }
        };
        let ret = Self::from_text(&text);
        log::info!("loaded {} words from {}", ret.len(), path.display());
        Ok(ret)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.chars().count() >= 2 && word.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(word.to_ascii_uppercase())
    } else {
        None
    }
}

impl WordPredicate for WordList {
    #[inline(always)]
    fn is_valid_word(&self, word: &str) -> bool {
        self.loaded && self.words.contains(&word.to_ascii_uppercase())
    }

    #[inline(always)]
    fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list() {
        let words = WordList::from_words(&["cat", "AT", "a", "x-ray"]);
        assert!(words.is_loaded());
        assert_eq!(words.len(), 2);
        assert!(words.is_valid_word("CAT"));
        assert!(words.is_valid_word("cat"));
        assert!(!words.is_valid_word("A"));
        assert!(!words.is_valid_word("DOG"));
    }

    #[test]
    fn test_from_text_skips_junk() {
        let words = WordList::from_text("  zoo \r\nq\n\nqi\n");
        assert_eq!(words.len(), 2);
        assert!(words.is_valid_word("QI"));
    }

    #[test]
    fn test_not_loaded() {
        let words = WordList::not_loaded();
        assert!(!words.is_loaded());
        assert!(!words.is_valid_word("CAT"));
    }

    #[test]
    fn test_missing_file() {
        assert!(WordList::from_file("/nonexistent/words.txt").is_err());
    }
}
