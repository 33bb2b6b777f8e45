//! Word list loading
//!
//! Words come from a plain text file next to the executable, one per line.
//! Loading never fails from the game's point of view: if the file is missing,
//! unreadable or has no usable words, a built-in list is used instead and a
//! warning is logged.

use crate::rng::WordRng;
use crate::session::Session;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fixed word list filename, resolved against the executable's directory
pub const WORD_LIST_FILENAME: &str = "words.txt";

/// Used whenever the word list file can't provide any words
pub const FALLBACK_WORDS: [&str; 6] = [
    "python",
    "javascript",
    "hangman",
    "developer",
    "programming",
    "computer",
];

/// Errors that can occur while reading a word list file
#[derive(Debug)]
pub enum WordListError {
    /// File missing or unreadable
    Io(io::Error),

    /// File read fine but contained no usable words
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordListError::Io(e) => write!(f, "could not read word list: {}", e),
            WordListError::Empty => write!(f, "word list contains no usable words"),
        }
    }
}

impl std::error::Error for WordListError {}

impl From<io::Error> for WordListError {
    fn from(err: io::Error) -> Self {
        WordListError::Io(err)
    }
}

/// Path of `words.txt` next to the running executable
///
/// Falls back to the working directory if the executable location is unknown.
pub fn default_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join(WORD_LIST_FILENAME))
            .unwrap_or_else(|| PathBuf::from(WORD_LIST_FILENAME)),
        Err(e) => {
            warn!("Could not locate executable ({}), looking for {} in working directory", e, WORD_LIST_FILENAME);
            PathBuf::from(WORD_LIST_FILENAME)
        }
    }
}

/// Normalize one line of the word list
///
/// Returns `None` for blank lines and for anything that isn't pure ASCII
/// letters once trimmed.
fn parse_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        debug!("Skipping word list entry {:?}", trimmed);
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Parse word list text into lowercase words
pub fn parse_words(content: &str) -> Vec<String> {
    content.lines().filter_map(parse_line).collect()
}

/// Load words from a file
///
/// # Errors
///
/// [`WordListError::Io`] if the file can't be read, [`WordListError::Empty`]
/// if it has no usable words.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<String>, WordListError> {
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    Ok(words)
}

/// Non-empty pool of candidate words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Built-in list of six words
    pub fn fallback() -> Self {
        WordList {
            words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Build a list from arbitrary words, falling back if none are usable
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|w| parse_line(w.as_ref()))
            .collect();
        if words.is_empty() {
            Self::fallback()
        } else {
            WordList { words }
        }
    }

    /// Load the word list file, substituting the built-in list on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match load_from_file(path) {
            Ok(words) => {
                info!("Loaded {} words from {}", words.len(), path.display());
                Self::from_words(words)
            }
            Err(e) => {
                warn!("{} ({}), using built-in word list", e, path.display());
                Self::fallback()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Pick a word uniformly at random
    pub fn choose(&self, rng: &mut WordRng) -> &str {
        // The list is never empty, index 0 is only a formality
        let index = rng.pick(self.words.len()).unwrap_or(0);
        &self.words[index]
    }

    /// Start a new session with a randomly chosen word
    pub fn new_session(&self, rng: &mut WordRng) -> Session {
        let word = self.choose(rng);
        info!("New session: {} letters", word.len());
        debug!("Secret word: {}", word);
        Session::new(word)
    }
}
