//! Game Session
//!
//! One playthrough of hangman: the secret word, the letters guessed so far and
//! the number of wrong guesses still allowed. The outcome is never stored, it is
//! derived from those three pieces every time it is asked for.
//!
//! The session knows nothing about rendering or input. The game loop feeds it
//! letters and reads back the masked word, guessed letters and attempts.

use std::collections::BTreeSet;

/// Wrong guesses allowed before the game is lost
pub const MAX_ATTEMPTS: u8 = 6;

/// Placeholder shown for letters that have not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Derived classification of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Won and Lost are terminal, only a new session leaves them
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// What a call to [`Session::guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Letter is in the word
    Correct,
    /// Letter is not in the word, one attempt was used up
    Wrong,
    /// Letter was guessed before, nothing changed
    AlreadyGuessed,
    /// Input was not an ASCII letter, nothing changed
    NotALetter,
    /// Session already won or lost, nothing changed
    GameOver,
}

/// State of a single hangman playthrough
///
/// # Example
///
/// ```rust
/// let mut session = Session::new("cat");
/// session.guess('c');
/// assert_eq!(session.masked_word(), "c _ _");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    word: String,
    guessed: BTreeSet<char>,
    attempts_remaining: u8,
}

impl Session {
    /// Creates a fresh session for the given word
    ///
    /// The word is lowercased. Callers are expected to pass ASCII letters only;
    /// the word list loader already filters everything else out.
    pub fn new(word: impl Into<String>) -> Self {
        Session {
            word: word.into().to_ascii_lowercase(),
            guessed: BTreeSet::new(),
            attempts_remaining: MAX_ATTEMPTS,
        }
    }

    /// Guess a letter
    ///
    /// Case-insensitive. Guessing after the game is over, guessing a letter a
    /// second time, or passing anything other than an ASCII letter leaves the
    /// session untouched.
    pub fn guess(&mut self, letter: char) -> GuessResult {
        if self.outcome().is_terminal() {
            return GuessResult::GameOver;
        }
        if !letter.is_ascii_alphabetic() {
            return GuessResult::NotALetter;
        }

        let letter = letter.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return GuessResult::AlreadyGuessed;
        }

        if self.word.contains(letter) {
            GuessResult::Correct
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessResult::Wrong
        }
    }

    /// The word with unguessed letters replaced by `_`, space separated
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { PLACEHOLDER })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn outcome(&self) -> Outcome {
        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            Outcome::Won
        } else if self.attempts_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// The secret word (shown on the lose screen)
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Guessed letters in alphabetical order
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_session() {
        let session = Session::new("Cat");
        assert_eq!(session.word(), "cat");
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(session.guessed_letters().count(), 0);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.masked_word(), "_ _ _");
    }

    #[test]
    fn test_cat_scenario() {
        let mut session = Session::new("cat");

        assert_eq!(session.guess('c'), GuessResult::Correct);
        assert_eq!(session.masked_word(), "c _ _");
        assert_eq!(session.attempts_remaining(), 6);

        assert_eq!(session.guess('z'), GuessResult::Wrong);
        assert_eq!(session.attempts_remaining(), 5);
        assert_eq!(session.masked_word(), "c _ _");

        assert_eq!(session.guess('a'), GuessResult::Correct);
        assert_eq!(session.masked_word(), "c a _");

        assert_eq!(session.guess('t'), GuessResult::Correct);
        assert_eq!(session.masked_word(), "c a t");
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn test_dog_scenario() {
        let mut session = Session::new("dog");

        for letter in ['x', 'q', 'z', 'v', 'j', 'k'] {
            assert_eq!(session.guess(letter), GuessResult::Wrong);
        }

        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.outcome(), Outcome::Lost);
        assert_eq!(session.masked_word(), "_ _ _");
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut session = Session::new("cat");
        assert_eq!(session.guess('C'), GuessResult::Correct);
        assert_eq!(session.guess('c'), GuessResult::AlreadyGuessed);
        assert_eq!(session.guessed_letters().collect::<Vec<_>>(), vec!['c']);
    }

    #[test]
    fn test_duplicate_wrong_guess_costs_one_attempt() {
        let mut session = Session::new("cat");
        session.guess('z');
        assert_eq!(session.guess('z'), GuessResult::AlreadyGuessed);
        assert_eq!(session.guess('Z'), GuessResult::AlreadyGuessed);
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn test_non_letters_rejected() {
        let mut session = Session::new("cat");
        assert_eq!(session.guess('1'), GuessResult::NotALetter);
        assert_eq!(session.guess(' '), GuessResult::NotALetter);
        assert_eq!(session.guess('é'), GuessResult::NotALetter);
        assert_eq!(session, Session::new("cat"));
    }

    #[test]
    fn test_no_guesses_after_win() {
        let mut session = Session::new("aa");
        session.guess('a');
        assert_eq!(session.outcome(), Outcome::Won);

        let before = session.clone();
        assert_eq!(session.guess('b'), GuessResult::GameOver);
        assert_eq!(session, before);
    }

    #[test]
    fn test_no_guesses_after_loss() {
        let mut session = Session::new("dog");
        for letter in ['x', 'q', 'z', 'v', 'j', 'k'] {
            session.guess(letter);
        }

        let before = session.clone();
        assert_eq!(session.guess('d'), GuessResult::GameOver);
        assert_eq!(session, before);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn test_repeated_letters_revealed_together() {
        let mut session = Session::new("hangman");
        session.guess('a');
        assert_eq!(session.masked_word(), "_ a _ _ _ a _");
        session.guess('n');
        assert_eq!(session.masked_word(), "_ a n _ _ a n");
    }

    #[test]
    fn test_guessed_letters_sorted() {
        let mut session = Session::new("python");
        for letter in ['y', 'b', 'p', 'a'] {
            session.guess(letter);
        }
        assert_eq!(
            session.guessed_letters().collect::<String>(),
            "abpy"
        );
    }

    proptest! {
        #[test]
        fn attempts_never_increase(word in "[a-z]{1,12}", guesses in prop::collection::vec(any::<char>(), 0..40)) {
            let mut session = Session::new(word);
            let mut previous = session.attempts_remaining();
            for letter in guesses {
                session.guess(letter);
                prop_assert!(session.attempts_remaining() <= previous);
                prop_assert!(session.attempts_remaining() <= MAX_ATTEMPTS);
                previous = session.attempts_remaining();
            }
        }

        #[test]
        fn guessed_letters_never_shrink(word in "[a-z]{1,12}", guesses in "[a-zA-Z]{0,40}") {
            let mut session = Session::new(word);
            let mut previous: Vec<char> = Vec::new();
            for letter in guesses.chars() {
                session.guess(letter);
                let current: Vec<char> = session.guessed_letters().collect();
                prop_assert!(previous.iter().all(|c| current.contains(c)));
                previous = current;
            }
        }

        #[test]
        fn guessing_twice_equals_guessing_once(word in "[a-z]{1,12}", guesses in "[a-z]{0,10}", letter in "[a-z]") {
            let letter = letter.chars().next().unwrap();
            let mut once = Session::new(word.clone());
            let mut twice = Session::new(word);
            for c in guesses.chars() {
                once.guess(c);
                twice.guess(c);
            }
            once.guess(letter);
            twice.guess(letter);
            twice.guess(letter);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn outcome_matches_definition(word in "[a-z]{1,12}", guesses in "[a-z]{0,40}") {
            let mut session = Session::new(word.clone());
            for c in guesses.chars() {
                session.guess(c);
            }

            let all_guessed = word.chars().all(|c| session.guessed_letters().any(|g| g == c));
            prop_assert_eq!(session.outcome() == Outcome::Won, all_guessed);
            prop_assert_eq!(
                session.outcome() == Outcome::Lost,
                session.attempts_remaining() == 0 && !all_guessed
            );
        }

        #[test]
        fn terminal_sessions_are_frozen(word in "[a-z]{1,6}", guesses in "[a-z]{0,40}", extra in any::<char>()) {
            let mut session = Session::new(word);
            for c in guesses.chars() {
                session.guess(c);
            }
            if session.is_over() {
                let before = session.clone();
                prop_assert_eq!(session.guess(extra), GuessResult::GameOver);
                prop_assert_eq!(session, before);
            }
        }
    }
}
