use crate::restrictions::Difficulty;
use crate::restrictions::GuessRestrictions;
use crate::results::CluedRow;
use crate::results::GameError;
use rayon::prelude::*;
use std::collections::HashSet;
use std::io::BufRead;
use std::sync::Arc;

/// The membership test a guess must pass before it is scored.
///
/// The engine never owns a word list. Sessions consult whatever
/// implementation the caller hands them, with the guess already lowercased.
pub trait Dictionary {
    /// Returns `true` iff `word` may be played.
    fn is_valid_word(&self, word: &str) -> bool;
}

/// A fixed-length list of playable words.
///
/// Words are lowercased and deduplicated on construction. First-seen order
/// is preserved so that an external seed-to-index scheme keeps picking the
/// same word, and membership checks are constant time.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Arc<str>>,
    membership: HashSet<Arc<str>>,
    word_length: usize,
}

impl WordList {
    /// Builds a list from the given words, which must all share one length.
    ///
    /// Empty entries are skipped. Fails with [`GameError::MixedWordLength`]
    /// if two words disagree on length, or [`GameError::EmptyWordList`] if
    /// nothing usable remains.
    pub fn from_iterator<S, I>(words: I) -> Result<WordList, GameError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut list: Vec<Arc<str>> = Vec::new();
        let mut membership: HashSet<Arc<str>> = HashSet::new();
        let mut word_length = 0;
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            let length = word.chars().count();
            if length == 0 {
                continue;
            }
            if word_length == 0 {
                word_length = length;
            } else if length != word_length {
                return Err(GameError::MixedWordLength);
            }
            let word: Arc<str> = Arc::from(word.as_str());
            if membership.insert(Arc::clone(&word)) {
                list.push(word);
            }
        }
        if list.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(WordList {
            words: list,
            membership,
            word_length,
        })
    }

    /// Reads words from `reader`, one per line, keeping only words of
    /// exactly `word_length` letters.
    ///
    /// This suits one mixed-length dictionary file shared by games of
    /// different lengths. Fails with [`GameError::EmptyWordList`] if no line
    /// qualifies.
    pub fn from_reader<R: BufRead>(reader: R, word_length: usize) -> Result<WordList, GameError> {
        let mut list: Vec<Arc<str>> = Vec::new();
        let mut membership: HashSet<Arc<str>> = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if word.chars().count() != word_length {
                continue;
            }
            let word: Arc<str> = Arc::from(word.as_str());
            if membership.insert(Arc::clone(&word)) {
                list.push(word);
            }
        }
        if list.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(WordList {
            words: list,
            membership,
            word_length,
        })
    }

    /// The number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The length every word in this list shares.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words, in first-seen order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// The word at `index`, for callers that map a seed to a word.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|word| word.as_ref())
    }

    /// Picks a uniformly random word, e.g. to open a new session with.
    pub fn random_word(&self) -> &str {
        // The list is never empty once constructed.
        &self.words[rand::random::<usize>() % self.words.len()]
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.membership.contains(word)
    }
}

/// Filters `list` down to the words the given difficulty would still accept
/// after every row in `history`.
///
/// The constraint summary is consolidated once, then applied across the
/// whole list in parallel.
pub fn legal_words(
    list: &WordList,
    history: &[CluedRow],
    difficulty: Difficulty,
) -> Vec<Arc<str>> {
    let restrictions = GuessRestrictions::from_history(history);
    list.words()
        .par_iter()
        .filter(|word| restrictions.check(word, difficulty).is_ok())
        .map(Arc::clone)
        .collect()
}
