use crate::restrictions::Violation;
use std::collections::HashMap;
use std::io;
use thiserror::Error;

/// The clue earned by one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterClue {
    /// The letter sits at this exact position in the target.
    Correct,
    /// The letter is in the target, but at a different position.
    Elsewhere,
    /// No unaccounted-for occurrence of the letter remains in the target.
    Absent,
}

/// Indicates that an error occurred while scoring a guess or running a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The guess's letter count doesn't match the target's.
    #[error("guess must be {expected} letters, but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// The dictionary rejected the guess.
    #[error("not a valid word")]
    NotInDictionary,
    /// The guess breaks the active difficulty's accumulated rules.
    #[error("{0}")]
    DifficultyViolation(Violation),
    /// A guess was submitted after the session had already ended.
    #[error("the game is already over")]
    SessionEnded,
    /// A session was configured with an empty target or a zero guess budget.
    #[error("a session needs a non-empty target and at least one guess")]
    InvalidConfig,
    /// A word list ended up with no usable words.
    #[error("the word list is empty")]
    EmptyWordList,
    /// A word list mixed words of different lengths.
    #[error("the word list mixes words of different lengths")]
    MixedWordLength,
    /// A word list could not be read.
    #[error("the word list could not be read")]
    Io(#[from] io::Error),
}

/// Whether a session still accepts guesses, or how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// The session still accepts guesses.
    InProgress,
    /// A guess matched the target exactly.
    Won,
    /// The guess budget ran out before the target was found.
    Lost,
}

impl GameStatus {
    /// Returns `true` once the session has been won or lost.
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Scores `guess` against `target`, yielding one clue per letter.
///
/// Both words are lowercased before comparison. Scoring runs in two passes:
/// exact-position matches are marked [`LetterClue::Correct`] first, each one
/// consuming an occurrence from the target's letter counts; remaining letters
/// are then marked [`LetterClue::Elsewhere`] only while unconsumed occurrences
/// are left, so a letter repeated more often in the guess than in the target
/// comes back [`LetterClue::Absent`] for the excess.
///
/// ```
/// use rs_wordl_engine::compute_clues;
/// use rs_wordl_engine::LetterClue;
///
/// let clues = compute_clues("celo", "pelo").unwrap();
/// assert_eq!(
///     clues,
///     vec![
///         LetterClue::Absent,
///         LetterClue::Correct,
///         LetterClue::Correct,
///         LetterClue::Correct,
///     ]
/// );
/// ```
pub fn compute_clues(guess: &str, target: &str) -> Result<Vec<LetterClue>, GameError> {
    let guess: Vec<char> = guess.to_lowercase().chars().collect();
    let target: Vec<char> = target.to_lowercase().chars().collect();
    if guess.len() != target.len() {
        return Err(GameError::InvalidLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }
    let mut unaccounted: HashMap<char, usize> = HashMap::new();
    for letter in &target {
        *unaccounted.entry(*letter).or_insert(0) += 1;
    }
    let mut clues = vec![LetterClue::Absent; guess.len()];
    // Exact matches must consume their occurrence before any
    // elsewhere-match may claim it.
    for (index, letter) in guess.iter().enumerate() {
        if target[index] == *letter {
            clues[index] = LetterClue::Correct;
            if let Some(count) = unaccounted.get_mut(letter) {
                *count -= 1;
            }
        }
    }
    for (index, letter) in guess.iter().enumerate() {
        if clues[index] == LetterClue::Correct {
            continue;
        }
        if let Some(count) = unaccounted.get_mut(letter) {
            if *count > 0 {
                clues[index] = LetterClue::Elsewhere;
                *count -= 1;
            }
        }
    }
    Ok(clues)
}

/// A locked-in guess together with its clues.
///
/// Rows are only ever created by scoring and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CluedRow {
    guess: Box<str>,
    clues: Vec<LetterClue>,
}

impl CluedRow {
    /// Scores `guess` against `target` and locks the pair into a row.
    pub fn score(guess: &str, target: &str) -> Result<CluedRow, GameError> {
        let clues = compute_clues(guess, target)?;
        Ok(CluedRow {
            guess: guess.to_lowercase().into_boxed_str(),
            clues,
        })
    }

    /// The guessed word, lowercased.
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// One clue per letter, in guess order.
    pub fn clues(&self) -> &[LetterClue] {
        &self.clues
    }

    /// Returns `true` iff every clue is [`LetterClue::Correct`].
    pub fn is_winning(&self) -> bool {
        self.clues.iter().all(|clue| *clue == LetterClue::Correct)
    }
}

#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use test::Bencher;

    #[bench]
    fn bench_compute_clues_no_duplicates(b: &mut Bencher) {
        b.iter(|| compute_clues("tarde", "noche"));
    }

    #[bench]
    fn bench_compute_clues_heavy_duplicates(b: &mut Bencher) {
        b.iter(|| compute_clues("aaabb", "ababa"));
    }
}
