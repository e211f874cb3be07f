use crate::data::Dictionary;
use crate::restrictions::validate_guess;
use crate::restrictions::Difficulty;
use crate::results::CluedRow;
use crate::results::GameError;
use crate::results::GameStatus;

/// A single play-through against one hidden target word.
///
/// The session owns the target, the guess budget, the difficulty, and the
/// append-only history of scored rows. Guesses go through [`Self::submit_guess`];
/// everything a presentation layer may see comes back through the returned
/// rows and [`Self::current_state`]. The target itself is never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSession {
    target: Box<str>,
    max_guesses: u32,
    difficulty: Difficulty,
    history: Vec<CluedRow>,
    status: GameStatus,
}

/// A read-only snapshot of a session's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState<'a> {
    /// Every locked-in row, oldest first.
    pub history: &'a [CluedRow],
    /// How many guesses may still be played.
    pub remaining_guesses: u32,
    /// Whether the session is still running, won, or lost.
    pub status: GameStatus,
}

impl GameSession {
    /// Starts a session for `target` with the given guess budget and
    /// difficulty.
    ///
    /// The target is lowercased and stays fixed for the session's lifetime.
    /// Fails with [`GameError::InvalidConfig`] if the target is empty or the
    /// budget is zero.
    pub fn new(
        target: &str,
        max_guesses: u32,
        difficulty: Difficulty,
    ) -> Result<GameSession, GameError> {
        if target.is_empty() || max_guesses == 0 {
            return Err(GameError::InvalidConfig);
        }
        Ok(GameSession {
            target: target.to_lowercase().into_boxed_str(),
            max_guesses,
            difficulty,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Plays one guess and returns the newly locked-in row.
    ///
    /// The guess is vetted in order: the session must still be running, the
    /// lowercased guess must match the target's length, `dictionary` must
    /// accept it, and the active difficulty must accept it given every prior
    /// row. A rejected guess leaves the session untouched. An accepted guess
    /// is scored and appended, and ends the session when it matches the
    /// target or exhausts the budget.
    pub fn submit_guess<D>(&mut self, guess: &str, dictionary: &D) -> Result<&CluedRow, GameError>
    where
        D: Dictionary + ?Sized,
    {
        if self.status.is_over() {
            return Err(GameError::SessionEnded);
        }
        let guess = guess.to_lowercase();
        let expected = self.word_length();
        let actual = guess.chars().count();
        if actual != expected {
            return Err(GameError::InvalidLength { expected, actual });
        }
        if !dictionary.is_valid_word(&guess) {
            return Err(GameError::NotInDictionary);
        }
        validate_guess(&guess, &self.history, self.difficulty)
            .map_err(GameError::DifficultyViolation)?;
        let row = CluedRow::score(&guess, &self.target)?;
        if row.is_winning() {
            self.status = GameStatus::Won;
        } else if self.history.len() as u32 + 1 >= self.max_guesses {
            self.status = GameStatus::Lost;
        }
        let row_slot = self.history.len();
        self.history.push(row);
        Ok(&self.history[row_slot])
    }

    /// A read-only snapshot of the session's progress.
    pub fn current_state(&self) -> SessionState<'_> {
        SessionState {
            history: &self.history,
            remaining_guesses: self.remaining_guesses(),
            status: self.status,
        }
    }

    /// Every locked-in row, oldest first.
    pub fn history(&self) -> &[CluedRow] {
        &self.history
    }

    /// Whether the session is still running, won, or lost.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// How many guesses may still be played, i.e. the unused rows.
    pub fn remaining_guesses(&self) -> u32 {
        self.max_guesses.saturating_sub(self.history.len() as u32)
    }

    /// The number of letters in the target, which every guess must match.
    pub fn word_length(&self) -> usize {
        self.target.chars().count()
    }

    /// The total guess budget the session started with.
    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    /// The difficulty every guess is validated at.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WordList;

    fn small_list() -> WordList {
        WordList::from_iterator(vec!["pelo", "celo", "palo", "polo", "ruin"]).unwrap()
    }

    #[test]
    fn remaining_guesses_counts_down_as_rows_lock_in() {
        let list = small_list();
        let mut session = GameSession::new("pelo", 3, Difficulty::Normal).unwrap();
        assert_eq!(session.remaining_guesses(), 3);

        session.submit_guess("ruin", &list).unwrap();

        assert_eq!(session.remaining_guesses(), 2);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn the_target_is_matched_case_insensitively() {
        let list = small_list();
        let mut session = GameSession::new("PELO", 6, Difficulty::Normal).unwrap();

        let row = session.submit_guess("Pelo", &list).unwrap();

        assert!(row.is_winning());
        assert_eq!(session.status(), GameStatus::Won);
    }
}
