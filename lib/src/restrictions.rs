use crate::results::CluedRow;
use crate::results::LetterClue;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The rule set a candidate guess must satisfy given the session's history.
///
/// Each tier includes every rule of the tier before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Any dictionary word of the right length may be played.
    Normal,
    /// Letters clued correct must stay in place, and letters clued present
    /// must be used at least as often as they were confirmed.
    Hard,
    /// All of [`Difficulty::Hard`], plus: an elsewhere letter may not be
    /// retried at a position where it already earned that clue, and a letter
    /// with a revealed occurrence cap may not exceed it.
    UltraHard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::UltraHard => "ultra-hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Difficulty, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "ultra-hard" | "ultrahard" | "ultra_hard" => Ok(Difficulty::UltraHard),
            unknown => Err(format!(
                "unknown difficulty: {} (expected normal, hard, or ultra-hard)",
                unknown
            )),
        }
    }
}

/// A difficulty rule broken by a candidate guess.
///
/// Positions are zero-based; the rendered messages use ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// A position locked in by a correct clue holds a different letter.
    #[error("{} letter must be {}", ordinal(.position), pretty(.letter))]
    KeepCorrect { letter: char, position: usize },
    /// A letter with confirmed occurrences is used too few times.
    #[error("guess must contain {}", pretty(.letter))]
    ReuseElsewhere { letter: char },
    /// An elsewhere letter was retried at a position it already earned that
    /// clue at.
    #[error("{} letter can't be {}", ordinal(.position), pretty(.letter))]
    MoveElsewhere { letter: char, position: usize },
    /// A letter appears more often than the target can hold.
    #[error("{}", overuse(.letter, .limit))]
    DropAbsent { letter: char, limit: usize },
}

fn ordinal(position: &usize) -> String {
    let n = position + 1;
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", n, suffix)
}

fn pretty(letter: &char) -> String {
    letter.to_uppercase().collect()
}

fn overuse(letter: &char, limit: &usize) -> String {
    let letter = pretty(letter);
    match *limit {
        0 => format!("guess can't contain {}", letter),
        1 => format!("guess can't contain {} more than 1 time", letter),
        n => format!("guess can't contain {} more than {} times", letter, n),
    }
}

/// Everything the locked-in rows establish about one letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LetterKnowledge {
    /// The most non-absent clues this letter earned in any single row.
    min_count: usize,
    /// The letter's exact occurrence count in the target, known once a row
    /// has both confirmed and absent clues for it.
    exact_count: Option<usize>,
    /// Positions where this letter was clued [`LetterClue::Elsewhere`].
    misplaced_at: Vec<usize>,
}

/// Letter constraints consolidated from every locked-in row of a session.
///
/// The summary holds, per position, the letter a correct clue locked it to,
/// and, per letter, the occurrence floor, the occurrence cap (if revealed),
/// and the positions ruled out by elsewhere clues. [`Difficulty::Hard`]
/// consults the locks and floors; [`Difficulty::UltraHard`] also consults the
/// ruled-out positions and caps.
///
/// Rows are assumed to come from one session, i.e. scored against a single
/// target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRestrictions {
    /// The letter each position is locked to, if a correct clue fixed it.
    fixed: Vec<Option<char>>,
    /// Per-letter knowledge, keyed alphabetically so violations are reported
    /// in a stable order.
    letters: BTreeMap<char, LetterKnowledge>,
}

impl GuessRestrictions {
    /// Consolidates the constraints imposed by every row in `history`.
    pub fn from_history(history: &[CluedRow]) -> GuessRestrictions {
        let mut restrictions = GuessRestrictions::default();
        for row in history {
            restrictions.note_row(row);
        }
        restrictions
    }

    /// Adds the constraints arising from one more locked-in row.
    pub fn note_row(&mut self, row: &CluedRow) {
        let letters: Vec<char> = row.guess().chars().collect();
        if self.fixed.len() < letters.len() {
            self.fixed.resize(letters.len(), None);
        }
        for (position, (letter, clue)) in letters.iter().zip(row.clues()).enumerate() {
            match clue {
                LetterClue::Correct => self.fixed[position] = Some(*letter),
                LetterClue::Elsewhere => {
                    let knowledge = self.letters.entry(*letter).or_default();
                    if !knowledge.misplaced_at.contains(&position) {
                        knowledge.misplaced_at.push(position);
                    }
                }
                LetterClue::Absent => {}
            }
        }
        // A single row's clues for one letter reveal its occurrence counts:
        // the non-absent clues set a floor, and any absent clue among them
        // pins the count exactly.
        for (index, letter) in letters.iter().enumerate() {
            if letters[..index].contains(letter) {
                continue;
            }
            let mut confirmed = 0;
            let mut capped = false;
            for (other, clue) in letters.iter().zip(row.clues()) {
                if other != letter {
                    continue;
                }
                if *clue == LetterClue::Absent {
                    capped = true;
                } else {
                    confirmed += 1;
                }
            }
            let knowledge = self.letters.entry(*letter).or_default();
            if confirmed > knowledge.min_count {
                knowledge.min_count = confirmed;
            }
            if capped {
                knowledge.exact_count = Some(confirmed);
            }
        }
    }

    /// Checks `candidate` against these restrictions at the given tier.
    ///
    /// On rejection, the first broken rule is reported: locked positions left
    /// to right first, then per-letter rules in alphabetical order.
    pub fn check(&self, candidate: &str, difficulty: Difficulty) -> Result<(), Violation> {
        if difficulty == Difficulty::Normal {
            return Ok(());
        }
        let letters: Vec<char> = candidate.to_lowercase().chars().collect();
        self.check_hard(&letters)?;
        if difficulty == Difficulty::UltraHard {
            self.check_ultra_hard(&letters)?;
        }
        Ok(())
    }

    fn check_hard(&self, letters: &[char]) -> Result<(), Violation> {
        for (position, locked) in self.fixed.iter().enumerate() {
            if let Some(letter) = locked {
                if letters.get(position) != Some(letter) {
                    return Err(Violation::KeepCorrect {
                        letter: *letter,
                        position,
                    });
                }
            }
        }
        for (letter, knowledge) in &self.letters {
            if knowledge.min_count == 0 {
                continue;
            }
            let used = letters.iter().filter(|other| *other == letter).count();
            if used < knowledge.min_count {
                return Err(Violation::ReuseElsewhere { letter: *letter });
            }
        }
        Ok(())
    }

    fn check_ultra_hard(&self, letters: &[char]) -> Result<(), Violation> {
        for (letter, knowledge) in &self.letters {
            for position in &knowledge.misplaced_at {
                if letters.get(*position) == Some(letter) {
                    return Err(Violation::MoveElsewhere {
                        letter: *letter,
                        position: *position,
                    });
                }
            }
            if let Some(limit) = knowledge.exact_count {
                let used = letters.iter().filter(|other| *other == letter).count();
                if used > limit {
                    return Err(Violation::DropAbsent {
                        letter: *letter,
                        limit,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Decides whether `candidate` may be played given every prior row, at the
/// given difficulty.
///
/// This is the whole-history entry point: it consolidates `history` into a
/// [`GuessRestrictions`] and checks the candidate against it. Callers that
/// validate many candidates against one history should build the summary once
/// and call [`GuessRestrictions::check`] directly.
pub fn validate_guess(
    candidate: &str,
    history: &[CluedRow],
    difficulty: Difficulty,
) -> Result<(), Violation> {
    if difficulty == Difficulty::Normal {
        return Ok(());
    }
    GuessRestrictions::from_history(history).check(candidate, difficulty)
}


#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use test::Bencher;

    #[bench]
    fn bench_validate_guess_ultra_hard_long_history(b: &mut Bencher) {
        let history: Vec<CluedRow> = ["ruina", "salta", "pasta", "plata", "palma"]
            .iter()
            .map(|guess| CluedRow::score(guess, "palta").unwrap())
            .collect();

        b.iter(|| validate_guess("palta", &history, Difficulty::UltraHard));
    }
}
