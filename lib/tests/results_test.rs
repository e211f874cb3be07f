#[macro_use]
extern crate assert_matches;

use rs_wordl_engine::*;

#[test]
fn compute_clues_exact_match() -> Result<(), GameError> {
    let clues = compute_clues("pelo", "pelo")?;

    assert_eq!(clues, vec![LetterClue::Correct; 4]);
    Ok(())
}

#[test]
fn compute_clues_partial_match() -> Result<(), GameError> {
    let clues = compute_clues("celo", "pelo")?;

    assert_eq!(
        clues,
        vec![
            LetterClue::Absent,
            LetterClue::Correct,
            LetterClue::Correct,
            LetterClue::Correct
        ]
    );

    let clues = compute_clues("pasto", "pinta")?;

    assert_eq!(
        clues,
        vec![
            LetterClue::Correct,
            LetterClue::Elsewhere,
            LetterClue::Absent,
            LetterClue::Correct,
            LetterClue::Absent
        ]
    );
    Ok(())
}

#[test]
fn compute_clues_none_match() -> Result<(), GameError> {
    let clues = compute_clues("ruin", "pelo")?;

    assert_eq!(clues, vec![LetterClue::Absent; 4]);
    Ok(())
}

#[test]
fn compute_clues_duplicates_consume_target_counts() -> Result<(), GameError> {
    // Three 'a's in the target: two exact matches leave one occurrence for
    // the second 'a' of the guess, and the 'b' is claimed elsewhere.
    let clues = compute_clues("aaab", "abaa")?;

    assert_eq!(
        clues,
        vec![
            LetterClue::Correct,
            LetterClue::Elsewhere,
            LetterClue::Correct,
            LetterClue::Elsewhere
        ]
    );

    // Three 'b's in the guess against the target's two: one matches exactly,
    // one is elsewhere, and the excess repeat comes back absent.
    let clues = compute_clues("babb", "abba")?;

    assert_eq!(
        clues,
        vec![
            LetterClue::Elsewhere,
            LetterClue::Elsewhere,
            LetterClue::Correct,
            LetterClue::Absent
        ]
    );
    Ok(())
}

#[test]
fn compute_clues_exact_matches_consume_counts_first() -> Result<(), GameError> {
    // The 'a' correct at position 3 eats the target's only 'a', so the
    // leading 'a' cannot also be claimed elsewhere.
    let clues = compute_clues("anca", "duna")?;

    assert_eq!(
        clues,
        vec![
            LetterClue::Absent,
            LetterClue::Elsewhere,
            LetterClue::Absent,
            LetterClue::Correct
        ]
    );
    Ok(())
}

#[test]
fn compute_clues_normalizes_case() -> Result<(), GameError> {
    assert_eq!(compute_clues("CELO", "pelo")?, compute_clues("celo", "PELO")?);
    Ok(())
}

#[test]
fn compute_clues_is_deterministic() -> Result<(), GameError> {
    assert_eq!(compute_clues("aaab", "abaa")?, compute_clues("aaab", "abaa")?);
    Ok(())
}

#[test]
fn compute_clues_length_mismatch() {
    assert_matches!(
        compute_clues("pinta", "pelo"),
        Err(GameError::InvalidLength {
            expected: 4,
            actual: 5
        })
    );
}

#[test]
fn confirmed_clues_never_exceed_target_occurrences() -> Result<(), GameError> {
    // 'a' appears once in the target but three times in the guess; only one
    // non-absent clue may be awarded for it.
    let clues = compute_clues("araña", "pinta")?;

    let confirmed = clues
        .iter()
        .zip("araña".chars())
        .filter(|(clue, letter)| *letter == 'a' && **clue != LetterClue::Absent)
        .count();

    assert_eq!(confirmed, 1);
    Ok(())
}

#[test]
fn clued_row_locks_the_lowercased_guess() -> Result<(), GameError> {
    let row = CluedRow::score("CELO", "PELO")?;

    assert_eq!(row.guess(), "celo");
    assert_eq!(row.clues().len(), 4);
    assert!(!row.is_winning());

    let row = CluedRow::score("Pelo", "pelo")?;

    assert!(row.is_winning());
    Ok(())
}
