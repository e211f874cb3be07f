#[macro_use]
extern crate assert_matches;

use rs_wordl_engine::*;

use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|word| Arc::from(*word))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn word_list_from_reader_keeps_only_the_requested_length() -> Result<(), GameError> {
    let cursor = Cursor::new(String::from("\n\npelo\n pinta\ncelo\n"));

    let list = WordList::from_reader(cursor, 4)?;

    assert_eq!(list.len(), 2);
    assert_arc_eq!(list.words(), &["pelo", "celo"]);
    assert_eq!(list.word_length(), 4);
    Ok(())
}

#[test]
fn word_list_from_reader_trims_and_lowercases() -> Result<(), GameError> {
    let cursor = Cursor::new(String::from(" PELO \nCelo\n"));

    let list = WordList::from_reader(cursor, 4)?;

    assert_arc_eq!(list.words(), &["pelo", "celo"]);
    Ok(())
}

#[test]
fn word_list_from_reader_with_no_qualifying_line_fails() {
    let cursor = Cursor::new(String::from("pelo\ncelo\n"));

    assert_matches!(
        WordList::from_reader(cursor, 7),
        Err(GameError::EmptyWordList)
    );
}

#[test]
fn word_list_from_iterator_succeeds() -> Result<(), GameError> {
    let list = WordList::from_iterator(vec!["", "pelo", "Celo "])?;

    assert_eq!(list.len(), 2);
    assert_arc_eq!(list.words(), &["pelo", "celo"]);
    assert_eq!(list.word_length(), 4);
    Ok(())
}

#[test]
fn word_list_from_string_iterator_succeeds() -> Result<(), GameError> {
    let list = WordList::from_iterator(vec!["pelo".to_string(), "celo".to_string()])?;

    assert_eq!(list.len(), 2);
    Ok(())
}

#[test]
fn word_list_from_iterator_mismatched_word_length_fails() {
    assert_matches!(
        WordList::from_iterator(vec!["pelo", "pinta"]),
        Err(GameError::MixedWordLength)
    );
}

#[test]
fn word_list_from_iterator_with_nothing_usable_fails() {
    assert_matches!(
        WordList::from_iterator(vec!["", "  "]),
        Err(GameError::EmptyWordList)
    );
}

#[test]
fn word_list_membership_is_the_dictionary_check() -> Result<(), GameError> {
    let list = WordList::from_iterator(vec!["pelo", "celo"])?;

    assert!(list.is_valid_word("pelo"));
    assert!(!list.is_valid_word("polo"));
    Ok(())
}

#[test]
fn word_at_maps_seed_indices_to_stable_words() -> Result<(), GameError> {
    let list = WordList::from_iterator(vec!["pelo", "celo", "palo"])?;

    assert_eq!(list.word_at(0), Some("pelo"));
    assert_eq!(list.word_at(2), Some("palo"));
    assert_eq!(list.word_at(3), None);
    Ok(())
}

#[test]
fn random_word_always_comes_from_the_list() -> Result<(), GameError> {
    let list = WordList::from_iterator(vec!["pelo", "celo", "palo"])?;

    for _ in 0..20 {
        assert!(list.is_valid_word(list.random_word()));
    }
    Ok(())
}
