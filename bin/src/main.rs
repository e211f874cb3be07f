use clap::{Parser, Subcommand};
use rs_wordl_engine::*;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::Write;

/// Simple program to play Wordle-style games in the terminal, with escalating
/// difficulty tiers.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// The length of the words to play with; other lines in the file are skipped.
    #[clap(short = 'l', long, default_value_t = 5)]
    word_length: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game against a hidden word from the word list.
    Play {
        /// The difficulty tier to enforce: normal, hard, or ultra-hard.
        #[clap(short, long, default_value_t = Difficulty::Normal)]
        difficulty: Difficulty,

        /// The maximum number of guesses before the game is lost.
        #[clap(short, long, default_value_t = 6)]
        max_guesses: u32,

        /// Play against this specific word instead of a random one.
        #[clap(long)]
        word: Option<String>,

        /// Derive the target from a numeric seed, e.g. a date, instead of at random.
        #[clap(long, conflicts_with = "word")]
        seed: Option<u64>,
    },
    /// Score a single guess against a known target and print the clue line.
    Score { target: String, guess: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let list = WordList::from_reader(words_reader, args.word_length)?;
    println!("There are {} playable words.", list.len());

    match args.command {
        Command::Play {
            difficulty,
            max_guesses,
            word,
            seed,
        } => play_interactive_game(&list, difficulty, max_guesses, word, seed)?,
        Command::Score { target, guess } => print_clue_line(&target, &guess)?,
    }

    Ok(())
}

fn play_interactive_game(
    list: &WordList,
    difficulty: Difficulty,
    max_guesses: u32,
    word: Option<String>,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let target = choose_target(list, word, seed)?;
    let mut session = GameSession::new(&target, max_guesses, difficulty)?;

    println!(
        "I've picked a {}-letter word. You have {} guesses to find it, playing {}.",
        session.word_length(),
        session.max_guesses(),
        session.difficulty(),
    );
    println!(
        "After each guess I'll mark every letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n"
    );

    while session.status() == GameStatus::InProgress {
        print!("Guess {}: ", session.history().len() + 1);
        io::stdout().flush()?;

        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            println!("\nGiving up already? The word was \"{}\".", target);
            return Ok(());
        }
        let guess = buffer.trim();
        if guess.is_empty() {
            continue;
        }

        match session.submit_guess(guess, list) {
            Ok(row) => {
                println!("  {}", row.guess());
                println!("  {}", clue_glyphs(row.clues()));
            }
            Err(error) => println!("{}. Try again.", error),
        }
    }

    match session.status() {
        GameStatus::Won => {
            let count = session.history().len();
            if count == 1 {
                println!("You got it on the first try!");
            } else {
                println!("You got it in {} guesses!", count);
            }
        }
        GameStatus::Lost => println!("Out of guesses! The word was \"{}\".", target),
        GameStatus::InProgress => {}
    }

    Ok(())
}

fn choose_target(
    list: &WordList,
    word: Option<String>,
    seed: Option<u64>,
) -> Result<String, Box<dyn Error>> {
    if let Some(word) = word {
        let word = word.to_lowercase();
        if word.chars().count() != list.word_length() {
            return Err(format!(
                "the chosen word must be {} letters long",
                list.word_length()
            )
            .into());
        }
        return Ok(word);
    }
    if let Some(seed) = seed {
        let index = (seed % list.len() as u64) as usize;
        return list
            .word_at(index)
            .map(str::to_string)
            .ok_or_else(|| "the seed mapped outside the word list".into());
    }
    Ok(list.random_word().to_string())
}

fn print_clue_line(target: &str, guess: &str) -> Result<(), Box<dyn Error>> {
    let clues = compute_clues(guess, target)?;

    println!("{}", guess.to_lowercase());
    println!("{}", clue_glyphs(&clues));
    Ok(())
}

fn clue_glyphs(clues: &[LetterClue]) -> String {
    clues
        .iter()
        .map(|clue| match clue {
            LetterClue::Correct => 'g',
            LetterClue::Elsewhere => 'y',
            LetterClue::Absent => '.',
        })
        .collect()
}
