//! Interactive play loop
//!
//! Text-based game over any `BufRead`, so tests can drive it with a `Cursor`.

use crate::output::{render_board, share_summary, status_banner};
use crate::session::{Countdown, SessionConfig, SessionError, StateMachine, Status};
use crate::wordlists::WordSource;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Run an interactive game session
///
/// Creates a locally-evaluated session from `config`, then reads guesses from
/// `reader` until the session ends or the player quits. Timed sessions run a
/// countdown that forces a timeout in the background; the loop notices the
/// terminal status on its next pass.
///
/// # Errors
///
/// Returns an error for I/O failures or unrecoverable session errors.
/// Rejected guesses (wrong length, unknown word) are reported to the player
/// and the loop continues.
pub fn run_play<R: BufRead>(
    words: &Arc<WordSource>,
    config: &SessionConfig,
    mut reader: R,
) -> Result<(), String> {
    let machine = StateMachine::local(words, config).map_err(|e| e.to_string())?;
    let machine = Arc::new(Mutex::new(machine));

    let timer = config.time_limit.map(|limit| {
        let shared = Arc::clone(&machine);
        Countdown::start_default(limit, move || {
            let mut machine = shared.lock().unwrap_or_else(PoisonError::into_inner);
            machine.force_timeout();
        })
    });

    print_intro(config);

    let mut player_quit = false;
    loop {
        {
            let machine = machine.lock().unwrap_or_else(PoisonError::into_inner);
            let session = machine.session();
            if session.status().is_terminal() {
                break;
            }

            println!("\n{}", render_board(session));
            if let Some(timer) = &timer {
                println!("  ⏱  {}s left", timer.remaining().as_secs());
            }
        }

        let Some(line) = read_line(&mut reader)? else {
            player_quit = true;
            break;
        };
        let input = line.trim().to_string();

        match input.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                player_quit = true;
                break;
            }
            guess => {
                let mut machine = machine.lock().unwrap_or_else(PoisonError::into_inner);
                match machine.submit_guess(guess) {
                    Ok(outcome) => {
                        // Each accepted guess rewinds the clock
                        if outcome.status == Status::Playing {
                            if let Some(timer) = &timer {
                                timer.reset();
                            }
                        }
                    }
                    Err(SessionError::InvalidWord(word)) => {
                        println!("❌ {word} is not a valid word, try another");
                    }
                    Err(SessionError::WrongLength { expected, actual }) => {
                        println!("❌ Guess must be {expected} letters, got {actual}");
                    }
                    Err(SessionError::NotPlaying(_)) => {
                        // Timer beat us to it; next pass ends the loop
                    }
                    Err(err) => return Err(err.to_string()),
                }
            }
        }
    }

    let final_view = {
        let machine = machine.lock().unwrap_or_else(PoisonError::into_inner);
        machine.session().clone()
    };

    // Join the timer thread before tearing the session down
    drop(timer);

    if player_quit && !final_view.status().is_terminal() {
        if let Ok(mutex) = Arc::try_unwrap(machine) {
            let machine = mutex.into_inner().unwrap_or_else(PoisonError::into_inner);
            machine.abandon();
        }
        println!("\n👋 Thanks for playing!\n");
        return Ok(());
    }

    println!("\n{}", render_board(&final_view));
    println!("{}", status_banner(&final_view));
    println!("\n{}", share_summary(&final_view));
    Ok(())
}

fn print_intro(config: &SessionConfig) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle - Play Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the hidden {}-letter word in {} tries.",
        config.word_length, config.max_tries
    );
    if let Some(limit) = config.time_limit {
        println!("Timed game: {}s on the clock.", limit.as_secs());
    }
    println!("Type a word and press enter. 'quit' to give up.\n");
}

/// Read one line, returning None on EOF
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, String> {
    print!("Guess: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}
