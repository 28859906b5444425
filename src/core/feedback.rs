//! Guess evaluation: per-letter feedback against a hidden target
//!
//! Implements Wordle's exact feedback rules, including proper handling of
//! duplicate letters: each physical letter occurrence in the target can credit
//! at most one guess letter.

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single letter of a guess
///
/// Serde names follow the remote authority's wire protocol: `correct`,
/// `incorrect-position`, `incorrect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterScore {
    /// Right letter, right position (green)
    #[serde(rename = "correct")]
    Correct,
    /// Right letter, wrong position (yellow)
    #[serde(rename = "incorrect-position")]
    Present,
    /// Letter not usable at this position given other matches (gray)
    #[serde(rename = "incorrect")]
    Absent,
}

impl LetterScore {
    /// Check whether this letter landed exactly
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Error type for malformed evaluator arguments
///
/// Callers are expected to validate lengths before evaluating; this surfaces
/// as a hard failure, not a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => {
                write!(f, "Guess has {guess} letters but target has {target}")
            }
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Evaluate a guess against a target word
///
/// Returns one `LetterScore` per guess letter, in guess order. Pure and
/// deterministic; identical inputs always yield identical output.
///
/// # Algorithm
/// 1. First pass: mark exact position matches (`Correct`), consuming the
///    matched target index.
/// 2. Second pass: for each unscored guess letter, scan unconsumed target
///    indices in ascending order; the first match scores `Present` and
///    consumes that target index.
/// 3. Remaining letters are `Absent`.
///
/// The ascending scan makes duplicate handling reproducible letter-for-letter
/// and guarantees a letter appearing k times in the target and m times in the
/// guess earns exactly min(k, m) non-`Absent` scores.
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterScore, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
/// let scores = evaluate(&guess, &target).unwrap();
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(scores[2], LetterScore::Correct);
/// assert_eq!(scores[4], LetterScore::Correct);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Vec<LetterScore>, EvaluateError> {
    if guess.len() != target.len() {
        return Err(EvaluateError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let g = guess.letters();
    let t = target.letters();
    let n = g.len();

    let mut scores: Vec<Option<LetterScore>> = vec![None; n];
    let mut taken = vec![false; n]; // consumed target indices

    // First pass: exact position matches
    for i in 0..n {
        if g[i] == t[i] {
            scores[i] = Some(LetterScore::Correct);
            taken[i] = true;
        }
    }

    // Second pass: right letter, wrong position. First unconsumed target
    // index wins, scanning ascending.
    for i in 0..n {
        if scores[i].is_some() {
            continue;
        }
        for j in 0..n {
            if taken[j] || g[i] != t[j] {
                continue;
            }
            scores[i] = Some(LetterScore::Present);
            taken[j] = true;
            break;
        }
    }

    // Third pass: everything left over
    Ok(scores
        .into_iter()
        .map(|s| s.unwrap_or(LetterScore::Absent))
        .collect())
}

/// Check whether a score sequence is a win (all `Correct`)
#[must_use]
pub fn is_winning(scores: &[LetterScore]) -> bool {
    !scores.is_empty() && scores.iter().all(|s| s.is_correct())
}

/// Convert a score sequence to an emoji string for share summaries
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterScore, to_emoji};
///
/// let scores = [LetterScore::Correct, LetterScore::Present, LetterScore::Absent];
/// assert_eq!(to_emoji(&scores), "🟩🟨⬜");
/// ```
#[must_use]
pub fn to_emoji(scores: &[LetterScore]) -> String {
    scores
        .iter()
        .map(|s| match s {
            LetterScore::Correct => '🟩',
            LetterScore::Present => '🟨',
            LetterScore::Absent => '⬜',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn evaluate_all_correct() {
        let scores = evaluate(&word("crane"), &word("crane")).unwrap();
        assert_eq!(scores, vec![Correct; 5]);
        assert!(is_winning(&scores));
    }

    #[test]
    fn evaluate_all_absent_when_disjoint() {
        let scores = evaluate(&word("abcde"), &word("fghij")).unwrap();
        assert_eq!(scores, vec![Absent; 5]);
        assert!(!is_winning(&scores));
    }

    #[test]
    fn evaluate_speed_vs_erase() {
        // Target E,R,A,S,E; guess S,P,E,E,D.
        // No position matches. S matches target[3]; P nothing; first E takes
        // target[0]; second E takes target[4]; D nothing.
        let scores = evaluate(&word("speed"), &word("erase")).unwrap();
        assert_eq!(scores, vec![Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn evaluate_robot_vs_floor() {
        // R(present) O(present) B(absent) O(correct) T(absent)
        let scores = evaluate(&word("robot"), &word("floor")).unwrap();
        assert_eq!(scores, vec![Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn evaluate_exact_match_consumes_before_present() {
        // Target ABBEY, guess BABES: second B is correct in place and must not
        // be double-credited to the first B.
        let scores = evaluate(&word("babes"), &word("abbey")).unwrap();
        assert_eq!(scores, vec![Present, Present, Correct, Correct, Absent]);
    }

    #[test]
    fn evaluate_duplicate_guess_letters_not_overcounted() {
        // Target has one E and it is consumed by the exact match at the end;
        // the two leading E's earn nothing.
        let scores = evaluate(&word("eerie"), &word("crane")).unwrap();
        assert_eq!(scores, vec![Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn evaluate_four_and_six_letter_words() {
        let scores = evaluate(&word("gray"), &word("yarn")).unwrap();
        assert_eq!(scores, vec![Absent, Present, Present, Present]);

        let scores = evaluate(&word("bridge"), &word("bright")).unwrap();
        assert_eq!(scores, vec![Correct, Correct, Correct, Absent, Present, Absent]);
    }

    #[test]
    fn evaluate_length_mismatch() {
        let err = evaluate(&word("gray"), &word("crane")).unwrap_err();
        assert_eq!(err, EvaluateError::LengthMismatch { guess: 4, target: 5 });
    }

    #[test]
    fn evaluate_deterministic() {
        let a = evaluate(&word("speed"), &word("erase")).unwrap();
        let b = evaluate(&word("speed"), &word("erase")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn evaluate_letter_count_conservation() {
        // For each letter, Correct + Present credits equal
        // min(count in target, count in guess).
        let cases = [
            ("speed", "erase"),
            ("eerie", "crane"),
            ("babes", "abbey"),
            ("llama", "aaaaa"),
            ("aaaaa", "llama"),
            ("robot", "floor"),
        ];

        for (g, t) in cases {
            let guess = word(g);
            let target = word(t);
            let scores = evaluate(&guess, &target).unwrap();

            for letter in b'A'..=b'Z' {
                let in_guess = guess.letters().iter().filter(|&&c| c == letter).count();
                let in_target = target.letters().iter().filter(|&&c| c == letter).count();
                let credited = guess
                    .letters()
                    .iter()
                    .zip(&scores)
                    .filter(|&(&c, s)| c == letter && *s != Absent)
                    .count();

                assert_eq!(
                    credited,
                    in_guess.min(in_target),
                    "letter {} in {g} vs {t}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn is_winning_rejects_partial() {
        assert!(!is_winning(&[Correct, Correct, Present]));
        assert!(!is_winning(&[]));
        assert!(is_winning(&[Correct]));
    }

    #[test]
    fn to_emoji_renders_all_variants() {
        assert_eq!(to_emoji(&[Correct, Present, Absent]), "🟩🟨⬜");
        assert_eq!(to_emoji(&[Correct; 4]), "🟩🟩🟩🟩");
    }

    #[test]
    fn letter_score_wire_names() {
        assert_eq!(serde_json::to_string(&Correct).unwrap(), "\"correct\"");
        assert_eq!(
            serde_json::to_string(&Present).unwrap(),
            "\"incorrect-position\""
        );
        assert_eq!(serde_json::to_string(&Absent).unwrap(), "\"incorrect\"");
    }
}
