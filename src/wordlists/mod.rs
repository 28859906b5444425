//! Word lists and the word source
//!
//! Provides embedded per-length word lists compiled into the binary, plus the
//! `WordSource` used for target selection and guess validation.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS_4, WORDS_4_COUNT, WORDS_5, WORDS_5_COUNT, WORDS_6, WORDS_6_COUNT};
pub use source::{NoListForLength, WordSource};
