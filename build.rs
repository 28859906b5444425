//! Build script to generate embedded word lists
//!
//! Reads per-length word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words_4.txt",
        &Path::new(&out_dir).join("words_4.rs"),
        "WORDS_4",
        "Accepted four-letter words",
    );

    generate_word_list(
        "data/words_5.txt",
        &Path::new(&out_dir).join("words_5.rs"),
        "WORDS_5",
        "Accepted five-letter words",
    );

    generate_word_list(
        "data/words_6.txt",
        &Path::new(&out_dir).join("words_6.rs"),
        "WORDS_6",
        "Accepted six-letter words",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words_4.txt");
    println!("cargo:rerun-if-changed=data/words_5.txt");
    println!("cargo:rerun-if-changed=data/words_6.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
