//! Build script to embed the default word lists
//!
//! Reads the puzzle word lists and generates Rust source with const arrays,
//! normalising each entry the same way the runtime loader does.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    // One answer per day, in puzzle order
    embed_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Daily answers, in puzzle order starting at the default start date",
    );

    // Every accepted guess, answers included
    embed_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "All accepted guesses, sorted",
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn embed_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut emit = |line: String| {
        writeln!(output, "{line}")
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
    };

    emit(format!("// Generated from {input_path}"));
    emit(String::new());
    emit(format!("/// {doc_comment}"));
    emit(format!("pub const {const_name}: &[&str] = &["));
    for word in &words {
        emit(format!("    \"{word}\","));
    }
    emit("];".to_string());
    emit(String::new());
    emit(format!("/// Number of words in {const_name}"));
    emit(format!("pub const {const_name}_COUNT: usize = {};", words.len()));
}
