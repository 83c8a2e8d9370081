//! Nullability, FIRST and FOLLOW sets for predictive parser construction.
//!
//! Grammars are written one production per line as `HEAD->BODY`, where
//! every symbol is a single character. Uppercase characters are
//! nonterminals and everything else is a terminal.

extern crate wasm_bindgen;

use std::{fs, path::Path};

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{Analysis, Grammar, GrammarError, Report};

/// Loads `grammar`, runs all three analyses and renders the plain text
/// report.
pub fn compute_report(grammar: &str) -> Result<String, GrammarError> {
    let g = Grammar::parse(grammar)?;
    Ok(Analysis::run(&g).to_report(&g).to_plaintext())
}

/// Reads the grammar at `input` and overwrites `output` with its report.
pub fn run_files(input: &Path, output: &Path) -> Result<(), GrammarError> {
    let text = fs::read_to_string(input).map_err(|source| GrammarError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let report = compute_report(&text)?;
    fs::write(output, report).map_err(|source| GrammarError::Io {
        path: output.to_path_buf(),
        source,
    })
}

#[wasm_bindgen]
pub fn nullable_first_follow_to_json(grammar: &str) -> String {
    fn error(e: impl std::fmt::Display) -> String {
        serde_json::json!({ "error": e.to_string() }).to_string()
    }

    match crate::Grammar::parse(grammar) {
        Ok(g) => Analysis::run(&g)
            .to_report(&g)
            .to_json()
            .unwrap_or_else(error),
        Err(e) => error(e),
    }
}
