use std::collections::HashSet;

use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Analysis, Grammar, END_MARK};

#[derive(Debug, Serialize)]
struct NonTerminalOutput<'a> {
    name: &'a str,
    nullable: bool,
    first: Vec<&'a str>,
    follow: Vec<&'a str>,
}

impl NonTerminalOutput<'_> {
    fn to_plaintext(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.name,
            self.first.join(", "),
            self.follow.join(", ")
        )
    }

    fn to_latex(&self) -> String {
        fn f(a: &[&str]) -> String {
            a.iter()
                .map(|s| escape::tex(*s))
                .collect::<Vec<_>>()
                .join(r",\ ")
        }

        format!(
            "{} & {} & {} & {}",
            escape::tex(self.name),
            self.nullable,
            f(&self.first),
            f(&self.follow)
        )
    }
}

/// The analysis results in report order: `S'` first, then every declared
/// nonterminal by name.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    data: Vec<NonTerminalOutput<'a>>,
}

impl Report<'_> {
    /// Three lines per nonterminal: its name, its FIRST set and its FOLLOW
    /// set.
    pub fn to_plaintext(&self) -> String {
        self.data.iter().map(|s| s.to_plaintext()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .data
            .iter()
            .map(|e| e.to_latex())
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c|c}\n".to_string()
            + "Symbol & Nullable & First & Follow\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }

    /// Nonterminal names in report order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|e| e.name)
    }
}

/// Sorts the names of `set` ascending, moving `$$` to the end.
fn sorted_names<'a>(grammar: &'a Grammar, set: Option<&HashSet<usize>>) -> Vec<&'a str> {
    let mut names: Vec<&str> = set
        .into_iter()
        .flatten()
        .map(|idx| grammar.get_symbol_name(*idx))
        .filter(|name| *name != END_MARK)
        .collect();
    names.sort_unstable();
    if set.map_or(false, |s| s.contains(&grammar.end_mark())) {
        names.push(END_MARK);
    }
    names
}

impl Analysis {
    pub fn to_report<'a>(&self, grammar: &'a Grammar) -> Report<'a> {
        let augmented = grammar.augmented_start();
        let mut rest: Vec<_> = grammar
            .declared_non_terminal_iter()
            .filter(|nt| nt.index != augmented)
            .collect();
        rest.sort_by(|a, b| a.name.cmp(&b.name));

        let data = grammar
            .non_terminal(augmented)
            .into_iter()
            .chain(rest)
            .map(|nt| NonTerminalOutput {
                name: nt.name.as_str(),
                nullable: self.nullable.is_nullable(nt.index),
                first: sorted_names(grammar, self.first.get(nt.index)),
                follow: sorted_names(grammar, self.follow.get(nt.index)),
            })
            .collect();
        Report { data }
    }
}
