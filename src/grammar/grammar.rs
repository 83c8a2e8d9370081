use std::collections::HashMap;

use super::{AUGMENTED_START, END_MARK};

#[derive(Debug, Clone)]
pub struct NonTerminal {
    pub index: usize,
    pub name: String,
    pub productions: Vec<Vec<usize>>,
}

impl NonTerminal {
    pub fn new(index: usize, name: String) -> Self {
        Self {
            index,
            name,
            productions: Vec::new(),
        }
    }

    /// A nonterminal is declared once it heads at least one line of the
    /// grammar. Symbols that only show up in bodies stay undeclared.
    pub fn is_declared(&self) -> bool {
        !self.productions.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Symbol {
    NonTerminal(NonTerminal),
    Terminal(String),
}

impl Symbol {
    pub fn non_terminal(&self) -> Option<&NonTerminal> {
        match self {
            Symbol::NonTerminal(e) => Some(e),
            Symbol::Terminal(_) => None,
        }
    }

    fn mut_non_terminal(&mut self) -> Option<&mut NonTerminal> {
        match self {
            Symbol::NonTerminal(e) => Some(e),
            Symbol::Terminal(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

/// An augmented grammar. Only the loader builds one; afterwards it is
/// read-only.
#[derive(Debug, Clone)]
pub struct Grammar {
    symbols: Vec<Symbol>,
    symbol_table: HashMap<String, usize>,
    start_symbol: usize,
    augmented_start: usize,
    end_mark: usize,
}

impl Grammar {
    /// Creates a grammar holding only the sentinels `S'` and `$$` together
    /// with the (still undeclared) original start nonterminal.
    pub(super) fn new(start: char) -> Self {
        let mut g = Self {
            symbols: Vec::new(),
            symbol_table: HashMap::new(),
            start_symbol: 0,
            augmented_start: 0,
            end_mark: 0,
        };

        g.augmented_start = g.add_non_terminal(AUGMENTED_START);
        g.end_mark = g.add_terminal(END_MARK.to_string());
        g.start_symbol = g.add_non_terminal(&start.to_string());

        g
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols, sentinels included.
    pub(super) fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The original start nonterminal, `S` unless given otherwise.
    pub fn start_symbol(&self) -> usize {
        self.start_symbol
    }

    /// The synthesized `S'`.
    pub fn augmented_start(&self) -> usize {
        self.augmented_start
    }

    pub fn end_mark(&self) -> usize {
        self.end_mark
    }

    pub fn terminal_iter(&self) -> impl Iterator<Item = &String> {
        self.symbols.iter().filter_map(|s| {
            if let Symbol::Terminal(name) = s {
                Some(name)
            } else {
                None
            }
        })
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = &NonTerminal> {
        self.symbols.iter().filter_map(|s| s.non_terminal())
    }

    pub fn declared_non_terminal_iter(&self) -> impl Iterator<Item = &NonTerminal> {
        self.non_terminal_iter().filter(|nt| nt.is_declared())
    }

    /// Nonterminals used in some body but never given a production.
    pub fn undefined_symbols(&self) -> impl Iterator<Item = &NonTerminal> {
        self.non_terminal_iter().filter(|nt| !nt.is_declared())
    }

    pub fn non_terminal(&self, index: usize) -> Option<&NonTerminal> {
        self.symbols.get(index).and_then(|s| s.non_terminal())
    }

    pub fn is_terminal(&self, index: usize) -> bool {
        self.symbols[index].is_terminal()
    }

    pub fn get_symbol_index(&self, name: &str) -> Option<usize> {
        self.symbol_table.get(name).cloned()
    }

    pub fn get_symbol_name(&self, index: usize) -> &str {
        match &self.symbols[index] {
            Symbol::NonTerminal(e) => e.name.as_str(),
            Symbol::Terminal(e) => e.as_str(),
        }
    }

    pub(super) fn add_non_terminal(&mut self, name: &str) -> usize {
        let idx = self.symbols.len();
        self.symbols
            .push(Symbol::NonTerminal(NonTerminal::new(idx, name.to_string())));
        self.symbol_table.insert(name.to_string(), idx);
        idx
    }

    pub(super) fn add_terminal(&mut self, name: String) -> usize {
        let idx = self.symbols.len();
        self.symbols.push(Symbol::Terminal(name.clone()));
        self.symbol_table.insert(name, idx);
        idx
    }

    /// Looks up `name`, registering it when it is new.
    pub(super) fn intern(&mut self, name: &str, terminal: bool) -> usize {
        match self.get_symbol_index(name) {
            Some(idx) => idx,
            None if terminal => self.add_terminal(name.to_string()),
            None => self.add_non_terminal(name),
        }
    }

    pub(super) fn add_production(&mut self, left: usize, right: Vec<usize>) {
        if let Some(nt) = self.symbols[left].mut_non_terminal() {
            nt.productions.push(right);
        }
    }
}
