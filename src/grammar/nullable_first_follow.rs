//! Nullability, FIRST and FOLLOW sets.
//!
//! Each phase is a least fixed point over the grammar and returns its own
//! value; later phases only read the results of earlier ones.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use super::Grammar;

/// Which nonterminals derive the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nullable {
    nullable: Vec<bool>,
}

impl Nullable {
    pub fn compute(grammar: &Grammar) -> Self {
        let mut nullable = vec![false; grammar.len()];

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for nt in grammar.non_terminal_iter() {
                if nullable[nt.index] {
                    continue;
                }
                let derives_empty = nt.productions.iter().any(|production| {
                    production
                        .iter()
                        .all(|s| !grammar.is_terminal(*s) && nullable[*s])
                });
                if derives_empty {
                    trace!("pass {}: {} is nullable", passes, nt.name);
                    nullable[nt.index] = true;
                    changed = true;
                }
            }
        }

        debug!(
            "nullability settled after {} passes, {} nullable",
            passes,
            nullable.iter().filter(|n| **n).count()
        );
        Self { nullable }
    }

    /// Always false for terminals.
    pub fn is_nullable(&self, symbol: usize) -> bool {
        self.nullable.get(symbol).copied().unwrap_or(false)
    }

    /// True for the empty sequence.
    pub fn is_sequence_nullable(&self, symbols: &[usize]) -> bool {
        symbols.iter().all(|s| self.is_nullable(*s))
    }
}

/// Per-nonterminal sets of terminal indices.
type PerSymbolSets = HashMap<usize, HashSet<usize>>;

fn empty_sets(grammar: &Grammar) -> PerSymbolSets {
    grammar
        .non_terminal_iter()
        .map(|nt| (nt.index, HashSet::new()))
        .collect()
}

/// Unions `new` into the set of `symbol`, reporting whether it grew.
fn extend_set(map: &mut PerSymbolSets, symbol: usize, new: HashSet<usize>) -> bool {
    let set = map.entry(symbol).or_default();
    let before = set.len();
    set.extend(new);
    set.len() != before
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstSets {
    map: PerSymbolSets,
}

impl FirstSets {
    pub fn compute(grammar: &Grammar, nullable: &Nullable) -> Self {
        let mut this = FirstSets {
            map: empty_sets(grammar),
        };

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for nt in grammar.non_terminal_iter() {
                let first = nt
                    .productions
                    .iter()
                    .fold(HashSet::new(), |mut first, production| {
                        first.extend(this.first_of_sequence(grammar, nullable, production));
                        first
                    });
                if extend_set(&mut this.map, nt.index, first) {
                    trace!("pass {}: FIRST({}) grew", passes, nt.name);
                    changed = true;
                }
            }
        }

        // `$$` can only reach FIRST(S') through a nullable start symbol.
        let end_mark = grammar.end_mark();
        let augmented = this.map.entry(grammar.augmented_start()).or_default();
        if nullable.is_nullable(grammar.start_symbol()) {
            augmented.insert(end_mark);
        } else {
            augmented.remove(&end_mark);
        }

        debug!("FIRST sets settled after {} passes", passes);
        this
    }

    /// FIRST of a nonterminal; `None` for terminals.
    pub fn get(&self, symbol: usize) -> Option<&HashSet<usize>> {
        self.map.get(&symbol)
    }

    /// Scans `symbols` left to right, collecting FIRST contributions until a
    /// terminal or a non-nullable nonterminal is reached.
    pub fn first_of_sequence(
        &self,
        grammar: &Grammar,
        nullable: &Nullable,
        symbols: &[usize],
    ) -> HashSet<usize> {
        let mut first = HashSet::new();
        for &symbol in symbols {
            if grammar.is_terminal(symbol) {
                first.insert(symbol);
                break;
            }
            if let Some(set) = self.get(symbol) {
                first.extend(set.iter().cloned());
            }
            if !nullable.is_nullable(symbol) {
                break;
            }
        }
        first
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowSets {
    map: PerSymbolSets,
}

impl FollowSets {
    /// No set is seeded: `$$` enters FOLLOW of the start symbol through the
    /// augmented production `S' -> S $$`.
    pub fn compute(grammar: &Grammar, nullable: &Nullable, first: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: empty_sets(grammar),
        };

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for left in grammar.non_terminal_iter() {
                for production in &left.productions {
                    for (i, &symbol) in production.iter().enumerate() {
                        if grammar.is_terminal(symbol) {
                            continue;
                        }
                        let beta = &production[i + 1..];
                        let mut follow = first.first_of_sequence(grammar, nullable, beta);
                        if nullable.is_sequence_nullable(beta) {
                            if let Some(left_follow) = this.get(left.index) {
                                follow.extend(left_follow.iter().cloned());
                            }
                        }
                        if extend_set(&mut this.map, symbol, follow) {
                            trace!(
                                "pass {}: FOLLOW({}) grew",
                                passes,
                                grammar.get_symbol_name(symbol)
                            );
                            changed = true;
                        }
                    }
                }
            }
        }

        debug!("FOLLOW sets settled after {} passes", passes);
        this
    }

    /// FOLLOW of a nonterminal; `None` for terminals.
    pub fn get(&self, symbol: usize) -> Option<&HashSet<usize>> {
        self.map.get(&symbol)
    }
}

/// The three results of one grammar, computed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub nullable: Nullable,
    pub first: FirstSets,
    pub follow: FollowSets,
}

impl Analysis {
    pub fn run(grammar: &Grammar) -> Self {
        let nullable = Nullable::compute(grammar);
        let first = FirstSets::compute(grammar, &nullable);
        let follow = FollowSets::compute(grammar, &nullable, &first);
        Self {
            nullable,
            first,
            follow,
        }
    }
}
