use log::{debug, warn};

use super::{GrammarError, DEFAULT_START};
use crate::Grammar;

impl Grammar {
    /// Loads a grammar whose original start nonterminal is `S`.
    pub fn parse(grammar: &str) -> Result<Self, GrammarError> {
        Self::parse_with_start(grammar, DEFAULT_START)
    }

    /// Loads a grammar in the `HEAD->BODY` line format and augments it with
    /// `S' -> start $$`.
    ///
    /// Every symbol is a single character: uppercase characters are
    /// nonterminals, anything else is a terminal. An empty body is an epsilon
    /// production.
    pub fn parse_with_start(grammar: &str, start: char) -> Result<Self, GrammarError> {
        if !start.is_uppercase() {
            return Err(GrammarError::InvalidStart { start });
        }
        let mut g = Self::new(start);

        let mut raw_productions: Vec<(usize, String)> = Vec::new();

        for (i, line) in grammar.lines().enumerate() {
            let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split("->").collect();
            match parts.len() {
                1 => return Err(GrammarError::MissingArrow { line: i + 1 }),
                2 => {}
                _ => return Err(GrammarError::TooManyArrows { line: i + 1 }),
            }

            let mut head = parts[0].chars();
            let left = match (head.next(), head.next()) {
                (Some(c), None) if c.is_uppercase() => g.intern(&c.to_string(), false),
                _ => {
                    return Err(GrammarError::InvalidHead {
                        line: i + 1,
                        head: parts[0].to_string(),
                    })
                }
            };

            raw_productions.push((left, parts[1].to_string()));
        }

        for (left, right) in raw_productions {
            let symbols = right
                .chars()
                .map(|c| g.intern(&c.to_string(), !c.is_uppercase()))
                .collect();
            g.add_production(left, symbols);
        }

        let (augmented, start, end_mark) = (g.augmented_start(), g.start_symbol(), g.end_mark());
        g.add_production(augmented, vec![start, end_mark]);

        for nt in g.undefined_symbols() {
            warn!(
                "nonterminal {} is used but never defined, treating it as empty",
                nt.name
            );
        }
        debug!(
            "loaded {} productions over {} nonterminals and {} terminals",
            g.non_terminal_iter().map(|nt| nt.productions.len()).sum::<usize>(),
            g.non_terminal_iter().count(),
            g.terminal_iter().count(),
        );

        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::grammar::{GrammarError, AUGMENTED_START, END_MARK};
    use crate::Grammar;

    fn productions_of<'a>(g: &'a Grammar, name: &str) -> Vec<Vec<&'a str>> {
        let idx = g.get_symbol_index(name).unwrap();
        g.non_terminal(idx)
            .unwrap()
            .productions
            .iter()
            .map(|p| p.iter().map(|s| g.get_symbol_name(*s)).collect())
            .collect()
    }

    #[test]
    fn simple_parse() {
        let g = Grammar::parse("S->a").unwrap();

        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("a").unwrap();

        assert_eq!(g.get_symbol_name(s), "S");
        assert_eq!(g.get_symbol_name(a), "a");
        assert!(g.is_terminal(a));
        assert!(!g.is_terminal(s));

        assert_eq!(g.non_terminal(s).unwrap().productions[0], vec![a]);
    }

    #[test]
    fn parse_augments_start() {
        let g = Grammar::parse("S->a").unwrap();
        assert_eq!(g.get_symbol_name(g.augmented_start()), AUGMENTED_START);
        assert_eq!(productions_of(&g, AUGMENTED_START), vec![vec!["S", END_MARK]]);
    }

    #[test]
    fn parse_strips_whitespace() {
        let g = Grammar::parse("  S - > a  B \n\tB ->  b ").unwrap();
        assert_eq!(productions_of(&g, "S"), vec![vec!["a", "B"]]);
        assert_eq!(productions_of(&g, "B"), vec![vec!["b"]]);
    }

    #[test]
    fn parse_alternatives_in_file_order() {
        let g = Grammar::parse("S->AB\nA->a\nA->\nB->b\nA->cA").unwrap();
        assert_eq!(productions_of(&g, "A"), vec![vec!["a"], vec![], vec!["c", "A"]]);
    }

    #[test]
    fn parse_epsilon() {
        let g = Grammar::parse("S->").unwrap();
        assert_eq!(productions_of(&g, "S"), vec![Vec::<&str>::new()]);
    }

    #[test]
    fn empty_parse() {
        let g = Grammar::parse("  \n  ").unwrap();
        // Only the augmentation remains, and S is left undefined.
        assert_eq!(g.declared_non_terminal_iter().count(), 1);
        assert_eq!(
            g.undefined_symbols().map(|nt| nt.name.as_str()).collect::<Vec<_>>(),
            vec!["S"]
        );
    }

    #[test]
    fn non_letters_are_terminals() {
        let g = Grammar::parse("S->(S)$").unwrap();
        for t in ["(", ")", "$"] {
            assert!(g.is_terminal(g.get_symbol_index(t).unwrap()));
        }
        assert_ne!(g.get_symbol_index("$"), g.get_symbol_index(END_MARK));
    }

    #[test]
    fn undefined_body_symbol() {
        let g = Grammar::parse("S->aX").unwrap();
        let undefined: Vec<&str> = g.undefined_symbols().map(|nt| nt.name.as_str()).collect();
        assert_eq!(undefined, vec!["X"]);
    }

    #[test]
    fn explicit_start_symbol() {
        let g = Grammar::parse_with_start("E->T\nT->x", 'E').unwrap();
        assert_eq!(productions_of(&g, AUGMENTED_START), vec![vec!["E", END_MARK]]);
        assert!(g.undefined_symbols().next().is_none());
        assert!(g.get_symbol_index("S").is_none());
    }

    #[test]
    fn lowercase_start_symbol() {
        let err = Grammar::parse_with_start("S->a", 'e').unwrap_err();
        assert!(matches!(err, GrammarError::InvalidStart { start: 'e' }));
    }

    #[test_case("S a", 1 ; "no arrow")]
    #[test_case("S->a\n\nB b", 3 ; "no arrow on later line")]
    fn missing_arrow(src: &str, line: usize) {
        let err = Grammar::parse(src).unwrap_err();
        assert!(err.is_format_error());
        assert!(matches!(err, GrammarError::MissingArrow { .. }));
        assert_eq!(err.line(), Some(line));
    }

    #[test]
    fn two_rightarrows_parse() {
        let err = Grammar::parse("S -> a -> b").unwrap_err();
        assert!(matches!(err, GrammarError::TooManyArrows { line: 1 }));
    }

    #[test_case("-> a" ; "no left")]
    #[test_case("SA -> x" ; "two letters")]
    #[test_case("s -> x" ; "lowercase")]
    fn invalid_head(src: &str) {
        let err = Grammar::parse(src).unwrap_err();
        assert!(matches!(err, GrammarError::InvalidHead { line: 1, .. }));
    }
}
