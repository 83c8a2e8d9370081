pub mod error;
pub mod grammar;
pub mod nullable_first_follow;
pub mod parse;
pub mod pretty_print;
pub use error::GrammarError;
pub use grammar::Grammar;
pub use nullable_first_follow::{Analysis, FirstSets, FollowSets, Nullable};
pub use pretty_print::Report;

/// Name of the synthesized start nonterminal of `S' -> S $$`.
pub const AUGMENTED_START: &str = "S'";
/// End-of-input marker.
pub const END_MARK: &str = "$$";
/// Original start nonterminal assumed when none is given.
pub const DEFAULT_START: char = 'S';
