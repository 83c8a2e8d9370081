use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum GrammarError {
    /// The grammar could not be read or the report could not be written.
    Io { path: PathBuf, source: io::Error },
    /// A non-blank line has no `->` between head and body.
    MissingArrow { line: usize },
    TooManyArrows { line: usize },
    /// The head is not a single uppercase letter.
    InvalidHead { line: usize, head: String },
    /// The requested start symbol cannot name a nonterminal.
    InvalidStart { start: char },
}

impl GrammarError {
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            GrammarError::MissingArrow { .. }
                | GrammarError::TooManyArrows { .. }
                | GrammarError::InvalidHead { .. }
        )
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            GrammarError::Io { .. } | GrammarError::InvalidStart { .. } => None,
            GrammarError::MissingArrow { line }
            | GrammarError::TooManyArrows { line }
            | GrammarError::InvalidHead { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Io { path, .. } => write!(f, "cannot access {}", path.display()),
            GrammarError::MissingArrow { line } => {
                write!(f, "Line {}: missing \"->\"", line)
            }
            GrammarError::TooManyArrows { line } => {
                write!(f, "Line {}: too many \"->\"", line)
            }
            GrammarError::InvalidHead { line, head } => write!(
                f,
                "Line {}: left side \"{}\" is not a single uppercase letter",
                line, head
            ),
            GrammarError::InvalidStart { start } => {
                write!(f, "start symbol '{}' is not an uppercase letter", start)
            }
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::GrammarError;

    #[test]
    fn io_message_names_the_path_once() {
        let err = GrammarError::Io {
            path: "out/report.txt".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.to_string(), "cannot access out/report.txt");
        assert_eq!(err.source().unwrap().to_string(), "no such directory");
        assert!(!err.is_format_error());
    }

    #[test]
    fn format_errors_have_no_source() {
        let err = GrammarError::MissingArrow { line: 4 };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Line 4: missing \"->\"");
    }
}
