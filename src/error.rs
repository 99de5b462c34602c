//! Error types of the curve core and of the event parser.
use core::fmt;

/// Configuration errors raised while constructing curves or samplings.
/// They are fixed for the lifetime of an editing session, so callers
/// should fail fast on them at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The curve needs exactly `expected` control points.
    WrongControlCount { expected: usize, found: usize },
    /// The curve needs at least `minimum` control points.
    TooFewControlPoints { minimum: usize, found: usize },
    /// More control points than the fixed capacity of the curve.
    CapacityExceeded { capacity: usize, found: usize },
    /// A curve needs at least one sample.
    InvalidSampleCount { steps: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveError::WrongControlCount { expected, found } => write!(
                f,
                "invalid control path: expected exactly {} points, got {}",
                expected, found
            ),
            CurveError::TooFewControlPoints { minimum, found } => write!(
                f,
                "invalid control path: expected at least {} points, got {}",
                minimum, found
            ),
            CurveError::CapacityExceeded { capacity, found } => write!(
                f,
                "invalid control path: capacity is {} points, got {}",
                capacity, found
            ),
            CurveError::InvalidSampleCount { steps } => {
                write!(f, "invalid sample count {}, expected at least 1", steps)
            }
        }
    }
}

impl std::error::Error for CurveError {}

/// Reasons a line of scripted input could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEventError {
    /// The line has no tokens.
    Empty,
    /// The first token is not a known event kind.
    UnknownKind(String),
    /// The event kind expects a different number of arguments.
    WrongArity {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    /// A coordinate could not be parsed as a number.
    InvalidNumber(String),
    /// The key name is not recognized.
    UnknownKey(String),
}

impl fmt::Display for ParseEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEventError::Empty => write!(f, "empty event"),
            ParseEventError::UnknownKind(kind) => write!(f, "unknown event kind '{}'", kind),
            ParseEventError::WrongArity {
                kind,
                expected,
                found,
            } => write!(
                f,
                "'{}' takes {} argument(s), got {}",
                kind, expected, found
            ),
            ParseEventError::InvalidNumber(token) => write!(f, "'{}' is not a number", token),
            ParseEventError::UnknownKey(name) => write!(f, "unknown key '{}'", name),
        }
    }
}

impl std::error::Error for ParseEventError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_counts() {
        let err = CurveError::WrongControlCount {
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid control path: expected exactly 4 points, got 3"
        );
        let err = CurveError::InvalidSampleCount { steps: 0 };
        assert_eq!(err.to_string(), "invalid sample count 0, expected at least 1");
    }
}
