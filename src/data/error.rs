use thiserror::Error;

/// Failures while turning a signal file into a [`SignalSet`](super::model::SignalSet).
///
/// Every variant is fatal: the parser never hands back a partial set.
/// Line numbers are 1-based and refer to the raw input, comments included.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read signal input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: found END_OF_SIGNAL where a signal label was expected")]
    UnexpectedTerminator { line: usize },

    #[error("signal '{label}' (line {line}): reached end of input before END_OF_SIGNAL")]
    UnterminatedSignal { label: String, line: usize },

    #[error("signal '{label}', line {line}: expected 2 values per sample, found {found}")]
    WrongTokenCount {
        label: String,
        line: usize,
        found: usize,
    },

    #[error("signal '{label}', line {line}: '{token}' is not a number")]
    MalformedNumber {
        label: String,
        line: usize,
        token: String,
    },

    #[error("signal '{label}', line {line}: the y value may not be missing ('*')")]
    MissingY { label: String, line: usize },

    #[error("signal '{label}', line {line}: expected END_OF_SIGNAL, found '{found}'")]
    MissingTerminator {
        label: String,
        line: usize,
        found: String,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum InterpolateError {
    #[error("signal '{label}': all {samples} x values are missing, nothing to interpolate from")]
    NoKnownX { label: String, samples: usize },
}

/// Any failure of the parse → interpolate pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Interpolate(#[from] InterpolateError),
}
