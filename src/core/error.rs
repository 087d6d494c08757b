//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

/// Faults raised while building, loading or querying [`RcParams`](crate::RcParams).
#[derive(thiserror::Error, Debug)]
pub enum RcError {
    #[error("failed to read rc file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse rc file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("rc setting `{key}` must be finite and > 0, got {value}")]
    NonPositive { key: &'static str, value: f64 },
    #[error("unknown rc setting `{0}`")]
    UnknownKey(String),
    #[error("invalid font size {0:?}; expected points or a name such as \"large\"")]
    InvalidFontSize(String),
}

/// Top-level error type bubbled up by public APIs.
#[derive(thiserror::Error, Debug)]
pub enum FigError {
    #[error("arange takes from one to three arguments, got {got}")]
    InvalidArity { got: usize },
    #[error("arange needs a finite non-zero step and finite bounds, got {min}, {max}, {step}")]
    InvalidStep { min: f64, max: f64, step: f64 },
    #[error("invalid size spec {spec:?}; valid units are {}", valid.join(", "))]
    InvalidUnitSpec {
        spec: String,
        valid: Vec<&'static str>,
    },
    #[error("size spec must be string or number, received {found}")]
    InvalidSizeType { found: &'static str },
    #[error(
        "unknown journal figure size specifier {code:?}; current options are: {}",
        valid.join(", ")
    )]
    UnknownJournal {
        code: String,
        valid: Vec<&'static str>,
    },
    #[error("need at least 2 values along axis {axis} to estimate edges, got {len}")]
    InsufficientData { axis: usize, len: usize },
    #[error("axis {axis} is out of bounds for array of dimension {ndim}")]
    AxisOutOfBounds { axis: isize, ndim: usize },
    #[error(transparent)]
    Rc(#[from] RcError),
}

pub type Result<T, E = FigError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::{FigError, RcError};

    #[test]
    fn unknown_journal_lists_valid_codes() {
        let err = FigError::UnknownJournal {
            code: "bogus".into(),
            valid: vec!["pnas1", "ams1"],
        };
        assert_eq!(
            err.to_string(),
            "unknown journal figure size specifier \"bogus\"; current options are: pnas1, ams1"
        );
    }

    #[test]
    fn rc_errors_convert_into_fig_error() {
        let err: FigError = RcError::UnknownKey("lines.width".into()).into();
        assert!(matches!(err, FigError::Rc(RcError::UnknownKey(_))));
        assert_eq!(err.to_string(), "unknown rc setting `lines.width`");
    }
}
