use miette::Diagnostic;
use thiserror::Error;

/// Faults raised while reading text for a scan.
///
/// Pattern non-matches are never errors; an unterminated `**` simply yields
/// no candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmphasisError {
    #[error("text range {start}..{end} is outside the document (length {len})")]
    #[diagnostic(code(weaver_emphasis::range_out_of_bounds))]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

pub type Result<T, E = EmphasisError> = std::result::Result<T, E>;
