//! Filtering error type.

use crate::table::OutOfBoundsError;

/// Errors the [`filter`](crate::engine::filter) façade can report.
///
/// All filtering errors are deterministic functions of the input, so no
/// error here is worth retrying; they propagate to the immediate caller
/// and are never recovered transparently.
///
/// # Examples
///
/// ```rust
/// use firstseen::engine::{FilterError, Strategy, filter};
///
/// let error = filter(&[], Strategy::BruteForce).unwrap_err();
/// assert_eq!(error, FilterError::EmptyInput);
/// println!("{error}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// The input sequence was empty.
    ///
    /// An empty input is reported as an explicit condition rather than
    /// an empty success, so a caller cannot mistake "nothing to filter"
    /// for "filtered to nothing".
    EmptyInput,

    /// A value addressed a quotient past a fixed-capacity table's bound.
    ///
    /// Raised only by [`Strategy::FixedSparse`](crate::engine::Strategy)
    /// when the capacity was narrowed below the full `i32` range.
    OutOfBounds(OutOfBoundsError),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(formatter, "input sequence is empty"),
            Self::OutOfBounds(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyInput => None,
            Self::OutOfBounds(error) => Some(error),
        }
    }
}

impl From<OutOfBoundsError> for FilterError {
    fn from(error: OutOfBoundsError) -> Self {
        Self::OutOfBounds(error)
    }
}
