//! Error types for loading tone samples.
//!
//! [`FormatError`] covers text whose layout cannot be understood at all,
//! [`ValidationError`] covers well-formed text with missing or bad content.
//! [`LutError`] wraps both for `?` propagation.

use std::fmt;
use std::num::ParseFloatError;

/// The delimiter of a tabular source could not be determined.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Neither comma nor tab (or both, equally) splits the header consistently
    UndetectableDelimiter,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UndetectableDelimiter => {
                write!(f, "could not determine delimiter (expected comma or tab)")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Sample content is missing or unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No samples were provided
    EmptySampleSet,
    /// Required header fields are absent (all missing names are listed)
    MissingFields {
        /// Names of the absent fields, in schema order
        missing: Vec<&'static str>,
    },
    /// A data row has no cell for a required field
    MissingValue {
        /// 1-based line number in the source text
        line: usize,
        /// Field whose cell is absent or empty
        field: &'static str,
    },
    /// A cell is not a number
    InvalidNumber {
        /// 1-based line number in the source text
        line: usize,
        /// Field containing the bad cell
        field: &'static str,
        /// The offending cell text
        value: String,
        /// Underlying parse failure
        source: ParseFloatError,
    },
    /// A value parsed, but is NaN or infinite
    NonFinite {
        /// 1-based line number, if the sample came from text
        line: Option<usize>,
        /// Field containing the value
        field: &'static str,
        /// The offending value
        value: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptySampleSet => write!(f, "no samples (table has no data rows)"),
            ValidationError::MissingFields { missing } => {
                let names: Vec<String> = missing.iter().map(|m| format!("'{m}'")).collect();
                write!(f, "missing required column(s): {}", names.join(", "))
            }
            ValidationError::MissingValue { line, field } => {
                write!(f, "line {line}: missing value for '{field}'")
            }
            ValidationError::InvalidNumber {
                line, field, value, ..
            } => {
                write!(f, "line {line}: '{field}' value {value:?} is not a number")
            }
            ValidationError::NonFinite { line, field, value } => match line {
                Some(line) => write!(f, "line {line}: '{field}' value {value} is not finite"),
                None => write!(f, "'{field}' value {value} is not finite"),
            },
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Unified error for building a table from tabular text.
#[derive(Debug, Clone, PartialEq)]
pub enum LutError {
    /// The text layout could not be understood
    Format(FormatError),
    /// The text was understood but its content is invalid
    Validation(ValidationError),
}

impl LutError {
    /// True if the delimiter could not be determined.
    pub fn is_format(&self) -> bool {
        matches!(self, LutError::Format(_))
    }
}

impl fmt::Display for LutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LutError::Format(err) => write!(f, "format error: {}", err),
            LutError::Validation(err) => write!(f, "validation error: {}", err),
        }
    }
}

impl std::error::Error for LutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LutError::Format(err) => Some(err),
            LutError::Validation(err) => Some(err),
        }
    }
}

impl From<FormatError> for LutError {
    fn from(err: FormatError) -> Self {
        LutError::Format(err)
    }
}

impl From<ValidationError> for LutError {
    fn from(err: ValidationError) -> Self {
        LutError::Validation(err)
    }
}
