//! Error types for the ESC/POS helpers

use std::fmt;
use thiserror::Error;

/// Barcode parameter that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeField {
    TextPosition,
    Height,
    Width,
}

impl fmt::Display for BarcodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BarcodeField::TextPosition => "text position",
            BarcodeField::Height => "height",
            BarcodeField::Width => "width",
        };
        f.write_str(name)
    }
}

/// ESC/POS helper error types
#[derive(Debug, Error)]
pub enum EscPosError {
    /// A barcode parameter is out of range or unrecognised
    #[error("Invalid {field}: {value} ({expected})")]
    InvalidArgument {
        field: BarcodeField,
        value: String,
        expected: &'static str,
    },

    /// Encoding label not known to the transcoder
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Print job document could not be parsed
    #[error("Invalid print job: {0}")]
    InvalidJob(#[from] serde_json::Error),
}

impl EscPosError {
    pub(crate) fn invalid(field: BarcodeField, value: impl ToString) -> Self {
        let expected = match field {
            BarcodeField::TextPosition => "expected off, above, below or both",
            BarcodeField::Height => "must be in range from 1 to 255",
            BarcodeField::Width => "must be in range from 2 to 6",
        };
        EscPosError::InvalidArgument {
            field,
            value: value.to_string(),
            expected,
        }
    }

    /// The offending barcode field, if this is a validation error
    pub fn field(&self) -> Option<BarcodeField> {
        match self {
            EscPosError::InvalidArgument { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type for ESC/POS helper operations
pub type EscPosResult<T> = Result<T, EscPosError>;
