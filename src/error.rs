//! Error type raised when a segmentation request is rejected.
//!
//! Both variants are produced while validating caller-supplied selectors,
//! before any segmentation work happens. The segmentation pass itself is
//! total over all input.

use thiserror::Error;

/// Errors produced while validating segmentation options.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SegmentationError {
    /// The charset selector is neither `GSM`, `Unicode` nor automatic.
    #[error("charset not supported: expected GSM or Unicode, found `{selector}`")]
    UnsupportedCharset { selector: String },
    /// The user data header size is neither 6 nor 7 bytes.
    #[error("UDH length must be 6 or 7 bytes, found {bytes}")]
    InvalidHeaderSize { bytes: i64 },
}

/// Result alias used by fallible `smsplit` APIs.
pub type Result<T> = std::result::Result<T, SegmentationError>;
