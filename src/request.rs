//! Input value object for a segmentation call.

use serde::{Deserialize, Serialize};

use crate::{charset::CharsetSelector, error::Result, header::HeaderSize};

/// Message body together with its encoding options.
///
/// Construction through the typed setters cannot fail. Untyped selectors,
/// such as values read from a request payload, go through
/// [`SegmentationRequest::from_selectors`] or serde, which reject unsupported
/// charsets and header sizes.
///
/// # Examples
///
/// ```
/// use smsplit::{CharsetSelector, HeaderSize, SegmentationRequest};
/// let request = SegmentationRequest::new("hello")
///     .with_charset(CharsetSelector::Unicode)
///     .with_header(HeaderSize::Seven);
/// assert_eq!(request.content(), "hello");
/// assert_eq!(request.header(), HeaderSize::Seven);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationRequest {
    content: String,
    #[serde(default)]
    charset: CharsetSelector,
    #[serde(default)]
    header_size: HeaderSize,
}

impl SegmentationRequest {
    /// Create a request using automatic charset detection and a 6-byte header.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            charset: CharsetSelector::DEFAULT,
            header_size: HeaderSize::DEFAULT,
        }
    }

    /// Create a request from untyped selectors.
    ///
    /// `charset` accepts `""`, `"auto"`, `"GSM"` and `"Unicode"`; `header_bytes`
    /// accepts `0` (default), `6` and `7`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentationError::UnsupportedCharset`] or
    /// [`SegmentationError::InvalidHeaderSize`] for any other value. The
    /// charset is checked first.
    ///
    /// [`SegmentationError::UnsupportedCharset`]: crate::SegmentationError::UnsupportedCharset
    /// [`SegmentationError::InvalidHeaderSize`]: crate::SegmentationError::InvalidHeaderSize
    pub fn from_selectors(
        content: impl Into<String>,
        charset: &str,
        header_bytes: u8,
    ) -> Result<Self> {
        let charset: CharsetSelector = charset.parse()?;
        let header_size = HeaderSize::try_from(header_bytes)?;
        Ok(Self {
            content: content.into(),
            charset,
            header_size,
        })
    }

    /// Replace the charset selector.
    #[must_use]
    pub fn with_charset(mut self, charset: CharsetSelector) -> Self {
        self.charset = charset;
        self
    }

    /// Replace the header size.
    #[must_use]
    pub fn with_header(mut self, header_size: HeaderSize) -> Self {
        self.header_size = header_size;
        self
    }

    /// Message body.
    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// Requested charset.
    #[must_use]
    pub const fn charset(&self) -> CharsetSelector { self.charset }

    /// Requested header size.
    #[must_use]
    pub const fn header(&self) -> HeaderSize { self.header_size }
}
