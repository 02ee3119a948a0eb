//! Segmentation of message bodies into SMS fragments.
//!
//! [`Segmenter`] resolves the charset, derives a [`SegmentBudget`] for the
//! configured header and runs two steps: a single accumulation pass over the
//! characters, then a collapse step that folds a two-fragment split back into
//! one SMS when no concatenation header is needed after all.

mod accumulator;
mod collapse;

use tracing::debug;

use crate::{
    budget::SegmentBudget,
    charset::{Charset, CharsetSelector},
    error::Result,
    header::HeaderSize,
    request::SegmentationRequest,
    segment::{Fragment, Segmentation},
};

/// Splits messages into SMS fragments for a fixed set of options.
///
/// The segmenter holds no mutable state and can be shared freely between
/// threads.
///
/// # Examples
///
/// ```
/// use smsplit::{Charset, Segmenter};
/// let segmentation = Segmenter::default().segment(&"-".repeat(161));
/// assert_eq!(segmentation.charset(), Charset::Gsm);
/// assert_eq!(segmentation.fragment_count(), 2);
/// assert_eq!(segmentation.remaining_chars(), 145);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Segmenter {
    charset: CharsetSelector,
    header: HeaderSize,
}

impl Segmenter {
    /// Create a segmenter with the given options.
    #[must_use]
    pub const fn new(charset: CharsetSelector, header: HeaderSize) -> Self {
        Self { charset, header }
    }

    /// Create a segmenter from untyped selectors.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentationError::UnsupportedCharset`] or
    /// [`SegmentationError::InvalidHeaderSize`] when a selector is not
    /// supported.
    ///
    /// [`SegmentationError::UnsupportedCharset`]: crate::SegmentationError::UnsupportedCharset
    /// [`SegmentationError::InvalidHeaderSize`]: crate::SegmentationError::InvalidHeaderSize
    pub fn from_selectors(charset: &str, header_bytes: u8) -> Result<Self> {
        let charset: CharsetSelector = charset.parse()?;
        Ok(Self::new(charset, HeaderSize::try_from(header_bytes)?))
    }

    /// Charset selector applied to every message.
    #[must_use]
    pub const fn charset(&self) -> CharsetSelector { self.charset }

    /// Header size charged to concatenated fragments.
    #[must_use]
    pub const fn header(&self) -> HeaderSize { self.header }

    /// Split `text` into fragments.
    #[must_use]
    pub fn segment(&self, text: &str) -> Segmentation {
        let charset = self.charset.resolve(text);
        let budget = SegmentBudget::for_header(self.header);

        let fragments = accumulator::accumulate(text, charset, budget);
        let fragments = collapse::collapse_single(fragments, charset);
        let remaining = remaining_chars(&fragments, charset, budget);
        let segmentation = Segmentation::new(charset, fragments, remaining);

        debug!(
            %charset,
            header_bytes = budget.header().bytes(),
            fragments = segmentation.fragment_count(),
            total_bytes = segmentation.total_bytes(),
            "segmented message"
        );
        segmentation
    }
}

impl From<&SegmentationRequest> for Segmenter {
    fn from(request: &SegmentationRequest) -> Self {
        Self::new(request.charset(), request.header())
    }
}

/// Segment `request` using its own options.
///
/// A request's options are validated when it is built, so this cannot fail.
/// Untyped selectors go through [`try_segment`] or
/// [`SegmentationRequest::from_selectors`] first.
#[must_use]
pub fn segment(request: &SegmentationRequest) -> Segmentation {
    Segmenter::from(request).segment(request.content())
}

/// Segment `text` with automatic charset detection and a 6-byte header.
#[must_use]
pub fn segment_text(text: &str) -> Segmentation { Segmenter::default().segment(text) }

/// Validate untyped selectors and segment `text`.
///
/// # Errors
///
/// Returns [`SegmentationError::UnsupportedCharset`] or
/// [`SegmentationError::InvalidHeaderSize`] before any segmentation work is
/// done.
///
/// [`SegmentationError::UnsupportedCharset`]: crate::SegmentationError::UnsupportedCharset
/// [`SegmentationError::InvalidHeaderSize`]: crate::SegmentationError::InvalidHeaderSize
pub fn try_segment(text: &str, charset: &str, header_bytes: u8) -> Result<Segmentation> {
    Ok(Segmenter::from_selectors(charset, header_bytes)?.segment(text))
}

fn remaining_chars(fragments: &[Fragment], charset: Charset, budget: SegmentBudget) -> usize {
    let unit = charset.unit_bytes();
    match fragments {
        [] => SegmentBudget::single_part_chars(charset),
        [only] => SegmentBudget::single_part_chars(charset).saturating_sub(only.bytes() / unit),
        [.., last] => budget
            .multi_part_chars(charset)
            .saturating_sub(last.bytes() / unit),
    }
}
