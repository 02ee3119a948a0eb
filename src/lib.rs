#![doc(html_root_url = "https://docs.rs/smsplit/latest")]
//! Public API for the `smsplit` library.
//!
//! This crate works out how a text message is cut into SMS fragments. It
//! detects whether the GSM 03.38 default alphabet can carry the text or
//! whether UCS-2 is required, charges each character its encoded width
//! (extension table escapes and UTF-16 surrogate pairs included) and places
//! fragment boundaries so that no escape sequence or surrogate pair is split.
//!
//! ```
//! use smsplit::{Charset, HeaderSize, SegmentationRequest};
//!
//! let request = SegmentationRequest::new("-".repeat(306)).with_header(HeaderSize::Seven);
//! let segmentation = smsplit::segment(&request);
//! assert_eq!(segmentation.charset(), Charset::Gsm);
//! assert_eq!(segmentation.fragment_count(), 3);
//! ```

pub mod budget;
pub mod charset;
pub mod error;
pub mod header;
pub mod request;
pub mod segment;
pub mod segmenter;

pub use budget::{SINGLE_GSM_CHARS, SINGLE_UNICODE_CHARS, SMS_PAYLOAD_BYTES, SegmentBudget};
pub use charset::{Charset, CharsetSelector, is_gsm, is_gsm_char, is_gsm_extension, is_unicode};
pub use error::{Result, SegmentationError};
pub use header::HeaderSize;
pub use request::SegmentationRequest;
pub use segment::{Fragment, Segmentation};
pub use segmenter::{Segmenter, segment, segment_text, try_segment};
