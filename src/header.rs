//! User data header sizes for concatenated messages.
//!
//! Every fragment of a multi-part SMS carries a UDH holding the concatenation
//! reference and sequence numbers. An 8-bit reference needs 6 bytes, a 16-bit
//! reference 7 bytes.

use bincode::{Decode, Encode};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::SegmentationError;

/// Size of the concatenation header charged to each fragment.
///
/// # Examples
///
/// ```
/// use smsplit::HeaderSize;
/// assert_eq!(HeaderSize::try_from(0_u8).map(HeaderSize::bytes), Ok(6));
/// assert_eq!(HeaderSize::try_from(7_u8).map(HeaderSize::bytes), Ok(7));
/// assert!(HeaderSize::try_from(8_u8).is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode, Display,
)]
#[serde(try_from = "i64", into = "u8")]
pub enum HeaderSize {
    /// 6-byte header with an 8-bit concatenation reference.
    #[default]
    #[display("6")]
    Six,
    /// 7-byte header with a 16-bit concatenation reference.
    #[display("7")]
    Seven,
}

impl HeaderSize {
    /// The library default (currently [`HeaderSize::Six`]).
    pub const DEFAULT: HeaderSize = HeaderSize::Six;

    /// Header length in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Six => 6,
            Self::Seven => 7,
        }
    }
}

/// `0` selects the default header size.
impl TryFrom<i64> for HeaderSize {
    type Error = SegmentationError;

    fn try_from(bytes: i64) -> Result<Self, Self::Error> {
        match bytes {
            0 | 6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            _ => Err(SegmentationError::InvalidHeaderSize { bytes }),
        }
    }
}

impl TryFrom<u8> for HeaderSize {
    type Error = SegmentationError;

    fn try_from(bytes: u8) -> Result<Self, Self::Error> { Self::try_from(i64::from(bytes)) }
}

impl From<HeaderSize> for u8 {
    fn from(value: HeaderSize) -> Self {
        match value {
            HeaderSize::Six => 6,
            HeaderSize::Seven => 7,
        }
    }
}
