//! Per-fragment capacity derived from the SMS payload ceiling.

use crate::{charset::Charset, header::HeaderSize};

/// Maximum user data bytes carried by one SMS.
pub const SMS_PAYLOAD_BYTES: usize = 140;

/// Characters that fit in a single unconcatenated GSM message.
pub const SINGLE_GSM_CHARS: usize = 160;

/// Characters that fit in a single unconcatenated UCS-2 message.
pub const SINGLE_UNICODE_CHARS: usize = 70;

const GSM_CHAR_BITS: usize = 7;
const UCS2_UNIT_BITS: usize = 16;

/// Capacity of each fragment once a message needs concatenation.
///
/// Values are computed for one header size and passed by value into the
/// segmentation pass, so concurrent calls with different headers never share
/// state.
///
/// # Examples
///
/// ```
/// use smsplit::{Charset, HeaderSize, SegmentBudget};
/// let budget = SegmentBudget::for_header(HeaderSize::Six);
/// assert_eq!(budget.multi_part_chars(Charset::Gsm), 153);
/// assert_eq!(budget.multi_part_chars(Charset::Unicode), 67);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentBudget {
    header: HeaderSize,
    multi_part_gsm: usize,
    multi_part_unicode: usize,
}

impl SegmentBudget {
    /// Derive fragment capacities for `header`.
    #[must_use]
    pub const fn for_header(header: HeaderSize) -> Self {
        let payload_bits = (SMS_PAYLOAD_BYTES - header.bytes()) * 8;
        Self {
            header,
            multi_part_gsm: payload_bits / GSM_CHAR_BITS,
            multi_part_unicode: payload_bits / UCS2_UNIT_BITS,
        }
    }

    /// Header size the budget was derived from.
    #[must_use]
    pub const fn header(self) -> HeaderSize { self.header }

    /// Characters (septets or UCS-2 code units) per concatenated fragment.
    #[must_use]
    pub const fn multi_part_chars(self, charset: Charset) -> usize {
        match charset {
            Charset::Gsm => self.multi_part_gsm,
            Charset::Unicode => self.multi_part_unicode,
        }
    }

    /// Byte capacity of a concatenated fragment, as counted by the segmenter.
    #[must_use]
    pub const fn multi_part_bytes(self, charset: Charset) -> usize {
        self.multi_part_chars(charset) * charset.unit_bytes()
    }

    /// Characters available when the whole message fits in one SMS.
    #[must_use]
    pub const fn single_part_chars(charset: Charset) -> usize {
        match charset {
            Charset::Gsm => SINGLE_GSM_CHARS,
            Charset::Unicode => SINGLE_UNICODE_CHARS,
        }
    }

    /// Byte capacity of a single unconcatenated SMS, as counted by the segmenter.
    #[must_use]
    pub const fn single_part_bytes(charset: Charset) -> usize {
        Self::single_part_chars(charset) * charset.unit_bytes()
    }
}

impl Default for SegmentBudget {
    fn default() -> Self { Self::for_header(HeaderSize::DEFAULT) }
}
