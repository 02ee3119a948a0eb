//! Post-processing for messages that fit in a single SMS after all.
//!
//! Concatenated fragments reserve room for the UDH, so a message can be cut
//! in two even though it fits an unconcatenated SMS.

use tracing::trace;

use crate::{budget::SegmentBudget, charset::Charset, segment::Fragment};

/// Merge a two-fragment split whose total fits the single-SMS ceiling.
pub(super) fn collapse_single(fragments: Vec<Fragment>, charset: Charset) -> Vec<Fragment> {
    let ceiling = SegmentBudget::single_part_bytes(charset);
    match <[Fragment; 2]>::try_from(fragments) {
        Ok([mut first, second]) if first.bytes() + second.bytes() <= ceiling => {
            trace!(
                %charset,
                first_bytes = first.bytes(),
                second_bytes = second.bytes(),
                "merging fragments into one"
            );
            first.absorb(second);
            vec![first]
        }
        Ok(pair) => Vec::from(pair),
        Err(fragments) => fragments,
    }
}
