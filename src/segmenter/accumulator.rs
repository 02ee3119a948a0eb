//! Single left-to-right pass that cuts a message into fragments.

use tracing::trace;

use crate::{budget::SegmentBudget, charset::Charset, segment::Fragment};

/// Running state of the fragment currently being filled.
struct Accumulator<'a> {
    text: &'a str,
    charset: Charset,
    limit: usize,
    start: usize,
    bytes: usize,
    length: usize,
    fragments: Vec<Fragment>,
}

impl<'a> Accumulator<'a> {
    fn new(text: &'a str, charset: Charset, limit: usize) -> Self {
        Self {
            text,
            charset,
            limit,
            start: 0,
            bytes: 0,
            length: 0,
            fragments: Vec::new(),
        }
    }

    fn push(&mut self, offset: usize, ch: char) {
        let cost = self.charset.encoded_len(ch);
        let unit = self.charset.unit_bytes();

        // An escape sequence or surrogate pair must not straddle two fragments.
        if cost > unit && self.bytes == self.limit - unit {
            trace!(
                charset = %self.charset,
                bytes = self.bytes,
                character = ?ch,
                "flushing fragment early to keep character intact"
            );
            self.flush(offset);
        }

        self.bytes += cost;
        self.length += 1;

        if self.bytes == self.limit {
            self.flush(offset + ch.len_utf8());
        }
    }

    fn flush(&mut self, end: usize) {
        if self.bytes > 0 {
            let content = self.text[self.start..end].to_owned();
            self.fragments
                .push(Fragment::new(content, self.bytes, self.length));
        }
        self.start = end;
        self.bytes = 0;
        self.length = 0;
    }

    fn finish(mut self) -> Vec<Fragment> {
        self.flush(self.text.len());
        self.fragments
    }
}

/// Split `text` into fragments sized for a concatenated message.
///
/// Every fragment except the last holds exactly `budget` bytes, or one unit
/// less when the next character would otherwise be split.
pub(super) fn accumulate(text: &str, charset: Charset, budget: SegmentBudget) -> Vec<Fragment> {
    let mut acc = Accumulator::new(text, charset, budget.multi_part_bytes(charset));
    for (offset, ch) in text.char_indices() {
        acc.push(offset, ch);
    }
    acc.finish()
}
